// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

#![windows_subsystem = "windows"] // necessary to remove the console window on Windows

use std::io;

use winit::event_loop::EventLoop;

use simple_window_summoner::settings::{Settings, CONFIG_PATH};
use simple_window_summoner::util::dialog;

use crate::window::{State, UserEvent};

mod tray;
mod window;

static APPLICATION_NAME: &str = "Simple Window Summoner";
static ICON_TOOLTIP: &str = "Simple Window Summoner";

fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(), // generate new settings file when it doesn't exist
        Err(e) => {
            dialog::show_warning(format!(
                "Error loading settings file \"{}\". Resetting to default settings.\n\n{}",
                CONFIG_PATH.display(),
                e
            ));
            Settings::default()
        }
    };

    let event_loop: EventLoop<UserEvent> = EventLoop::with_user_event().build().unwrap();

    // winit only wakes us for window events, but tray menu events arrive on a side channel.
    // Tick the event loop at a steady rate so that channel actually gets polled.
    let user_event_sender = event_loop.create_proxy();
    let tick_interval = settings.tick_interval;
    std::thread::Builder::new()
        .name("tick-sender".to_string())
        .spawn(move || loop {
            let _ = user_event_sender.send_event(());
            std::thread::sleep(tick_interval);
        })
        .unwrap();

    let mut state = State::new(settings, &event_loop);

    // pass control to the event loop
    event_loop.run_app(&mut state).unwrap();
}
