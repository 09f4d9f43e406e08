// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

use std::num::NonZeroU32;
use std::rc::Rc;

use debug_print::debug_println;
use tray_icon::menu::{MenuEvent, MenuEventReceiver};
use tray_icon::TrayIcon;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use simple_window_summoner::platform;
use simple_window_summoner::presenter::WindowPresenter;
use simple_window_summoner::settings::{Settings, CONFIG_PATH};
use simple_window_summoner::toolkit::WinitWindow;
use simple_window_summoner::util::dialog::{self, DialogWorker};

use crate::tray::MenuItems;
use crate::APPLICATION_NAME;

pub type UserEvent = ();
type Surface = softbuffer::Surface<Rc<Window>, Rc<Window>>;

pub struct State<'a> {
    context: Option<Context>,
    settings: Settings,
    presenter: WindowPresenter,
    /// native dialogs block a thread, so we'll spin up a single thread to loop through queued dialogs.
    /// If we ever need to show multiple dialogs, they just get queued.
    dialog_worker: DialogWorker,
    /// we keep the tray icon in an Option so that we can take() it later to drop.
    /// On Linux it lives on the GTK thread instead, so this is always None there.
    tray_icon: Option<TrayIcon>,
    menu_items: MenuItems,
    /// whatever window had the foreground before our last summon, so we can hand focus back
    last_focused_window: Option<platform::WindowHandle>,
    menu_channel: &'a MenuEventReceiver,
    window_visible: bool,
}

/// Window context
struct Context {
    window: Rc<Window>,
    surface: Surface,
}

impl Context {
    fn new(active_event_loop: &ActiveEventLoop, settings: &Settings) -> Self {
        // unsafe note: these three structs MUST live and die together.
        // It is highly illegal to use the context or surface after the window is dropped.
        // The context only gets used right here, so that's fine.
        // As of this writing, none of these get moved out of this struct. Therefore, they all get dropped at the same time, which is safe.
        let window = Rc::new(init_window(active_event_loop, settings));
        let context = softbuffer::Context::new(window.clone()).unwrap();
        let surface: Surface = Surface::new(&context, window.clone()).unwrap();
        Context { window, surface }
    }
}

impl<'a> State<'a> {
    pub fn new(settings: Settings, _event_loop: &EventLoop<UserEvent>) -> Self {
        let (menu_items, tray_icon) = crate::tray::build_tray_icon();
        let window_visible = !settings.persisted.start_hidden;
        State {
            context: None,
            settings,
            // State::new runs on the thread that will own the event loop, which is exactly the
            // thread the presenter must be pinned to
            presenter: WindowPresenter::new(),
            dialog_worker: dialog::spawn_worker(),
            tray_icon,
            menu_items,
            last_focused_window: None,
            menu_channel: MenuEvent::receiver(),
            window_visible,
        }
    }

    /// Bring our window back to the front: shown, unminimized, focused, and topmost.
    fn summon(&mut self) {
        // remember who had the foreground so hide() can give it back. If our window is already
        // up then the foreground is probably us, and "restoring" focus to ourselves is useless.
        if !self.window_visible {
            self.last_focused_window = platform::get_foreground_window();
        }

        let window: &Window = &self.context.as_ref().unwrap().window;
        self.presenter.bring_to_front(&WinitWindow::new(window));
        self.window_visible = true;
        debug_println!("window summoned");
    }

    /// Hide the window to the tray and hand focus back to whatever had it before our last summon.
    fn hide(&mut self) {
        let window: &Window = &self.context.as_ref().unwrap().window;
        window.set_visible(false);
        self.window_visible = false;

        if let Some(previous) = self.last_focused_window.take() {
            if !platform::set_foreground_window(previous) {
                debug_println!("could not restore focus to the previous window");
            }
        }
        debug_println!("window hidden to tray");
    }

    fn post_event_work(&mut self, active_event_loop: &ActiveEventLoop) {
        while let Ok(event) = self.menu_channel.try_recv() {
            match event.id {
                id if id == self.menu_items.exit_button.id() => {
                    // drop the tray icon, solving the funny Windows issue where it lingers after application close
                    #[cfg(not(target_os = "linux"))]
                    self.tray_icon.take();

                    let window: &Window = &self.context.as_ref().unwrap().window;
                    window.set_visible(false);
                    if let Err(e) = self.settings.save() {
                        dialog::show_warning(format!(
                            "Error saving settings to \"{}\".\n\n{}",
                            CONFIG_PATH.display(),
                            e
                        ));
                    }

                    // kill the dialog worker and wait for it to finish
                    // this makes the application remain open until the user has clicked through any queued dialogs
                    self.dialog_worker
                        .shutdown()
                        .expect("failed to shut down dialog worker");

                    active_event_loop.exit();
                    break;
                }
                id if id == self.menu_items.summon_button.id() => self.summon(),
                id if id == self.menu_items.hide_button.id() => self.hide(),
                id if id == self.menu_items.about_button.id() => {
                    dialog::show_info(format!("{}\nversion {}", APPLICATION_NAME, env!("CARGO_PKG_VERSION")));
                }
                _ => (),
            }
        }
    }
}

impl<'a> ApplicationHandler<UserEvent> for State<'a> {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::Init) {
            self.context = Some(Context::new(event_loop, &self.settings))
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // only used on iOS/Android/Web
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, _event: UserEvent) {
        self.post_event_work(event_loop);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::RedrawRequested => {
                let context: &mut Context = self.context.as_mut().unwrap();
                draw_window(&context.window, &mut context.surface, &self.settings);
            }
            WindowEvent::Resized(size) => {
                debug_println!("window size changed to {:?}", size);
                let window: &Window = &self.context.as_ref().unwrap().window;
                window.request_redraw();
            }
            WindowEvent::CloseRequested => {
                // closing the window hides to the tray; actually quitting is the tray menu's job
                self.hide();
            }
            _ => {}
        }

        self.post_event_work(event_loop);
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, _event: DeviceEvent) {}

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {}

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // only used on iOS/Android/Web
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {}

    fn memory_warning(&mut self, _event_loop: &ActiveEventLoop) {
        // only used on iOS/Android
    }
}

/// Fill the window with the configured solid color.
fn draw_window(window: &Window, surface: &mut Surface, settings: &Settings) {
    let PhysicalSize { width, height } = window.inner_size();

    // a minimized window reports zero size on Windows, and softbuffer can't resize to zero
    let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return;
    };
    surface.resize(width, height).unwrap();

    let mut buffer = surface.buffer_mut().unwrap();
    if buffer.age() == 0 {
        // only redraw if the buffer is uninitialized
        buffer.fill(settings.persisted.color);
    }
    buffer.present().unwrap();
}

/// Initialize the window. Plain decorated window, optionally starting hidden to the tray.
fn init_window(active_event_loop: &ActiveEventLoop, settings: &Settings) -> Window {
    let window_attributes = Window::default_attributes()
        .with_visible(false) // things get very buggy on Windows if you default the window to invisible...
        .with_title(APPLICATION_NAME)
        .with_inner_size(PhysicalSize::new(
            settings.persisted.window_width,
            settings.persisted.window_height,
        ));

    let window = active_event_loop.create_window(window_attributes).unwrap();

    // once the window is ready, show it (unless the user wants to start in the tray)
    if !settings.persisted.start_hidden {
        window.set_visible(true);
    }

    window
}
