// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

//! winit-backed implementation of the [`ToolkitWindow`] seam.

use debug_print::debug_println;
use winit::window::{Fullscreen, Window};

use crate::platform;
use crate::presenter::ToolkitWindow;
use crate::window_state::WindowStateFlags;

/// Adapts a borrowed [`winit::window::Window`] to the presenter's [`ToolkitWindow`] seam.
/// The window stays owned by the event loop; this only lives for the duration of one call.
pub struct WinitWindow<'a> {
    window: &'a Window,
}

impl<'a> WinitWindow<'a> {
    pub fn new(window: &'a Window) -> WinitWindow<'a> {
        WinitWindow { window }
    }
}

impl ToolkitWindow for WinitWindow<'_> {
    fn show(&self) {
        self.window.set_visible(true);
    }

    fn state(&self) -> WindowStateFlags {
        let mut state = WindowStateFlags::empty();

        // winit can't always answer the minimized question, in which case assume not minimized
        if self.window.is_minimized().unwrap_or(false) {
            state |= WindowStateFlags::MINIMIZED;
        }
        if self.window.is_maximized() {
            state |= WindowStateFlags::MAXIMIZED;
        }
        if self.window.fullscreen().is_some() {
            state |= WindowStateFlags::FULL_SCREEN;
        }
        if self.window.has_focus() {
            state |= WindowStateFlags::ACTIVE;
        }
        state
    }

    fn set_state(&self, state: WindowStateFlags) {
        self.window.set_minimized(state.contains(WindowStateFlags::MINIMIZED));
        self.window.set_maximized(state.contains(WindowStateFlags::MAXIMIZED));

        // only touch fullscreen if the flag actually disagrees with the window
        match (state.contains(WindowStateFlags::FULL_SCREEN), self.window.fullscreen().is_some()) {
            (true, false) => self.window.set_fullscreen(Some(Fullscreen::Borderless(None))),
            (false, true) => self.window.set_fullscreen(None),
            _ => (),
        }

        // winit has no direct ACTIVE setter; a focus request is the closest thing it offers
        if state.contains(WindowStateFlags::ACTIVE) && !self.window.has_focus() {
            self.window.focus_window();
        }
    }

    fn activate(&self) {
        self.window.focus_window();

        // winit's focus request is only a polite ask on Windows, so follow up with the real thing
        if let Some(handle) = platform::window_handle(self.window) {
            if !platform::set_foreground_window(handle) {
                debug_println!("platform declined to foreground the window (focus-steal prevention?)");
            }
        }
    }

    fn raise(&self) {
        match platform::window_handle(self.window) {
            Some(handle) => {
                if !platform::raise_window(handle) {
                    debug_println!("platform declined to raise the window");
                }
            }
            None => {
                debug_println!("no platform window handle, cannot raise");
            }
        }
    }
}
