// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

//! Platform-specific implementations

#[cfg(not(target_os = "windows"))]
pub use generic::{get_foreground_window, raise_window, set_foreground_window, window_handle, WindowHandle};
#[cfg(target_os = "windows")]
pub use windows::{get_foreground_window, raise_window, set_foreground_window, window_handle, WindowHandle};

#[cfg(not(target_os = "windows"))]
mod generic;

#[cfg(target_os = "windows")]
mod windows;
