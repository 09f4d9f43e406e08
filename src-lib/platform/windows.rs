// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

//! Windows-specific implementations.
//! This is only in the module tree on Windows targets.

use winapi::shared::windef::HWND;
use winapi::um::winuser;
use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::window::Window;

/// null-safe window handle
#[derive(Copy, Clone, Debug)]
pub struct WindowHandle {
    hwnd: HWND,
}

impl WindowHandle {
    /// must not be called with a null pointer
    fn new(hwnd: HWND) -> WindowHandle {
        debug_assert!(!hwnd.is_null());
        WindowHandle { hwnd }
    }

    /// will never return null pointer
    fn hwnd(self) -> HWND {
        debug_assert!(!self.hwnd.is_null());
        self.hwnd
    }
}

/// Extract the Win32 handle backing a winit window. Returns `None` if winit won't give up the
/// handle, which should only happen while the window is being torn down.
pub fn window_handle(window: &Window) -> Option<WindowHandle> {
    match window.window_handle().ok()?.as_raw() {
        RawWindowHandle::Win32(handle) => Some(WindowHandle::new(handle.hwnd.get() as HWND)),
        _ => None,
    }
}

/// wrapper around https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getforegroundwindow
///
/// this converts null pointers into None
pub fn get_foreground_window() -> Option<WindowHandle> {
    unsafe {
        match winuser::GetForegroundWindow() {
            hwnd if hwnd.is_null() => None,
            hwnd => Some(WindowHandle::new(hwnd)),
        }
    }
}

/// wrapper around https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setforegroundwindow
///
/// this does not handle null pointers, as it shouldn't be possible to get a null inside a `WindowHandle`.
/// `true` is returned if the foreground window was set successfully. Windows refuses this call
/// for processes that don't currently own the foreground, so failure is entirely expected.
pub fn set_foreground_window(window_handle: WindowHandle) -> bool {
    unsafe { winuser::SetForegroundWindow(window_handle.hwnd()) != 0 }
}

/// wrapper around https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-bringwindowtotop
///
/// `true` is returned if the window was moved to the top of the Z order.
pub fn raise_window(window_handle: WindowHandle) -> bool {
    unsafe { winuser::BringWindowToTop(window_handle.hwnd()) != 0 }
}

#[cfg(test)]
mod test_windows {
    use super::*;

    /// there may or may not be a foreground window in a test session; just check the call works
    #[test]
    fn test_get_foreground_window() {
        let _ = get_foreground_window();
    }
}
