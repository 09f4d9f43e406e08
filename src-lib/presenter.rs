// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

//! Bring an existing window to the front.
//!
//! The presenter only asks: it hands the toolkit four requests in a fixed order and never
//! checks whether they were honored. Some platforms silently refuse programmatic focus
//! changes, and there is nothing useful we can do about that here.

use std::thread::{self, ThreadId};

use crate::window_state::{self, WindowStateFlags};

/// The slice of a toolkit window the presenter needs. Implementations borrow the real window;
/// they never own it.
pub trait ToolkitWindow {
    /// ask the toolkit to make the window visible
    fn show(&self);

    /// read the window's current composite state flags
    fn state(&self) -> WindowStateFlags;

    /// write composite state flags back to the window
    fn set_state(&self, state: WindowStateFlags);

    /// request platform-level input focus for the window
    fn activate(&self);

    /// move the window to the top of its sibling stacking order
    fn raise(&self);
}

/// Drives windows to the front. Must be constructed on the thread that owns the toolkit event
/// loop; [`WindowPresenter::bring_to_front`] asserts it is called from that same thread, since
/// toolkit windows are single-thread-affine.
pub struct WindowPresenter {
    ui_thread: ThreadId,
}

impl WindowPresenter {
    /// Call this on the event loop thread, as every later `bring_to_front` is pinned to the
    /// constructing thread.
    pub fn new() -> WindowPresenter {
        WindowPresenter {
            ui_thread: thread::current().id(),
        }
    }

    /// Ask the toolkit to make `window` visible, unminimized, active, and topmost, in that
    /// order. Best-effort: nothing is verified after the fact, so a caller that needs
    /// confirmation has to poll the window state itself.
    pub fn bring_to_front<W>(&self, window: &W)
    where
        W: ToolkitWindow,
    {
        assert_eq!(
            thread::current().id(),
            self.ui_thread,
            "bring_to_front called off the UI thread"
        );

        window.show();
        window.set_state(window_state::with_unminimized_and_active(window.state()));
        window.activate();
        window.raise();
    }
}

impl Default for WindowPresenter {
    fn default() -> Self {
        WindowPresenter::new()
    }
}

#[cfg(test)]
mod test_presenter {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Show,
        SetState(WindowStateFlags),
        Activate,
        Raise,
    }

    /// records every operation in order, granting nothing
    #[derive(Default)]
    struct SpyWindow {
        state: Cell<WindowStateFlags>,
        calls: RefCell<Vec<Call>>,
    }

    impl ToolkitWindow for SpyWindow {
        fn show(&self) {
            self.calls.borrow_mut().push(Call::Show);
        }

        fn state(&self) -> WindowStateFlags {
            self.state.get()
        }

        fn set_state(&self, state: WindowStateFlags) {
            self.state.set(state);
            self.calls.borrow_mut().push(Call::SetState(state));
        }

        fn activate(&self) {
            self.calls.borrow_mut().push(Call::Activate);
        }

        fn raise(&self) {
            self.calls.borrow_mut().push(Call::Raise);
        }
    }

    /// a cooperative toolkit double: every request is honored immediately
    struct FakeWindow {
        visible: Cell<bool>,
        state: Cell<WindowStateFlags>,
        stack_position: Cell<usize>,
    }

    impl FakeWindow {
        fn new(visible: bool, state: WindowStateFlags, stack_position: usize) -> FakeWindow {
            FakeWindow {
                visible: Cell::new(visible),
                state: Cell::new(state),
                stack_position: Cell::new(stack_position),
            }
        }
    }

    impl ToolkitWindow for FakeWindow {
        fn show(&self) {
            self.visible.set(true);
        }

        fn state(&self) -> WindowStateFlags {
            self.state.get()
        }

        fn set_state(&self, state: WindowStateFlags) {
            self.state.set(state);
        }

        fn activate(&self) {
            self.state.set(self.state.get() | WindowStateFlags::ACTIVE);
        }

        fn raise(&self) {
            self.stack_position.set(0);
        }
    }

    #[test]
    fn exactly_four_calls_in_fixed_order() {
        let presenter = WindowPresenter::new();
        let window = SpyWindow::default();
        window.state.set(WindowStateFlags::MINIMIZED);

        presenter.bring_to_front(&window);

        let expected_state = WindowStateFlags::ACTIVE;
        assert_eq!(
            *window.calls.borrow(),
            vec![Call::Show, Call::SetState(expected_state), Call::Activate, Call::Raise]
        );
    }

    #[test]
    fn unrelated_state_bits_survive_the_read_modify_write() {
        let presenter = WindowPresenter::new();
        let window = SpyWindow::default();
        window.state.set(WindowStateFlags::MINIMIZED | WindowStateFlags::MAXIMIZED);

        presenter.bring_to_front(&window);

        assert!(window.state.get().contains(WindowStateFlags::MAXIMIZED));
        assert!(!window.state.get().contains(WindowStateFlags::MINIMIZED));
        assert!(window.state.get().contains(WindowStateFlags::ACTIVE));
    }

    #[test]
    fn hidden_minimized_window_ends_up_front_and_active() {
        let presenter = WindowPresenter::new();
        let window = FakeWindow::new(false, WindowStateFlags::MINIMIZED, 3);

        presenter.bring_to_front(&window);

        assert!(window.visible.get());
        assert_eq!(window.state.get(), WindowStateFlags::ACTIVE);
        assert_eq!(window.stack_position.get(), 0);
    }

    #[test]
    fn already_front_active_window_is_unchanged() {
        let presenter = WindowPresenter::new();
        let window = FakeWindow::new(true, WindowStateFlags::ACTIVE, 0);

        presenter.bring_to_front(&window);

        assert!(window.visible.get());
        assert_eq!(window.state.get(), WindowStateFlags::ACTIVE);
        assert_eq!(window.stack_position.get(), 0);
    }

    #[test]
    fn bring_to_front_panics_off_the_ui_thread() {
        let presenter = WindowPresenter::new();
        let result = thread::spawn(move || {
            let window = FakeWindow::new(true, WindowStateFlags::empty(), 0);
            presenter.bring_to_front(&window);
        })
        .join();
        assert!(result.is_err());
    }
}
