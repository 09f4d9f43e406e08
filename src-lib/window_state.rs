// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

//! Composite window state flags.
//!
//! GUI toolkits track minimized/maximized/fullscreen/active as one bitmask, and summoning a
//! window is a read-modify-write on that bitmask. Doing the bit math in a pure function keeps
//! the "only these two bits change" invariant testable without a real window.

use bitflags::bitflags;

bitflags! {
    /// State bits of a toolkit window. Visibility is intentionally not a flag here: showing a
    /// window is a separate toolkit request, not part of the state bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WindowStateFlags: u32 {
        /// removed from the stacking order but not destroyed
        const MINIMIZED = 1 << 0;
        const MAXIMIZED = 1 << 1;
        const FULL_SCREEN = 1 << 2;
        /// holds input focus
        const ACTIVE = 1 << 3;
    }
}

/// Clear `MINIMIZED` and set `ACTIVE`, leaving every other flag untouched.
pub fn with_unminimized_and_active(state: WindowStateFlags) -> WindowStateFlags {
    (state & !WindowStateFlags::MINIMIZED) | WindowStateFlags::ACTIVE
}

#[cfg(test)]
mod test_window_state {
    use super::*;

    #[test]
    fn clears_minimized() {
        let state = with_unminimized_and_active(WindowStateFlags::MINIMIZED);
        assert!(!state.contains(WindowStateFlags::MINIMIZED));
    }

    #[test]
    fn sets_active() {
        let state = with_unminimized_and_active(WindowStateFlags::empty());
        assert!(state.contains(WindowStateFlags::ACTIVE));
    }

    /// a maximized or fullscreen window must come back maximized or fullscreen
    #[test]
    fn preserves_unrelated_flags() {
        let before = WindowStateFlags::MINIMIZED | WindowStateFlags::MAXIMIZED | WindowStateFlags::FULL_SCREEN;
        let after = with_unminimized_and_active(before);
        assert_eq!(after, WindowStateFlags::MAXIMIZED | WindowStateFlags::FULL_SCREEN | WindowStateFlags::ACTIVE);
    }

    #[test]
    fn idempotent() {
        let once = with_unminimized_and_active(WindowStateFlags::MINIMIZED | WindowStateFlags::MAXIMIZED);
        let twice = with_unminimized_and_active(once);
        assert_eq!(once, twice);
    }

    #[test]
    fn already_active_window_is_unchanged() {
        let before = WindowStateFlags::ACTIVE;
        assert_eq!(with_unminimized_and_active(before), before);
    }
}
