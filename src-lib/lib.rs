// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

//! Support library for the simple-window-summoner application.
//!
//! The interesting part lives in [`presenter`]: a [`presenter::WindowPresenter`] drives an
//! existing toolkit window to the front (visible, unminimized, active, topmost) through the
//! small [`presenter::ToolkitWindow`] seam. [`toolkit`] adapts a real winit window to that
//! seam, and [`platform`] holds the OS-specific calls winit can't express.

pub mod platform;
pub mod presenter;
pub mod settings;
pub mod toolkit;
pub mod util;
pub mod window_state;
