// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

//! Various utilities

pub mod custom_serializer;
pub mod dialog;
pub mod numeric;
