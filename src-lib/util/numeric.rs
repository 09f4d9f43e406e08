// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

//! Numeric utilities

use std::time::Duration;

/// Convert a polling rate in Hz into the sleep interval between ticks, rounding the interval
/// up so we never poll faster than requested.
pub fn hz_to_tick_interval(hz: u32) -> Duration {
    let millis = 1000.div_ceil_placeholder(hz);
    Duration::from_millis(millis as u64)
}

pub trait DivCeil {
    /// Intentionally _not_ named `div_ceil` so it can't collide with the inherent integer
    /// method of the same name.
    ///
    /// This does an integer ceiling division.
    fn div_ceil_placeholder(&self, rhs: Self) -> Self;
}

impl DivCeil for u32 {
    fn div_ceil_placeholder(&self, rhs: Self) -> Self {
        let quotient = self / rhs;
        let remainder = self % rhs;
        if remainder > 0 {
            quotient + 1
        } else {
            quotient
        }
    }
}

#[cfg(test)]
mod test_div_rounding {
    use super::*;

    #[test]
    fn div_ceil_no_round() {
        assert_eq!(100u32.div_ceil_placeholder(2), 50);
    }

    #[test]
    fn div_ceil_rounds_up() {
        assert_eq!(101u32.div_ceil_placeholder(2), 51);
    }

    #[test]
    fn tick_interval_rounds_up() {
        // 1000 / 30 is 33.3ms, which must round up to 34ms
        assert_eq!(hz_to_tick_interval(30), Duration::from_millis(34));
    }

    #[test]
    fn tick_interval_exact() {
        assert_eq!(hz_to_tick_interval(50), Duration::from_millis(20));
    }
}
