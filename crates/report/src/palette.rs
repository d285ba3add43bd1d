//! Chart color palette.
//!
//! Colors are plain RGB triples here so the model crate stays independent
//! of any plotting backend. Status colors follow the material palette the
//! original charts used; cycle bars are colored by magnitude instead,
//! with one threshold at a million cycles.

use crate::ZkvmStatus;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const GREEN: Rgb = Rgb(0x4C, 0xAF, 0x50);
pub const ORANGE: Rgb = Rgb(0xFF, 0x98, 0x00);
pub const GRAY: Rgb = Rgb(0x9E, 0x9E, 0x9E);
pub const BLUE: Rgb = Rgb(0x21, 0x96, 0xF3);
pub const RED: Rgb = Rgb(0xF4, 0x43, 0x36);

/// Cycle counts at or above this render in [`RED`] on cycle charts.
pub const CYCLE_MAGNITUDE_THRESHOLD: u64 = 1_000_000;

/// Bar/point color for a record, keyed by its status.
#[must_use]
pub const fn status_color(status: ZkvmStatus) -> Rgb {
    match status {
        ZkvmStatus::Completed => GREEN,
        ZkvmStatus::Timeout => ORANGE,
        ZkvmStatus::WorkInProgress => GRAY,
        ZkvmStatus::OutOfMemory => BLUE,
    }
}

/// Bar color for a cycle count, keyed by magnitude.
#[must_use]
pub const fn cycle_color(cycles: u64) -> Rgb {
    if cycles >= CYCLE_MAGNITUDE_THRESHOLD {
        RED
    } else {
        BLUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors_are_total_and_stable() {
        for status in [
            ZkvmStatus::Completed,
            ZkvmStatus::Timeout,
            ZkvmStatus::WorkInProgress,
            ZkvmStatus::OutOfMemory,
        ] {
            // Same input, same color, every call.
            assert_eq!(status_color(status), status_color(status));
        }
        assert_eq!(status_color(ZkvmStatus::Completed), GREEN);
        assert_eq!(status_color(ZkvmStatus::OutOfMemory), BLUE);
    }

    #[test]
    fn cycle_threshold_is_inclusive() {
        assert_eq!(cycle_color(999_999), BLUE);
        assert_eq!(cycle_color(1_000_000), RED);
        assert_eq!(cycle_color(60_424_086), RED);
    }
}
