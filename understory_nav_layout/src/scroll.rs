// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll arithmetic over a vertical strip of rows.
//!
//! Offsets are measured from the top of the content; `0` shows the first row at the
//! top of the viewport. Valid offsets live in `[0, max_scroll]`.

/// Largest offset at which the viewport still shows content: `max(0, content − viewport)`.
pub fn max_scroll(content_extent: f64, viewport_extent: f64) -> f64 {
    if content_extent > viewport_extent {
        content_extent - viewport_extent
    } else {
        0.0
    }
}

/// Clamps `offset` into `[0, max_scroll(content, viewport)]`.
///
/// A NaN offset clamps to `0`.
pub fn clamp_scroll(offset: f64, content_extent: f64, viewport_extent: f64) -> f64 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, max_scroll(content_extent, viewport_extent))
}

/// Offset that brings `[item_start, item_end)` into view from `current` with minimal motion.
///
/// Keeps `current` when the row is already fully visible, scrolls up to the row's top
/// when it is above, and otherwise scrolls down until its bottom meets the viewport
/// bottom. The result is not clamped to the content; pass it through [`clamp_scroll`].
pub fn reveal(current: f64, item_start: f64, item_end: f64, viewport_extent: f64) -> f64 {
    let viewport_end = current + viewport_extent;
    if item_start >= current && item_end <= viewport_end {
        current
    } else if item_start < current {
        item_start
    } else {
        (item_end - viewport_extent).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_both_ends() {
        assert_eq!(clamp_scroll(-10.0, 300.0, 100.0), 0.0);
        assert_eq!(clamp_scroll(250.0, 300.0, 100.0), 200.0);
        assert_eq!(clamp_scroll(80.0, 300.0, 100.0), 80.0);
        assert_eq!(clamp_scroll(40.0, 50.0, 100.0), 0.0);
        assert_eq!(clamp_scroll(f64::NAN, 300.0, 100.0), 0.0);
        assert_eq!(clamp_scroll(f64::INFINITY, 300.0, 100.0), 200.0);
    }

    #[test]
    fn reveal_moves_minimally() {
        // Fifth row of 30px in a 100px viewport.
        assert_eq!(reveal(0.0, 120.0, 150.0, 100.0), 50.0);
        // Already visible.
        assert_eq!(reveal(50.0, 60.0, 90.0, 100.0), 50.0);
        // Above the viewport.
        assert_eq!(reveal(50.0, 30.0, 60.0, 100.0), 30.0);
        // Taller than the viewport and below it: bottom edge wins.
        assert_eq!(reveal(0.0, 40.0, 200.0, 100.0), 100.0);
    }
}
