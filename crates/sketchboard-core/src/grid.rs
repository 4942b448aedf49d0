//! Grid and axis tick metrics.
//!
//! Pure functions of the camera scale. The renderer draws the grid, ticks,
//! and labels from these values; keeping them in one place guarantees all
//! three agree on the same zoom.

use serde::{Deserialize, Serialize};

/// Main grid cell size at 100% scale, in world units.
pub const BASE_GRID_SIZE: f64 = 50.0;
/// Lower clamp for the main grid cell size.
pub const MIN_GRID_SIZE: f64 = 5.0;
/// Upper clamp for the main grid cell size.
pub const MAX_GRID_SIZE: f64 = 800.0;
/// Number of sub-cells per main grid cell.
pub const SUB_DIVISIONS: f64 = 5.0;
/// Minimum on-screen sub-cell size in pixels; below this the sub-grid is
/// hidden instead of flooding the view at extreme zoom-out.
pub const SUB_GRID_MIN_PIXELS: f64 = 5.0;
/// Target on-screen distance between labeled axis ticks, in pixels.
pub const TICK_TARGET_PX: f64 = 80.0;

/// Grid spacing for one zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpacing {
    /// Main grid cell size in world units.
    pub main: f64,
    /// Sub-grid cell size in world units (`main / SUB_DIVISIONS`).
    pub sub: f64,
    /// Whether the sub-grid is legible enough to draw at this scale.
    pub show_sub: bool,
}

/// Adaptive grid spacing.
///
/// Halves the cell size every octave of zoom so the on-screen density stays
/// roughly constant, clamped to `[MIN_GRID_SIZE, MAX_GRID_SIZE]`.
pub fn grid_spacing(scale: f64) -> GridSpacing {
    let main =
        (BASE_GRID_SIZE * (-scale.log2().floor()).exp2()).clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
    let sub = main / SUB_DIVISIONS;
    GridSpacing {
        main,
        sub,
        show_sub: sub * scale > SUB_GRID_MIN_PIXELS,
    }
}

/// World distance between labeled axis ticks.
///
/// The nearest "nice" value ({1, 2, 5, 10} × 10ⁿ) to `TICK_TARGET_PX`
/// screen pixels. Non-increasing as the scale grows.
pub fn tick_spacing(scale: f64) -> f64 {
    let world = TICK_TARGET_PX / scale;
    let magnitude = 10f64.powf(world.log10().floor());
    let normalized = world / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Format an axis label so it stays short at any zoom.
///
/// Exponential notation far from one, three decimals otherwise with
/// trailing zeros stripped; values that round to nothing snap to "0".
pub fn format_tick_label(value: f64) -> String {
    if value != 0.0 && (value.abs() < 1e-4 || value.abs() >= 1e4) {
        return format!("{value:e}");
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded.abs() < 1e-3 {
        return "0".to_string();
    }
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{MAX_SCALE, MIN_SCALE};

    #[test]
    fn test_grid_halves_per_octave() {
        assert!((grid_spacing(1.0).main - 50.0).abs() < f64::EPSILON);
        assert!((grid_spacing(2.0).main - 25.0).abs() < f64::EPSILON);
        assert!((grid_spacing(4.0).main - 12.5).abs() < f64::EPSILON);
        assert!((grid_spacing(0.5).main - 100.0).abs() < f64::EPSILON);
        // Within an octave the spacing is constant.
        assert!((grid_spacing(1.9).main - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grid_clamped_at_extremes() {
        assert!((grid_spacing(MIN_SCALE).main - MAX_GRID_SIZE).abs() < f64::EPSILON);
        assert!((grid_spacing(MAX_SCALE).main - MIN_GRID_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sub_grid_gated_at_extreme_zoom_out() {
        // Comfortable zoom: the sub-grid is legible.
        let normal = grid_spacing(1.0);
        assert!((normal.sub - 10.0).abs() < f64::EPSILON);
        assert!(normal.show_sub);

        // Extreme zoom-out: the clamp freezes the cell size, the on-screen
        // sub-cells collapse, and the flag turns off.
        let far = grid_spacing(0.02);
        assert!(!far.show_sub);
    }

    #[test]
    fn test_tick_spacing_is_nice() {
        // 80px at scale 1 is 80 world units -> nearest nice value is 100.
        assert!((tick_spacing(1.0) - 100.0).abs() < f64::EPSILON);
        assert!((tick_spacing(2.0) - 50.0).abs() < f64::EPSILON);
        assert!((tick_spacing(8.0) - 10.0).abs() < f64::EPSILON);
        assert!((tick_spacing(0.5) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tick_spacing_monotonic_and_from_nice_set() {
        let mut previous = f64::INFINITY;
        let mut scale = MIN_SCALE;
        while scale <= MAX_SCALE {
            let spacing = tick_spacing(scale);
            assert!(
                spacing <= previous + 1e-9,
                "spacing increased at scale {scale}"
            );

            // spacing / 10^floor(log10) must land on 1, 2, 5, or 10.
            let magnitude = 10f64.powf(spacing.log10().floor());
            let normalized = spacing / magnitude;
            let nice = [1.0, 2.0, 5.0, 10.0]
                .iter()
                .any(|n| (normalized - n).abs() < 1e-9);
            assert!(nice, "spacing {spacing} at scale {scale} is not nice");

            previous = spacing;
            scale *= 1.07;
        }
    }

    #[test]
    fn test_format_plain_values() {
        assert_eq!(format_tick_label(0.0), "0");
        assert_eq!(format_tick_label(2.0), "2");
        assert_eq!(format_tick_label(-50.0), "-50");
        assert_eq!(format_tick_label(0.125), "0.125");
        assert_eq!(format_tick_label(1.5), "1.5");
        assert_eq!(format_tick_label(9999.0), "9999");
    }

    #[test]
    fn test_format_rounds_and_strips() {
        assert_eq!(format_tick_label(0.1000004), "0.1");
        assert_eq!(format_tick_label(1.23456), "1.235");
        // Rounds to nothing: snapped to zero.
        assert_eq!(format_tick_label(0.0004), "0");
        assert_eq!(format_tick_label(-0.0004), "0");
    }

    #[test]
    fn test_format_exponential_extremes() {
        assert_eq!(format_tick_label(10000.0), "1e4");
        assert_eq!(format_tick_label(-250000.0), "-2.5e5");
        assert_eq!(format_tick_label(0.00005), "5e-5");
    }
}
