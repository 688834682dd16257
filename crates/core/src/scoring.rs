//! Scoring module - classic line-clear scoring and gravity by level
//!
//! Points are awarded for line clears only: the classic table
//! (40 / 100 / 300 / 1200) multiplied by `level + 1`.

use crate::types::{
    DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, DROP_INTERVAL_MIN_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (0-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level.saturating_add(1))
}

/// Level for a total number of cleared lines
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Get the gravity interval for a level (in milliseconds)
pub fn get_drop_interval_ms(level: u32) -> u32 {
    DROP_INTERVALS
        .get(level as usize)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}

/// Gravity interval for a level scaled by a speed factor
///
/// A speed of 2.0 falls twice as fast. The result never goes below
/// [`DROP_INTERVAL_MIN_MS`].
pub fn scaled_drop_interval_ms(level: u32, speed: f32) -> u32 {
    let base = get_drop_interval_ms(level) as f32;
    ((base / speed) as u32).max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        assert_eq!(calculate_line_score(1, 0), 40);
        assert_eq!(calculate_line_score(2, 0), 100);
        assert_eq!(calculate_line_score(3, 0), 300);
        assert_eq!(calculate_line_score(4, 0), 1200);

        assert_eq!(calculate_line_score(1, 5), 40 * 6);
        assert_eq!(calculate_line_score(4, 5), 1200 * 6);
    }

    #[test]
    fn test_no_score_outside_table() {
        assert_eq!(calculate_line_score(0, 3), 0);
        assert_eq!(calculate_line_score(5, 3), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 0);
        assert_eq!(calculate_level(9), 0);
        assert_eq!(calculate_level(10), 1);
        assert_eq!(calculate_level(29), 2);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(get_drop_interval_ms(0), 1000);
        assert_eq!(get_drop_interval_ms(8), 160);
        assert_eq!(get_drop_interval_ms(9), 120);
        assert_eq!(get_drop_interval_ms(20), 120);
    }

    #[test]
    fn test_speed_scales_and_clamps() {
        assert_eq!(scaled_drop_interval_ms(0, 1.0), 1000);
        assert_eq!(scaled_drop_interval_ms(0, 2.0), 500);
        assert_eq!(scaled_drop_interval_ms(0, 0.5), 2000);
        assert_eq!(scaled_drop_interval_ms(9, 4.0), 100);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn more_lines_never_score_less(level in 0u32..1_000, lines in 1usize..4) {
                prop_assert!(calculate_line_score(lines + 1, level) > calculate_line_score(lines, level));
                prop_assert!(calculate_line_score(lines, level + 1) >= calculate_line_score(lines, level));
            }

            #[test]
            fn gravity_respects_the_floor(level in any::<u32>(), speed in 0.01f32..100.0) {
                prop_assert!(scaled_drop_interval_ms(level, speed) >= DROP_INTERVAL_MIN_MS);
                prop_assert!(get_drop_interval_ms(level.saturating_add(1)) <= get_drop_interval_ms(level));
            }
        }
    }
}
