//! Skill-rating → efficiency mapping.
//!
//! The single source of the discrete rating scale used by every phase of
//! the engine. Ratings mean: 0 cannot operate, 1 learning, 2 basic,
//! 3 average, 4 good, 5 excellent.

/// Efficiency percentage by skill rating 0..=5.
pub const EFFICIENCY_BY_RATING: [u32; 6] = [0, 30, 50, 65, 85, 100];

/// Efficiency percentage for a rating. Ratings above 5 saturate at 100.
pub fn efficiency_percent(rating: u8) -> u32 {
    let idx = (rating as usize).min(EFFICIENCY_BY_RATING.len() - 1);
    EFFICIENCY_BY_RATING[idx]
}

/// Seconds a worker with the given rating needs for one unit of an
/// operation with the given SAM: `sam / (efficiency / 100)`.
///
/// Infinite when the rating is 0 (the pairing is infeasible).
pub fn actual_time(sam: f64, rating: u8) -> f64 {
    let efficiency = efficiency_percent(rating);
    if efficiency == 0 {
        f64::INFINITY
    } else {
        sam / (efficiency as f64 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency_table() {
        assert_eq!(efficiency_percent(0), 0);
        assert_eq!(efficiency_percent(1), 30);
        assert_eq!(efficiency_percent(2), 50);
        assert_eq!(efficiency_percent(3), 65);
        assert_eq!(efficiency_percent(4), 85);
        assert_eq!(efficiency_percent(5), 100);
        // Out-of-range ratings saturate rather than panic.
        assert_eq!(efficiency_percent(7), 100);
    }

    #[test]
    fn test_actual_time() {
        // Rating 3 on a 42-second operation: 42 / 0.65 = 64.615...
        assert!((actual_time(42.0, 3) - 64.61538461538461).abs() < 1e-10);
        // Rating 5 runs at standard time.
        assert!((actual_time(30.0, 5) - 30.0).abs() < 1e-10);
        // Rating 1 takes 10/0.3 seconds.
        assert!((actual_time(10.0, 1) - 33.33333333333333).abs() < 1e-10);
    }

    #[test]
    fn test_rating_zero_is_infeasible() {
        assert!(actual_time(42.0, 0).is_infinite());
    }
}
