//! Steering rate limiter

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use util::maths::clamp;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Limit the change from `prev_delta_rad` towards `raw_delta_rad` to at most
/// `max_rate_rad` in either direction.
///
/// The returned command must be fed back as `prev_delta_rad` on the next
/// call. A `max_rate_rad` of zero holds the command at `prev_delta_rad`
/// indefinitely.
pub fn rate_limit(prev_delta_rad: f64, raw_delta_rad: f64, max_rate_rad: f64) -> f64 {
    let max_rate_rad = max_rate_rad.abs();

    prev_delta_rad + clamp(&(raw_delta_rad - prev_delta_rad), &-max_rate_rad, &max_rate_rad)
}

/// Returns true if `rate_limit` would change the raw demand.
pub fn is_rate_limited(prev_delta_rad: f64, raw_delta_rad: f64, max_rate_rad: f64) -> bool {
    (raw_delta_rad - prev_delta_rad).abs() > max_rate_rad.abs()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_within_rate() {
        assert_eq!(rate_limit(0.1, 0.3, 0.5), 0.1 + (0.3 - 0.1));
        assert!(!is_rate_limited(0.1, 0.3, 0.5));
    }

    #[test]
    fn test_limited() {
        assert_eq!(rate_limit(0.0, 1.2, 0.5), 0.5);
        assert_eq!(rate_limit(0.0, -1.2, 0.5), -0.5);
        assert_eq!(rate_limit(0.25, -1.0, 0.5), 0.25 - 0.5);
        assert!(is_rate_limited(0.0, 1.2, 0.5));
        assert!(is_rate_limited(0.25, -1.0, 0.5));
    }

    #[test]
    fn test_zero_rate_freezes() {
        let mut delta = 0.0;
        for raw in [1.0, -0.7, 0.3, 1.5].iter() {
            delta = rate_limit(delta, *raw, 0.0);
            assert_eq!(delta, 0.0);
        }

        assert_eq!(rate_limit(0.4, -1.0, 0.0), 0.4);
    }

    #[test]
    fn test_sequence_respects_rate() {
        let raws = [1.4, 1.4, -1.4, -1.4, -1.4, 0.2, 0.0];
        let mut prev = 0.0;

        for raw in raws.iter() {
            let next = rate_limit(prev, *raw, 0.5);
            assert!((next - prev).abs() <= 0.5 + 1e-12);
            prev = next;
        }

        assert_eq!(prev, 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(rate_limit(0.0, f64::NAN, 0.5).is_nan());
    }
}
