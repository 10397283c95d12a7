//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Return `num` evenly spaced samples over the closed interval
/// `[start, end]`.
///
/// A single sample is placed at `start`, and zero samples produce an empty
/// vector.
pub fn lin_space<T>(start: T, end: T, num: usize) -> Vec<T>
where
    T: Float,
{
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            // Dividing by (num - 1) puts the last sample exactly at the end
            let num_t = T::from(num - 1).unwrap_or_else(T::one);
            let step = (end - start) / num_t;

            (0..num)
                .map(|i| start + T::from(i).unwrap_or_else(T::zero) * step)
                .collect()
        }
    }
}

/// Root mean square of a set of values, or `None` if there are no values.
pub fn rms<T>(values: &[T]) -> Option<T>
where
    T: Float,
{
    if values.is_empty() {
        return None;
    }

    let sum_sq = values.iter().fold(T::zero(), |acc, &v| acc + v * v);
    let len = T::from(values.len())?;

    Some((sum_sq / len).sqrt())
}

/// Limit a value to the range `[min, max]`.
///
/// Unlike `f64::clamp` this never panics, a NaN value is passed through
/// unchanged.
pub fn clamp<T>(value: &T, min: &T, max: &T) -> T
where
    T: Float,
{
    let mut ret = *value;

    if ret > *max {
        ret = *max
    }
    if ret < *min {
        ret = *min
    }

    ret
}
