// =============================================================================
// Aligned Series Helpers
// =============================================================================
//
// Every indicator output is a `Series`: one slot per bar, `None` where the
// value is not computable (warm-up window, zero denominator, non-finite
// arithmetic).  Undefined is never folded into zero.
//
// Rolling windows are trailing and inclusive of the current bar.  A window
// containing any undefined slot is itself undefined.
// =============================================================================

/// A bar-aligned numeric series with explicit undefined slots.
pub type Series = Vec<Option<f64>>;

/// Lift a fully defined slice into a `Series`, dropping non-finite values.
pub fn defined(values: &[f64]) -> Series {
    values.iter().map(|&v| finite(v)).collect()
}

/// `Some(v)` only when `v` is finite.
#[inline]
pub fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// `num / den`, undefined when the denominator is zero or the result is not
/// finite.
#[inline]
pub fn ratio(num: f64, den: f64) -> Option<f64> {
    if den == 0.0 {
        return None;
    }
    finite(num / den)
}

/// Apply `f` to every full trailing window of `window` defined values.
pub fn rolling<F>(values: &[Option<f64>], window: usize, f: F) -> Series
where
    F: Fn(&[f64]) -> Option<f64>,
{
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let mut buf = Vec::with_capacity(window);
    for end in window - 1..values.len() {
        buf.clear();
        let slots = &values[end + 1 - window..=end];
        if slots.iter().any(Option::is_none) {
            continue;
        }
        buf.extend(slots.iter().flatten());
        out[end] = f(&buf).and_then(finite);
    }
    out
}

pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Series {
    rolling(values, window, |w| Some(mean(w)))
}

pub fn rolling_sum(values: &[Option<f64>], window: usize) -> Series {
    rolling(values, window, |w| Some(w.iter().sum()))
}

pub fn rolling_max(values: &[Option<f64>], window: usize) -> Series {
    rolling(values, window, |w| w.iter().copied().reduce(f64::max))
}

pub fn rolling_min(values: &[Option<f64>], window: usize) -> Series {
    rolling(values, window, |w| w.iter().copied().reduce(f64::min))
}

/// Sample standard deviation (n - 1).  Windows of fewer than two samples are
/// undefined.
pub fn rolling_std(values: &[Option<f64>], window: usize) -> Series {
    rolling(values, window, sample_std)
}

/// Mean absolute deviation around the window mean.  Windows of fewer than two
/// samples are undefined.
pub fn rolling_mad(values: &[Option<f64>], window: usize) -> Series {
    rolling(values, window, |w| {
        if w.len() < 2 {
            return None;
        }
        let m = mean(w);
        Some(w.iter().map(|x| (x - m).abs()).sum::<f64>() / w.len() as f64)
    })
}

/// Exponentially weighted mean with smoothing factor `alpha`:
///   s_0 = x_0,  s_t = alpha * x_t + (1 - alpha) * s_{t-1}
///
/// The recursion starts at the first defined input.  An undefined input
/// yields an undefined output and leaves the running state untouched.
pub fn ewm(values: &[Option<f64>], alpha: f64) -> Series {
    let mut state: Option<f64> = None;
    values
        .iter()
        .map(|slot| {
            let x = (*slot)?;
            let next = match state {
                Some(prev) => alpha * x + (1.0 - alpha) * prev,
                None => x,
            };
            let next = finite(next)?;
            state = Some(next);
            Some(next)
        })
        .collect()
}

/// `ewm` with the span convention alpha = 2 / (span + 1).
pub fn ewm_span(values: &[Option<f64>], span: usize) -> Series {
    ewm(values, 2.0 / (span as f64 + 1.0))
}

/// Undefine every slot before position `start`.
pub fn mask_before(mut series: Series, start: usize) -> Series {
    for slot in series.iter_mut().take(start) {
        *slot = None;
    }
    series
}

/// Shift values forward (`periods > 0`, value at `i` comes from `i - periods`)
/// or backward (`periods < 0`, value at `i` comes from `i + |periods|`).
pub fn shift(values: &[Option<f64>], periods: isize) -> Series {
    let n = values.len() as isize;
    (0..n)
        .map(|i| {
            let src = i - periods;
            if (0..n).contains(&src) {
                values[src as usize]
            } else {
                None
            }
        })
        .collect()
}

/// Element-wise combination; undefined wherever either side is undefined.
pub fn zip_with<F>(a: &[Option<f64>], b: &[Option<f64>], f: F) -> Series
where
    F: Fn(f64, f64) -> Option<f64>,
{
    a.iter()
        .zip(b)
        .map(|(x, y)| f((*x)?, (*y)?).and_then(finite))
        .collect()
}

fn mean(w: &[f64]) -> f64 {
    w.iter().sum::<f64>() / w.len() as f64
}

fn sample_std(w: &[f64]) -> Option<f64> {
    if w.len() < 2 {
        return None;
    }
    let m = mean(w);
    let var = w.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (w.len() - 1) as f64;
    Some(var.sqrt())
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-10)
    }

    #[test]
    fn rolling_mean_defined_from_window_end() {
        let s = rolling_mean(&defined(&[1.0, 2.0, 3.0, 4.0]), 3);
        assert_eq!(s[0], None);
        assert_eq!(s[1], None);
        assert!(approx(s[2], 2.0));
        assert!(approx(s[3], 3.0));
    }

    #[test]
    fn rolling_shorter_than_window_is_all_undefined() {
        let s = rolling_sum(&defined(&[1.0, 2.0]), 3);
        assert!(s.iter().all(Option::is_none));
    }

    #[test]
    fn rolling_skips_windows_with_gaps() {
        let s = rolling_sum(&[Some(1.0), None, Some(3.0), Some(4.0)], 2);
        assert_eq!(s, vec![None, None, None, Some(7.0)]);
    }

    #[test]
    fn std_requires_two_samples() {
        assert!(rolling_std(&defined(&[5.0]), 1)[0].is_none());
        let s = rolling_std(&defined(&[2.0, 4.0]), 2);
        assert!(approx(s[1], 2.0_f64.sqrt()));
    }

    #[test]
    fn mad_of_symmetric_window() {
        let s = rolling_mad(&defined(&[1.0, 2.0, 3.0]), 3);
        assert!(approx(s[2], 2.0 / 3.0));
    }

    #[test]
    fn ewm_seeds_with_first_defined_value() {
        let s = ewm(&[None, Some(3.0), Some(6.0)], 1.0 / 3.0);
        assert_eq!(s[0], None);
        assert!(approx(s[1], 3.0));
        assert!(approx(s[2], 4.0));
    }

    #[test]
    fn ewm_gap_keeps_state() {
        let s = ewm(&[Some(3.0), None, Some(6.0)], 1.0 / 3.0);
        assert_eq!(s[1], None);
        assert!(approx(s[2], 4.0));
    }

    #[test]
    fn shift_both_directions() {
        let v = defined(&[1.0, 2.0, 3.0]);
        assert_eq!(shift(&v, 1), vec![None, Some(1.0), Some(2.0)]);
        assert_eq!(shift(&v, -1), vec![Some(2.0), Some(3.0), None]);
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        assert_eq!(ratio(1.0, 0.0), None);
        assert_eq!(ratio(0.0, 0.0), None);
        assert_eq!(ratio(1.0, 4.0), Some(0.25));
    }
}
