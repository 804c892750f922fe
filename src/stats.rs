use crate::error::{Result, UtilErr};

/// Returns the largest value in `numbers`.
///
/// A NaN anywhere in the input makes the result NaN.
///
/// # Errors
/// Returns `UtilErr::EmptyInput` if `numbers` is empty.
pub fn max(numbers: &[f64]) -> Result<f64> {
    extreme(numbers, |candidate, best| candidate > best)
}

/// Returns the smallest value in `numbers`, with the same NaN and empty
/// input behavior as [`max`].
pub fn min(numbers: &[f64]) -> Result<f64> {
    extreme(numbers, |candidate, best| candidate < best)
}

fn extreme(numbers: &[f64], better: fn(f64, f64) -> bool) -> Result<f64> {
    let (&first, rest) = numbers
        .split_first()
        .ok_or(UtilErr::EmptyInput { what: "numbers" })?;

    let mut best = first;
    for &x in rest {
        if x.is_nan() {
            return Ok(f64::NAN);
        }

        if better(x, best) {
            best = x;
        }
    }

    Ok(best)
}

/// Returns `(min, max)` over the non-NaN values yielded by `values` in a
/// single pass, or `None` if there are none.
pub fn min_max<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|x| !x.is_nan())
        .fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
}
