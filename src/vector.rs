use crate::error::{Result, UtilErr};

/// Returns the dot product of `xs` and `ys`.
///
/// # Errors
/// Returns `UtilErr::ShapeMismatch` if the vectors have different lengths.
pub fn dot_product(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(UtilErr::ShapeMismatch {
            what: "dot product operands",
            got: ys.len(),
            expected: xs.len(),
        });
    }

    Ok(xs.iter().zip(ys).map(|(x, y)| x * y).sum())
}
