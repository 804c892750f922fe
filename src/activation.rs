use ndarray::{Array1, ArrayView1};

/// The logistic function `1 / (1 + e^-x)`.
///
/// Negative inputs go through `e^x / (1 + e^x)` so `e^-x` never overflows,
/// the output saturates toward 0 or 1 instead.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0. {
        1. / (1. + (-x).exp())
    } else {
        let e = x.exp();
        e / (1. + e)
    }
}

/// Derivative of [`sigmoid`], always in `[0, 0.25]`.
pub fn derivative_sigmoid(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1. - s)
}

/// Sigmoid activation applied pointwise over vectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// Returns a new `Sigmoid`.
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, z: f64) -> f64 {
        sigmoid(z)
    }

    pub fn df(&self, z: f64) -> f64 {
        derivative_sigmoid(z)
    }

    pub fn forward(&self, x: ArrayView1<f64>) -> Array1<f64> {
        x.mapv(sigmoid)
    }

    pub fn forward_prime(&self, x: ArrayView1<f64>) -> Array1<f64> {
        x.mapv(derivative_sigmoid)
    }
}
