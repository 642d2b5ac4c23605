//! Sigmoid activation.
//!
//! Every unit in the network squashes its weighted input sum with the logistic
//! sigmoid. Activations are cached post-sigmoid, so backprop computes the
//! derivative from the cached output `a` instead of keeping the net input around.

/// Logistic sigmoid `1 / (1 + e^-x)`.
///
/// Evaluated in `f64` and narrowed to `f32`. Very large `|x|` saturates to
/// `0.0` or `1.0` rather than producing NaN.
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    let x = f64::from(x);
    (1.0 / (1.0 + (-x).exp())) as f32
}

/// Derivative of the sigmoid, expressed in terms of its output `a = sigmoid(x)`.
#[inline]
pub fn sigmoid_derivative(a: f32) -> f32 {
    a * (1.0 - a)
}
