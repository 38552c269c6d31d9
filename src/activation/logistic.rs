/// Logistic sigmoid: σ(x) = 1 / (1 + e^(−x)).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid, σ'(x) = σ(x)·(1 − σ(x)).
///
/// Equal to 1 / (2 + e^x + e^(−x)), but the product form never overflows
/// for large |x|; it decays smoothly to 0 instead.
pub fn sigmoid_prime(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}
