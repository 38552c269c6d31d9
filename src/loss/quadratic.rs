/// Quadratic cost C = ½‖a − y‖² for a single example.
pub struct QuadraticCost;

impl QuadraticCost {
    /// Scalar cost: ½·Σ(predicted − expected)²
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        0.5 * predicted.iter().zip(expected.iter())
            .map(|(a, y)| (a - y).powi(2))
            .sum::<f64>()
    }

    /// Gradient with respect to the output activation: predicted − expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(a, y)| a - y)
            .collect()
    }
}
