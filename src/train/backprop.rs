use crate::activation::sigmoid_prime;
use crate::error::Result;
use crate::loss::quadratic::QuadraticCost;
use crate::math::{MatrixOps, VectorOps};
use crate::network::network::Network;
use crate::train::example::TrainingExample;

/// Per-transition cost gradients, shaped exactly like the network's
/// parameters: `weights[i]` matches `Network::weights()[i]` and `biases[i]`
/// matches `Network::biases()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients<M: MatrixOps> {
    pub weights: Vec<M>,
    pub biases: Vec<M::Vector>,
}

impl<M: MatrixOps> Gradients<M> {
    /// Zeroed accumulator shaped like `network`'s parameters.
    pub fn zeros_like(network: &Network<M>) -> Gradients<M> {
        Gradients {
            weights: network
                .weights
                .iter()
                .map(|w| M::zeros(w.rows(), w.cols()))
                .collect(),
            biases: network
                .biases
                .iter()
                .map(|b| M::Vector::zeros(b.len()))
                .collect(),
        }
    }

    /// Element-wise sum `self += other`.
    pub fn accumulate(&mut self, other: &Gradients<M>) {
        for (acc, g) in self.weights.iter_mut().zip(&other.weights) {
            acc.add_assign(g);
        }
        for (acc, g) in self.biases.iter_mut().zip(&other.biases) {
            acc.add_assign(g);
        }
    }
}

impl<M: MatrixOps> Network<M> {
    /// Gradient of the quadratic cost ½‖a − y‖² for a single example with
    /// respect to every weight and bias.
    ///
    /// The output error is δ = (a − y) ⊙ σ'(z) and is carried backwards with
    /// δᵢ = (Wᵢ₊₁ᵗ·δᵢ₊₁) ⊙ σ'(zᵢ). Each transition's bias gradient is its δ
    /// and its weight gradient is δ ⊗ aᵢᵗ, where aᵢ is the activation feeding
    /// that transition. The network is not modified.
    pub fn backprop(&self, example: &TrainingExample) -> Result<Gradients<M>> {
        self.check_example(example)?;
        let pass = self.forward_pass(&example.input)?;

        let last = self.transitions() - 1;
        let error = QuadraticCost::derivative(pass.output().as_slice(), &example.target);
        let mut delta = M::Vector::from_slice(&error)
            .hadamard(&pass.weighted_inputs[last].map(sigmoid_prime));

        // Filled from the output transition backwards, reversed at the end.
        let mut weights = Vec::with_capacity(self.transitions());
        let mut biases = Vec::with_capacity(self.transitions());
        weights.push(M::outer(&delta, &pass.activations[last]));
        biases.push(delta.clone());

        for i in (0..last).rev() {
            let sp = pass.weighted_inputs[i].map(sigmoid_prime);
            delta = self.weights[i + 1].transpose().mul_vec(&delta).hadamard(&sp);
            weights.push(M::outer(&delta, &pass.activations[i]));
            biases.push(delta.clone());
        }

        weights.reverse();
        biases.reverse();
        Ok(Gradients { weights, biases })
    }
}
