use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::activation::sigmoid;
use crate::error::{Error, Result};
use crate::loss::quadratic::QuadraticCost;
use crate::math::{Matrix, MatrixOps, VectorOps};
use crate::network::blueprint::NetBlueprint;
use crate::train::example::TrainingExample;

/// A fully-connected sigmoid network.
///
/// Transition `i` maps layer `i` to layer `i + 1` through the weight matrix
/// `weights[i]` (shape `s[i+1] × s[i]`) and bias vector `biases[i]`
/// (length `s[i+1]`). The parameters are sized once at construction and are
/// only ever mutated in place by [`Network::update_mini_batch`], which needs
/// `&mut self`; the borrow checker therefore rules out any other reader or
/// writer while a training call is running.
#[derive(Debug, Clone, PartialEq)]
pub struct Network<M: MatrixOps = Matrix> {
    pub(crate) blueprint: NetBlueprint,
    pub(crate) weights: Vec<M>,
    pub(crate) biases: Vec<M::Vector>,
}

/// Every weighted input and activation recorded during one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass<V> {
    /// `a₀ … a_{L-1}`, with `a₀` the input.
    pub activations: Vec<V>,
    /// `z₀ … z_{L-2}`, where `zᵢ` feeds layer `i + 1`.
    pub weighted_inputs: Vec<V>,
}

impl<V: VectorOps> ForwardPass<V> {
    /// The output layer's activation.
    pub fn output(&self) -> &V {
        &self.activations[self.activations.len() - 1]
    }
}

impl Network {
    /// Builds a network with the bundled dense backend, drawing the initial
    /// parameters from an entropy-seeded generator.
    pub fn new(sizes: Vec<usize>) -> Result<Network> {
        Network::with_rng(sizes, &mut StdRng::from_entropy())
    }

    /// Like [`Network::new`], but with a caller-supplied generator.
    pub fn with_rng<R: Rng>(sizes: Vec<usize>, rng: &mut R) -> Result<Network> {
        Ok(Network::init(NetBlueprint::new(sizes)?, rng))
    }
}

impl<M: MatrixOps> Network<M> {
    /// Allocates and randomly initializes parameters for `blueprint`.
    ///
    /// Weights are standard-normal samples scaled by 1/√fan_in, i.e.
    /// N(0, 1/√fan_in), and biases are drawn from N(0, 1). This breaks the
    /// symmetry between neurons of the same layer.
    pub fn init<R: Rng>(blueprint: NetBlueprint, rng: &mut R) -> Network<M> {
        let mut weights = Vec::with_capacity(blueprint.transitions());
        let mut biases = Vec::with_capacity(blueprint.transitions());

        for (fan_in, fan_out) in blueprint.transition_shapes() {
            let std_dev = (1.0 / fan_in as f64).sqrt();
            weights.push(M::from_fn(fan_out, fan_in, |_, _| {
                rng.sample::<f64, _>(StandardNormal) * std_dev
            }));
            let bias: Vec<f64> = (0..fan_out).map(|_| rng.sample(StandardNormal)).collect();
            biases.push(M::Vector::from_slice(&bias));
        }

        Network { blueprint, weights, biases }
    }

    /// Builds a network from explicit parameters, checking every shape
    /// against the blueprint.
    pub fn from_parameters(
        blueprint: NetBlueprint,
        weights: Vec<M>,
        biases: Vec<M::Vector>,
    ) -> Result<Network<M>> {
        let transitions = blueprint.transitions();
        if weights.len() != transitions || biases.len() != transitions {
            return Err(Error::ParameterShape(format!(
                "expected {} transitions, got {} weight matrices and {} bias vectors",
                transitions,
                weights.len(),
                biases.len()
            )));
        }

        for (i, (fan_in, fan_out)) in blueprint.transition_shapes().enumerate() {
            let w = &weights[i];
            if w.rows() != fan_out || w.cols() != fan_in {
                return Err(Error::ParameterShape(format!(
                    "weights[{}] is {}×{}, expected {}×{}",
                    i,
                    w.rows(),
                    w.cols(),
                    fan_out,
                    fan_in
                )));
            }
            if biases[i].len() != fan_out {
                return Err(Error::ParameterShape(format!(
                    "biases[{}] has length {}, expected {}",
                    i,
                    biases[i].len(),
                    fan_out
                )));
            }
        }

        Ok(Network { blueprint, weights, biases })
    }

    pub fn blueprint(&self) -> &NetBlueprint {
        &self.blueprint
    }

    pub fn weights(&self) -> &[M] {
        &self.weights
    }

    pub fn biases(&self) -> &[M::Vector] {
        &self.biases
    }

    /// Number of layer transitions, L − 1.
    pub fn transitions(&self) -> usize {
        self.weights.len()
    }

    /// Runs the forward computation and keeps every intermediate vector.
    pub fn forward_pass(&self, input: &[f64]) -> Result<ForwardPass<M::Vector>> {
        check_len("input", self.blueprint.input_size(), input.len())?;

        let mut activations = Vec::with_capacity(self.blueprint.layers());
        let mut weighted_inputs = Vec::with_capacity(self.transitions());
        activations.push(M::Vector::from_slice(input));

        for (w, b) in self.weights.iter().zip(&self.biases) {
            let mut z = w.mul_vec(&activations[activations.len() - 1]);
            z.add_assign(b);
            activations.push(z.map(sigmoid));
            weighted_inputs.push(z);
        }

        Ok(ForwardPass { activations, weighted_inputs })
    }

    /// Output activation for `input`.
    pub fn feed_forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        let pass = self.forward_pass(input)?;
        Ok(pass.output().as_slice().to_vec())
    }

    /// Mean quadratic cost ½‖a − y‖² over `examples`; 0 for an empty set.
    pub fn cost(&self, examples: &[TrainingExample]) -> Result<f64> {
        if examples.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for example in examples {
            self.check_example(example)?;
            let output = self.feed_forward(&example.input)?;
            total += QuadraticCost::loss(&output, &example.target);
        }
        Ok(total / examples.len() as f64)
    }

    /// Verifies that `example` fits the blueprint's input and output sizes.
    pub fn check_example(&self, example: &TrainingExample) -> Result<()> {
        check_len("input", self.blueprint.input_size(), example.input.len())?;
        check_len("target", self.blueprint.output_size(), example.target.len())
    }
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::ShapeMismatch { what, expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;

    fn seeded(sizes: Vec<usize>) -> Network {
        Network::with_rng(sizes, &mut StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn construction_sizes_every_transition() {
        let net = seeded(vec![3, 4, 2]);
        assert_eq!(net.transitions(), 2);
        assert_eq!((net.weights()[0].rows, net.weights()[0].cols), (4, 3));
        assert_eq!(net.biases()[0].len(), 4);
        assert_eq!((net.weights()[1].rows, net.weights()[1].cols), (2, 4));
        assert_eq!(net.biases()[1].len(), 2);
    }

    #[test]
    fn empty_blueprint_fails() {
        assert!(matches!(Network::new(vec![]), Err(Error::EmptyBlueprint)));
    }

    #[test]
    fn initial_weights_are_not_symmetric() {
        let net = seeded(vec![4, 3, 1]);
        let w = &net.weights()[0];
        assert_ne!(w.data[0], w.data[1]);
        assert!(w.data.iter().flatten().all(|x| x.is_finite()));
    }

    #[test]
    fn same_seed_gives_same_parameters() {
        assert_eq!(seeded(vec![2, 5, 3]), seeded(vec![2, 5, 3]));
    }

    #[test]
    fn forward_pass_matches_hand_computation() {
        let bp = NetBlueprint::new(vec![2, 1]).unwrap();
        let net = Network::from_parameters(
            bp,
            vec![Matrix::from_data(vec![vec![1.0, -1.0]])],
            vec![Vector::new(vec![0.5])],
        )
        .unwrap();

        let pass = net.forward_pass(&[2.0, 1.0]).unwrap();
        assert_eq!(pass.weighted_inputs[0].data, vec![1.5]);
        assert_eq!(pass.output().data, vec![sigmoid(1.5)]);
    }

    #[test]
    fn forward_pass_rejects_wrong_input_length() {
        let net = seeded(vec![3, 2]);
        assert!(matches!(
            net.forward_pass(&[1.0, 2.0]),
            Err(Error::ShapeMismatch { what: "input", expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn from_parameters_rejects_bad_shapes() {
        let bp = NetBlueprint::new(vec![2, 3]).unwrap();
        let res = Network::from_parameters(bp, vec![Matrix::zeros(2, 3)], vec![Vector::zeros(3)]);
        assert!(matches!(res, Err(Error::ParameterShape(_))));
    }

    #[test]
    fn cost_checks_target_length() {
        let net = seeded(vec![2, 2]);
        let bad = TrainingExample::new(vec![0.0, 1.0], vec![1.0]);
        assert!(matches!(
            net.cost(&[bad]),
            Err(Error::ShapeMismatch { what: "target", .. })
        ));
    }
}
