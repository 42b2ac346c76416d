use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::layers::Layer;
use crate::math::Weights;

/// The weighted connection between two adjacent layers. For every neuron in
/// the to-layer it turns the from-layer's output into a net input: the
/// weighted sum of the outputs plus that neuron's bias.
///
/// A synapse records the layer sizes it was built against; the network is
/// responsible for invoking it between the right pair of layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synapse {
    from_size: usize,
    to_size: usize,
    weights: Weights,
}

impl Synapse {
    /// A synapse between `from` and `to` with all weights and biases zero.
    pub fn new(from: &Layer, to: &Layer) -> Synapse {
        Synapse {
            from_size: from.size(),
            to_size: to.size(),
            weights: Weights::zeros(from.size(), to.size()),
        }
    }

    /// A synapse carrying the given weights, for serializer round-trips and
    /// hand-authored networks. The weight dimensions must agree with the
    /// layer sizes.
    pub fn with_weights(from: &Layer, to: &Layer, weights: Weights) -> Result<Synapse> {
        if weights.from_size() != from.size() {
            return Err(Error::ShapeMismatch {
                context: "synapse weights from-size",
                expected: from.size(),
                actual: weights.from_size(),
            });
        }

        if weights.to_size() != to.size() {
            return Err(Error::ShapeMismatch {
                context: "synapse weights to-size",
                expected: to.size(),
                actual: weights.to_size(),
            });
        }

        Ok(Synapse {
            from_size: from.size(),
            to_size: to.size(),
            weights,
        })
    }

    pub fn from_size(&self) -> usize {
        self.from_size
    }

    pub fn to_size(&self) -> usize {
        self.to_size
    }

    /// The net input to each neuron in the to-layer when the from-layer
    /// produced `output`: `Σ_j output[j] · weight(j, k) + bias(k)`.
    pub fn net_inputs(&self, output: &[f64]) -> Vec<f64> {
        let rows = self.weights.rows();
        let mut net_inputs = vec![0.0; self.to_size];

        for (to, net_input) in net_inputs.iter_mut().enumerate() {
            // The bias row sits after the weight rows.
            let mut sum = rows[self.from_size][to];

            for from in 0..self.from_size {
                sum += output[from] * rows[from][to];
            }

            *net_input = sum;
        }

        net_inputs
    }

    /// Sets each weight and bias to a random value inside
    /// `[-|amplitude|, |amplitude|)`.
    pub fn randomise_weights(&mut self, amplitude: f64) {
        self.weights.randomize(amplitude);
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut Weights {
        &mut self.weights
    }
}
