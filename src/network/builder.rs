use crate::activation::Activation;
use crate::error::{Error, Result};
use crate::layers::Layer;
use crate::math::Weights;
use crate::network::network::Network;
use crate::network::synapse::Synapse;

/// Assembles a valid layer/synapse chain so the network itself never has to
/// re-validate one. Layers are pushed in order; each adjacent pair becomes a
/// synapse. A connection either carries hand-authored weights (supplied via
/// [`NetworkBuilder::weights`] straight after its to-layer) or is randomized
/// with the configured amplitude at build time.
pub struct NetworkBuilder {
    layers: Vec<Layer>,
    weights: Vec<Option<Weights>>,
    amplitude: f64,
}

impl NetworkBuilder {
    pub fn new() -> NetworkBuilder {
        NetworkBuilder {
            layers: Vec::new(),
            weights: Vec::new(),
            amplitude: 0.2,
        }
    }

    /// A single-synapse perceptron: identity inputs feeding a sigmoid or
    /// step output layer.
    pub fn perceptron(inputs: usize, outputs: usize, sigmoid_output: bool) -> NetworkBuilder {
        let output_activation = if sigmoid_output {
            Activation::Sigmoid
        } else {
            Activation::Step
        };

        NetworkBuilder::new()
            .layer(inputs, Activation::Identity)
            .layer(outputs, output_activation)
    }

    /// A multi-class classifier: step inputs, sigmoid hidden layers and a
    /// softmax output distribution.
    pub fn classifier(inputs: usize, hidden: &[usize], outputs: usize) -> NetworkBuilder {
        let mut builder = NetworkBuilder::new().layer(inputs, Activation::Step);

        for size in hidden {
            builder = builder.layer(*size, Activation::Sigmoid);
        }

        builder.layer(outputs, Activation::Softmax)
    }

    /// Appends a layer to the chain.
    pub fn layer(mut self, size: usize, activation: Activation) -> NetworkBuilder {
        self.layers.push(Layer::new(size, activation));

        if self.layers.len() > 1 {
            self.weights.push(None);
        }

        self
    }

    /// Supplies hand-authored weights for the connection into the most
    /// recently added layer. Fails if no connection exists yet or the
    /// dimensions disagree with the two layers around it.
    pub fn weights(mut self, weights: Weights) -> Result<NetworkBuilder> {
        if self.layers.len() < 2 {
            return Err(Error::EmptyNetwork);
        }

        let from = &self.layers[self.layers.len() - 2];
        if weights.from_size() != from.size() {
            return Err(Error::ShapeMismatch {
                context: "builder weights from-size",
                expected: from.size(),
                actual: weights.from_size(),
            });
        }

        let to = &self.layers[self.layers.len() - 1];
        if weights.to_size() != to.size() {
            return Err(Error::ShapeMismatch {
                context: "builder weights to-size",
                expected: to.size(),
                actual: weights.to_size(),
            });
        }

        let last = self.weights.len() - 1;
        self.weights[last] = Some(weights);
        Ok(self)
    }

    /// The randomization amplitude applied to connections without
    /// hand-authored weights.
    pub fn randomisation_amplitude(mut self, amplitude: f64) -> NetworkBuilder {
        self.amplitude = amplitude;
        self
    }

    pub fn build(self) -> Result<Network> {
        if self.layers.len() < 2 {
            return Err(Error::EmptyNetwork);
        }

        let mut synapses = Vec::with_capacity(self.weights.len());

        for (index, weights) in self.weights.into_iter().enumerate() {
            let from = &self.layers[index];
            let to = &self.layers[index + 1];

            let synapse = match weights {
                Some(weights) => Synapse::with_weights(from, to, weights)?,
                None => {
                    let mut synapse = Synapse::new(from, to);
                    synapse.randomise_weights(self.amplitude);
                    synapse
                }
            };

            synapses.push(synapse);
        }

        Network::new(self.layers, synapses)
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        NetworkBuilder::new()
    }
}
