use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::layers::Layer;
use crate::math::Weights;
use crate::network::synapse::Synapse;

/// An ordered chain of layers joined by synapses, forming a feed-forward
/// network. Layer `i` is synapse `i`'s from-layer and layer `i + 1` its
/// to-layer; the first layer receives raw inputs and the last produces the
/// network's output.
///
/// The network drives forward propagation itself, alternating between a
/// synapse's net-input computation and the next layer's forward pass, so the
/// whole pass happens in one explicit, acyclic traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    layers: Vec<Layer>,
    synapses: Vec<Synapse>,
}

impl Network {
    /// Assembles a network from its layers and synapses. The count
    /// relationship (`layers.len() == synapses.len() + 1`) is checked; the
    /// shape chain itself — each synapse's weights agreeing with the layers
    /// either side of it — is the builder's responsibility and is trusted.
    pub fn new(layers: Vec<Layer>, synapses: Vec<Synapse>) -> Result<Network> {
        if synapses.is_empty() {
            return Err(Error::EmptyNetwork);
        }

        if layers.len() != synapses.len() + 1 {
            return Err(Error::ShapeMismatch {
                context: "network layer chain",
                expected: synapses.len() + 1,
                actual: layers.len(),
            });
        }

        Ok(Network { layers, synapses })
    }

    /// Feeds `input` through the network and returns the output layer's
    /// output. The input layer processes the raw values directly (no
    /// weighting); every later layer receives its net inputs from the
    /// synapse before it.
    pub fn process_input(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let mut output = self.layers[0].process_input(input)?;

        for (index, synapse) in self.synapses.iter().enumerate() {
            let net_inputs = synapse.net_inputs(&output);
            output = self.layers[index + 1].process_input(&net_inputs)?;
        }

        Ok(output)
    }

    /// The layer into which inputs are fed.
    pub fn input_layer(&self) -> &Layer {
        &self.layers[0]
    }

    /// The final layer, out of which the network's result is produced.
    pub fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    pub(crate) fn output_layer_mut(&mut self) -> &mut Layer {
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// All layers in order, input layer first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn synapse(&self, index: usize) -> Option<&Synapse> {
        self.synapses.get(index)
    }

    pub fn synapse_mut(&mut self, index: usize) -> Option<&mut Synapse> {
        self.synapses.get_mut(index)
    }

    /// All synapses in order, the one leaving the input layer first.
    pub fn synapses(&self) -> &[Synapse] {
        &self.synapses
    }

    /// Re-randomizes every synapse's weights and biases inside
    /// `[-|amplitude|, |amplitude|)`.
    pub fn randomise_weights(&mut self, amplitude: f64) {
        for synapse in &mut self.synapses {
            synapse.randomise_weights(amplitude);
        }
    }

    /// Splits out the parts a training rule needs for synapse `index`: the
    /// from-layer (mutably, for gradient write-back), the to-layer and the
    /// weight store.
    pub(crate) fn synapse_parts(&mut self, index: usize) -> (&mut Layer, &Layer, &mut Weights) {
        let (from_half, to_half) = self.layers.split_at_mut(index + 1);
        (
            &mut from_half[index],
            &to_half[0],
            self.synapses[index].weights_mut(),
        )
    }

    /// Serializes the network topology and weights to a pretty-printed JSON
    /// file. Runtime state (last outputs, gradients) is not persisted.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
