use serde::{Serialize, Deserialize};

use crate::activation::Activation;
use crate::error::{Error, Result};

/// A layer of neurons sharing one activation function. A forward pass takes
/// the net input of every neuron, applies the activation and stores the
/// result; backpropagation writes per-neuron error gradients into the same
/// layer. The network drives propagation between layers explicitly, so a
/// layer only ever computes and records its own state.
///
/// `last_output` and `error_gradients`, once present, always have length
/// `size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    size: usize,
    activation: Activation,
    #[serde(skip)]
    last_output: Option<Vec<f64>>,
    #[serde(skip)]
    error_gradients: Option<Vec<f64>>,
}

impl Layer {
    pub fn new(size: usize, activation: Activation) -> Layer {
        Layer {
            size,
            activation,
            last_output: None,
            error_gradients: None,
        }
    }

    /// The number of neurons in the layer.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Runs one forward pass: applies the activation to the given net inputs,
    /// stores the result as the layer's last output and returns it.
    pub fn process_input(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.size {
            return Err(Error::ShapeMismatch {
                context: "layer input",
                expected: self.size,
                actual: input.len(),
            });
        }

        let output = self.activation.activate(input);
        self.last_output = Some(output.clone());

        Ok(output)
    }

    /// The output produced by the most recent forward pass, if any.
    pub fn last_output(&self) -> Option<&[f64]> {
        self.last_output.as_deref()
    }

    /// Replaces the error-gradient vector wholesale.
    pub fn set_error_gradients(&mut self, gradients: Vec<f64>) -> Result<()> {
        if gradients.len() != self.size {
            return Err(Error::ShapeMismatch {
                context: "layer error gradients",
                expected: self.size,
                actual: gradients.len(),
            });
        }

        self.error_gradients = Some(gradients);
        Ok(())
    }

    /// Sets a single neuron's error gradient, allocating an all-zero gradient
    /// vector if none exists yet. An out-of-range index is ignored rather
    /// than rejected; networks trained against that behaviour depend on it.
    pub fn set_error_gradient(&mut self, index: usize, gradient: f64) {
        let gradients = self
            .error_gradients
            .get_or_insert_with(|| vec![0.0; self.size]);

        if index < self.size {
            gradients[index] = gradient;
        }
    }

    pub fn error_gradients(&self) -> Option<&[f64]> {
        self.error_gradients.as_deref()
    }

    /// The activation derivative evaluated at the most recent output, or
    /// `None` if no forward pass has happened yet.
    pub fn activation_derivative(&self) -> Option<Vec<f64>> {
        self.last_output
            .as_deref()
            .map(|output| self.activation.derivative(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forward_pass_stores_and_returns_output() {
        let mut layer = Layer::new(2, Activation::Sigmoid);
        let output = layer.process_input(&[0.0, 0.0]).unwrap();

        assert_eq!(output, vec![0.5, 0.5]);
        assert_eq!(layer.last_output().unwrap(), &[0.5, 0.5]);
    }

    #[test]
    fn forward_pass_rejects_wrong_length() {
        let mut layer = Layer::new(2, Activation::Identity);
        assert!(matches!(
            layer.process_input(&[1.0]),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(layer.last_output().is_none());
    }

    #[test]
    fn forward_pass_leaves_gradients_untouched() {
        let mut layer = Layer::new(2, Activation::Identity);
        layer.set_error_gradients(vec![0.1, 0.2]).unwrap();
        layer.process_input(&[1.0, 2.0]).unwrap();
        assert_eq!(layer.error_gradients().unwrap(), &[0.1, 0.2]);
    }

    #[test]
    fn zero_sized_layer_accepts_empty_input() {
        let mut layer = Layer::new(0, Activation::Identity);
        assert_eq!(layer.process_input(&[]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn wholesale_gradient_replacement_is_shape_checked() {
        let mut layer = Layer::new(2, Activation::Identity);
        assert!(matches!(
            layer.set_error_gradients(vec![1.0, 2.0, 3.0]),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(layer.error_gradients().is_none());
    }

    #[test]
    fn single_gradient_write_allocates_lazily() {
        let mut layer = Layer::new(3, Activation::Identity);
        assert!(layer.error_gradients().is_none());

        layer.set_error_gradient(1, 0.4);
        assert_eq!(layer.error_gradients().unwrap(), &[0.0, 0.4, 0.0]);
    }

    #[test]
    fn out_of_range_single_gradient_write_is_ignored() {
        let mut layer = Layer::new(2, Activation::Identity);
        layer.set_error_gradient(5, 0.9);
        assert_eq!(layer.error_gradients().unwrap(), &[0.0, 0.0]);
    }

    #[test]
    fn derivative_tracks_last_output() {
        let mut layer = Layer::new(1, Activation::Sigmoid);
        assert!(layer.activation_derivative().is_none());

        layer.process_input(&[0.0]).unwrap();
        let derivative = layer.activation_derivative().unwrap();
        assert_relative_eq!(derivative[0], 0.25);
    }
}
