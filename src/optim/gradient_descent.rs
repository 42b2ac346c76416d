use crate::error::{Error, Result};
use crate::layers::Layer;
use crate::math::Weights;
use crate::optim::TrainingRule;
use crate::train::sample::TrainingSample;

/// Online gradient descent: each weight moves by the learning rate times the
/// to-neuron's error gradient times the from-neuron's output, with the bias
/// treated as a from-neuron of constant output 1.
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }

    /// The learning rate may be varied between runs, but stays constant over
    /// an epoch.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl TrainingRule for GradientDescent {
    fn output_error_gradients(
        &self,
        actual_output: &[f64],
        sample: &TrainingSample,
    ) -> Result<Vec<f64>> {
        // The unmultiplied difference: the loss-gradient convention used
        // throughout; the output layer's own derivative is not applied.
        Ok(sample.difference(actual_output))
    }

    fn train_synapse(
        &mut self,
        from: &mut Layer,
        to: &Layer,
        weights: &mut Weights,
    ) -> Result<()> {
        let from_size = weights.from_size();

        let last_input = from
            .last_output()
            .ok_or(Error::MissingLayerState("output"))?
            .to_vec();
        let delta_k = to
            .error_gradients()
            .ok_or(Error::MissingLayerState("error gradients"))?
            .to_vec();

        let learning_rate = self.learning_rate;

        for i in 0..=from_size {
            // i == from_size addresses the bias neuron, which always
            // outputs 1.
            let z_i = if i != from_size { last_input[i] } else { 1.0 };

            for (j, delta) in delta_k.iter().enumerate() {
                weights.adjust_weight(i, j, learning_rate * delta * z_i)?;
            }
        }

        // Now set the error for the previous layer, using the freshly
        // adjusted weights.
        let derivatives = from
            .activation_derivative()
            .ok_or(Error::MissingLayerState("output"))?;

        for i in 0..from_size {
            let mut delta_j = 0.0;

            for (j, delta) in delta_k.iter().enumerate() {
                delta_j += derivatives[i] * delta * weights.weight(i, j)?;
            }

            from.set_error_gradient(i, delta_j);
        }

        Ok(())
    }
}
