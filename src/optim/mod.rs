pub mod gradient_descent;

pub use gradient_descent::GradientDescent;

use crate::error::{Error, Result};
use crate::layers::Layer;
use crate::math::Weights;
use crate::train::sample::TrainingSample;

/// The per-synapse update algorithm the online trainer delegates to. The
/// trainer walks synapses output-first and hands each rule the from-layer
/// (for gradient write-back), the to-layer (whose gradients are already
/// known) and the weight store between them.
pub trait TrainingRule {
    /// The error gradients to seed the output layer with for one sample,
    /// given the output the network actually produced. A rule which never
    /// drives the online loop may leave the default, which declines the
    /// operation.
    fn output_error_gradients(
        &self,
        actual_output: &[f64],
        sample: &TrainingSample,
    ) -> Result<Vec<f64>> {
        let _ = (actual_output, sample);
        Err(Error::Unsupported("output_error_gradients"))
    }

    /// Updates one synapse's weights from the to-layer's error gradients and
    /// back-propagates the error into the from-layer.
    fn train_synapse(&mut self, from: &mut Layer, to: &Layer, weights: &mut Weights)
        -> Result<()>;
}
