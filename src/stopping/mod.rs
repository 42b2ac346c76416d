pub mod cee;
pub mod max_epochs;
pub mod milestone;
pub mod rmse;

pub use cee::CeeTarget;
pub use max_epochs::MaxEpochs;
pub use milestone::CeeMilestones;
pub use rmse::RmseTarget;

use crate::network::Network;
use crate::train::sample::TrainingSample;

/// Decides when training halts. Over the course of a run the trainer feeds
/// every implementation the callbacks below: once at the start, once per
/// tested sample, and once at the end of every epoch. `should_stop` is
/// queried once per epoch after all samples have been tested, but may be
/// called at any time; it reflects what has accumulated since the last
/// `on_epoch_finished`, because implementations reset their accumulators
/// there.
pub trait StoppingCondition {
    /// Called before any training has begun.
    fn on_training_start(&mut self, samples: &[TrainingSample], network: &Network);

    /// Called immediately after a sample is run through the network.
    fn on_sample_tested(&mut self, sample: &TrainingSample, output: &[f64]);

    /// Called at the very end of an epoch, with the number of epochs
    /// completed so far, including the one just ending.
    fn on_epoch_finished(&mut self, epoch: usize);

    /// `true` if training should now halt.
    fn should_stop(&mut self) -> bool;
}
