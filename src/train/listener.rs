use crate::train::sample::TrainingSample;
use crate::train::statistics::TrainingStatistics;

/// Callbacks for events which occur while a network trains. Every method has
/// a no-op default, so implementations only override what they observe.
pub trait TrainingProgressListener {
    /// Called once, before any training has been performed.
    fn on_training_start(&mut self) {}

    /// Called when an epoch completes, with the number of epochs finished so
    /// far.
    fn on_epoch_complete(&mut self, epoch: usize) {
        let _ = epoch;
    }

    /// Called after the network has been trained on a single sample.
    fn on_sample_trained(&mut self, sample: &TrainingSample) {
        let _ = sample;
    }

    /// Called when training ends, whether the stopping condition was
    /// fulfilled or the run was aborted.
    fn on_training_complete(&mut self, statistics: &TrainingStatistics) {
        let _ = statistics;
    }
}
