use log::debug;

use crate::network::Network;
use crate::stopping::StoppingCondition;
use crate::train::sample::TrainingSample;

/// Halts training once the mean cross-entropy error over an epoch's tested
/// samples drops to a target value. The accumulated error resets at every
/// epoch boundary.
pub struct CeeTarget {
    target_cee: f64,
    total_cee: f64,
    sample_count: usize,
}

impl CeeTarget {
    pub fn new(target_cee: f64) -> CeeTarget {
        CeeTarget {
            target_cee,
            total_cee: 0.0,
            sample_count: 0,
        }
    }
}

impl StoppingCondition for CeeTarget {
    fn on_training_start(&mut self, samples: &[TrainingSample], _network: &Network) {
        self.total_cee = 0.0;
        self.sample_count = samples.len();
    }

    fn on_sample_tested(&mut self, sample: &TrainingSample, output: &[f64]) {
        self.total_cee += sample.total_cross_entropy_error(output);
    }

    fn on_epoch_finished(&mut self, _epoch: usize) {
        self.total_cee = 0.0;
    }

    fn should_stop(&mut self) -> bool {
        if self.sample_count == 0 {
            return false;
        }

        let mean_cee = self.total_cee / self.sample_count as f64;
        debug!("epoch mean cee {mean_cee}");

        mean_cee <= self.target_cee
    }
}
