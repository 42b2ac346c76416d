use log::debug;

use crate::network::Network;
use crate::stopping::StoppingCondition;
use crate::train::sample::TrainingSample;

/// Halts training once the root-mean-square error over an epoch's tested
/// samples drops to a target value. The accumulated error resets at every
/// epoch boundary, so the mean always describes the epoch in progress.
pub struct RmseTarget {
    target_rmse: f64,
    total_sse: f64,
    sample_count: usize,
}

impl RmseTarget {
    pub fn new(target_rmse: f64) -> RmseTarget {
        RmseTarget {
            target_rmse,
            total_sse: 0.0,
            sample_count: 0,
        }
    }
}

impl StoppingCondition for RmseTarget {
    fn on_training_start(&mut self, samples: &[TrainingSample], _network: &Network) {
        self.total_sse = 0.0;
        self.sample_count = samples.len();
    }

    fn on_sample_tested(&mut self, sample: &TrainingSample, output: &[f64]) {
        self.total_sse += sample.total_sum_squared_error(output);
    }

    fn on_epoch_finished(&mut self, _epoch: usize) {
        self.total_sse = 0.0;
    }

    fn should_stop(&mut self) -> bool {
        if self.sample_count == 0 {
            return false;
        }

        let mse = self.total_sse / self.sample_count as f64;
        let rmse = mse.sqrt();
        debug!("epoch rmse {rmse}");

        rmse <= self.target_rmse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tiny_network;

    fn samples() -> Vec<TrainingSample> {
        vec![TrainingSample::new(vec![1.0, 0.0], vec![0.0, 1.0])]
    }

    // Far from / close to the expectation of the sample above.
    const FAIL_OUTPUT: [f64; 2] = [0.5, 0.5];
    const PASS_OUTPUT: [f64; 2] = [0.0001, 0.9999];

    #[test]
    fn does_not_stop_before_training_starts() {
        let mut condition = RmseTarget::new(0.1);
        assert!(!condition.should_stop());
    }

    #[test]
    fn does_not_stop_above_the_target() {
        let mut condition = RmseTarget::new(0.1);
        let samples = samples();

        condition.on_training_start(&samples, &tiny_network());
        condition.on_sample_tested(&samples[0], &FAIL_OUTPUT);
        assert!(!condition.should_stop());
    }

    #[test]
    fn stops_once_the_target_is_reached() {
        let mut condition = RmseTarget::new(0.1);
        let samples = samples();

        condition.on_training_start(&samples, &tiny_network());
        condition.on_sample_tested(&samples[0], &PASS_OUTPUT);
        assert!(condition.should_stop());
    }

    #[test]
    fn accumulator_resets_every_epoch() {
        let mut condition = RmseTarget::new(0.1);
        let samples = samples();

        condition.on_training_start(&samples, &tiny_network());
        condition.on_sample_tested(&samples[0], &FAIL_OUTPUT);
        assert!(!condition.should_stop());
        condition.on_epoch_finished(1);

        // A clean epoch with a good output stops, untainted by the last one.
        condition.on_sample_tested(&samples[0], &PASS_OUTPUT);
        assert!(condition.should_stop());
    }
}
