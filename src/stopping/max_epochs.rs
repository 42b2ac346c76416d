use crate::network::Network;
use crate::stopping::StoppingCondition;
use crate::train::sample::TrainingSample;

/// Halts training once a configured number of epochs have been run: with the
/// current epoch counted, the stop fires when `finished + 1` reaches the
/// maximum.
pub struct MaxEpochs {
    max_epochs: usize,
    finished_epochs: usize,
}

impl MaxEpochs {
    pub fn new(max_epochs: usize) -> MaxEpochs {
        MaxEpochs {
            max_epochs,
            finished_epochs: 0,
        }
    }
}

impl StoppingCondition for MaxEpochs {
    fn on_training_start(&mut self, _samples: &[TrainingSample], _network: &Network) {
        self.finished_epochs = 0;
    }

    fn on_sample_tested(&mut self, _sample: &TrainingSample, _output: &[f64]) {}

    fn on_epoch_finished(&mut self, _epoch: usize) {
        self.finished_epochs += 1;
    }

    fn should_stop(&mut self) -> bool {
        self.finished_epochs + 1 >= self.max_epochs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<TrainingSample> {
        vec![
            TrainingSample::new(vec![0.0, 0.0], vec![0.0, 0.0]),
            TrainingSample::new(vec![0.0, 1.0], vec![0.0, 1.0]),
        ]
    }

    fn run_epoch(condition: &mut MaxEpochs, samples: &[TrainingSample], epoch: usize) {
        for sample in samples {
            condition.on_sample_tested(sample, &[0.0, 0.0]);
        }
        condition.on_epoch_finished(epoch);
    }

    #[test]
    fn does_not_stop_before_the_required_epochs() {
        let mut condition = MaxEpochs::new(3);
        let samples = samples();

        condition.on_training_start(&samples, &crate::test_support::tiny_network());
        assert!(!condition.should_stop());

        run_epoch(&mut condition, &samples, 1);
        assert!(!condition.should_stop());
    }

    #[test]
    fn stops_during_the_final_epoch_and_after() {
        let mut condition = MaxEpochs::new(2);
        let samples = samples();

        condition.on_training_start(&samples, &crate::test_support::tiny_network());

        run_epoch(&mut condition, &samples, 1);
        assert!(condition.should_stop());

        run_epoch(&mut condition, &samples, 2);
        assert!(condition.should_stop());
    }

    #[test]
    fn restarting_training_resets_the_count() {
        let mut condition = MaxEpochs::new(2);
        let samples = samples();

        condition.on_training_start(&samples, &crate::test_support::tiny_network());
        run_epoch(&mut condition, &samples, 1);
        assert!(condition.should_stop());

        condition.on_training_start(&samples, &crate::test_support::tiny_network());
        assert!(!condition.should_stop());
    }
}
