use log::debug;

use crate::network::Network;
use crate::stopping::StoppingCondition;
use crate::train::sample::TrainingSample;

/// A cross-entropy stopping condition which also reports when notable mean
/// CEE values are reached for the first time, so a caller can checkpoint a
/// model at known quality levels during a long run. Milestones must be
/// supplied in descending order; each fires at most once, the first time the
/// epoch mean drops to or below it. Training halts when the mean reaches the
/// target value.
pub struct CeeMilestones<F: FnMut(f64)> {
    target_cee: f64,
    milestones: Vec<f64>,
    smallest_cee_so_far: f64,
    total_cee: f64,
    sample_count: usize,
    on_milestone: F,
}

impl<F: FnMut(f64)> CeeMilestones<F> {
    pub fn new(milestones: Vec<f64>, target_cee: f64, on_milestone: F) -> CeeMilestones<F> {
        CeeMilestones {
            target_cee,
            milestones,
            smallest_cee_so_far: f64::MAX,
            total_cee: 0.0,
            sample_count: 0,
            on_milestone,
        }
    }

    fn check_milestones_reached(&mut self, mean_cee: f64) {
        for index in 0..self.milestones.len() {
            let milestone = self.milestones[index];

            if mean_cee <= milestone && self.smallest_cee_so_far > milestone {
                debug!("mean cee milestone {milestone} reached");
                (self.on_milestone)(milestone);
            } else if mean_cee > milestone {
                // The list is descending, so nothing further can match.
                break;
            }
        }

        if mean_cee < self.smallest_cee_so_far {
            self.smallest_cee_so_far = mean_cee;
        }
    }
}

impl<F: FnMut(f64)> StoppingCondition for CeeMilestones<F> {
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
        self.check_milestones_reached(mean_cee);

        mean_cee <= self.target_cee
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tiny_network;
    use std::cell::RefCell;

    fn sample() -> TrainingSample {
        TrainingSample::new(vec![1.0], vec![1.0])
    }

    // Mean CEE for a run of `sample()` equals -ln(actual); pick actuals to
    // land the mean where each scenario needs it.
    fn epoch(condition: &mut CeeMilestones<impl FnMut(f64)>, actual: f64, epoch_number: usize) -> bool {
        condition.on_sample_tested(&sample(), &[actual]);
        let stop = condition.should_stop();
        condition.on_epoch_finished(epoch_number);
        stop
    }

    #[test]
    fn fires_each_milestone_once_in_descending_order() {
        let reached = RefCell::new(Vec::new());
        let samples = vec![sample()];

        let mut condition = CeeMilestones::new(vec![1.0, 0.5], 0.01, |milestone| {
            reached.borrow_mut().push(milestone);
        });
        condition.on_training_start(&samples, &tiny_network());

        // Mean ≈ 1.6: above every milestone.
        assert!(!epoch(&mut condition, 0.2, 1));
        assert_eq!(*reached.borrow(), Vec::<f64>::new());

        // Mean ≈ 0.69: crosses 1.0 only.
        assert!(!epoch(&mut condition, 0.5, 2));
        assert_eq!(*reached.borrow(), vec![1.0]);

        // Mean ≈ 0.11: crosses 0.5; the 1.0 milestone does not refire.
        assert!(!epoch(&mut condition, 0.9, 3));
        assert_eq!(*reached.borrow(), vec![1.0, 0.5]);

        // A regression back above 0.5 fires nothing again.
        assert!(!epoch(&mut condition, 0.5, 4));
        assert_eq!(*reached.borrow(), vec![1.0, 0.5]);
    }

    #[test]
    fn stops_at_the_target() {
        let samples = vec![sample()];
        let mut condition = CeeMilestones::new(vec![], 0.01, |_| {});
        condition.on_training_start(&samples, &tiny_network());

        assert!(!epoch(&mut condition, 0.5, 1));
        // -ln(0.9999) ≈ 0.0001 <= 0.01
        assert!(epoch(&mut condition, 0.9999, 2));
    }

    #[test]
    fn a_single_epoch_can_cross_several_milestones() {
        let reached = RefCell::new(Vec::new());
        let samples = vec![sample()];

        let mut condition = CeeMilestones::new(vec![2.0, 1.0, 0.5], 0.01, |milestone| {
            reached.borrow_mut().push(milestone);
        });
        condition.on_training_start(&samples, &tiny_network());

        // Mean ≈ 0.22 crosses all three milestones at once.
        assert!(!epoch(&mut condition, 0.8, 1));
        assert_eq!(*reached.borrow(), vec![2.0, 1.0, 0.5]);
    }
}
