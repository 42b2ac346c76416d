use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::debug;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::network::Network;
use crate::optim::TrainingRule;
use crate::stopping::StoppingCondition;
use crate::train::listener::TrainingProgressListener;
use crate::train::sample::TrainingSample;
use crate::train::statistics::TrainingStatistics;

/// Requests that a running training loop stop. Handles are cheap to clone
/// and can be triggered from a progress listener or another thread; the
/// trainer polls the flag cooperatively, once per synapse in the backward
/// pass, so training halts no faster than one synapse's weight update.
#[derive(Clone)]
pub struct AbortHandle {
    flag: Arc<AtomicBool>,
}

impl AbortHandle {
    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Drives epoch-based online training of one network with a pluggable
/// per-synapse training rule. The trainer borrows the network for as long as
/// it lives, so it can never outlast the layers and synapses it touches.
pub struct OnlineTrainer<'net, R: TrainingRule> {
    network: &'net mut Network,
    rule: R,
    abort: Arc<AtomicBool>,
}

impl<'net, R: TrainingRule> OnlineTrainer<'net, R> {
    pub fn new(network: &'net mut Network, rule: R) -> OnlineTrainer<'net, R> {
        OnlineTrainer {
            network,
            rule,
            abort: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// A handle which aborts this trainer's current (or next) run.
    pub fn abort_handle(&self) -> AbortHandle {
        AbortHandle {
            flag: Arc::clone(&self.abort),
        }
    }

    /// Aborts any currently running training.
    pub fn abort_training(&self) {
        self.abort.store(true, Ordering::Relaxed);
    }

    /// Trains the network on `samples` until the stopping condition is
    /// fulfilled or the run is aborted. Every epoch shuffles the samples into
    /// a fresh order, evaluates each one and reports it to the stopping
    /// condition, then — if the condition does not stop the run — trains on
    /// each sample by seeding the output layer's error gradients and updating
    /// every synapse in reverse order. The listener, when given, is notified
    /// of start, per-sample, per-epoch and completion events.
    ///
    /// Abort is a normal early-termination path, not an error: the returned
    /// statistics (also passed to `on_training_complete`) record it in
    /// [`TrainingStatistics::aborted`].
    pub fn train_online(
        &mut self,
        samples: &mut [TrainingSample],
        condition: &mut dyn StoppingCondition,
        mut listener: Option<&mut dyn TrainingProgressListener>,
    ) -> Result<TrainingStatistics> {
        let start = Instant::now();

        if let Some(listener) = listener.as_mut() {
            listener.on_training_start();
        }
        condition.on_training_start(samples, self.network);

        let mut epoch = 0;
        let mut rng = rand::thread_rng();

        while !self.abort.load(Ordering::Relaxed) {
            epoch += 1;
            samples.shuffle(&mut rng);

            for sample in samples.iter() {
                let output = self.network.process_input(sample.input())?;
                condition.on_sample_tested(sample, &output);
            }

            if condition.should_stop() {
                break;
            }

            for sample in samples.iter() {
                let output = self.network.process_input(sample.input())?;
                let gradients = self.rule.output_error_gradients(&output, sample)?;
                self.network.output_layer_mut().set_error_gradients(gradients)?;

                self.train_synapses()?;

                if let Some(listener) = listener.as_mut() {
                    listener.on_sample_trained(sample);
                }
            }

            debug!("epoch {epoch} trained");

            if let Some(listener) = listener.as_mut() {
                listener.on_epoch_complete(epoch);
            }
            condition.on_epoch_finished(epoch);
        }

        let aborted = self.abort.load(Ordering::Relaxed);
        let statistics = TrainingStatistics::new(epoch, start.elapsed(), aborted);

        if let Some(listener) = listener.as_mut() {
            listener.on_training_complete(&statistics);
        }

        self.abort.store(false, Ordering::Relaxed);
        Ok(statistics)
    }

    /// Trains each synapse for the current sample, starting at the final
    /// synapse and moving backwards. The abort flag is checked before every
    /// synapse and cleared on the way in and out, making abort a one-shot
    /// signal rather than a latched state.
    fn train_synapses(&mut self) -> Result<()> {
        self.abort.store(false, Ordering::Relaxed);

        for index in (0..self.network.synapses().len()).rev() {
            if self.abort.load(Ordering::Relaxed) {
                break;
            }

            let (from, to, weights) = self.network.synapse_parts(index);
            self.rule.train_synapse(from, to, weights)?;
        }

        self.abort.store(false, Ordering::Relaxed);
        Ok(())
    }
}
