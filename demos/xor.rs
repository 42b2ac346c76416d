use synapse_nn::{
    Activation, AbortHandle, GradientDescent, NetworkBuilder, OnlineTrainer, RmseTarget,
    TrainingProgressListener, TrainingSample, TrainingStatistics,
};

/// Aborts a run that falls into a local minimum instead of converging, and
/// reports progress on the way.
struct XorProgress {
    handle: AbortHandle,
    max_epochs: usize,
}

impl TrainingProgressListener for XorProgress {
    fn on_training_start(&mut self) {
        println!("Beginning training");
    }

    fn on_epoch_complete(&mut self, epoch: usize) {
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}");
        }

        if epoch >= self.max_epochs {
            println!("Aborted: {epoch} epochs reached, caught in a local minimum");
            self.handle.abort();
        }
    }

    fn on_training_complete(&mut self, statistics: &TrainingStatistics) {
        if !statistics.aborted() {
            println!("Training complete");
            println!("Time taken: {:.3}s", statistics.time_taken().as_secs_f64());
            println!("Epochs: {}", statistics.epochs());
        }
    }
}

fn xor_training_set() -> Vec<TrainingSample> {
    vec![
        TrainingSample::new(vec![0.0, 0.0], vec![0.0]),
        TrainingSample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingSample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingSample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

fn main() -> synapse_nn::Result<()> {
    env_logger::init();

    let mut network = NetworkBuilder::new()
        .layer(2, Activation::Identity)
        .layer(2, Activation::Sigmoid)
        .layer(1, Activation::Sigmoid)
        .randomisation_amplitude(1.0)
        .build()?;

    let mut samples = xor_training_set();
    let mut condition = RmseTarget::new(0.05);

    let mut trainer = OnlineTrainer::new(&mut network, GradientDescent::new(0.12));
    let mut progress = XorProgress {
        handle: trainer.abort_handle(),
        max_epochs: 50_000,
    };

    trainer.train_online(&mut samples, &mut condition, Some(&mut progress))?;

    for sample in &samples {
        let output = network.process_input(sample.input())?;
        println!(
            "Input: {:?} -> Output: {:.4}",
            sample.input(),
            output[0]
        );
    }

    Ok(())
}
