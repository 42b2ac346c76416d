use synapse_nn::{
    Activation, AbortHandle, GradientDescent, NetworkBuilder, OnlineTrainer, RmseTarget,
    TrainingProgressListener, TrainingSample,
};

fn xor_samples() -> Vec<TrainingSample> {
    vec![
        TrainingSample::new(vec![0.0, 0.0], vec![0.0]),
        TrainingSample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingSample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingSample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

/// Aborts a run that exceeds an epoch budget, so an initialisation caught in
/// a local minimum fails over to a retry instead of spinning forever.
struct EpochGuard {
    handle: AbortHandle,
    max_epochs: usize,
}

impl TrainingProgressListener for EpochGuard {
    fn on_epoch_complete(&mut self, epoch: usize) {
        if epoch >= self.max_epochs {
            self.handle.abort();
        }
    }
}

#[test]
fn learns_xor_within_tolerance() {
    // The odd random initialisation lands in a local minimum, so allow a few
    // fresh-weight retries; convergence on any attempt passes the test.
    for _attempt in 0..5 {
        let mut network = NetworkBuilder::new()
            .layer(2, Activation::Identity)
            .layer(2, Activation::Sigmoid)
            .layer(1, Activation::Sigmoid)
            .randomisation_amplitude(1.0)
            .build()
            .unwrap();

        let mut samples = xor_samples();
        let mut condition = RmseTarget::new(0.05);

        let mut trainer = OnlineTrainer::new(&mut network, GradientDescent::new(0.12));
        let mut guard = EpochGuard {
            handle: trainer.abort_handle(),
            max_epochs: 50_000,
        };

        let statistics = trainer
            .train_online(&mut samples, &mut condition, Some(&mut guard))
            .unwrap();

        if statistics.aborted() {
            continue;
        }

        assert!(statistics.epochs() > 0);

        for sample in &xor_samples() {
            let output = network.process_input(sample.input()).unwrap();
            let difference = (sample.expected_output()[0] - output[0]).abs();

            assert!(
                difference < 0.15,
                "input {:?} produced {:.4}, expected {:.1}",
                sample.input(),
                output[0],
                sample.expected_output()[0]
            );
        }

        return;
    }

    panic!("failed to learn XOR in 5 attempts");
}
