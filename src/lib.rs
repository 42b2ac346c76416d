pub mod activation;
pub mod error;
pub mod layers;
pub mod math;
pub mod network;
pub mod optim;
pub mod stopping;
pub mod train;

// Convenience re-exports
pub use activation::Activation;
pub use error::{Error, Result};
pub use layers::Layer;
pub use math::Weights;
pub use network::{Network, NetworkBuilder, Synapse};
pub use optim::{GradientDescent, TrainingRule};
pub use stopping::{CeeMilestones, CeeTarget, MaxEpochs, RmseTarget, StoppingCondition};
pub use train::{
    AbortHandle, OnlineTrainer, TrainingProgressListener, TrainingSample, TrainingStatistics,
};
