pub mod builder;
pub mod network;
pub mod synapse;

pub use builder::NetworkBuilder;
pub use network::Network;
pub use synapse::Synapse;
