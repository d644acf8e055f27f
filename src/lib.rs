pub mod activation;
mod layers;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use network::error::{ConfigurationError, PropagationError};
pub use network::network::Network;
pub use train::config::TrainConfig;
pub use train::harness::{train_online, TrainingExample};
pub use train::stats::TrainingStats;
pub use train::xor::xor_examples;
