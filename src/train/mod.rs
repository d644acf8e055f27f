pub mod config;
pub mod harness;
pub mod stats;
pub mod xor;

pub use config::TrainConfig;
pub use harness::{train_online, TrainingExample};
pub use stats::TrainingStats;
pub use xor::xor_examples;
