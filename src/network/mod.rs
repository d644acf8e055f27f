pub(crate) mod connections;
pub mod error;
pub mod network;

pub use error::{ConfigurationError, PropagationError};
pub use network::Network;
