use thiserror::Error;

/// Rejected layer schemes, raised at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A network needs at least an input and an output layer.
    #[error("layer scheme needs at least 2 layers, got {got}")]
    TooFewLayers { got: usize },
    /// Every layer must hold at least one neuron.
    #[error("layer {index} has size 0")]
    InvalidLayerSize { index: usize },
}

/// Wrong-length input or target vectors, raised at the `forward`/`backward`
/// call boundary before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropagationError {
    #[error("expected {expected} input values, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },
    #[error("expected {expected} target values, got {actual}")]
    TargetSizeMismatch { expected: usize, actual: usize },
}
