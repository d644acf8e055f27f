use rand::Rng;

/// Learning rate (eta): scales each weight update taken from the current
/// gradient.
pub const LEARNING_RATE: f64 = 0.15;

/// Momentum factor (alpha): fraction of the previous weight delta carried
/// into the current one.
pub const MOMENTUM: f64 = 0.5;

/// Neuron transfer function.
pub fn activate(x: f64) -> f64 {
    x.tanh()
}

/// Gradient scaling term, evaluated on a neuron's *current output* `y`,
/// not its pre-activation input.
///
/// Note: `y * (1 - y)` is the logistic-style derivative, not tanh's
/// `1 - y²`. Replacing it changes every learned weight, so any change here
/// is a behavioral change, not a refactor.
pub fn derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

/// Initial connection weight: uniform sample in `[0, 1]`.
pub fn random_weight<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen()
}
