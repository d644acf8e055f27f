use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::activation::{derivative, LEARNING_RATE, MOMENTUM};
use crate::layers::dense::Layer;
use crate::network::connections::Connections;
use crate::network::error::{ConfigurationError, PropagationError};

/// A fully-connected feed-forward network trained online with
/// backpropagation and momentum.
///
/// Layers and their wiring are private implementation details; the public
/// surface is construction, [`forward`](Network::forward),
/// [`backward`](Network::backward), [`results`](Network::results) and
/// [`last_error`](Network::last_error). A single instance is not meant to be
/// shared across threads; independent instances are fully independent.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    /// `connections[i]` wires layer `i` to layer `i + 1`.
    connections: Vec<Connections>,
    last_error: f64,
}

impl Network {
    /// Builds a network from a layer-size scheme, e.g. `&[2, 4, 1]` for two
    /// inputs, one hidden layer of four neurons and a single output.
    ///
    /// Weights are drawn from `rand::thread_rng()`; use
    /// [`Network::from_seed`] or [`Network::with_rng`] for reproducible runs.
    pub fn new(scheme: &[usize]) -> Result<Network, ConfigurationError> {
        Self::with_rng(scheme, &mut rand::thread_rng())
    }

    /// Builds a network with every initial weight drawn from a deterministic
    /// seed.
    pub fn from_seed(scheme: &[usize], seed: u64) -> Result<Network, ConfigurationError> {
        Self::with_rng(scheme, &mut StdRng::seed_from_u64(seed))
    }

    /// Builds a network sampling every initial weight from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        scheme: &[usize],
        rng: &mut R,
    ) -> Result<Network, ConfigurationError> {
        if scheme.len() < 2 {
            return Err(ConfigurationError::TooFewLayers { got: scheme.len() });
        }
        if let Some(index) = scheme.iter().position(|&size| size == 0) {
            return Err(ConfigurationError::InvalidLayerSize { index });
        }

        let layers: Vec<Layer> = scheme.iter().map(|&size| Layer::new(size)).collect();
        let connections = scheme
            .windows(2)
            .map(|pair| Connections::new(pair[0], pair[1], rng))
            .collect();

        Ok(Network {
            layers,
            connections,
            last_error: 0.0,
        })
    }

    /// Number of real neurons in the input layer.
    pub fn input_len(&self) -> usize {
        self.layers[0].size
    }

    /// Number of real neurons in the output layer.
    pub fn output_len(&self) -> usize {
        self.layers[self.layers.len() - 1].size
    }

    /// RMS output error recorded by the most recent [`Network::backward`]
    /// call; 0.0 before the first one.
    pub fn last_error(&self) -> f64 {
        self.last_error
    }

    /// Feeds `inputs` through the network, recomputing every real neuron's
    /// output layer by layer. Bias outputs stay pinned at 1.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<(), PropagationError> {
        if inputs.len() != self.input_len() {
            return Err(PropagationError::InputSizeMismatch {
                expected: self.input_len(),
                actual: inputs.len(),
            });
        }

        self.layers[0].outputs[..inputs.len()].copy_from_slice(inputs);

        for l in 1..self.layers.len() {
            let (head, tail) = self.layers.split_at_mut(l);
            tail[0].forward(&head[l - 1], &self.connections[l - 1].weights);
        }

        Ok(())
    }

    /// Runs one backpropagation step against `targets`.
    ///
    /// Records the RMS output error, computes output-layer and then
    /// hidden-layer gradients against the pre-update weights, and only then
    /// applies the momentum delta rule to every connection feeding a real
    /// neuron, walking from the output layer back to the first hidden layer.
    pub fn backward(&mut self, targets: &[f64]) -> Result<(), PropagationError> {
        if targets.len() != self.output_len() {
            return Err(PropagationError::TargetSizeMismatch {
                expected: self.output_len(),
                actual: targets.len(),
            });
        }

        self.last_error = self.rms_error(targets);

        let last = self.layers.len() - 1;

        // Output-layer gradients.
        let output_layer = &mut self.layers[last];
        for (j, &target) in targets.iter().enumerate() {
            let output = output_layer.outputs[j];
            output_layer.gradients[j] = (target - output) * derivative(output);
        }

        // Hidden-layer gradients, last hidden layer down to the first. The
        // weights read here are still the pre-update values; no weight moves
        // until every gradient is in place.
        for l in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(l + 1);
            let current = &mut head[l];
            let next = &tail[0];
            let weights = &self.connections[l].weights;

            for j in 0..current.size {
                let sum: f64 = (0..next.size)
                    .map(|m| weights.data[j][m] * next.gradients[m])
                    .sum();
                current.gradients[j] = derivative(current.outputs[j]) * sum;
            }
        }

        // Weight updates, output layer back to the first hidden layer. Every
        // incoming connection of every real neuron moves by the delta rule
        // with momentum; the previous layer's bias slot contributes like any
        // other source.
        for l in (1..=last).rev() {
            let previous = &self.layers[l - 1];
            let current = &self.layers[l];
            let connections = &mut self.connections[l - 1];

            for j in 0..current.size {
                let gradient = current.gradients[j];
                for (k, &prev_output) in previous.outputs.iter().enumerate() {
                    let delta = LEARNING_RATE * prev_output * gradient
                        + MOMENTUM * connections.deltas.data[k][j];
                    connections.deltas.data[k][j] = delta;
                    connections.weights.data[k][j] += delta;
                }
            }
        }

        Ok(())
    }

    /// Outputs of the last layer's real neurons, in order.
    pub fn results(&self) -> Vec<f64> {
        let output_layer = &self.layers[self.layers.len() - 1];
        output_layer.outputs[..output_layer.size].to_vec()
    }

    fn rms_error(&self, targets: &[f64]) -> f64 {
        let output_layer = &self.layers[self.layers.len() - 1];
        let sum: f64 = targets
            .iter()
            .zip(&output_layer.outputs)
            .map(|(target, output)| (target - output).powi(2))
            .sum();
        (sum / output_layer.size as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_layer_scheme_is_rejected() {
        assert_eq!(
            Network::new(&[5]).unwrap_err(),
            ConfigurationError::TooFewLayers { got: 1 }
        );
        assert_eq!(
            Network::new(&[]).unwrap_err(),
            ConfigurationError::TooFewLayers { got: 0 }
        );
    }

    #[test]
    fn zero_sized_layer_is_rejected() {
        assert_eq!(
            Network::new(&[2, 0, 1]).unwrap_err(),
            ConfigurationError::InvalidLayerSize { index: 1 }
        );
    }

    #[test]
    fn forward_rejects_wrong_input_length() {
        let mut network = Network::from_seed(&[2, 4, 1], 7).unwrap();
        assert_eq!(
            network.forward(&[1.0]).unwrap_err(),
            PropagationError::InputSizeMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn backward_rejects_wrong_target_length() {
        let mut network = Network::from_seed(&[2, 4, 1], 7).unwrap();
        network.forward(&[0.0, 1.0]).unwrap();
        assert_eq!(
            network.backward(&[0.5, 0.5]).unwrap_err(),
            PropagationError::TargetSizeMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn results_length_matches_output_layer() {
        let mut network = Network::from_seed(&[3, 5, 2], 9).unwrap();
        network.forward(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(network.results().len(), 2);
        assert_eq!(network.output_len(), 2);
    }

    #[test]
    fn forward_output_stays_in_tanh_range() {
        let mut network = Network::from_seed(&[2, 4, 1], 21).unwrap();
        network.forward(&[0.0, 0.0]).unwrap();
        let out = network.results()[0];
        assert!(out > -1.0 && out < 1.0);
    }

    #[test]
    fn forward_is_deterministic_for_fixed_weights() {
        let mut network = Network::from_seed(&[2, 4, 1], 13).unwrap();
        network.forward(&[0.3, 0.7]).unwrap();
        let first = network.results();
        network.forward(&[0.3, 0.7]).unwrap();
        let second = network.results();
        assert_eq!(first, second);
    }

    #[test]
    fn seeded_networks_are_reproducible() {
        let mut a = Network::from_seed(&[2, 4, 1], 99).unwrap();
        let mut b = Network::from_seed(&[2, 4, 1], 99).unwrap();
        a.forward(&[1.0, 0.0]).unwrap();
        b.forward(&[1.0, 0.0]).unwrap();
        assert_eq!(a.results(), b.results());
    }

    #[test]
    fn bias_outputs_stay_pinned_across_passes() {
        let mut network = Network::from_seed(&[2, 4, 1], 5).unwrap();
        for _ in 0..10 {
            network.forward(&[1.0, 0.0]).unwrap();
            network.backward(&[1.0]).unwrap();
        }
        for layer in &network.layers {
            assert_eq!(layer.outputs[layer.size], 1.0);
        }
    }

    #[test]
    fn last_error_is_zero_before_and_nonnegative_after_backward() {
        let mut network = Network::from_seed(&[2, 4, 1], 17).unwrap();
        assert_eq!(network.last_error(), 0.0);
        network.forward(&[0.0, 1.0]).unwrap();
        network.backward(&[1.0]).unwrap();
        assert!(network.last_error() >= 0.0);
    }

    #[test]
    fn backward_moves_the_output_toward_the_target() {
        let mut network = Network::from_seed(&[2, 4, 1], 31).unwrap();
        network.forward(&[1.0, 0.0]).unwrap();
        let before = (network.results()[0] - 1.0).abs();
        for _ in 0..50 {
            network.backward(&[1.0]).unwrap();
            network.forward(&[1.0, 0.0]).unwrap();
        }
        let after = (network.results()[0] - 1.0).abs();
        assert!(after < before, "|err| went from {before} to {after}");
    }
}
