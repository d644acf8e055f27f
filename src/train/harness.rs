use log::info;

use crate::network::error::PropagationError;
use crate::network::network::Network;
use crate::train::config::TrainConfig;
use crate::train::stats::TrainingStats;

/// One labeled training pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

/// Feeds every example through the network once, in order, updating weights
/// after each one.
///
/// Per example: forward pass, one report line (iteration index, inputs,
/// outputs, the RMS error recorded by the previous backward pass, and a
/// Correct/Incorrect judgment within `config.tolerance`), then one backward
/// pass. Reporting goes through the `log` facade at info level.
///
/// Returns a summary of the run, or the first size mismatch encountered.
pub fn train_online(
    network: &mut Network,
    examples: &[TrainingExample],
    config: &TrainConfig,
) -> Result<TrainingStats, PropagationError> {
    let mut correct = 0;

    for (iteration, example) in examples.iter().enumerate() {
        network.forward(&example.input)?;
        let outputs = network.results();

        let is_correct = outputs
            .iter()
            .zip(&example.target)
            .all(|(output, target)| (output - target).abs() <= config.tolerance);
        if is_correct {
            correct += 1;
        }

        if config.log_every > 0 && iteration % config.log_every == 0 {
            info!(
                "iteration {} inputs {:?} -> outputs {:?} error {:.13} = {}",
                iteration,
                example.input,
                outputs,
                network.last_error(),
                if is_correct { "Correct" } else { "Incorrect" },
            );
        }

        network.backward(&example.target)?;
    }

    Ok(TrainingStats {
        examples: examples.len(),
        correct,
        final_error: network.last_error(),
    })
}
