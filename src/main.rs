use std::error::Error;
use std::io::{self, BufRead, Write};

use log::info;

use cortex_nn::{train_online, xor_examples, Network, TrainConfig};

/// Outputs within this distance of 1 (resp. 0) classify as 1 (resp. 0);
/// everything in between is reported as indeterminate.
const CLASSIFY_THRESHOLD: f64 = 0.1;

/// XOR examples fed through the network before the console opens.
const TRAINING_EXAMPLES: usize = 10_000;

#[derive(Debug, PartialEq)]
enum Classification {
    Zero,
    One,
    Indeterminate(f64),
}

fn classify(output: f64) -> Classification {
    if output >= 1.0 - CLASSIFY_THRESHOLD {
        Classification::One
    } else if output <= CLASSIFY_THRESHOLD {
        Classification::Zero
    } else {
        Classification::Indeterminate(output)
    }
}

/// Prompts until a parseable number arrives. Malformed lines are reported
/// and re-prompted, never propagated. Returns `None` once the input stream
/// is exhausted.
fn prompt_value<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<f64>> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Not a number: {:?}", line.trim())?,
        }
    }
}

/// Read-evaluate loop: two numeric inputs per cycle, one classified network
/// output per cycle. Returns cleanly when `input` reaches end of stream.
fn run_console<R: BufRead, W: Write>(
    network: &mut Network,
    mut input: R,
    mut output: W,
) -> Result<(), Box<dyn Error>> {
    loop {
        let first = match prompt_value(&mut input, &mut output, "Enter first XOR input: ")? {
            Some(value) => value,
            None => return Ok(()),
        };
        let second = match prompt_value(&mut input, &mut output, "Enter second XOR input: ")? {
            Some(value) => value,
            None => return Ok(()),
        };

        network.forward(&[first, second])?;
        match classify(network.results()[0]) {
            Classification::One => writeln!(output, "Result: 1")?,
            Classification::Zero => writeln!(output, "Result: 0")?,
            Classification::Indeterminate(value) => {
                writeln!(output, "Result: indeterminate ({value:.4})")?
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut network = Network::new(&[2, 4, 1])?;
    let examples = xor_examples(TRAINING_EXAMPLES, &mut rand::thread_rng());
    let stats = train_online(&mut network, &examples, &TrainConfig::default())?;
    info!(
        "trained on {} examples ({} correct), final error {:.13}",
        stats.examples, stats.correct, stats.final_error
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(&mut network, stdin.lock(), stdout.lock())
}
