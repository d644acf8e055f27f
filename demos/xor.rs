use cortex_nn::{train_online, xor_examples, Network, TrainConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut network = Network::new(&[2, 4, 1])?;
    let examples = xor_examples(10_000, &mut rand::thread_rng());
    let config = TrainConfig {
        log_every: 1000,
        ..TrainConfig::default()
    };

    let stats = train_online(&mut network, &examples, &config)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    for (a, b) in [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)] {
        network.forward(&[a, b])?;
        println!("({a}, {b}) -> {:.4}", network.results()[0]);
    }

    Ok(())
}
