use rand::Rng;

use crate::train::harness::TrainingExample;

/// Generates `count` random XOR examples: inputs drawn from `{0, 1} × {0, 1}`,
/// target is their exclusive or.
pub fn xor_examples<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<TrainingExample> {
    (0..count)
        .map(|_| {
            let a = rng.gen::<bool>();
            let b = rng.gen::<bool>();
            TrainingExample {
                input: vec![a as u8 as f64, b as u8 as f64],
                target: vec![(a ^ b) as u8 as f64],
            }
        })
        .collect()
}
