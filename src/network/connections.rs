use rand::Rng;

use crate::activation::activation::random_weight;
use crate::math::matrix::Matrix;

/// Weight and momentum tables wiring one layer to the next.
///
/// Shape is `(source_size + 1) × (dest_size + 1)`: row `k` is the source
/// slot (bias row last), column `j` the destination slot. The last column
/// feeds the destination bias, whose output is pinned, so those weights are
/// sampled at construction and never read or updated afterwards.
#[derive(Debug, Clone)]
pub struct Connections {
    pub weights: Matrix,
    pub deltas: Matrix,
}

impl Connections {
    /// Wires `source_size` real neurons (plus bias) to `dest_size` real
    /// neurons (plus bias), every weight sampled fresh from `rng` and every
    /// momentum delta starting at zero.
    pub fn new<R: Rng + ?Sized>(source_size: usize, dest_size: usize, rng: &mut R) -> Connections {
        let rows = source_size + 1;
        let cols = dest_size + 1;

        Connections {
            weights: Matrix::fill_with(rows, cols, || random_weight(rng)),
            deltas: Matrix::zeros(rows, cols),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shape_includes_bias_row_and_column() {
        let mut rng = StdRng::seed_from_u64(1);
        let connections = Connections::new(2, 4, &mut rng);
        assert_eq!(connections.weights.rows, 3);
        assert_eq!(connections.weights.cols, 5);
        assert_eq!(connections.deltas.rows, 3);
        assert_eq!(connections.deltas.cols, 5);
    }

    #[test]
    fn weights_sampled_in_unit_interval_deltas_zeroed() {
        let mut rng = StdRng::seed_from_u64(2);
        let connections = Connections::new(3, 3, &mut rng);
        assert!(connections
            .weights
            .data
            .iter()
            .flatten()
            .all(|&w| (0.0..=1.0).contains(&w)));
        assert!(connections.deltas.data.iter().flatten().all(|&d| d == 0.0));
    }
}
