//! CART regression tree: variance-reduction splits, mean-valued leaves.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RegressionTree {
    root: Node,
}

#[derive(Serialize, Deserialize)]
enum Node {
    Leaf {
        prediction: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

pub struct GrowthParams {
    pub max_depth: usize,
    pub min_samples_leaf: usize,

    /// Number of feature columns considered per split.
    pub n_split_features: usize,
}

impl RegressionTree {
    /// Grows a tree on the rows selected by `indices`.
    pub fn fit(
        features: &[Vec<f64>],
        targets: &[f64],
        indices: Vec<usize>,
        params: &GrowthParams,
        rng: &mut StdRng,
    ) -> Self {
        debug_assert!(params.max_depth >= 1);
        debug_assert!(params.min_samples_leaf >= 1);
        debug_assert!(!indices.is_empty());

        Self {
            root: grow(features, targets, indices, 0, params, rng),
        }
    }

    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { prediction } => break *prediction,
                Node::Split { feature, threshold, left, right } => {
                    node = if features[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }
}

fn grow(
    features: &[Vec<f64>],
    targets: &[f64],
    indices: Vec<usize>,
    depth: usize,
    params: &GrowthParams,
    rng: &mut StdRng,
) -> Node {
    let prediction = mean(targets, &indices);
    if depth >= params.max_depth || indices.len() < 2 * params.min_samples_leaf {
        return Node::Leaf { prediction };
    }
    match best_split(features, targets, &indices, params, rng) {
        Some((feature, threshold)) => {
            let (left, right): (Vec<usize>, Vec<usize>) = indices
                .into_iter()
                .partition(|&index| features[index][feature] <= threshold);
            Node::Split {
                feature,
                threshold,
                left: Box::new(grow(features, targets, left, depth + 1, params, rng)),
                right: Box::new(grow(features, targets, right, depth + 1, params, rng)),
            }
        }
        None => Node::Leaf { prediction },
    }
}

/// Picks the split maximising the reduction of the summed squared error
/// over a random subset of the feature columns.
///
/// Returns `None` when no split separates the rows, for example when the
/// targets are constant.
fn best_split(
    features: &[Vec<f64>],
    targets: &[f64],
    indices: &[usize],
    params: &GrowthParams,
    rng: &mut StdRng,
) -> Option<(usize, f64)> {
    let n_features = features[indices[0]].len();

    let total_sum: f64 = indices.iter().map(|&index| targets[index]).sum();
    let total_squares: f64 = indices.iter().map(|&index| targets[index] * targets[index]).sum();
    let total_sse = total_squares - total_sum * total_sum / indices.len() as f64;

    let mut best: Option<(f64, usize, f64)> = None;
    for feature in rand::seq::index::sample(rng, n_features, params.n_split_features.min(n_features))
    {
        let mut order = indices.to_vec();
        order.sort_unstable_by(|&lhs, &rhs| {
            features[lhs][feature].total_cmp(&features[rhs][feature])
        });

        let mut left_sum = 0.0;
        let mut left_squares = 0.0;
        for (position, &index) in order.iter().enumerate().take(order.len() - 1) {
            left_sum += targets[index];
            left_squares += targets[index] * targets[index];

            let n_left = position + 1;
            let n_right = order.len() - n_left;
            if n_left < params.min_samples_leaf || n_right < params.min_samples_leaf {
                continue;
            }

            let value = features[index][feature];
            let next_value = features[order[position + 1]][feature];
            if next_value <= value {
                // Equal values cannot be separated by a threshold.
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_squares = total_squares - left_squares;
            let sse = (left_squares - left_sum * left_sum / n_left as f64)
                + (right_squares - right_sum * right_sum / n_right as f64);
            let reduction = total_sse - sse;
            if reduction > best.map_or(0.0, |(best_reduction, _, _)| best_reduction) {
                best = Some((reduction, feature, (value + next_value) / 2.0));
            }
        }
    }

    best.map(|(_, feature, threshold)| (feature, threshold))
}

fn mean(targets: &[f64], indices: &[usize]) -> f64 {
    indices.iter().map(|&index| targets[index]).sum::<f64>() / indices.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn params() -> GrowthParams {
        GrowthParams {
            max_depth: 8,
            min_samples_leaf: 1,
            n_split_features: 1,
        }
    }

    #[test]
    fn fit_separates_a_step_function() {
        let features = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let targets = [0.0, 0.0, 10.0, 10.0];
        let mut rng = StdRng::seed_from_u64(42);

        let tree =
            RegressionTree::fit(&features, &targets, vec![0, 1, 2, 3], &params(), &mut rng);
        assert!(tree.predict(&[0.5]).abs() < f64::EPSILON);
        assert!((tree.predict(&[2.5]) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn constant_targets_produce_a_single_leaf() {
        let features = vec![vec![0.0], vec![1.0], vec![2.0]];
        let targets = [7.0, 7.0, 7.0];
        let mut rng = StdRng::seed_from_u64(42);

        let tree = RegressionTree::fit(&features, &targets, vec![0, 1, 2], &params(), &mut rng);
        assert!(matches!(tree.root, Node::Leaf { .. }));
        assert!((tree.predict(&[100.0]) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn min_samples_leaf_caps_the_depth() {
        let features = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let targets = [0.0, 1.0, 2.0, 3.0];
        let mut rng = StdRng::seed_from_u64(42);

        let tree = RegressionTree::fit(
            &features,
            &targets,
            vec![0, 1, 2, 3],
            &GrowthParams { max_depth: 8, min_samples_leaf: 2, n_split_features: 1 },
            &mut rng,
        );
        // Both leaves hold two samples, so predictions are pair means.
        assert!((tree.predict(&[0.0]) - 0.5).abs() < f64::EPSILON);
        assert!((tree.predict(&[3.0]) - 2.5).abs() < f64::EPSILON);
    }
}
