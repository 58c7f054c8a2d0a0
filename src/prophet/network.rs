use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::error::ProphecyError;

/// Parameters of a single linear layer as stored in the weights artifact.
/// `weight` is row-major with one row per output unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerParams {
    pub weight: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

/// Serialized form of the trained network: a chain of linear layers with
/// ReLU activations between them and a sigmoid applied at the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkParams {
    pub input_size: usize,
    pub hidden_sizes: Vec<usize>,
    pub output_size: usize,
    pub layers: Vec<LayerParams>,
}

#[derive(Debug, Clone)]
struct Linear {
    weight: Array2<f32>,
    bias: Array1<f32>,
}

/// Fixed-topology feedforward network used strictly for inference.
///
/// Weights are loaded once from the model artifact and never mutated; the
/// forward pass is deterministic and single-item (no batching).
#[derive(Debug, Clone)]
pub struct MlpNetwork {
    layers: Vec<Linear>,
    input_size: usize,
    output_size: usize,
}

impl MlpNetwork {
    /// Builds the network from deserialized parameters, validating that the
    /// layer shapes chain together and match the declared sizes.
    ///
    /// # Errors
    /// Returns `BuildError` on any shape inconsistency.
    pub fn from_params(params: NetworkParams) -> Result<Self, ProphecyError> {
        if params.layers.is_empty() {
            return Err(ProphecyError::BuildError(
                "Model artifact contains no layers".into(),
            ));
        }

        let mut sizes = Vec::with_capacity(params.hidden_sizes.len() + 2);
        sizes.push(params.input_size);
        sizes.extend_from_slice(&params.hidden_sizes);
        sizes.push(params.output_size);

        if params.layers.len() != sizes.len() - 1 {
            return Err(ProphecyError::BuildError(format!(
                "Model declares {} layer sizes but carries {} layers",
                sizes.len() - 1,
                params.layers.len()
            )));
        }

        let mut layers = Vec::with_capacity(params.layers.len());
        for (i, layer) in params.layers.into_iter().enumerate() {
            let (n_in, n_out) = (sizes[i], sizes[i + 1]);
            if layer.weight.len() != n_out {
                return Err(ProphecyError::BuildError(format!(
                    "Layer {} has {} weight rows, expected {}",
                    i,
                    layer.weight.len(),
                    n_out
                )));
            }
            if layer.bias.len() != n_out {
                return Err(ProphecyError::BuildError(format!(
                    "Layer {} has {} bias entries, expected {}",
                    i,
                    layer.bias.len(),
                    n_out
                )));
            }
            let mut flat = Vec::with_capacity(n_out * n_in);
            for (row_idx, row) in layer.weight.iter().enumerate() {
                if row.len() != n_in {
                    return Err(ProphecyError::BuildError(format!(
                        "Layer {} row {} has width {}, expected {}",
                        i,
                        row_idx,
                        row.len(),
                        n_in
                    )));
                }
                flat.extend_from_slice(row);
            }
            let weight = Array2::from_shape_vec((n_out, n_in), flat).map_err(|e| {
                ProphecyError::BuildError(format!("Failed to shape layer {} weights: {}", i, e))
            })?;
            layers.push(Linear {
                weight,
                bias: Array1::from_vec(layer.bias),
            });
        }

        Ok(Self {
            layers,
            input_size: params.input_size,
            output_size: params.output_size,
        })
    }

    /// Expected feature-vector width.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Total one-hot width across all label groups.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Runs the forward pass and returns per-unit sigmoid probabilities.
    ///
    /// # Errors
    /// Returns `ModelInvocation` if the feature vector width does not match
    /// the network's input width. The vocabulary and weights artifacts are
    /// trained together, so a mismatch is a configuration error.
    pub fn predict(&self, features: &Array1<f32>) -> Result<Array1<f32>, ProphecyError> {
        if features.len() != self.input_size {
            return Err(ProphecyError::ModelInvocation(format!(
                "Feature vector has width {}, model expects {}",
                features.len(),
                self.input_size
            )));
        }

        let mut x = features.clone();
        let last = self.layers.len() - 1;
        for (i, layer) in self.layers.iter().enumerate() {
            x = layer.weight.dot(&x) + &layer.bias;
            if i < last {
                x.mapv_inplace(|v| v.max(0.0));
            }
        }
        x.mapv_inplace(|v| 1.0 / (1.0 + (-v).exp()));
        Ok(x)
    }

    /// Thresholds probabilities into a multi-hot indicator vector.
    pub fn threshold(probs: &Array1<f32>, threshold: f32) -> Vec<bool> {
        probs.iter().map(|&p| p > threshold).collect()
    }
}
