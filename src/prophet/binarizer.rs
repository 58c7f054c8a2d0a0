use ndarray::Array1;
use serde::{Deserialize, Serialize};

use log::warn;

use super::error::ProphecyError;

/// One categorical label group (chakra, rasa, bhava or deva) occupying a
/// contiguous range of the network's output vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelGroup {
    pub name: String,
    pub labels: Vec<String>,
}

/// Serialized form of the binarizer artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinarizerParams {
    pub groups: Vec<LabelGroup>,
}

/// Inverse transform from a multi-hot indicator vector back to one label
/// per group.
///
/// Group label ranges are concatenated in artifact order, so the sum of
/// label counts must equal the network's output width (checked when a
/// [`Prophet`](super::Prophet) is built).
#[derive(Debug, Clone)]
pub struct LabelBinarizer {
    groups: Vec<LabelGroup>,
    offsets: Vec<usize>,
    width: usize,
}

impl LabelBinarizer {
    /// # Errors
    /// Returns `BuildError` if there are no groups, a group has no labels,
    /// or a group repeats a label.
    pub fn new(params: BinarizerParams) -> Result<Self, ProphecyError> {
        if params.groups.is_empty() {
            return Err(ProphecyError::BuildError(
                "Binarizer artifact contains no label groups".into(),
            ));
        }

        let mut offsets = Vec::with_capacity(params.groups.len());
        let mut width = 0;
        for group in &params.groups {
            if group.labels.is_empty() {
                return Err(ProphecyError::BuildError(format!(
                    "Label group '{}' has no labels",
                    group.name
                )));
            }
            for (i, label) in group.labels.iter().enumerate() {
                if group.labels[..i].contains(label) {
                    return Err(ProphecyError::BuildError(format!(
                        "Label group '{}' repeats label '{}'",
                        group.name, label
                    )));
                }
            }
            offsets.push(width);
            width += group.labels.len();
        }

        Ok(Self {
            groups: params.groups,
            offsets,
            width,
        })
    }

    /// Total one-hot width across all groups.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn groups(&self) -> &[LabelGroup] {
        &self.groups
    }

    /// Converts a thresholded indicator vector back into one label per group.
    ///
    /// Exactly one set bit per group is the expected case. When a group ends
    /// up with zero or multiple set bits the condition is logged and the
    /// unit with the highest sigmoid probability in that group wins, so the
    /// result is always a full label tuple.
    ///
    /// # Errors
    /// Returns `ModelInvocation` if the vector widths do not match the
    /// binarizer's label space.
    pub fn inverse_transform(
        &self,
        probs: &Array1<f32>,
        indicator: &[bool],
    ) -> Result<Vec<String>, ProphecyError> {
        if probs.len() != self.width || indicator.len() != self.width {
            return Err(ProphecyError::ModelInvocation(format!(
                "Prediction has width {} (indicator {}), binarizer expects {}",
                probs.len(),
                indicator.len(),
                self.width
            )));
        }

        let mut labels = Vec::with_capacity(self.groups.len());
        for (group, &offset) in self.groups.iter().zip(&self.offsets) {
            let range = offset..offset + group.labels.len();
            let set: Vec<usize> = range
                .clone()
                .filter(|&i| indicator[i])
                .map(|i| i - offset)
                .collect();

            let chosen = if set.len() == 1 {
                set[0]
            } else {
                warn!(
                    "Group '{}' has {} units above threshold, picking highest probability",
                    group.name,
                    set.len()
                );
                range
                    .clone()
                    .max_by(|&a, &b| {
                        probs[a]
                            .partial_cmp(&probs[b])
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .map(|i| i - offset)
                    .unwrap_or(0)
            };

            labels.push(group.labels[chosen].clone());
        }

        Ok(labels)
    }
}
