use std::collections::HashMap;

mod binarizer;
pub mod builder;
mod error;
mod features;
mod network;
mod phoneme;
mod prophet;
pub mod prose;

pub use binarizer::{BinarizerParams, LabelBinarizer, LabelGroup};
pub use builder::{ProphetBuilder, DEFAULT_THRESHOLD, LABEL_GROUP_COUNT};
pub use error::ProphecyError;
pub use features::{normalize_name, Extraction, FeatureExtractor};
pub use network::{LayerParams, MlpNetwork, NetworkParams};
pub use phoneme::{map_token, tokenize, PhonemeVocabulary};
pub use prophet::{Prophecy, Prophet};

/// Information about the current configuration of a prophet
#[derive(Debug, Clone)]
pub struct ProphetInfo {
    /// Number of phoneme tokens, i.e. the feature-vector width
    pub vocabulary_size: usize,
    /// Total one-hot width across all label groups
    pub output_size: usize,
    /// Label-group names in artifact order
    pub group_names: Vec<String>,
    /// Labels per group, keyed by group name
    pub group_labels: HashMap<String, Vec<String>>,
    /// Per-unit probability threshold
    pub threshold: f32,
}
