use std::path::Path;
use std::sync::Arc;

use log::info;

use super::binarizer::{BinarizerParams, LabelBinarizer};
use super::error::ProphecyError;
use super::features::FeatureExtractor;
use super::network::{MlpNetwork, NetworkParams};
use super::phoneme::PhonemeVocabulary;
use super::prophet::Prophet;
use crate::artifacts::ArtifactStore;

/// Number of label groups (chakra, rasa, bhava, deva) a valid binarizer
/// artifact must carry.
pub const LABEL_GROUP_COUNT: usize = 4;

/// Default per-unit probability threshold.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// A builder for constructing a Prophet with a fluent interface.
#[derive(Debug)]
pub struct ProphetBuilder {
    vocabulary: Option<PhonemeVocabulary>,
    network: Option<MlpNetwork>,
    binarizer: Option<LabelBinarizer>,
    threshold: f32,
}

impl Default for ProphetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProphetBuilder {
    /// Creates a new empty ProphetBuilder instance with the default threshold
    ///
    /// # Example
    /// ```
    /// use svara::ProphetBuilder;
    ///
    /// let builder = ProphetBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            vocabulary: None,
            network: None,
            binarizer: None,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Loads all three artifacts from a directory
    ///
    /// # Arguments
    /// * `artifacts_dir` - Directory containing `model.json`, `binarizer.json`
    ///   and `phonemes.json`
    ///
    /// # Returns
    /// * `Result<Self, ProphecyError>` - The builder instance if successful, or an error if:
    ///   - Artifacts are already loaded
    ///   - Any artifact file is missing or fails to parse
    ///   - Any artifact is internally inconsistent
    ///
    /// # Example
    /// ```no_run
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use svara::ProphetBuilder;
    ///
    /// let builder = ProphetBuilder::new()
    ///     .with_artifacts("artifacts")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_artifacts<P: AsRef<Path>>(self, artifacts_dir: P) -> Result<Self, ProphecyError> {
        let store = ArtifactStore::new(artifacts_dir);
        self.with_store(&store)
    }

    /// Loads all three artifacts through an [`ArtifactStore`]
    pub fn with_store(self, store: &ArtifactStore) -> Result<Self, ProphecyError> {
        self.load_components(
            store.load_phoneme_tokens()?,
            store.load_network_params()?,
            store.load_binarizer_params()?,
        )
    }

    /// Loads the three artifacts from explicit file paths, for callers whose
    /// artifact files do not share one directory
    ///
    /// # Example
    /// ```no_run
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use svara::ProphetBuilder;
    ///
    /// let builder = ProphetBuilder::new()
    ///     .with_artifact_paths(
    ///         "weights/model.json",
    ///         "labels/binarizer.json",
    ///         "labels/phonemes.json",
    ///     )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_artifact_paths(
        self,
        model_path: impl AsRef<Path>,
        binarizer_path: impl AsRef<Path>,
        phonemes_path: impl AsRef<Path>,
    ) -> Result<Self, ProphecyError> {
        self.load_components(
            ArtifactStore::read_phoneme_tokens(phonemes_path)?,
            ArtifactStore::read_network_params(model_path)?,
            ArtifactStore::read_binarizer_params(binarizer_path)?,
        )
    }

    fn load_components(
        mut self,
        tokens: Vec<String>,
        network_params: NetworkParams,
        binarizer_params: BinarizerParams,
    ) -> Result<Self, ProphecyError> {
        if self.vocabulary.is_some() || self.network.is_some() || self.binarizer.is_some() {
            return Err(ProphecyError::BuildError(
                "Artifacts are already loaded".into(),
            ));
        }

        let vocabulary = PhonemeVocabulary::new(tokens)?;
        info!("Phoneme vocabulary loaded ({} tokens)", vocabulary.len());

        let network = MlpNetwork::from_params(network_params)?;
        info!(
            "Network weights loaded ({} -> {})",
            network.input_size(),
            network.output_size()
        );

        let binarizer = LabelBinarizer::new(binarizer_params)?;
        info!(
            "Label binarizer loaded ({} groups, {} labels)",
            binarizer.groups().len(),
            binarizer.width()
        );

        self.vocabulary = Some(vocabulary);
        self.network = Some(network);
        self.binarizer = Some(binarizer);
        Ok(self)
    }

    /// Supplies already-constructed components instead of loading artifacts
    /// from disk. Used by tests and benchmarks.
    pub fn with_components(
        mut self,
        vocabulary: PhonemeVocabulary,
        network: MlpNetwork,
        binarizer: LabelBinarizer,
    ) -> Result<Self, ProphecyError> {
        if self.vocabulary.is_some() || self.network.is_some() || self.binarizer.is_some() {
            return Err(ProphecyError::BuildError(
                "Artifacts are already loaded".into(),
            ));
        }
        self.vocabulary = Some(vocabulary);
        self.network = Some(network);
        self.binarizer = Some(binarizer);
        Ok(self)
    }

    /// Overrides the per-unit probability threshold
    ///
    /// # Errors
    /// Returns `ValidationError` unless the threshold lies strictly between
    /// 0 and 1.
    pub fn with_threshold(mut self, threshold: f32) -> Result<Self, ProphecyError> {
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ProphecyError::ValidationError(format!(
                "Threshold must lie strictly between 0 and 1, got {}",
                threshold
            )));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Builds and returns the final Prophet instance
    ///
    /// # Returns
    /// * `Result<Prophet, ProphecyError>` - The constructed Prophet if successful, or an error if:
    ///   - No artifacts have been loaded
    ///   - The vocabulary length does not match the network's input width
    ///   - The binarizer's label count does not match the network's output width
    ///   - The binarizer does not carry exactly four label groups
    pub fn build(self) -> Result<Prophet, ProphecyError> {
        let vocabulary = self
            .vocabulary
            .ok_or_else(|| ProphecyError::BuildError("No artifacts loaded".into()))?;
        let network = self
            .network
            .ok_or_else(|| ProphecyError::BuildError("No network weights loaded".into()))?;
        let binarizer = self
            .binarizer
            .ok_or_else(|| ProphecyError::BuildError("No label binarizer loaded".into()))?;

        if vocabulary.len() != network.input_size() {
            return Err(ProphecyError::BuildError(format!(
                "Vocabulary has {} tokens but the network expects input width {}",
                vocabulary.len(),
                network.input_size()
            )));
        }
        if binarizer.width() != network.output_size() {
            return Err(ProphecyError::BuildError(format!(
                "Binarizer covers {} labels but the network produces {} outputs",
                binarizer.width(),
                network.output_size()
            )));
        }
        if binarizer.groups().len() != LABEL_GROUP_COUNT {
            return Err(ProphecyError::BuildError(format!(
                "Binarizer must carry {} label groups (chakra, rasa, bhava, deva), found {}",
                LABEL_GROUP_COUNT,
                binarizer.groups().len()
            )));
        }

        Ok(Prophet {
            extractor: FeatureExtractor::new(Arc::new(vocabulary)),
            network: Arc::new(network),
            binarizer: Arc::new(binarizer),
            threshold: self.threshold,
        })
    }
}
