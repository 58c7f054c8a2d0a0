use std::sync::Arc;

use rand::Rng;

use super::binarizer::LabelBinarizer;
use super::error::ProphecyError;
use super::features::{normalize_name, FeatureExtractor};
use super::network::MlpNetwork;
use super::prose;

/// Result of reading a single name: the four predicted attribute labels,
/// the recognized phonemes and the rendered narrative. Ephemeral, never
/// persisted.
#[derive(Debug, Clone)]
pub struct Prophecy {
    /// Display form of the name (normalized, first letter capitalized)
    pub name: String,
    pub chakra: String,
    pub rasa: String,
    pub bhava: String,
    pub deva: String,
    /// Distinct recognized phoneme tokens in first-seen order
    pub phonemes: Vec<String>,
    /// Templated narrative text
    pub narrative: String,
}

/// A thread-safe reader mapping a name to its cosmic attributes.
///
/// All loaded state (phoneme vocabulary, network weights, label binarizer)
/// is shared behind `Arc` and never mutated after construction, so a
/// `Prophet` can serve concurrent callers without locking.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use svara::Prophet;
///
/// let prophet = Prophet::builder()
///     .with_artifacts("artifacts")?
///     .build()?;
///
/// let prophecy = prophet.predict("Mahan")?;
/// println!("{} / {} / {} / {}",
///     prophecy.chakra, prophecy.rasa, prophecy.bhava, prophecy.deva);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Prophet {
    pub(crate) extractor: FeatureExtractor,
    pub(crate) network: Arc<MlpNetwork>,
    pub(crate) binarizer: Arc<LabelBinarizer>,
    pub(crate) threshold: f32,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Prophet>();
    }
};

impl Prophet {
    /// Creates a new ProphetBuilder for fluent construction
    pub fn builder() -> super::builder::ProphetBuilder {
        super::builder::ProphetBuilder::new()
    }

    /// Returns information about the prophet's current configuration
    pub fn info(&self) -> super::ProphetInfo {
        super::ProphetInfo {
            vocabulary_size: self.extractor.vocabulary().len(),
            output_size: self.network.output_size(),
            group_names: self
                .binarizer
                .groups()
                .iter()
                .map(|g| g.name.clone())
                .collect(),
            group_labels: self
                .binarizer
                .groups()
                .iter()
                .map(|g| (g.name.clone(), g.labels.clone()))
                .collect(),
            threshold: self.threshold,
        }
    }

    /// Reads a name and returns its prophecy.
    ///
    /// Template variants in the narrative are chosen through the thread
    /// RNG, so two calls with the same name may produce different (but both
    /// template-valid) narratives. Use [`predict_with_rng`](Self::predict_with_rng)
    /// to pin the selection.
    ///
    /// # Errors
    /// * `ValidationError` - the name is empty or whitespace
    /// * `EmptyFeatures` - the name contains no recognizable phonemes
    /// * `ModelInvocation` - the forward pass failed
    pub fn predict(&self, name: &str) -> Result<Prophecy, ProphecyError> {
        self.predict_with_rng(name, &mut rand::thread_rng())
    }

    /// Reads a name using the supplied RNG for template selection.
    pub fn predict_with_rng<R: Rng>(
        &self,
        name: &str,
        rng: &mut R,
    ) -> Result<Prophecy, ProphecyError> {
        if name.trim().is_empty() {
            return Err(ProphecyError::ValidationError(
                "Input name cannot be empty".into(),
            ));
        }

        let extraction = self.extractor.extract(name)?;
        let probs = self.network.predict(&extraction.vector)?;
        let indicator = MlpNetwork::threshold(&probs, self.threshold);
        let labels = self.binarizer.inverse_transform(&probs, &indicator)?;

        // Group count is validated at build time
        let mut labels = labels.into_iter();
        let (chakra, rasa, bhava, deva) =
            match (labels.next(), labels.next(), labels.next(), labels.next()) {
                (Some(c), Some(r), Some(b), Some(d)) => (c, r, b, d),
                _ => {
                    return Err(ProphecyError::ModelInvocation(
                        "Binarizer did not produce one label per group".into(),
                    ))
                }
            };

        let display = display_name(name);
        let narrative = prose::generate_with_rng(&display, &chakra, &rasa, &bhava, &deva, rng);

        Ok(Prophecy {
            name: display,
            chakra,
            rasa,
            bhava,
            deva,
            phonemes: extraction.phonemes,
            narrative,
        })
    }
}

/// Display form of a name: normalized with the first character uppercased.
fn display_name(name: &str) -> String {
    let normalized = normalize_name(name);
    let mut chars = normalized.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => normalized,
    }
}
