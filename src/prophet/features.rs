use ndarray::Array1;
use std::sync::Arc;

use log::warn;

use super::error::ProphecyError;
use super::phoneme::{map_token, tokenize, PhonemeVocabulary};

/// Result of turning a name into model input.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Normalized phoneme-frequency vector, one slot per vocabulary entry.
    /// Entries sum to 1.0.
    pub vector: Array1<f32>,
    /// Recognized phoneme tokens in first-seen order, deduplicated.
    pub phonemes: Vec<String>,
}

/// Converts a raw name into a normalized phoneme-frequency vector indexed
/// against a shared [`PhonemeVocabulary`].
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    vocabulary: Arc<PhonemeVocabulary>,
}

impl FeatureExtractor {
    pub fn new(vocabulary: Arc<PhonemeVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &PhonemeVocabulary {
        &self.vocabulary
    }

    /// Extracts the feature vector for a name.
    ///
    /// The name is lowercased and stripped of spaces, tokenized with the
    /// greedy "sh" digraph rule, mapped through the phoneme table and
    /// counted against the vocabulary. Counts are normalized by their sum.
    ///
    /// Mapped phonemes that are missing from the vocabulary are dropped
    /// with a warning. Unmapped tokens are dropped silently.
    ///
    /// # Errors
    /// Returns `EmptyFeatures` if no token resolved to a vocabulary entry.
    pub fn extract(&self, name: &str) -> Result<Extraction, ProphecyError> {
        let normalized = normalize_name(name);
        let mut counts = Array1::<f32>::zeros(self.vocabulary.len());
        let mut phonemes: Vec<String> = Vec::new();

        for token in tokenize(&normalized) {
            let Some(phoneme) = map_token(token) else {
                continue;
            };
            match self.vocabulary.index_of(phoneme) {
                Some(idx) => {
                    counts[idx] += 1.0;
                    if !phonemes.iter().any(|p| p == phoneme) {
                        phonemes.push(phoneme.to_string());
                    }
                }
                None => {
                    warn!(
                        "Phoneme '{}' (from token '{}') is not in the vocabulary, dropping",
                        phoneme, token
                    );
                }
            }
        }

        let total = counts.sum();
        if total <= 0.0 {
            return Err(ProphecyError::EmptyFeatures(format!(
                "name '{}' contains no letters a-z or mapped symbols",
                name
            )));
        }

        Ok(Extraction {
            vector: counts / total,
            phonemes,
        })
    }
}

/// Lowercases a name and removes spaces, matching the normalization the
/// reference artifacts were trained with.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}
