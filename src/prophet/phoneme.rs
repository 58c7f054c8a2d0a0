use lazy_static::lazy_static;
use std::collections::HashMap;

use super::error::ProphecyError;

/// Fixed table mapping input characters and digraphs to transliterated
/// Sanskrit phoneme tokens. Covers the Latin letters a-z, the digraph "sh"
/// and the symbols `@ # $ %`. The long-vowel keys (`ā ī ū`) mirror the
/// reference table for transliterated input.
const PHONEME_ENTRIES: &[(&str, &str)] = &[
    ("a", "aṁ"),
    ("ā", "āṁ"),
    ("i", "iṁ"),
    ("ī", "īṁ"),
    ("u", "uṁ"),
    ("ū", "ūṁ"),
    ("m", "maṁ"),
    ("n", "naṁ"),
    ("k", "kaṁ"),
    ("g", "gaṁ"),
    ("c", "caṁ"),
    ("j", "jaṁ"),
    ("t", "taṁ"),
    ("d", "daṁ"),
    ("p", "paṁ"),
    ("b", "baṁ"),
    ("v", "vaṁ"),
    ("s", "saṁ"),
    ("h", "haṁ"),
    ("r", "raṁ"),
    ("l", "laṁ"),
    ("y", "yaṁ"),
    ("sh", "śaṁ"),
    ("e", "eṁ"),
    ("o", "oṁ"),
    ("f", "phaṁ"),
    ("q", "kaṁ"),
    ("w", "vaṁ"),
    ("x", "kṣaṁ"),
    ("z", "saṁ"),
    ("@", "aṁ"),
    ("#", "aṁ"),
    ("$", "aṁ"),
    ("%", "aṁ"),
];

lazy_static! {
    static ref PHONEME_MAP: HashMap<&'static str, &'static str> =
        PHONEME_ENTRIES.iter().copied().collect();
}

/// Looks up the phoneme token for a single input token, if one is defined.
pub fn map_token(token: &str) -> Option<&'static str> {
    PHONEME_MAP.get(token).copied()
}

/// Splits a normalized (lowercased, space-stripped) name into lookup tokens.
///
/// The digraph "sh" is consumed greedily left-to-right before the single
/// characters 's' and 'h' are considered. Single letters a-z and any
/// non-word character are tokens of their own; remaining word characters
/// (digits, underscores, non-ASCII letters) produce no token.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c == 's' {
            if let Some(&(_, 'h')) = chars.peek() {
                chars.next();
                tokens.push(&text[start..start + 2]);
                continue;
            }
        }
        if c.is_ascii_lowercase() || (!c.is_alphanumeric() && c != '_') {
            tokens.push(&text[start..start + c.len_utf8()]);
        }
    }

    tokens
}

/// Ordered list of phoneme tokens defining the feature space.
///
/// The index position of each token is its feature dimension, so the
/// vocabulary length must equal the network's input width (checked when a
/// [`Prophet`](super::Prophet) is built).
#[derive(Debug, Clone)]
pub struct PhonemeVocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl PhonemeVocabulary {
    /// Creates a vocabulary from an ordered token list.
    ///
    /// # Errors
    /// Returns `BuildError` if the list is empty or contains duplicates.
    pub fn new(tokens: Vec<String>) -> Result<Self, ProphecyError> {
        if tokens.is_empty() {
            return Err(ProphecyError::BuildError(
                "Phoneme vocabulary cannot be empty".into(),
            ));
        }

        let mut index = HashMap::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if index.insert(token.clone(), i).is_some() {
                return Err(ProphecyError::BuildError(format!(
                    "Duplicate phoneme token '{}' in vocabulary",
                    token
                )));
            }
        }

        Ok(Self { tokens, index })
    }

    /// Number of tokens, i.e. the feature-vector width.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Feature dimension of a phoneme token, if it is part of the vocabulary.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digraph_is_greedy() {
        let tokens = tokenize("ashok");
        assert_eq!(tokens, vec!["a", "sh", "o", "k"]);
    }

    #[test]
    fn test_trailing_s_is_kept() {
        let tokens = tokenize("niras");
        assert_eq!(tokens, vec!["n", "i", "r", "a", "s"]);
    }

    #[test]
    fn test_symbols_are_tokens_and_digits_are_not() {
        let tokens = tokenize("a1@_b");
        assert_eq!(tokens, vec!["a", "@", "b"]);
    }

    #[test]
    fn test_non_ascii_letters_are_skipped() {
        assert!(tokenize("āū").is_empty());
    }

    #[test]
    fn test_map_covers_letters_and_symbols() {
        assert_eq!(map_token("a"), Some("aṁ"));
        assert_eq!(map_token("sh"), Some("śaṁ"));
        assert_eq!(map_token("@"), Some("aṁ"));
        assert_eq!(map_token("!"), None);
    }

    #[test]
    fn test_vocabulary_rejects_duplicates() {
        let result = PhonemeVocabulary::new(vec!["aṁ".into(), "aṁ".into()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_vocabulary_index_round_trip() {
        let vocab =
            PhonemeVocabulary::new(vec!["aṁ".into(), "maṁ".into(), "haṁ".into()]).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.index_of("maṁ"), Some(1));
        assert_eq!(vocab.index_of("kaṁ"), None);
    }
}
