#![allow(dead_code)]

use std::fs;
use std::path::Path;

use svara::{
    BinarizerParams, LabelGroup, LayerParams, NetworkParams, Prophet, ProphetBuilder,
};

/// The 51 matrika phoneme tokens the reference artifacts were trained with:
/// 16 vowels followed by 35 consonants, in traditional order.
pub const REFERENCE_PHONEMES: &[&str] = &[
    // vowels
    "aṁ", "āṁ", "iṁ", "īṁ", "uṁ", "ūṁ", "ṛṁ", "ṝṁ", "ḷṁ", "ḹṁ", "eṁ", "aiṁ", "oṁ", "auṁ",
    "aṃ", "aḥ",
    // consonants
    "kaṁ", "khaṁ", "gaṁ", "ghaṁ", "ṅaṁ", "caṁ", "chaṁ", "jaṁ", "jhaṁ", "ñaṁ", "ṭaṁ", "ṭhaṁ",
    "ḍaṁ", "ḍhaṁ", "ṇaṁ", "taṁ", "thaṁ", "daṁ", "dhaṁ", "naṁ", "paṁ", "phaṁ", "baṁ", "bhaṁ",
    "maṁ", "yaṁ", "raṁ", "laṁ", "vaṁ", "śaṁ", "ṣaṁ", "saṁ", "haṁ", "ḻaṁ", "kṣaṁ",
];

pub const CHAKRAS: &[&str] = &[
    "Vishuddha",
    "Anahata",
    "Muladhara",
    "Svadhisthana",
    "Manipura",
    "Ajna",
    "Sahasrara",
    "Svadhisthana (Iḍā)",
    "Svadhisthana (Piṅgalā)",
];
pub const RASAS: &[&str] = &["Shringara", "Karuna", "Vira", "Shanta", "Adbhuta", "Hasya"];
pub const BHAVAS: &[&str] = &["Rati", "Hasa", "Shoka", "Krodha", "Utsaha", "Bhaya", "Vismaya"];
pub const DEVAS: &[&str] = &[
    "Saraswati", "Vishnu", "Shiva", "Lakshmi", "Ganesha", "Hanuman", "Durga", "Brahma",
];

/// Output units the reference weights always push above the 0.5 threshold:
/// Anahata (1), Karuna (9 + 1), Utsaha (15 + 4), Vishnu (22 + 1).
pub const EXPECTED_LABELS: (&str, &str, &str, &str) = ("Anahata", "Karuna", "Utsaha", "Vishnu");
const HOT_UNITS: &[usize] = &[1, 10, 19, 23];

pub fn reference_phonemes() -> Vec<String> {
    REFERENCE_PHONEMES.iter().map(|t| t.to_string()).collect()
}

pub fn reference_binarizer() -> BinarizerParams {
    let group = |name: &str, labels: &[&str]| LabelGroup {
        name: name.to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
    };
    BinarizerParams {
        groups: vec![
            group("chakra", CHAKRAS),
            group("rasa", RASAS),
            group("bhava", BHAVAS),
            group("deva", DEVAS),
        ],
    }
}

/// Reference-architecture weights (51 -> 128 -> 64 -> 32 -> 30) with zero
/// weight matrices and hand-set output biases, so the prediction is the
/// same four labels for every input.
pub fn reference_network() -> NetworkParams {
    let sizes = [51usize, 128, 64, 32, 30];
    let layers = sizes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (n_in, n_out) = (pair[0], pair[1]);
            let bias = if i == sizes.len() - 2 {
                (0..n_out)
                    .map(|u| if HOT_UNITS.contains(&u) { 2.0 } else { -2.0 })
                    .collect()
            } else {
                vec![0.1; n_out]
            };
            LayerParams {
                weight: vec![vec![0.0; n_in]; n_out],
                bias,
            }
        })
        .collect();
    NetworkParams {
        input_size: 51,
        hidden_sizes: vec![128, 64, 32],
        output_size: 30,
        layers,
    }
}

/// Writes the three reference artifacts into a directory.
pub fn write_artifacts(dir: &Path) {
    fs::write(
        dir.join("phonemes.json"),
        serde_json::to_vec(&reference_phonemes()).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join("binarizer.json"),
        serde_json::to_vec(&reference_binarizer()).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join("model.json"),
        serde_json::to_vec(&reference_network()).unwrap(),
    )
    .unwrap();
}

/// Builds a prophet over the reference fixtures without touching disk.
pub fn reference_prophet() -> Prophet {
    use svara::{LabelBinarizer, MlpNetwork, PhonemeVocabulary};

    ProphetBuilder::new()
        .with_components(
            PhonemeVocabulary::new(reference_phonemes()).unwrap(),
            MlpNetwork::from_params(reference_network()).unwrap(),
            LabelBinarizer::new(reference_binarizer()).unwrap(),
        )
        .unwrap()
        .build()
        .expect("Failed to build reference prophet")
}
