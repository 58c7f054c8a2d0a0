//! A thread-safe phoneme-based reader that maps a name to four cosmic
//! attribute labels (chakra, rasa, bhava, deva) through a trained
//! multi-label network, then renders a templated narrative.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use svara::Prophet;
//!
//! let prophet = Prophet::builder()
//!     .with_artifacts("artifacts")?
//!     .build()?;
//!
//! let prophecy = prophet.predict("Mahan")?;
//! println!("Chakra: {}", prophecy.chakra);
//! println!("Rasa: {}", prophecy.rasa);
//! println!("Bhava: {}", prophecy.bhava);
//! println!("Deva: {}", prophecy.deva);
//! println!("{}", prophecy.narrative);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The prophet holds its artifacts behind `Arc` and never mutates them, so
//! it can be shared across threads:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use svara::Prophet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let prophet = Arc::new(Prophet::builder()
//!     .with_artifacts("artifacts")?
//!     .build()?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let prophet = Arc::clone(&prophet);
//!     handles.push(thread::spawn(move || {
//!         prophet.predict("Asha").unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Determinism
//!
//! Feature extraction and inference are deterministic; only the narrative's
//! template selection is random. `predict_with_rng` accepts a seeded RNG
//! when reproducible output is needed.

pub mod artifacts;
pub mod prophet;

pub use artifacts::{ArtifactError, ArtifactStore};
pub use prophet::{
    BinarizerParams, Extraction, FeatureExtractor, LabelBinarizer, LabelGroup, LayerParams,
    MlpNetwork, NetworkParams, PhonemeVocabulary, Prophecy, ProphecyError, Prophet,
    ProphetBuilder, ProphetInfo,
};

pub fn init_logger() {
    env_logger::init();
}
