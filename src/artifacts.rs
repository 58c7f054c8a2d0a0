use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::prophet::{BinarizerParams, NetworkParams};

/// File name of the network-weights artifact.
pub const MODEL_FILE: &str = "model.json";
/// File name of the label-binarizer artifact.
pub const BINARIZER_FILE: &str = "binarizer.json";
/// File name of the phoneme-vocabulary artifact.
pub const PHONEMES_FILE: &str = "phonemes.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Locates and loads the three read-only artifacts (network weights, label
/// binarizer, phoneme vocabulary). Artifacts are loaded once at startup and
/// never written back.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    artifacts_dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store over the default artifacts directory.
    pub fn new_default() -> Self {
        Self::new(Self::get_default_artifacts_dir())
    }

    /// Returns the default artifacts directory path
    pub fn get_default_artifacts_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("SVARA_ARTIFACTS") {
            return PathBuf::from(path);
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("svara").join("artifacts");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("svara").join("artifacts");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("svara").join("artifacts")
    }

    pub fn new<P: AsRef<Path>>(artifacts_dir: P) -> Self {
        Self {
            artifacts_dir: artifacts_dir.as_ref().to_path_buf(),
        }
    }

    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifacts_dir.join(MODEL_FILE)
    }

    pub fn binarizer_path(&self) -> PathBuf {
        self.artifacts_dir.join(BINARIZER_FILE)
    }

    pub fn phonemes_path(&self) -> PathBuf {
        self.artifacts_dir.join(PHONEMES_FILE)
    }

    /// Checks whether all three artifact files are present.
    pub fn is_complete(&self) -> bool {
        let model = self.model_path();
        let binarizer = self.binarizer_path();
        let phonemes = self.phonemes_path();
        log::info!("Checking artifacts in {:?}:", self.artifacts_dir);
        log::info!("  Model: {:?} (exists: {})", model, model.exists());
        log::info!("  Binarizer: {:?} (exists: {})", binarizer, binarizer.exists());
        log::info!("  Phonemes: {:?} (exists: {})", phonemes, phonemes.exists());
        model.exists() && binarizer.exists() && phonemes.exists()
    }

    /// Loads the network weights artifact.
    pub fn load_network_params(&self) -> Result<NetworkParams, ArtifactError> {
        Self::read_network_params(self.model_path())
    }

    /// Loads the label-binarizer artifact.
    pub fn load_binarizer_params(&self) -> Result<BinarizerParams, ArtifactError> {
        Self::read_binarizer_params(self.binarizer_path())
    }

    /// Loads the ordered phoneme-vocabulary artifact.
    pub fn load_phoneme_tokens(&self) -> Result<Vec<String>, ArtifactError> {
        Self::read_phoneme_tokens(self.phonemes_path())
    }

    /// Loads a network weights artifact from an explicit path.
    pub fn read_network_params<P: AsRef<Path>>(path: P) -> Result<NetworkParams, ArtifactError> {
        load_json(path.as_ref())
    }

    /// Loads a label-binarizer artifact from an explicit path.
    pub fn read_binarizer_params<P: AsRef<Path>>(path: P) -> Result<BinarizerParams, ArtifactError> {
        load_json(path.as_ref())
    }

    /// Loads a phoneme-vocabulary artifact from an explicit path.
    pub fn read_phoneme_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ArtifactError> {
        load_json(path.as_ref())
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Read {} bytes from {:?}", bytes.len(), path);
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
