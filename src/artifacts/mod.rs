//! Index/corpus artifact store.
//!
//! A bundle carries everything a query needs: the encoder state (n-gram
//! range, vocabulary, IDF weights), the corpus domains in id order, and
//! their normalized vectors. The three are built together and loaded
//! together; loading pieces from different builds silently breaks similarity
//! scores, so the bundle is one document.
//!
//! Building is the offline training step; it runs once, and the loaded
//! artifacts are read-only at query time.

mod error;


pub use error::ArtifactLoadError;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::ARTIFACT_FORMAT_VERSION;
use crate::encoder::{EncoderConfig, NgramEncoder};
use crate::index::FlatIndex;
use crate::retriever::CandidateRetriever;

/// Persisted encoder state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderState {
    pub ngram_min: usize,
    pub ngram_max: usize,
    /// Vocabulary n-grams in column order.
    pub vocabulary: Vec<String>,
    /// IDF weights aligned with `vocabulary`.
    pub idf: Vec<f32>,
}

/// The on-disk artifact bundle (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub version: u32,
    pub encoder: EncoderState,
    /// Legitimate domains; position is the corpus id.
    pub domains: Vec<String>,
    /// One L2-normalized vector per domain, in id order.
    pub vectors: Vec<Vec<f32>>,
}

impl ArtifactBundle {
    /// Offline training: fits the encoder on `domains` and encodes the whole
    /// corpus with it.
    pub fn build(domains: Vec<String>, config: EncoderConfig) -> Result<Self, ArtifactLoadError> {
        let mut seen = HashSet::new();
        for domain in &domains {
            if !seen.insert(domain.to_lowercase()) {
                warn!(domain = %domain, "Duplicate domain in corpus; both ids are kept");
            }
        }

        let encoder = NgramEncoder::fit(&domains, config)?;
        let vectors = domains
            .iter()
            .map(|domain| encoder.encode(domain))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            corpus_size = domains.len(),
            vocab_size = encoder.vocab_size(),
            "Built artifact bundle"
        );

        Ok(Self {
            version: ARTIFACT_FORMAT_VERSION,
            encoder: EncoderState {
                ngram_min: encoder.config().ngram_min,
                ngram_max: encoder.config().ngram_max,
                vocabulary: encoder.vocabulary().to_vec(),
                idf: encoder.idf().to_vec(),
            },
            domains,
            vectors,
        })
    }

    /// Reads a bundle from disk and checks its format version.
    pub fn load(path: &Path) -> Result<Self, ArtifactLoadError> {
        let raw = fs::read_to_string(path).map_err(|source| ArtifactLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let bundle: Self =
            serde_json::from_str(&raw).map_err(|source| ArtifactLoadError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        if bundle.version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactLoadError::UnsupportedVersion {
                found: bundle.version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }

        info!(
            path = %path.display(),
            corpus_size = bundle.domains.len(),
            vocab_size = bundle.encoder.vocabulary.len(),
            "Loaded artifact bundle"
        );

        Ok(bundle)
    }

    /// Writes the bundle as JSON.
    pub fn save(&self, path: &Path) -> Result<(), ArtifactLoadError> {
        let json = serde_json::to_string(self).map_err(|source| ArtifactLoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, json).map_err(|source| ArtifactLoadError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Saved artifact bundle");
        Ok(())
    }

    /// Reconstructs the query-time retrieval context, validating every
    /// cross-artifact invariant on the way.
    pub fn into_retriever(self) -> Result<CandidateRetriever<FlatIndex>, ArtifactLoadError> {
        let encoder = NgramEncoder::from_state(
            EncoderConfig::new(self.encoder.ngram_min, self.encoder.ngram_max),
            self.encoder.vocabulary,
            self.encoder.idf,
        )?;
        let index = FlatIndex::new(self.vectors)?;
        Ok(CandidateRetriever::new(encoder, index, self.domains)?)
    }
}

/// Loads a bundle from `artifact_path`, or builds one from `corpus_path` and
/// saves it when the artifact file does not exist yet.
pub fn load_or_build(
    artifact_path: &Path,
    corpus_path: Option<&Path>,
) -> Result<ArtifactBundle, ArtifactLoadError> {
    if artifact_path.exists() {
        return ArtifactBundle::load(artifact_path);
    }

    let Some(corpus_path) = corpus_path else {
        return Err(ArtifactLoadError::NotFound {
            path: artifact_path.to_path_buf(),
        });
    };

    info!(
        corpus = %corpus_path.display(),
        artifact = %artifact_path.display(),
        "Artifact file missing; building from corpus"
    );

    let domains = read_corpus_file(corpus_path)?;
    let bundle = ArtifactBundle::build(domains, EncoderConfig::default())?;
    bundle.save(artifact_path)?;
    Ok(bundle)
}

/// Reads a corpus file: one domain per line, blank lines and `#` comments
/// skipped.
pub fn read_corpus_file(path: &Path) -> Result<Vec<String>, ArtifactLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
