//! Character n-gram TF-IDF encoder.
//!
//! Turns a domain string into an L2-normalized vector over the n-gram
//! vocabulary learned from the legitimate-domain corpus. Because every vector
//! is unit-normalized, inner product downstream equals cosine similarity.

/// Encoder n-gram range configuration.
pub mod config;
mod error;


pub use config::EncoderConfig;
pub use error::EncodingError;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

/// TF-IDF encoder over overlapping character n-grams.
///
/// Built once from the corpus by [`NgramEncoder::fit`] and read-only
/// afterwards. The vocabulary and IDF weights that encode queries must be the
/// exact state that encoded the corpus vectors; a mismatched vocabulary
/// silently produces meaningless similarity scores, which is why encoder
/// state travels inside the artifact bundle as one unit.
#[derive(Debug, Clone)]
pub struct NgramEncoder {
    config: EncoderConfig,
    vocabulary: Vec<String>,
    lookup: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl NgramEncoder {
    /// Learns the vocabulary and IDF weights from the corpus.
    ///
    /// The vocabulary is the sorted set of n-grams seen across the corpus, so
    /// column order is stable for a given corpus and range. IDF uses the
    /// smoothed form `ln((1 + n_docs) / (1 + df)) + 1`.
    pub fn fit(corpus: &[String], config: EncoderConfig) -> Result<Self, EncodingError> {
        config.validate()?;

        if corpus.is_empty() {
            return Err(EncodingError::EmptyCorpus);
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for domain in corpus {
            let folded = fold(domain);
            let grams: BTreeSet<String> = ngrams(&folded, &config).into_iter().collect();
            for gram in grams {
                *document_frequency.entry(gram).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(EncodingError::NoFeatures);
        }

        let n_docs = corpus.len();
        let mut vocabulary = Vec::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (gram, df) in document_frequency {
            idf.push(((1 + n_docs) as f32 / (1 + df) as f32).ln() + 1.0);
            vocabulary.push(gram);
        }

        debug!(
            n_docs,
            vocab_size = vocabulary.len(),
            ngram_min = config.ngram_min,
            ngram_max = config.ngram_max,
            "Fitted n-gram encoder"
        );

        Self::from_parts(config, vocabulary, idf)
    }

    /// Restores an encoder from previously persisted state.
    pub fn from_state(
        config: EncoderConfig,
        vocabulary: Vec<String>,
        idf: Vec<f32>,
    ) -> Result<Self, EncodingError> {
        config.validate()?;

        if vocabulary.is_empty() {
            return Err(EncodingError::InvalidState {
                reason: "vocabulary is empty".to_string(),
            });
        }

        if vocabulary.len() != idf.len() {
            return Err(EncodingError::InvalidState {
                reason: format!(
                    "vocabulary has {} entries but idf has {}",
                    vocabulary.len(),
                    idf.len()
                ),
            });
        }

        Self::from_parts(config, vocabulary, idf)
    }

    fn from_parts(
        config: EncoderConfig,
        vocabulary: Vec<String>,
        idf: Vec<f32>,
    ) -> Result<Self, EncodingError> {
        let mut lookup = HashMap::with_capacity(vocabulary.len());
        for (column, gram) in vocabulary.iter().enumerate() {
            if lookup.insert(gram.clone(), column).is_some() {
                return Err(EncodingError::InvalidState {
                    reason: format!("duplicate vocabulary n-gram '{gram}'"),
                });
            }
        }

        Ok(Self {
            config,
            vocabulary,
            lookup,
            idf,
        })
    }

    /// Encodes a domain into an L2-normalized TF-IDF vector.
    ///
    /// N-grams absent from the fitted vocabulary are dropped (accepted
    /// information loss, not an error). A domain sharing no n-grams with the
    /// vocabulary encodes to the zero vector, for which downstream similarity
    /// is 0 against every candidate.
    pub fn encode(&self, domain: &str) -> Result<Vec<f32>, EncodingError> {
        let folded = fold(domain);
        if folded.is_empty() {
            return Err(EncodingError::EmptyDomain);
        }

        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for gram in ngrams(&folded, &self.config) {
            if let Some(&column) = self.lookup.get(&gram) {
                vector[column] += 1.0;
            }
        }

        for (value, weight) in vector.iter_mut().zip(self.idf.iter()) {
            *value *= weight;
        }

        l2_normalize(&mut vector);
        Ok(vector)
    }

    /// Dimensionality of encoded vectors.
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The fitted vocabulary, in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// IDF weights, aligned with [`vocabulary`](Self::vocabulary).
    pub fn idf(&self) -> &[f32] {
        &self.idf
    }

    /// The n-gram range this encoder was fitted with.
    pub fn config(&self) -> EncoderConfig {
        self.config
    }
}

/// Case-folds a domain for tokenization. DNS names are case-insensitive.
fn fold(domain: &str) -> String {
    domain.trim().to_lowercase()
}

/// Collects every overlapping character n-gram of `folded` for the
/// configured range. Strings shorter than `ngram_min` yield nothing.
fn ngrams(folded: &str, config: &EncoderConfig) -> Vec<String> {
    let chars: Vec<char> = folded.chars().collect();
    let mut grams = Vec::new();
    for n in config.ngram_min..=config.ngram_max {
        if chars.len() < n {
            break;
        }
        for window in chars.windows(n) {
            grams.push(window.iter().collect());
        }
    }
    grams
}

/// Scales a vector to unit L2 norm in place. The zero vector is left as-is.
pub(crate) fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}
