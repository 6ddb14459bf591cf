use crate::constants::{DEFAULT_NGRAM_MAX, DEFAULT_NGRAM_MIN};

use super::error::EncodingError;

/// Character n-gram range for the encoder.
///
/// The range is part of the encoder state: queries must be tokenized with the
/// same range the corpus was fitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Smallest n-gram length, inclusive.
    pub ngram_min: usize,
    /// Largest n-gram length, inclusive.
    pub ngram_max: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            ngram_min: DEFAULT_NGRAM_MIN,
            ngram_max: DEFAULT_NGRAM_MAX,
        }
    }
}

impl EncoderConfig {
    /// Creates a config with an explicit n-gram range.
    pub fn new(ngram_min: usize, ngram_max: usize) -> Self {
        Self {
            ngram_min,
            ngram_max,
        }
    }

    /// Validates the n-gram range.
    pub fn validate(&self) -> Result<(), EncodingError> {
        if self.ngram_min == 0 || self.ngram_min > self.ngram_max {
            return Err(EncodingError::InvalidNgramRange {
                min: self.ngram_min,
                max: self.ngram_max,
            });
        }
        Ok(())
    }
}
