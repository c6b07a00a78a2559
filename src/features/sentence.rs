/*! Sentence statistics

Computed over sentence lengths, a sentence length being its number of non-whitespace tokens.

- sentence count, either raw (`sent_count`) or per 100 tokens (`sent_per_100_tokens`),
- `avg_sent_len_tokens`,
- dispersion, either `std_sent_len_tokens` (population standard deviation) or `sent_cv_log`,
- `prop_long_sents` when a long sentence threshold is set.
!*/
use super::config::{Dispersion, SentenceCount};
use super::{ratio, Extract, Features};
use crate::nlp::Toolkit;

#[derive(Debug, Clone)]
pub struct SentenceStats {
    count: SentenceCount,
    dispersion: Dispersion,
    long_threshold: Option<usize>,
}

impl Default for SentenceStats {
    fn default() -> Self {
        Self::new(SentenceCount::Per100Tokens, Dispersion::CvLog, None)
    }
}

/// Mean and population standard deviation. `(0, 0)` for an empty slice.
fn mean_std(values: &[usize]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    let variance = values
        .iter()
        .map(|v| (*v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}

impl SentenceStats {
    pub fn new(
        count: SentenceCount,
        dispersion: Dispersion,
        long_threshold: Option<usize>,
    ) -> Self {
        Self {
            count,
            dispersion,
            long_threshold,
        }
    }

    fn count_key(&self) -> &'static str {
        match self.count {
            SentenceCount::Raw => "sent_count",
            SentenceCount::Per100Tokens => "sent_per_100_tokens",
        }
    }

    fn dispersion_key(&self) -> &'static str {
        match self.dispersion {
            Dispersion::Std => "std_sent_len_tokens",
            Dispersion::CvLog => "sent_cv_log",
        }
    }
}

impl Extract for SentenceStats {
    fn name(&self) -> &'static str {
        "sentence"
    }

    fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec![self.count_key(), "avg_sent_len_tokens", self.dispersion_key()];
        if self.long_threshold.is_some() {
            keys.push("prop_long_sents");
        }
        keys
    }

    fn extract(&self, text: &str, toolkit: &Toolkit) -> Features {
        let lengths: Vec<usize> = toolkit
            .tokenizer()
            .sentences(text)
            .iter()
            .map(Vec::len)
            .collect();
        let total_tokens: usize = lengths.iter().sum();
        let (mean, std) = mean_std(&lengths);

        let count = match self.count {
            SentenceCount::Raw => lengths.len() as f64,
            SentenceCount::Per100Tokens => 100.0 * ratio(lengths.len(), total_tokens),
        };
        let dispersion = match self.dispersion {
            Dispersion::Std => std,
            Dispersion::CvLog if mean > 0.0 => (std / mean).ln_1p(),
            Dispersion::CvLog => 0.0,
        };

        let mut features = Features::new();
        features.insert(self.count_key(), count);
        features.insert("avg_sent_len_tokens", mean);
        features.insert(self.dispersion_key(), dispersion);
        if let Some(threshold) = self.long_threshold {
            let long = lengths.iter().filter(|len| **len > threshold).count();
            features.insert("prop_long_sents", ratio(long, lengths.len()));
        }
        features
    }
}
