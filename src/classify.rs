//! # Image classification contract
//!
//! The model that scores an image is an external collaborator. This module
//! fixes what a classifier hands back, a short list of labels ranked by
//! probability (in percent), and provides the ranking step that turns raw
//! class scores into that list.
//!
//! ## Example
//!
//! ```rust
//! use bitga::classify::{ImageClassifier, ScoringClassifier};
//!
//! let labels = vec!["cat".to_string(), "dog".to_string(), "fox".to_string()];
//! let classifier = ScoringClassifier::new(labels, |_image: &[u8]| Ok(vec![0.1, 2.0, 0.5]));
//!
//! let predictions = classifier.classify(b"fake image bytes").unwrap();
//! assert_eq!(predictions[0].label, "dog");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeneticError, Result};

/// Default number of predictions reported.
pub const TOP_K: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    /// Probability in percent, within `[0, 100]`.
    pub probability: f64,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}%)", self.label, self.probability)
    }
}

/// Classifies an encoded image.
pub trait ImageClassifier: Send + Sync {
    /// Returns at most [`TOP_K`] predictions, most probable first.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Classification` if the image cannot be decoded
    /// or the model is unavailable.
    fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>>;
}

/// Turns raw class scores into the `k` most probable labels.
///
/// Scores go through a softmax; probabilities are reported in percent.
///
/// # Errors
///
/// Returns `GeneticError::Classification` if there are no scores, the score
/// and label counts differ, or a score is not finite.
pub fn rank_predictions<L: AsRef<str>>(
    logits: &[f32],
    labels: &[L],
    k: usize,
) -> Result<Vec<Prediction>> {
    if logits.is_empty() {
        return Err(GeneticError::Classification(
            "Model returned no class scores".to_string(),
        ));
    }
    if logits.len() != labels.len() {
        return Err(GeneticError::Classification(format!(
            "Model returned {} class scores for {} labels",
            logits.len(),
            labels.len()
        )));
    }
    if let Some(bad) = logits.iter().find(|v| !v.is_finite()) {
        return Err(GeneticError::Classification(format!(
            "Non-finite class score encountered: {}",
            bad
        )));
    }

    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max) as f64;
    let exps: Vec<f64> = logits.iter().map(|&v| (v as f64 - max).exp()).collect();
    let total: f64 = exps.iter().sum();

    let mut ranked: Vec<(usize, f64)> = exps
        .iter()
        .enumerate()
        .map(|(idx, e)| (idx, e / total * 100.0))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(ranked
        .into_iter()
        .take(k)
        .map(|(idx, probability)| Prediction {
            label: labels[idx].as_ref().to_string(),
            probability,
        })
        .collect())
}

/// Parses a label file with one class name per line.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

/// A classifier built from a scoring model and its label list.
///
/// The model maps an encoded image to one raw score per label.
pub struct ScoringClassifier<M>
where
    M: Fn(&[u8]) -> Result<Vec<f32>> + Send + Sync,
{
    labels: Vec<String>,
    model: M,
    top_k: usize,
}

impl<M> ScoringClassifier<M>
where
    M: Fn(&[u8]) -> Result<Vec<f32>> + Send + Sync,
{
    pub fn new(labels: Vec<String>, model: M) -> Self {
        Self {
            labels,
            model,
            top_k: TOP_K,
        }
    }

    /// Reports fewer predictions. Values above [`TOP_K`] are capped.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.min(TOP_K);
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl<M> ImageClassifier for ScoringClassifier<M>
where
    M: Fn(&[u8]) -> Result<Vec<f32>> + Send + Sync,
{
    fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>> {
        if image.is_empty() {
            return Err(GeneticError::Classification("Image is empty".to_string()));
        }
        let logits = (self.model)(image)?;
        rank_predictions(&logits, &self.labels, self.top_k)
    }
}
