//! Binary classification metrics
//!
//! Metric derivations over confusion counts for the two-class detection
//! task. Zero-denominator cases return 0.0.

use serde::{Deserialize, Serialize};

/// Confusion counts for a binary classifier
///
/// "Positive" is the AI-Generated class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// AI images predicted AI
    pub true_positives: usize,
    /// Human images predicted AI
    pub false_positives: usize,
    /// AI images predicted human
    pub false_negatives: usize,
    /// Human images predicted human
    pub true_negatives: usize,
}

impl ConfusionCounts {
    /// Create from raw counts
    pub fn new(
        true_positives: usize,
        false_positives: usize,
        false_negatives: usize,
        true_negatives: usize,
    ) -> Self {
        Self {
            true_positives,
            false_positives,
            false_negatives,
            true_negatives,
        }
    }

    /// Total number of evaluated samples
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    /// Fraction of correct predictions
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.true_positives + self.true_negatives) as f64 / total as f64
    }

    /// TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        let denom = self.true_positives + self.false_positives;
        if denom == 0 {
            return 0.0;
        }
        self.true_positives as f64 / denom as f64
    }

    /// TP / (TP + FN)
    pub fn recall(&self) -> f64 {
        let denom = self.true_positives + self.false_negatives;
        if denom == 0 {
            return 0.0;
        }
        self.true_positives as f64 / denom as f64
    }

    /// Harmonic mean of precision and recall
    pub fn f1_score(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_classifier() {
        let cm = ConfusionCounts::new(50, 0, 0, 50);
        assert_eq!(cm.accuracy(), 1.0);
        assert_eq!(cm.precision(), 1.0);
        assert_eq!(cm.recall(), 1.0);
        assert_eq!(cm.f1_score(), 1.0);
    }

    #[test]
    fn test_empty_counts() {
        let cm = ConfusionCounts::default();
        assert_eq!(cm.total(), 0);
        assert_eq!(cm.accuracy(), 0.0);
        assert_eq!(cm.precision(), 0.0);
        assert_eq!(cm.recall(), 0.0);
        assert_eq!(cm.f1_score(), 0.0);
    }

    #[test]
    fn test_known_counts() {
        // The product's canonical evaluation panel counts
        let cm = ConfusionCounts::new(1247, 156, 89, 1308);
        assert_eq!(cm.total(), 2800);
        assert_relative_eq!(cm.accuracy(), 2555.0 / 2800.0, epsilon = 1e-12);
        assert_relative_eq!(cm.precision(), 1247.0 / 1403.0, epsilon = 1e-12);
        assert_relative_eq!(cm.recall(), 1247.0 / 1336.0, epsilon = 1e-12);
    }

    #[test]
    fn test_metrics_bounded() {
        let cm = ConfusionCounts::new(3, 7, 11, 2);
        for value in [cm.accuracy(), cm.precision(), cm.recall(), cm.f1_score()] {
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_never_predicts_positive() {
        let cm = ConfusionCounts::new(0, 0, 10, 90);
        assert_eq!(cm.precision(), 0.0);
        assert_eq!(cm.recall(), 0.0);
        assert_eq!(cm.f1_score(), 0.0);
        assert_relative_eq!(cm.accuracy(), 0.9, epsilon = 1e-12);
    }
}
