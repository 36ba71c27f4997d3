//! Accuracy measurement
//!
//! Absolute per-channel error between a reference and a result, summarized
//! as mean / max / 95th percentile.

use serde::Serialize;

/// Statistics from an error comparison
#[derive(Debug, Clone, Serialize)]
pub struct ErrorStats {
    /// Mean absolute error
    pub mean: f64,
    /// Maximum absolute error
    pub max: f64,
    /// 95th percentile absolute error
    pub p95: f64,
    /// Number of compared values
    pub count: usize,
}

impl ErrorStats {
    /// Summarize a list of absolute errors
    pub fn from_errors(mut errors: Vec<f64>) -> Self {
        errors.sort_by(|a, b| a.total_cmp(b));

        let count = errors.len();
        let mean = if count == 0 {
            0.0
        } else {
            errors.iter().sum::<f64>() / count as f64
        };
        let max = errors.last().copied().unwrap_or(0.0);
        let p95_idx = (count as f64 * 0.95) as usize;
        let p95 = errors.get(p95_idx).copied().unwrap_or(max);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check that no error exceeds `tolerance`
    pub fn is_within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }

    /// Render as a JSON report line
    pub fn to_json(&self, label: &str) -> serde_json::Result<String> {
        serde_json::to_string(&serde_json::json!({ "test": label, "stats": self }))
    }
}

/// Compare two equally long value slices
pub fn compare_values(reference: &[f64], result: &[f64]) -> ErrorStats {
    assert_eq!(reference.len(), result.len());

    let errors = reference
        .iter()
        .zip(result)
        .map(|(a, b)| (a - b).abs())
        .collect();
    ErrorStats::from_errors(errors)
}
