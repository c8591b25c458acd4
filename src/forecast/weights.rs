use serde::{Deserialize, Serialize};

/// Blend weights for the three forecast strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleWeights {
    pub moving_average_weight: f64,
    pub linear_trend_weight: f64,
    pub exp_smoothing_weight: f64,
}

impl Default for EnsembleWeights {
    fn default() -> Self {
        Self {
            moving_average_weight: 0.3,
            linear_trend_weight: 0.4,
            exp_smoothing_weight: 0.3,
        }
    }
}

impl EnsembleWeights {
    pub fn new(
        moving_average_weight: f64,
        linear_trend_weight: f64,
        exp_smoothing_weight: f64,
    ) -> Result<Self, String> {
        let total = moving_average_weight + linear_trend_weight + exp_smoothing_weight;
        if (total - 1.0).abs() > 0.001 {
            return Err(format!("Weights must sum to 1.0, got: {}", total));
        }
        if moving_average_weight < 0.0 || linear_trend_weight < 0.0 || exp_smoothing_weight < 0.0 {
            return Err("All weights must be non-negative".to_string());
        }
        Ok(Self {
            moving_average_weight,
            linear_trend_weight,
            exp_smoothing_weight,
        })
    }
}
