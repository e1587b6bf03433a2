use crate::error::{MiningError, Result};

// Thresholds for one mining run. Defaults match the dashboard's initial
// slider positions and its fixed itemset size bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MiningParams {
    pub min_support: f64,
    pub min_confidence: f64,
    pub min_lift: f64,
    pub max_len: usize,
}

impl Default for MiningParams {
    fn default() -> MiningParams {
        MiningParams {
            min_support: 0.05,
            min_confidence: 0.5,
            min_lift: 1.2,
            max_len: 3,
        }
    }
}

impl MiningParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(MiningError::InvalidParameter(format!(
                "minimum support must be in range (0,1], got {}",
                self.min_support
            )));
        }
        if !(self.min_confidence > 0.0 && self.min_confidence <= 1.0) {
            return Err(MiningError::InvalidParameter(format!(
                "minimum confidence must be in range (0,1], got {}",
                self.min_confidence
            )));
        }
        if !(self.min_lift >= 0.0 && self.min_lift.is_finite()) {
            return Err(MiningError::InvalidParameter(format!(
                "minimum lift must be a finite value >= 0, got {}",
                self.min_lift
            )));
        }
        if self.max_len == 0 {
            return Err(MiningError::InvalidParameter(
                "maximum itemset length must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
