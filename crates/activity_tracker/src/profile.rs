use serde::{Deserialize, Serialize};

use crate::{TrackerError, TrackerResult};

/// The person an activity record belongs to.
///
/// `height` is the step-length basis for distance, so whichever unit is
/// used here carries through to the distance figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalProfile {
    pub name: String,
    pub weight: f64,
    pub height: f64,
}

impl PersonalProfile {
    pub fn new(name: impl Into<String>, weight: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            height,
        }
    }

    /// Ensure weight and height are usable by the formulas.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidProfile`] naming the first field that
    /// is not a finite, strictly positive number.
    pub fn validate(&self) -> TrackerResult<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(TrackerError::InvalidProfile {
                field: "weight",
                value: self.weight,
            });
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(TrackerError::InvalidProfile {
                field: "height",
                value: self.height,
            });
        }
        Ok(())
    }
}

/// Display text for a profile.
pub fn describe(profile: &PersonalProfile) -> String {
    format!(
        "Name: {}\nWeight: {:.2}\nHeight: {:.2}",
        profile.name, profile.weight, profile.height
    )
}
