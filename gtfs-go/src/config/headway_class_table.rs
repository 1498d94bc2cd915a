use serde::{Deserialize, Serialize};

/// minimum departures per hour for each headway class. a positive rate below
/// `infrequent` is classified as rare.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HeadwayClassTable {
    pub very_frequent: f64,
    pub frequent: f64,
    pub regular: f64,
    pub infrequent: f64,
}

impl Default for HeadwayClassTable {
    fn default() -> Self {
        Self {
            very_frequent: 6.0,
            frequent: 4.0,
            regular: 2.0,
            infrequent: 1.0,
        }
    }
}

impl HeadwayClassTable {
    /// confirms the minimums are finite, non-negative and non-increasing.
    pub fn validate(&self) -> Result<(), String> {
        let minimums = [
            ("very_frequent", self.very_frequent),
            ("frequent", self.frequent),
            ("regular", self.regular),
            ("infrequent", self.infrequent),
        ];
        if let Some((name, value)) = minimums.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(format!(
                "headway class minimum '{name}' must be a non-negative number, found {value}"
            ));
        }
        for pair in minimums.windows(2) {
            let ((hi_name, hi), (lo_name, lo)) = (pair[0], pair[1]);
            if hi < lo {
                return Err(format!(
                    "headway class minimum '{hi_name}' ({hi}) is below '{lo_name}' ({lo})"
                ));
            }
        }
        Ok(())
    }
}
