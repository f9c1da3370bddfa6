//! AQI categorization and health advisories for PM2.5 values

use std::fmt;

/// US EPA AQI severity band for a PM2.5 concentration.
///
/// Bands are ordered; breakpoints use `<=` semantics, so a value
/// exactly on a breakpoint falls in the lower category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Categorize a PM2.5 concentration (µg/m³)
    pub fn from_pm25(pm25: f64) -> Self {
        if pm25 <= 12.0 {
            AqiCategory::Good
        } else if pm25 <= 35.4 {
            AqiCategory::Moderate
        } else if pm25 <= 55.4 {
            AqiCategory::UnhealthyForSensitiveGroups
        } else if pm25 <= 150.4 {
            AqiCategory::Unhealthy
        } else if pm25 <= 250.4 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    /// Human-readable category label
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Canned health advisory for this band
    pub fn advisory(&self) -> &'static str {
        match self {
            AqiCategory::Good => {
                "Air quality is satisfactory, and air pollution poses little or no risk. \
                 Enjoy your outdoor activities!"
            }
            AqiCategory::Moderate => {
                "Air quality is acceptable; however, there may be a moderate health concern \
                 for a very small number of people who are unusually sensitive to air \
                 pollution. Consider reducing prolonged or heavy exertion if you are \
                 unusually sensitive."
            }
            AqiCategory::UnhealthyForSensitiveGroups => {
                "Members of sensitive groups may experience health effects. People with lung \
                 disease (such as asthma), heart disease, older adults, and children should \
                 limit prolonged or heavy outdoor exertion."
            }
            AqiCategory::Unhealthy => {
                "Everyone may begin to experience health effects; members of sensitive \
                 groups may experience more serious health effects. Sensitive groups should \
                 avoid all outdoor exertion."
            }
            AqiCategory::VeryUnhealthy => {
                "Health warnings of emergency conditions. Sensitive groups should remain \
                 indoors and keep activity levels low. Everyone else should avoid all \
                 outdoor exertion."
            }
            AqiCategory::Hazardous => {
                "Health alert: everyone may experience more serious health effects. \
                 Everyone should avoid all outdoor exertion. Consider wearing an N95 mask \
                 if you must go outside."
            }
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
