use std::fmt;

use serde::Serialize;

/// CSS class used to color a freshness indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusClass {
    #[serde(rename = "bg-disabled")]
    Disabled,
    #[serde(rename = "bg-error")]
    Error,
    /// Literal `null` class token, not the absence of a class.
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "bg-recent")]
    Recent,
    #[serde(rename = "bg-old")]
    Old,
}

impl StatusClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Disabled => "bg-disabled",
            StatusClass::Error => "bg-error",
            StatusClass::Null => "null",
            StatusClass::Recent => "bg-recent",
            StatusClass::Old => "bg-old",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a completeness ratio to its status class.
///
/// Missing or NaN input is `bg-disabled`. Each threshold is exclusive, so
/// exact boundary values land in the higher bucket. Out-of-range input is
/// not clamped.
pub fn full_class(val: Option<f64>) -> StatusClass {
    let Some(val) = val.filter(|v| !v.is_nan()) else {
        return StatusClass::Disabled;
    };
    if val < 0.10 {
        StatusClass::Error
    } else if val < 0.25 {
        StatusClass::Null
    } else if val < 0.50 {
        StatusClass::Recent
    } else {
        StatusClass::Old
    }
}
