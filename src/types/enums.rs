use serde::{Serialize, Serializer};
use std::fmt;

/// Warning family (extracted from the message header)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WarningKind {
    Airmet,
    Sigmet,
    AerodromeWarning,
    /// No header pattern matched
    #[default]
    Unknown,
}

impl WarningKind {
    /// Parse from the header keyword (`AIRMET`, `SIGMET` or `AD WRNG`)
    ///
    /// Any run of whitespace inside `AD WRNG` is accepted.
    pub fn from_keyword(keyword: &str) -> Self {
        let mut words = keyword.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("AIRMET"), None, None) => WarningKind::Airmet,
            (Some("SIGMET"), None, None) => WarningKind::Sigmet,
            (Some("AD"), Some("WRNG"), None) => WarningKind::AerodromeWarning,
            _ => WarningKind::Unknown,
        }
    }

    /// Header label as it appears in decoded output
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::Airmet => "AIRMET",
            WarningKind::Sigmet => "SIGMET",
            WarningKind::AerodromeWarning => "AD WRNG",
            WarningKind::Unknown => "WARNING",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WarningKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Expected development of the warned phenomenon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningTrend {
    NoChange,
    Intensifying,
    Weakening,
}

impl WarningTrend {
    /// Lookup order used when a message carries more than one code
    pub const PRIORITY: [WarningTrend; 3] = [
        WarningTrend::NoChange,
        WarningTrend::Intensifying,
        WarningTrend::Weakening,
    ];

    /// Parse from the bare trend code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NC" => Some(WarningTrend::NoChange),
            "INTSF" => Some(WarningTrend::Intensifying),
            "WKN" => Some(WarningTrend::Weakening),
            _ => None,
        }
    }

    /// Bare trend code as found in the message
    pub fn code(&self) -> &'static str {
        match self {
            WarningTrend::NoChange => "NC",
            WarningTrend::Intensifying => "INTSF",
            WarningTrend::Weakening => "WKN",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WarningTrend::NoChange => "No Change (NC)",
            WarningTrend::Intensifying => "Intensifying (INTSF)",
            WarningTrend::Weakening => "Weakening (WKN)",
        }
    }
}

impl fmt::Display for WarningTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for WarningTrend {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
