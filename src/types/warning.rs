use crate::types::{Coordinate, WarningKind, WarningTrend};
use serde::Serialize;

/// Decoded AIRMET, SIGMET or aerodrome warning
///
/// Optional fields are only set when their pattern matched. `raw` holds the
/// input lines joined with newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    /// Serial number from the header
    pub number: Option<String>,
    /// `<code> <name> FIR` for area warnings, `Aerodrome: <code>` for AD WRNG
    pub fir: Option<String>,
    /// Start of validity, `DDHHMM`
    pub valid_from: Option<String>,
    /// End of validity, `DDHHMM`
    pub valid_to: Option<String>,
    pub phenomenon: Option<String>,
    /// Boundary vertices in order of appearance
    pub polygon: Vec<Coordinate>,
    /// e.g. `FL070/140`, `SFC/FL100` or `FL250`
    pub flight_levels: Option<String>,
    pub trend: Option<WarningTrend>,
    pub raw: String,
}

impl DecodedWarning {
    /// Check if any structured field was extracted from the message
    pub fn has_data(&self) -> bool {
        self.kind != WarningKind::Unknown
            || self.fir.is_some()
            || self.phenomenon.is_some()
            || !self.polygon.is_empty()
            || self.flight_levels.is_some()
            || self.trend.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown_warning() {
        let warning = DecodedWarning::default();
        assert_eq!(warning.kind, WarningKind::Unknown);
        assert!(warning.polygon.is_empty());
        assert!(!warning.has_data());
    }

    #[test]
    fn serializes_kind_under_type_key() {
        let warning = DecodedWarning {
            kind: WarningKind::Sigmet,
            valid_from: Some("260800".to_string()),
            trend: Some(WarningTrend::Intensifying),
            polygon: vec![Coordinate::from_pair("N3317 E03450")],
            ..Default::default()
        };

        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["type"], "SIGMET");
        assert_eq!(json["validFrom"], "260800");
        assert_eq!(json["trend"], "Intensifying (INTSF)");
        assert_eq!(json["polygon"][0]["lat"], "N3317");
        assert!(json["flightLevels"].is_null());
    }
}
