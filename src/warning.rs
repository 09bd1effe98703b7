//! AIRMET / SIGMET / aerodrome warning decoder
//!
//! A warning is first classified by its header. Area warnings (AIRMET and
//! SIGMET) and aerodrome warnings carry their location and phenomenon in
//! different places, so those two fields are extracted per family. Polygon,
//! flight levels and trend are family independent.

use crate::types::{Coordinate, DecodedWarning, WarningKind, WarningTrend};
use crate::utils::{group, join_lines, pattern};
use log::trace;

pattern!(
    HEADER,
    r"(AIRMET|SIGMET|AD\s+WRNG)(?:\s+([0-9A-Za-z_]+))?\s+VALID\s+([0-9]{6})/([0-9]{6})"
);
pattern!(AERODROME, r"^([A-Z]{4})\s+AD\s+WRNG");
pattern!(FIR, r"[A-Z]{4}\s+[A-Z\s]+FIR");
pattern!(AERODROME_PHENOMENON, r"VALID\s+[0-9]{6}/[0-9]{6}\s*(.*?)(?:FCST|OBS|=)");
pattern!(AREA_PHENOMENON, r"FIR\s+(.*?)\s+(?:FCST|OBS)\s+WI");
pattern!(AREA_PHENOMENON_FALLBACK, r"(?:SIGMET|AIRMET).*?\s+(.*?)\s+(?:FCST|OBS)\s+WI");
pattern!(COORDINATE, r"[NS][0-9]{4}\s+[EW][0-9]{5}");
pattern!(FLIGHT_LEVELS, r"SFC/FL[0-9]{3}|FL[0-9]{3}/[0-9]{3}|FL[0-9]{3}");
pattern!(TREND, r"\b(?:NC|INTSF|WKN)\b");

/// Decode a warning delivered as a sequence of lines
///
/// The lines are joined with single spaces for matching, while
/// [`DecodedWarning::raw`] keeps them joined with newlines. Never fails:
/// an unrecognized header leaves the kind at [`WarningKind::Unknown`].
///
/// # Example
///
/// ```
/// use il_met_decode::{WarningKind, decode_warning};
///
/// let warning = decode_warning(&[
///     "LLIB AD WRNG 2 VALID 260800/261200",
///     "BKN CLD 500/2000FT FCST WKN=",
/// ]);
/// assert_eq!(warning.kind, WarningKind::AerodromeWarning);
/// assert_eq!(warning.fir.as_deref(), Some("Aerodrome: LLIB"));
/// ```
pub fn decode_warning<S: AsRef<str>>(lines: &[S]) -> DecodedWarning {
    let text = join_lines(lines, " ");

    let mut warning = DecodedWarning {
        raw: join_lines(lines, "\n"),
        ..Default::default()
    };

    if let Some(caps) = HEADER.captures(&text) {
        warning.kind = WarningKind::from_keyword(&caps[1]);
        warning.number = group(&caps, 2);
        warning.valid_from = group(&caps, 3);
        warning.valid_to = group(&caps, 4);
    }
    trace!("warning classified as {}", warning.kind);

    let (fir, phenomenon) = match warning.kind {
        WarningKind::AerodromeWarning => (aerodrome_location(&text), aerodrome_phenomenon(&text)),
        _ => (area_location(&text), area_phenomenon(&text)),
    };
    warning.fir = fir;
    warning.phenomenon = phenomenon;

    warning.polygon = COORDINATE
        .find_iter(&text)
        .map(|m| Coordinate::from_pair(m.as_str()))
        .collect();

    warning.flight_levels = FLIGHT_LEVELS.find(&text).map(|m| m.as_str().to_string());
    warning.trend = trend(&text);

    warning
}

/// `Aerodrome: <code>` from a message starting with `<code> AD WRNG`
fn aerodrome_location(text: &str) -> Option<String> {
    AERODROME
        .captures(text)
        .map(|caps| format!("Aerodrome: {}", &caps[1]))
}

/// Free text between the validity clause and the first `FCST`, `OBS` or `=`
fn aerodrome_phenomenon(text: &str) -> Option<String> {
    let caps = AERODROME_PHENOMENON.captures(text)?;
    let phenomenon = caps[1].trim();
    (!phenomenon.is_empty()).then(|| phenomenon.to_string())
}

/// `<code> <name> FIR`, unless the match ran into the validity clause
fn area_location(text: &str) -> Option<String> {
    let fir = FIR.find(text)?.as_str();
    (!fir.contains("VALID")).then(|| fir.trim().to_string())
}

/// Text between the FIR name and `FCST WI` / `OBS WI`
///
/// Falls back to the text after the AIRMET/SIGMET keyword when there is no
/// FIR name in front of the phenomenon.
fn area_phenomenon(text: &str) -> Option<String> {
    AREA_PHENOMENON
        .captures(text)
        .or_else(|| AREA_PHENOMENON_FALLBACK.captures(text))
        .map(|caps| caps[1].trim().to_string())
}

/// Trend code with the highest priority among all codes in the message
fn trend(text: &str) -> Option<WarningTrend> {
    let found: Vec<_> = TREND
        .find_iter(text)
        .filter_map(|m| WarningTrend::from_code(m.as_str()))
        .collect();
    WarningTrend::PRIORITY.into_iter().find(|trend| found.contains(trend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn sigmet_header_without_number() {
        let warning = decode_warning(&["LLLL SIGMET VALID 261000/261400 LLBD-"]);
        assert_eq!(warning.kind, WarningKind::Sigmet);
        assert_none!(warning.number);
        assert_some_eq!(warning.valid_from.as_deref(), "261000");
        assert_some_eq!(warning.valid_to.as_deref(), "261400");
    }

    #[test]
    fn alphanumeric_serial_number() {
        let warning = decode_warning(&["LLLL SIGMET A3 VALID 261000/261400 LLBD-"]);
        assert_some_eq!(warning.number.as_deref(), "A3");
    }

    #[test]
    fn aerodrome_warning_with_extra_spaces() {
        let warning =
            decode_warning(&["LLBG AD  WRNG 1 VALID 261500/261900 SFC WSPD 25KT MAX35 OBS="]);
        assert_eq!(warning.kind, WarningKind::AerodromeWarning);
        assert_some_eq!(warning.fir.as_deref(), "Aerodrome: LLBG");
        assert_some_eq!(warning.phenomenon.as_deref(), "SFC WSPD 25KT MAX35");
    }

    #[test]
    fn aerodrome_warning_code_must_lead() {
        let warning = decode_warning(&["WRNG LLBG AD WRNG 1 VALID 261500/261900 TS="]);
        assert_eq!(warning.kind, WarningKind::AerodromeWarning);
        assert_none!(warning.fir);
        assert_some_eq!(warning.phenomenon.as_deref(), "TS");
    }

    #[test]
    fn aerodrome_warning_empty_phenomenon() {
        let warning = decode_warning(&["LLIB AD WRNG 2 VALID 260800/261200 FCST NC="]);
        assert_none!(warning.phenomenon);
        assert_eq!(warning.trend, Some(WarningTrend::NoChange));
    }

    #[test]
    fn area_phenomenon_after_fir() {
        let warning = decode_warning(&[
            "LLLL SIGMET 2 VALID 261000/261400 LLBD-",
            "LLLL TEL AVIV FIR EMBD TS OBS WI N3200 E03430 N3130 E03500 TOP FL350 INTSF=",
        ]);
        assert_some_eq!(warning.fir.as_deref(), "LLLL TEL AVIV FIR");
        assert_some_eq!(warning.phenomenon.as_deref(), "EMBD TS");
        assert_some_eq!(warning.flight_levels.as_deref(), "FL350");
        assert_eq!(warning.trend, Some(WarningTrend::Intensifying));
    }

    #[test]
    fn area_phenomenon_fallback_without_fir() {
        let warning = decode_warning(&["SIGMET SEV TURB FCST WI N3300 E03400"]);
        assert_none!(warning.fir);
        assert_some_eq!(warning.phenomenon.as_deref(), "SEV TURB");
    }

    #[test]
    fn area_phenomenon_fallback_runs_over_header() {
        let warning = decode_warning(&[
            "LLLL SIGMET 3 VALID 261000/261400 LLBD-",
            "SEV TURB FCST WI N3300 E03400",
        ]);
        assert_none!(warning.fir);
        assert_some_eq!(
            warning.phenomenon.as_deref(),
            "3 VALID 261000/261400 LLBD- SEV TURB"
        );
    }

    #[test]
    fn fir_rejected_when_it_contains_validity() {
        let warning =
            decode_warning(&["LLLL SIGMET VALID TEL AVIV FIR SEV TURB OBS WI N3300 E03400"]);
        assert_eq!(warning.kind, WarningKind::Unknown);
        assert_none!(warning.fir);
        assert_some_eq!(warning.phenomenon.as_deref(), "SEV TURB");
    }

    #[test]
    fn polygon_in_order_of_appearance() {
        let warning = decode_warning(&[
            "LLLL AIRMET 1 VALID 260800/261200 LLBD-",
            "LLLL TEL AVIV FIR MOD TURB FCST WI N3317 E03450 - N3315",
            "E03500 - S0100 W00200 SFC/FL100 WKN=",
        ]);

        let raw: Vec<_> = warning.polygon.iter().map(|c| c.raw.as_str()).collect();
        assert_eq!(raw, ["N3317 E03450", "N3315 E03500", "S0100 W00200"]);
        assert_some_eq!(warning.flight_levels.as_deref(), "SFC/FL100");
    }

    #[test]
    fn flight_level_range() {
        let warning = decode_warning(&["AIRMET FL070/140"]);
        assert_some_eq!(warning.flight_levels.as_deref(), "FL070/140");
    }

    #[test]
    fn trend_priority() {
        assert_eq!(trend("WKN INTSF NC"), Some(WarningTrend::NoChange));
        assert_eq!(trend("WKN INTSF"), Some(WarningTrend::Intensifying));
        assert_eq!(trend("WKN="), Some(WarningTrend::Weakening));
        assert_eq!(trend("FNCX WKNG"), None);
    }

    #[test]
    fn trend_code_as_separate_word() {
        assert_eq!(trend("MOD ICE NC="), Some(WarningTrend::NoChange));
        assert_eq!(trend("SEV TURB\nINTSF"), Some(WarningTrend::Intensifying));
        assert_eq!(trend("INTSFX WKN-"), Some(WarningTrend::Weakening));
    }

    #[test]
    fn non_ascii_digits_are_not_matched() {
        let warning = decode_warning(&["AIRMET 5 VALID ٢٦٠٨٠٠/٢٦١٢٠٠ N٣٣١٧ E٠٣٤٥٠ FL٠٧٠"]);
        assert_eq!(warning.kind, WarningKind::Unknown);
        assert_none!(warning.number);
        assert_none!(warning.valid_from);
        assert_none!(warning.valid_to);
        assert!(warning.polygon.is_empty());
        assert_none!(warning.flight_levels);
    }

    #[test]
    fn unrecognized_message() {
        let warning = decode_warning(&["NOTHING TO SEE", "HERE"]);
        assert_eq!(warning.kind, WarningKind::Unknown);
        assert!(warning.polygon.is_empty());
        assert!(!warning.has_data());
        assert_eq!(warning.raw, "NOTHING TO SEE\nHERE");
    }

    #[test]
    fn no_lines() {
        let lines: [&str; 0] = [];
        let warning = decode_warning(&lines);
        assert_eq!(warning, DecodedWarning::default());
    }
}
