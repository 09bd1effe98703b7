//! ATIS / MET_REP decoder
//!
//! The message is decoded by a fixed list of independent, keyword anchored
//! pattern extractions over the full text. A pattern that does not match
//! simply leaves its field unset.

use crate::types::{DecodedAtis, GeneralWind, RunwayWind};
use crate::utils::{group, pattern};
use log::trace;

pattern!(HEADER, r"(?:MET_REP|ATIS)\s+([A-Z]{4})\s+([0-9]{6}Z)");
pattern!(GENERAL_WIND, r"WIND\s+([0-9]{3}|VRB)/([0-9]{2,3})(?:G([0-9]{2,3}))?KT");
pattern!(
    RUNWAY_WIND,
    r"RWY\s+([0-9]{2}[LRC]?)\s+(?:TDZ\s+)?([0-9]{3}|VRB)/([0-9]{2,3})KT(?:\s+MAX([0-9]{2,3}))?(?:\s+MNM([0-9]{1,3}))?"
);
pattern!(VISIBILITY, r"VIS\s+([0-9]+(?:KM|M))");
pattern!(CLOUDS, r"CLD\s+((?:(?:FEW|SCT|BKN|OVC|NSC|CB|TCU)\s*(?:[0-9]{3,4}FT)?\s*)+)");
pattern!(CLOUD_LAYER_START, r"\s+(FEW|SCT|BKN|OVC)");
pattern!(TEMPERATURE, r"T(M?[0-9]{2})\s+DP(M?[0-9]{2})");
pattern!(QNH, r"QNH\s+([0-9]{4})(?:HPA)?");
pattern!(TREND, r"TREND\s+(.+)$");

/// Decode a single ATIS / MET_REP message
///
/// Never fails: fields whose pattern is not found are left unset and the
/// input is always preserved in [`DecodedAtis::raw`].
///
/// # Example
///
/// ```
/// let atis = il_met_decode::decode_atis("MET_REP LLBG 260920Z WIND 270/14KT QNH 1016HPA");
/// assert_eq!(atis.station.as_deref(), Some("LLBG"));
/// assert_eq!(atis.general_wind.unwrap().speed, "14");
/// assert_eq!(atis.qnh.as_deref(), Some("1016"));
/// ```
pub fn decode_atis(raw: &str) -> DecodedAtis {
    let mut atis = DecodedAtis {
        raw: raw.to_string(),
        ..Default::default()
    };

    if let Some(caps) = HEADER.captures(raw) {
        atis.station = group(&caps, 1);
        atis.time = group(&caps, 2);
    }
    trace!("atis header: station={:?} time={:?}", atis.station, atis.time);

    atis.is_auto = raw.contains(" AUTO ");
    atis.cavok = raw.contains(" CAVOK ");

    atis.general_wind = general_wind(raw);
    atis.runway_winds = RUNWAY_WIND
        .captures_iter(raw)
        .map(|caps| RunwayWind {
            rwy: caps[1].to_string(),
            direction: caps[2].to_string(),
            speed: caps[3].to_string(),
            max: group(&caps, 4),
            min: group(&caps, 5),
        })
        .collect();

    atis.visibility = VISIBILITY.captures(raw).and_then(|caps| group(&caps, 1));

    if let Some(caps) = CLOUDS.captures(raw) {
        atis.clouds = split_cloud_layers(caps[1].trim());
    }

    if let Some(caps) = TEMPERATURE.captures(raw) {
        atis.temperature = Some(signed(&caps[1]));
        atis.dew_point = Some(signed(&caps[2]));
    }

    atis.qnh = QNH.captures(raw).and_then(|caps| group(&caps, 1));
    atis.trend = TREND.captures(raw).map(|caps| caps[1].trim().to_string());

    atis
}

/// First `WIND ddd/ssKT` group that is not a runway wind header
fn general_wind(raw: &str) -> Option<GeneralWind> {
    GENERAL_WIND
        .captures_iter(raw)
        .find(|caps| !followed_by_runway(&raw[caps.get(0).map_or(0, |m| m.end())..]))
        .map(|caps| GeneralWind {
            direction: caps[1].to_string(),
            speed: caps[2].to_string(),
            gust: group(&caps, 3),
        })
}

fn followed_by_runway(rest: &str) -> bool {
    let trimmed = rest.trim_start();
    trimmed.len() < rest.len() && trimmed.starts_with("RWY")
}

/// Split a cloud block into layers, starting a new layer at each cover
/// abbreviation (`FEW`, `SCT`, `BKN`, `OVC`)
///
/// `NSC`, `CB` and `TCU` do not start a layer and stay attached to the
/// preceding one.
fn split_cloud_layers(block: &str) -> Vec<String> {
    let mut layers = Vec::new();
    let mut start = 0;

    for caps in CLOUD_LAYER_START.captures_iter(block) {
        let (Some(boundary), Some(cover)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        layers.push(block[start..boundary.start()].to_string());
        start = cover.start();
    }

    layers.push(block[start..].to_string());
    layers
}

/// Replace the leading `M` of a below-zero value with a minus sign
fn signed(value: &str) -> String {
    match value.strip_prefix('M') {
        Some(abs) => format!("-{abs}"),
        None => value.to_string(),
    }
}
