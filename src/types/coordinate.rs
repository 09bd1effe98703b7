use crate::utils::pattern;
use serde::Serialize;
use std::borrow::Cow;

pattern!(COORD_PAIR, r"([NS])([0-9]{2})([0-9]{2})\s+([EW])([0-9]{3})([0-9]{2})");

/// A polygon vertex as written in a warning message
///
/// Both halves are kept as raw sexagesimal tokens (`N3317`, `E03450`), the
/// `raw` field holds the pair exactly as it was matched in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    /// Latitude token, hemisphere + 2 degree digits + 2 minute digits
    pub lat: String,
    /// Longitude token, hemisphere + 3 degree digits + 2 minute digits
    pub lon: String,
    /// Matched pair including the separating whitespace
    pub raw: String,
}

impl Coordinate {
    /// Build a coordinate from a matched `lat lon` pair
    ///
    /// The pair is split on whitespace; missing halves are left empty.
    pub fn from_pair(raw: &str) -> Self {
        let mut parts = raw.split_whitespace();
        Self {
            lat: parts.next().unwrap_or_default().to_string(),
            lon: parts.next().unwrap_or_default().to_string(),
            raw: raw.to_string(),
        }
    }

    /// Render as degrees and minutes, see [`format_coord`]
    pub fn format(&self) -> Cow<'_, str> {
        format_coord(&self.raw)
    }

    /// Convert to signed decimal degrees `(lat, lon)`
    ///
    /// Southern latitudes and western longitudes are negative. Returns
    /// `None` if either token is not a valid sexagesimal angle.
    pub fn to_degrees(&self) -> Option<(f64, f64)> {
        let lat = parse_angle(&self.lat, 2, ['N', 'S'])?;
        let lon = parse_angle(&self.lon, 3, ['E', 'W'])?;
        Some((lat, lon))
    }
}

/// Parse `<hemisphere><degrees><mm>` into signed decimal degrees
fn parse_angle(token: &str, degree_digits: usize, hemispheres: [char; 2]) -> Option<f64> {
    let mut chars = token.chars();
    let hemisphere = chars.next()?;
    let digits = chars.as_str();

    let sign = match hemisphere {
        h if h == hemispheres[0] => 1.0,
        h if h == hemispheres[1] => -1.0,
        _ => return None,
    };

    if digits.len() != degree_digits + 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let degrees: f64 = digits[..degree_digits].parse().ok()?;
    let minutes: f64 = digits[degree_digits..].parse().ok()?;
    if minutes >= 60.0 {
        return None;
    }

    Some(sign * (degrees + minutes / 60.0))
}

/// Render a raw coordinate pair for display
///
/// `N3317 E03450` becomes `33°17'N 034°50'E`. Input that does not contain a
/// recognizable pair is returned unchanged.
pub fn format_coord(coord: &str) -> Cow<'_, str> {
    let Some(caps) = COORD_PAIR.captures(coord) else {
        return Cow::Borrowed(coord);
    };

    Cow::Owned(format!(
        "{}°{}'{} {}°{}'{}",
        &caps[2], &caps[3], &caps[1], &caps[5], &caps[6], &caps[4]
    ))
}
