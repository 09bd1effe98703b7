use serde::Serialize;

/// Decoded ATIS / MET_REP message
///
/// Every optional field is only set when its pattern matched in the source
/// text; nothing is defaulted or synthesized. `raw` always holds the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedAtis {
    /// ICAO station code, e.g. `LLBG`
    pub station: Option<String>,
    /// Observation time, e.g. `260920Z`
    pub time: Option<String>,
    pub is_auto: bool,
    pub general_wind: Option<GeneralWind>,
    /// Runway winds in order of appearance
    pub runway_winds: Vec<RunwayWind>,
    /// Value with unit suffix, e.g. `10KM` or `8000M`
    pub visibility: Option<String>,
    pub cavok: bool,
    /// Cloud layers, e.g. `SCT 4000FT`
    pub clouds: Vec<String>,
    /// Temperature in °C, negative values use a minus sign
    pub temperature: Option<String>,
    /// Dew point in °C, negative values use a minus sign
    pub dew_point: Option<String>,
    /// Pressure in hPa
    pub qnh: Option<String>,
    /// Undecoded text after the `TREND` keyword
    pub trend: Option<String>,
    pub raw: String,
}

impl DecodedAtis {
    /// Check if any structured field was extracted from the message
    pub fn has_data(&self) -> bool {
        self.station.is_some()
            || self.time.is_some()
            || self.is_auto
            || self.general_wind.is_some()
            || !self.runway_winds.is_empty()
            || self.visibility.is_some()
            || self.cavok
            || !self.clouds.is_empty()
            || self.temperature.is_some()
            || self.qnh.is_some()
            || self.trend.is_some()
    }
}

/// Aerodrome wind not bound to a specific runway
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneralWind {
    /// Three digit direction or `VRB`
    pub direction: String,
    /// Speed in knots
    pub speed: String,
    /// Gust speed in knots
    pub gust: Option<String>,
}

/// Touchdown zone wind reported for a single runway
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunwayWind {
    /// Runway designator, e.g. `08` or `26R`
    pub rwy: String,
    /// Three digit direction or `VRB`
    pub direction: String,
    /// Speed in knots
    pub speed: String,
    /// Upper limit of the speed variation (`MAX`)
    pub max: Option<String>,
    /// Lower limit of the speed variation (`MNM`)
    pub min: Option<String>,
}
