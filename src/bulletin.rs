//! Upstream weather bulletin
//!
//! The weather service delivers METAR, TAF, ATIS and area warning messages
//! grouped by station in a single JSON document. [`WeatherBulletin`]
//! flattens that document into the input shapes of the decoders.

use crate::error::Result;
use crate::types::{DecodedAtis, DecodedWarning};
use crate::utils::decode_text;
use crate::{decode_atis, decode_warning};
use log::debug;
use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use std::marker::PhantomData;

/// Flattened weather bulletin
///
/// Messages keep the order in which stations and entries appear in the
/// source document.
///
/// # Example
///
/// ```
/// use il_met_decode::WeatherBulletin;
///
/// let json = r#"{ "data": { "atis": { "LLBG": [ { "content": "MET_REP LLBG 260920Z" } ] } } }"#;
/// let bulletin = WeatherBulletin::from_json_str(json)?;
/// assert_eq!(bulletin.atis, ["MET_REP LLBG 260920Z"]);
/// assert_eq!(bulletin.decoded_atis()[0].station.as_deref(), Some("LLBG"));
/// # Ok::<(), il_met_decode::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherBulletin {
    /// Single-line METAR reports
    pub metars: Vec<String>,
    /// Multi-line TAF reports
    pub tafs: Vec<Vec<String>>,
    /// Single-line ATIS / MET_REP reports
    pub atis: Vec<String>,
    /// Multi-line AIRMET, SIGMET and aerodrome warnings
    pub warnings: Vec<Vec<String>>,
}

impl WeatherBulletin {
    /// Parse a bulletin from its JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: Document = serde_json::from_str(json)?;
        Ok(document.into())
    }

    /// Parse a bulletin from raw bytes
    ///
    /// Bytes that are not valid UTF-8 are decoded as Windows-1252.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_json_str(&decode_text(bytes))
    }

    /// Read and parse a bulletin from any `Read` source
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_slice(&bytes)
    }

    /// Check if the bulletin holds no messages at all
    pub fn is_empty(&self) -> bool {
        self.metars.is_empty()
            && self.tafs.is_empty()
            && self.atis.is_empty()
            && self.warnings.is_empty()
    }

    /// Decode every ATIS message
    pub fn decoded_atis(&self) -> Vec<DecodedAtis> {
        self.atis.iter().map(|raw| decode_atis(raw)).collect()
    }

    /// Decode every warning
    pub fn decoded_warnings(&self) -> Vec<DecodedWarning> {
        self.warnings
            .iter()
            .map(|lines| decode_warning(lines.as_slice()))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    data: Option<Sections>,
}

#[derive(Debug, Default, Deserialize)]
struct Sections {
    #[serde(default, deserialize_with = "values_in_order")]
    metars: Vec<Vec<TextEntry>>,
    #[serde(default, deserialize_with = "values_in_order")]
    tafors: Vec<Vec<LinesEntry>>,
    #[serde(default, deserialize_with = "values_in_order")]
    atis: Vec<Vec<TextEntry>>,
    #[serde(default, deserialize_with = "values_in_order")]
    area_warnings: Vec<LinesEntry>,
}

#[derive(Debug, Deserialize)]
struct TextEntry {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LinesEntry {
    #[serde(default)]
    lines: Option<Vec<TextEntry>>,
}

impl LinesEntry {
    fn into_lines(self, section: &str) -> Option<Vec<String>> {
        let Some(lines) = self.lines else {
            debug!("skipping {section} entry without lines");
            return None;
        };
        Some(lines.into_iter().filter_map(|line| line.content).collect())
    }
}

fn texts(groups: Vec<Vec<TextEntry>>, section: &str) -> Vec<String> {
    groups
        .into_iter()
        .flatten()
        .filter_map(|entry| {
            let content = entry.content.filter(|content| !content.is_empty());
            if content.is_none() {
                debug!("skipping {section} entry without content");
            }
            content
        })
        .collect()
}

impl From<Document> for WeatherBulletin {
    fn from(document: Document) -> Self {
        let sections = document.data.unwrap_or_default();

        let tafs = sections
            .tafors
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.into_lines("tafors"))
            .collect();

        let warnings = sections
            .area_warnings
            .into_iter()
            .filter_map(|entry| entry.into_lines("area_warnings"))
            .collect();

        Self {
            metars: texts(sections.metars, "metars"),
            tafs,
            atis: texts(sections.atis, "atis"),
            warnings,
        }
    }
}

/// Deserialize the values of a JSON object in document order, keys are
/// dropped; an array yields its elements and `null` an empty list
fn values_in_order<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct ValuesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for ValuesVisitor<T> {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object keyed by station or an array")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Vec<T>, A::Error> {
            let mut values = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((IgnoredAny, value)) = map.next_entry::<IgnoredAny, T>()? {
                values.push(value);
            }
            Ok(values)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Vec<T>, A::Error> {
            let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(value) = seq.next_element()? {
                values.push(value);
            }
            Ok(values)
        }

        fn visit_unit<E>(self) -> std::result::Result<Vec<T>, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(ValuesVisitor(PhantomData))
}
