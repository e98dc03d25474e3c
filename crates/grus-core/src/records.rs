//! Tracking-event records
//!
//! One `TrackEvent` is one row of a Movebank-style GPS export. Column
//! names carry hyphens, timestamps come in two ISO 8601 shapes (space or
//! `T` separator, optional fractional seconds), and the `comments` column
//! holds the distance to the nearest water source in metres. Values are
//! normalized on deserialization: water distance is stored in kilometres.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// One GPS fix of one tagged crane.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrackEvent {
    #[serde(rename = "event-id")]
    pub event_id: String,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,

    #[serde(rename = "location-lat")]
    pub lat: f64,

    #[serde(rename = "location-long")]
    pub lon: f64,

    /// The crane's tag identifier.
    #[serde(rename = "tag-local-identifier")]
    pub tag: String,

    /// Distance to the nearest water source, in kilometres (the source
    /// column reports metres).
    #[serde(rename = "comments", deserialize_with = "deserialize_water_km")]
    pub water_km: f64,
}

/// Parses a timestamp in either ISO 8601 shape the exports use.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unparseable timestamp: {raw:?}")))
}

fn deserialize_water_km<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let metres: f64 = raw
        .trim()
        .parse()
        .map_err(|_| serde::de::Error::custom(format!("unparseable water distance: {raw:?}")))?;
    Ok(metres / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_both_shapes() {
        let a = parse_timestamp("2021-05-01 12:30:00").unwrap();
        let b = parse_timestamp("2021-05-01T12:30:00").unwrap();
        assert_eq!(a, b);

        let with_frac = parse_timestamp("2021-05-01 12:30:00.250").unwrap();
        assert_eq!(with_frac.and_utc().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_csv_row_deserializes() {
        let data = "event-id,timestamp,location-lat,location-long,tag-local-identifier,comments\n\
                    e1,2021-05-01 06:00:00,52.30,10.50,T-100,2500\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let event: TrackEvent = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(event.event_id, "e1");
        assert_eq!(event.tag, "T-100");
        assert_eq!(event.lat, 52.30);
        // metres in the file, kilometres in memory
        assert_eq!(event.water_km, 2.5);
    }

    #[test]
    fn test_csv_row_bad_water_is_an_error() {
        let data = "event-id,timestamp,location-lat,location-long,tag-local-identifier,comments\n\
                    e1,2021-05-01 06:00:00,52.30,10.50,T-100,nearby\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let parsed: Result<TrackEvent, _> = reader.deserialize().next().unwrap();
        assert!(parsed.is_err());
    }
}
