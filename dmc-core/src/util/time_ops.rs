use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use uom::si::{f64::Time, time::second};

/// shorthand for building a [`Time`] from a number of seconds.
pub fn seconds(value: f64) -> Time {
    Time::new::<second>(value)
}

/// formats a clock time as `HH:MM:SS`. hours are not wrapped at midnight since
/// itineraries may run past the end of the simulated day.
pub fn format_time(time: &Time) -> String {
    let value = time.get::<second>();
    if !value.is_finite() {
        return String::from("undefined");
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let total = value.abs().floor() as u64;
    format!(
        "{sign}{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// parses `HH:MM:SS` or `HH:MM` into a clock time.
pub fn parse_time(value: &str) -> Result<Time, String> {
    let parts = value.trim().split(':').collect::<Vec<_>>();
    if !(2..=3).contains(&parts.len()) {
        return Err(format!("expected HH:MM[:SS], found '{value}'"));
    }
    let mut total = 0.0;
    for (part, factor) in parts.iter().zip([3600.0, 60.0, 1.0]) {
        let component: f64 = part
            .parse()
            .map_err(|e| format!("invalid time component '{part}' in '{value}': {e}"))?;
        total += component * factor;
    }
    Ok(seconds(total))
}

/// times may be written as a number of seconds or as a clock string.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimeValue {
    Seconds(f64),
    Clock(String),
}

impl TimeValue {
    fn into_time(self) -> Result<Time, String> {
        match self {
            TimeValue::Seconds(value) => Ok(seconds(value)),
            TimeValue::Clock(value) => parse_time(&value),
        }
    }
}

pub fn deserialize_time<'de, D>(deserializer: D) -> Result<Time, D::Error>
where
    D: Deserializer<'de>,
{
    TimeValue::deserialize(deserializer)?
        .into_time()
        .map_err(|e| D::Error::custom(format!("invalid time: {e}")))
}

pub fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<Time>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TimeValue>::deserialize(deserializer)?
        .map(TimeValue::into_time)
        .transpose()
        .map_err(|e| D::Error::custom(format!("invalid time: {e}")))
}

pub fn serialize_time<S>(time: &Time, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(time.get::<second>())
}

pub fn serialize_optional_time<S>(time: &Option<Time>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match time {
        Some(time) => serializer.serialize_some(&time.get::<second>()),
        None => serializer.serialize_none(),
    }
}
