use chrono::{DateTime, Local, TimeZone, Utc};

/// One entry of the remote model catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRecord {
    pub id: String,
    /// Unix timestamp (seconds) of when the model was created.
    pub created: i64,
}

impl ModelRecord {
    pub fn new(id: impl Into<String>, created: i64) -> Self {
        Self {
            id: id.into(),
            created,
        }
    }
}

/// The ordered list of model records returned by one fetch.
///
/// A new fetch replaces the whole catalog; records keep the order the API
/// returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ModelRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ModelRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ModelRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModelRecord> {
        self.records.iter()
    }
}

impl FromIterator<ModelRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = ModelRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a Unix timestamp as `YYYY-MM-DD HH:MM:SS` in local time.
pub fn format_unix_timestamp(ts: i64) -> String {
    format_timestamp_in(ts, &Local)
}

/// Format a Unix timestamp in the given time zone.
///
/// Out-of-range timestamps fall back to the epoch.
pub fn format_timestamp_in<Tz: TimeZone>(ts: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_default()
        .with_timezone(tz)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
