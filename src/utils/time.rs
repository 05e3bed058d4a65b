use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a backend kickoff timestamp.
///
/// RFC 3339 values keep their offset. Timestamps without an offset are read as
/// local wall-clock time and bare dates as UTC midnight.
pub fn parse_match_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|ts| ts.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// `YYYY-MM-DD HH:MM` exactly as written by the backend, in the timestamp's own
/// offset (or none). No timezone conversion happens here.
pub fn format_wall_clock(raw: &str) -> Option<String> {
    const CSV_FORMAT: &str = "%Y-%m-%d %H:%M";
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.format(CSV_FORMAT).to_string());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.format(CSV_FORMAT).to_string())
}

/// Card label such as `Sat, May 10, 15:00`, rendered in local time.
pub fn format_kickoff(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%a, %b %-d, %H:%M")
        .to_string()
}

/// "Last updated" label for a refresh that completed at `ts`.
pub fn human_timestamp(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
