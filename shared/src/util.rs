use chrono::{DateTime, SecondsFormat, Utc};

/// 当前 UTC 时间
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp the way the CMS stores `datetime` fields
/// (RFC 3339, millisecond precision, `Z` suffix).
pub fn to_cms_datetime(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
