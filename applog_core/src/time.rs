use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::From;
use std::fmt;

/// Wall-clock instant, rendered as ISO-8601 UTC with millisecond precision.
#[derive(Copy, Clone, Debug, From, Ord, PartialOrd, PartialEq, Eq)]
pub struct TimeStamp(pub(crate) DateTime<Utc>);

impl TimeStamp {
    pub fn now() -> Self {
        TimeStamp(Utc::now())
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
