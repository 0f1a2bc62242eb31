/// Creation timestamps for account records.
///
/// Timestamps are naive local wall-clock values: no offset is recorded in the
/// output, so a record written on a host in UTC+2 reads the same clock time a
/// user on that host would see.
use anyhow::{Context, Result};
use jiff::SignedDuration;
use jiff::civil::DateTime;
use rand::Rng;

/// Length of the creation window in days.
pub const WINDOW_DAYS: i64 = 30;

/// Length of the creation window in seconds (30 days).
pub const WINDOW_SECS: i64 = WINDOW_DAYS * 24 * 60 * 60;

/// The interval `[end - span, end]` that `created_at` values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationWindow {
    start: DateTime,
    end: DateTime,
    span_secs: i64,
}

impl CreationWindow {
    /// Window of `WINDOW_SECS` ending at `end`.
    pub fn ending_at(end: DateTime) -> Result<Self> {
        Self::with_span(end, WINDOW_SECS)
    }

    /// Window ending at the host's current local time, truncated to
    /// microseconds.
    pub fn ending_now() -> Result<Self> {
        Self::ending_at(local_now()?)
    }

    pub fn with_span(end: DateTime, span_secs: i64) -> Result<Self> {
        anyhow::ensure!(
            span_secs >= 0,
            "creation window span must not be negative: {span_secs}s"
        );
        let start = end
            .checked_sub(SignedDuration::from_secs(span_secs))
            .with_context(|| format!("creation window start out of range for {end}"))?;
        Ok(Self {
            start,
            end,
            span_secs,
        })
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn end(&self) -> DateTime {
        self.end
    }

    /// Pick a uniformly random whole number of seconds in `[0, span]` and
    /// offset the window start by it.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> DateTime {
        let offset = rng.gen_range(0..=self.span_secs);
        // start + offset <= end, which is a valid DateTime by construction.
        self.start
            .checked_add(SignedDuration::from_secs(offset))
            .unwrap_or(self.end)
    }

    pub fn contains(&self, dt: DateTime) -> bool {
        self.start <= dt && dt <= self.end
    }
}

/// Current wall-clock time in the system time zone, with the zone dropped and
/// the fraction cut to microseconds.
pub fn local_now() -> Result<DateTime> {
    truncate_to_micros(jiff::Zoned::now().datetime())
}

fn truncate_to_micros(dt: DateTime) -> Result<DateTime> {
    let nanos = dt.subsec_nanosecond();
    dt.with()
        .subsec_nanosecond(nanos - nanos % 1_000)
        .build()
        .context("failed to truncate current time to microseconds")
}

/// Render `YYYY-MM-DDTHH:MM:SS[.ffffff]`.
///
/// The fraction is written with exactly six digits and dropped entirely when
/// the microsecond component is zero.
pub fn format_iso8601(dt: DateTime) -> String {
    let mut out = dt.strftime("%Y-%m-%dT%H:%M:%S").to_string();
    let micros = dt.subsec_nanosecond() / 1_000;
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}
