//! Locale conventions for the date-created column

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// How `date_created` is displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// `2016-12-12 13:52`
    Iso,
    /// `Dec. 12, 2016, 1:52 PM`, AP month abbreviations
    #[default]
    EnUs,
    /// `12 Dec 2016, 13:52`
    EnGb,
    /// Any strftime pattern
    Custom(String),
}

impl DateStyle {
    fn pattern(&self) -> &str {
        match self {
            DateStyle::Iso => "%Y-%m-%d %H:%M",
            DateStyle::EnUs => "%-d, %Y, %-I:%M %p",
            DateStyle::EnGb => "%-d %b %Y, %H:%M",
            DateStyle::Custom(pattern) => pattern,
        }
    }

    /// Format a timestamp per this convention
    pub fn format(&self, ts: &DateTime<Utc>) -> String {
        use std::fmt::Write;

        // A bad custom pattern makes chrono's Display fail; fall back to ISO.
        let mut out = String::new();
        if *self == DateStyle::EnUs {
            out.push_str(ap_month(ts.month()));
            out.push(' ');
        }
        match write!(out, "{}", ts.format(self.pattern())) {
            Ok(()) => out,
            Err(_) => ts.format(DateStyle::Iso.pattern()).to_string(),
        }
    }
}

/// AP style: March through July spelled out, September as "Sept."
fn ap_month(month: u32) -> &'static str {
    match month {
        1 => "Jan.",
        2 => "Feb.",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "Aug.",
        9 => "Sept.",
        10 => "Oct.",
        11 => "Nov.",
        _ => "Dec.",
    }
}
