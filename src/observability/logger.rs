//! Structured JSON logger
//!
//! One log line = one JSON object. Keys are emitted in deterministic order
//! (`event`, `severity`, then fields alphabetically) so log output can be
//! diffed across runs. Writes are synchronous and unbuffered; warnings and
//! below go to stdout, errors and fatals to stderr.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-request detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues (e.g. a skipped roster line)
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// String form used in the log line
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger for the roster service
pub struct Logger;

impl Logger {
    /// Log an event to stdout
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::write_line(severity, event, fields, &mut io::stdout());
    }

    /// Log an event to stderr, for error and fatal paths
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::write_line(severity, event, fields, &mut io::stderr());
    }

    /// Log at TRACE level
    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Trace, event, fields);
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log_stderr(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log_stderr(Severity::Fatal, event, fields);
    }

    fn write_line<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], out: &mut W) {
        let line = Self::render(severity, event, fields);
        // A failed log write must never take down a query.
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    /// Render one log line, newline-terminated
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut line = String::with_capacity(128);

        line.push('{');
        line.push_str("\"event\":");
        line.push_str(&Self::quote(event));
        line.push_str(",\"severity\":");
        line.push_str(&Self::quote(severity.as_str()));

        let mut sorted: Vec<_> = fields.to_vec();
        sorted.sort_by_key(|(k, _)| *k);
        for (key, value) in sorted {
            line.push(',');
            line.push_str(&Self::quote(key));
            line.push(':');
            line.push_str(&Self::quote(value));
        }

        line.push('}');
        line.push('\n');
        line
    }

    /// JSON-quote a string value
    fn quote(s: &str) -> String {
        // Serializing a &str cannot fail.
        serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_render_is_valid_json() {
        let line = Logger::render(Severity::Info, "roster_loaded", &[("count", "42")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "roster_loaded");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["count"], "42");
    }

    #[test]
    fn test_render_is_one_line() {
        let line = Logger::render(Severity::Warn, "roster_line_skipped", &[("line", "3")]);
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_field_order_is_deterministic() {
        let a = Logger::render(Severity::Info, "e", &[("zip", "1"), ("id", "2")]);
        let b = Logger::render(Severity::Info, "e", &[("id", "2"), ("zip", "1")]);
        assert_eq!(a, b);
        assert!(a.find("\"id\"").unwrap() < a.find("\"zip\"").unwrap());
    }

    #[test]
    fn test_event_comes_first() {
        let line = Logger::render(Severity::Info, "e", &[("alpha", "1")]);
        assert!(line.find("\"event\"").unwrap() < line.find("\"severity\"").unwrap());
        assert!(line.find("\"severity\"").unwrap() < line.find("\"alpha\"").unwrap());
    }

    #[test]
    fn test_special_characters_survive_round_trip() {
        let line = Logger::render(Severity::Info, "e", &[("msg", "a \"quoted\"\nvalue")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["msg"], "a \"quoted\"\nvalue");
    }
}
