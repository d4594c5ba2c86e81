//! Qualified-name parsing for connection-scoped assets.
//!
//! Connection-scoped assets are named
//! `default/<connector>/<epoch>/<segment>/<segment>...`; the first three
//! parts are the qualified name of the owning connection.

use once_cell::sync::Lazy;
use regex::Regex;

static CONNECTION_QN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(default/([a-z0-9][a-z0-9-]*)/(\d+))(?:/(.+))?$")
        .expect("valid connection qualified name regex")
});

/// Connection prefix plus the remaining path segments of a qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQualifiedName<'a> {
    pub connection_qualified_name: &'a str,
    pub connector_name: &'a str,
    pub segments: Vec<&'a str>,
}

impl<'a> ParsedQualifiedName<'a> {
    /// Qualified name made of the connection plus the first `depth` segments.
    pub fn prefix(&self, depth: usize) -> Option<String> {
        if depth == 0 || depth > self.segments.len() {
            return None;
        }
        let mut value = self.connection_qualified_name.to_string();
        for segment in &self.segments[..depth] {
            value.push('/');
            value.push_str(segment);
        }
        Some(value)
    }
}

/// Parses a connection-scoped qualified name; `None` when it is not one.
pub fn parse_qualified_name(qualified_name: &str) -> Option<ParsedQualifiedName<'_>> {
    let caps = CONNECTION_QN_RE.captures(qualified_name)?;
    let connection_qualified_name = caps.get(1)?.as_str();
    let connector_name = caps.get(2)?.as_str();
    let segments = match caps.get(4) {
        Some(rest) => rest.as_str().split('/').collect::<Vec<_>>(),
        None => Vec::new(),
    };
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(ParsedQualifiedName {
        connection_qualified_name,
        connector_name,
        segments,
    })
}

/// Qualified name of a connection created at `epoch_seconds`.
pub fn connection_qualified_name(connector_name: &str, epoch_seconds: u64) -> String {
    format!("default/{connector_name}/{epoch_seconds}")
}
