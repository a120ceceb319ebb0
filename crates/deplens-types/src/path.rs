use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered field names locating a value inside a loosely structured report.
///
/// The dotted string is the canonical spelling, e.g.
/// `analyses.security_issues.summary`. Parsing is deterministic and forgiving:
/// segments split on `.` and empty segments are dropped, so `""` parses to the
/// empty path, which binds the report root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn parse<S: AsRef<str>>(dotted: S) -> Self {
        let segments = dotted
            .as_ref()
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Self(segments)
    }

    /// The empty path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A new path with `segment` appended.
    pub fn child(&self, segment: &str) -> FieldPath {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for FieldPath {
    fn from(dotted: &str) -> Self {
        FieldPath::parse(dotted)
    }
}

impl FromIterator<String> for FieldPath {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
