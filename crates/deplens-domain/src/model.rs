//! Host-supplied identity of the package under analysis.

use deplens_types::Range;

/// A named value at a known spot in the manifest being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifestField {
    pub value: String,
    pub range: Range,
}

impl ManifestField {
    pub fn new(value: impl Into<String>, range: Range) -> Self {
        Self {
            value: value.into(),
            range,
        }
    }
}

/// The dependency the host is asking about: name and version as they appear
/// in the manifest, with their source ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyContext {
    pub name: ManifestField,
    pub version: ManifestField,
}

impl DependencyContext {
    pub fn new(name: ManifestField, version: ManifestField) -> Self {
        Self { name, version }
    }

    /// Display identity used in diagnostic messages: `name-version`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.name.value, self.version.value)
    }

    /// The source range diagnostics point at: the version token.
    pub fn version_range(&self) -> Range {
        self.version.range
    }
}
