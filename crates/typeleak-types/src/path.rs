use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical docs-root-relative path used in findings and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - the empty path is spelled `.`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct DocsPath(String);

impl Default for DocsPath {
    fn default() -> Self {
        DocsPath::new(".")
    }
}

impl DocsPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }

    /// Path of this entry relative to `root`, falling back to the path itself when it
    /// does not live under `root`.
    pub fn relative_to(path: &Utf8Path, root: &Utf8Path) -> Self {
        DocsPath::new(path.strip_prefix(root).unwrap_or(path).as_str())
    }
}

impl From<&Utf8Path> for DocsPath {
    fn from(value: &Utf8Path) -> Self {
        DocsPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for DocsPath {
    fn from(value: Utf8PathBuf) -> Self {
        DocsPath::new(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_and_leading_dot() {
        assert_eq!(DocsPath::new(".\\docs\\m.docs.json").as_str(), "docs/m.docs.json");
        assert_eq!(DocsPath::new("././a.docs.json").as_str(), "a.docs.json");
        assert_eq!(DocsPath::new("").as_str(), ".");
    }

    #[test]
    fn relative_to_strips_root() {
        let root = Utf8Path::new("/tmp/docs");
        let path = Utf8Path::new("/tmp/docs/app/cart.docs.json");
        assert_eq!(DocsPath::relative_to(path, root).as_str(), "app/cart.docs.json");

        let outside = Utf8Path::new("/elsewhere/x.docs.json");
        assert_eq!(
            DocsPath::relative_to(outside, root).as_str(),
            "/elsewhere/x.docs.json"
        );
    }
}
