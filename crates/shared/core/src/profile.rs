use serde::{Deserialize, Serialize};

/// Reference to a preference-profile resource, as a file path or URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRef(String);

impl ProfileRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resource URI; bare file paths gain the `file:` scheme.
    pub fn uri(&self) -> String {
        if self.0.contains(':') {
            self.0.clone()
        } else {
            format!("file:{}", self.0)
        }
    }

    /// Filesystem path for `file:` URIs and bare paths, `None` for any
    /// other scheme.
    pub fn path(&self) -> Option<&str> {
        if let Some(rest) = self.0.strip_prefix("file:") {
            Some(rest)
        } else if !self.0.contains(':') {
            Some(&self.0)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_paths_gain_file_scheme() {
        let profile = ProfileRef::new("profiles/buyer.json");
        assert_eq!(profile.uri(), "file:profiles/buyer.json");
        assert_eq!(profile.path(), Some("profiles/buyer.json"));
    }

    #[test]
    fn existing_schemes_are_kept() {
        let profile = ProfileRef::new("file:profiles/seller.json");
        assert_eq!(profile.uri(), "file:profiles/seller.json");
        assert_eq!(profile.path(), Some("profiles/seller.json"));

        let web = ProfileRef::new("https://example.org/profile");
        assert_eq!(web.uri(), "https://example.org/profile");
        assert_eq!(web.path(), None);
    }
}
