use serde::Serialize;

/// Query parameters of a config request.
///
/// Both values are sent as-is; they are only checked not to be blank.
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConfigQuery<'a> {
    platform: &'a str,
    version: &'a str,
}

/// An error that can occur while building a [`ConfigQuery`]
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("platform must not be empty")]
    EmptyPlatform,
    #[error("version must not be empty")]
    EmptyVersion,
}

impl<'a> ConfigQuery<'a> {
    pub fn new(platform: &'a str, version: &'a str) -> Result<Self, QueryError> {
        if is_blank(platform) {
            return Err(QueryError::EmptyPlatform);
        }

        if is_blank(version) {
            return Err(QueryError::EmptyVersion);
        }

        Ok(Self { platform, version })
    }

    pub fn platform(&self) -> &'a str {
        self.platform
    }

    pub fn version(&self) -> &'a str {
        self.version
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_values() {
        let q = ConfigQuery::new("ios", "3.2.1").unwrap();

        assert_eq!(q.platform(), "ios");
        assert_eq!(q.version(), "3.2.1");
    }

    #[test]
    fn rejects_blank_values() {
        assert_eq!(
            ConfigQuery::new("", "3.2.1").unwrap_err(),
            QueryError::EmptyPlatform
        );
        assert_eq!(
            ConfigQuery::new("  ", "3.2.1").unwrap_err(),
            QueryError::EmptyPlatform
        );
        assert_eq!(
            ConfigQuery::new("android", "").unwrap_err(),
            QueryError::EmptyVersion
        );
        // platform is checked first
        assert_eq!(ConfigQuery::new("", "").unwrap_err(), QueryError::EmptyPlatform);
    }

    #[test]
    fn values_are_not_trimmed() {
        let q = ConfigQuery::new(" ios ", "3.2.1").unwrap();

        assert_eq!(q.platform(), " ios ");
    }

    #[test]
    fn serializes_field_names_as_keys() {
        let q = ConfigQuery::new("android", "1.0.0-beta").unwrap();
        let value = serde_json::to_value(q).unwrap();

        assert_eq!(value["platform"], "android");
        assert_eq!(value["version"], "1.0.0-beta");
    }
}
