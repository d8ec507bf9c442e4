use crate::document::Profile;
use anyhow::{Context, Result};

pub struct Formatter {
    compact: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Formatter {
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }

    /// Render a profile as JSON, pretty unless compact output was requested
    pub fn format_profile(&self, profile: &Profile) -> Result<String> {
        let rendered = if self.compact {
            serde_json::to_string(profile)
        } else {
            serde_json::to_string_pretty(profile)
        };
        rendered.context("Failed to serialize profile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Address, Extra, Meta, User};
    use std::sync::Arc;

    fn profile() -> Profile {
        Profile {
            user: Arc::new(User {
                name: "Alice".to_string(),
                address: Arc::new(Address {
                    city: "Oz".to_string(),
                    zip: "12345".to_string(),
                    extra: Extra::new(),
                }),
                extra: Extra::new(),
            }),
            meta: Arc::new(Meta {
                created: "2023-01-01".to_string(),
                modified: "2024-01-01".to_string(),
                extra: Extra::new(),
            }),
            extra: Extra::new(),
        }
    }

    #[test]
    fn test_compact_profile_is_single_line() {
        let rendered = Formatter::new(true).format_profile(&profile()).unwrap();

        assert_eq!(
            rendered,
            r#"{"user":{"name":"Alice","address":{"city":"Oz","zip":"12345"}},"meta":{"created":"2023-01-01","modified":"2024-01-01"}}"#
        );
    }

    #[test]
    fn test_pretty_profile_round_trips() {
        let rendered = Formatter::default().format_profile(&profile()).unwrap();

        assert!(rendered.contains('\n'));
        let parsed: Profile = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, profile());
    }
}
