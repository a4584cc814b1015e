//! Tag Module
//!
//! Labels attached to cache entries for bulk invalidation.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// == Tag ==
/// Invalidation label for a cache entry.
///
/// Known resource families are enumerated so that a misspelled tag fails to
/// compile. `Custom` covers anything else. Parsing always prefers the known
/// variant, and the cache normalizes tags on the way in, so a hand-built
/// `Custom("users")` still matches `Users`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Tickets,
    Users,
    Equipment,
    Sectors,
    Departments,
    /// Authenticated principal and anything derived from the session
    Auth,
    /// Aggregates computed for the dashboard home page
    Dashboard,
    Custom(String),
}

impl Tag {
    /// All known (non-custom) tags.
    pub const KNOWN: [Tag; 7] = [
        Tag::Tickets,
        Tag::Users,
        Tag::Equipment,
        Tag::Sectors,
        Tag::Departments,
        Tag::Auth,
        Tag::Dashboard,
    ];

    // == Text Form ==
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Tickets => "tickets",
            Tag::Users => "users",
            Tag::Equipment => "equipment",
            Tag::Sectors => "sectors",
            Tag::Departments => "departments",
            Tag::Auth => "auth",
            Tag::Dashboard => "dashboard",
            Tag::Custom(name) => name,
        }
    }

    /// Tag for a resource family name such as `"tickets"`.
    pub fn for_resource(resource: &str) -> Self {
        Self::from(resource)
    }

    /// Folds a `Custom` carrying a known name into the known variant.
    pub fn normalized(self) -> Self {
        match self {
            Tag::Custom(name) => Tag::from(name),
            known => known,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Tag::Custom(_))
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        match name {
            "tickets" => Tag::Tickets,
            "users" => Tag::Users,
            "equipment" => Tag::Equipment,
            "sectors" => Tag::Sectors,
            "departments" => Tag::Departments,
            "auth" => Tag::Auth,
            "dashboard" => Tag::Dashboard,
            other => Tag::Custom(other.to_string()),
        }
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        match Tag::from(name.as_str()) {
            Tag::Custom(_) => Tag::Custom(name),
            known => known,
        }
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Tag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Tag::from(s))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip_through_text() {
        for tag in Tag::KNOWN {
            let text = tag.to_string();
            assert_eq!(Tag::from(text.as_str()), tag);
            assert!(!tag.is_custom());
        }
    }

    #[test]
    fn test_unknown_name_is_custom() {
        let tag: Tag = "reports".parse().unwrap();
        assert_eq!(tag, Tag::Custom("reports".to_string()));
        assert!(tag.is_custom());
        assert_eq!(tag.as_str(), "reports");
    }

    #[test]
    fn test_custom_string_with_known_name_normalizes() {
        assert_eq!(Tag::from("users".to_string()), Tag::Users);
        assert_eq!(Tag::Custom("users".to_string()).normalized(), Tag::Users);
        assert_eq!(
            Tag::Custom("reports".to_string()).normalized(),
            Tag::Custom("reports".to_string())
        );
    }

    #[test]
    fn test_tag_serde_uses_text_form() {
        let json = serde_json::to_string(&vec![Tag::Tickets, Tag::Custom("kpi".into())]).unwrap();
        assert_eq!(json, r#"["tickets","kpi"]"#);

        let tags: Vec<Tag> = serde_json::from_str(r#"["auth","misc"]"#).unwrap();
        assert_eq!(tags, vec![Tag::Auth, Tag::Custom("misc".into())]);
    }

    #[test]
    fn test_for_resource() {
        assert_eq!(Tag::for_resource("equipment"), Tag::Equipment);
        assert_eq!(Tag::for_resource("sectors"), Tag::Sectors);
    }
}
