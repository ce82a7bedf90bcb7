//! Badge holder data and its validation.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Longest identifier accepted, in characters.
pub const MAX_IDENTIFIER_LEN: usize = 256;

/// The wire shape of a badge request.
///
/// Every field is optional here; [`UserRecord::try_from`] decides what is
/// required. `function` and `userId` are accepted as aliases of `role` and
/// `identifier`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "function")]
    pub role: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "userId")]
    pub identifier: Option<String>,
}

/// A validated badge holder.
///
/// `name` and `identifier` are guaranteed non-empty; every value is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    name: String,
    role: String,
    city: String,
    email: String,
    identifier: String,
}

fn clean(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        city: impl Into<String>,
        email: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::try_from(BadgeRequest {
            name: Some(name.into()),
            role: Some(role.into()),
            city: Some(city.into()),
            email: Some(email.into()),
            identifier: Some(identifier.into()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The download filename for this holder's badge.
    pub fn filename(&self) -> String {
        badge_filename(&self.identifier)
    }
}

impl TryFrom<BadgeRequest> for UserRecord {
    type Error = ValidationError;

    fn try_from(request: BadgeRequest) -> Result<Self, Self::Error> {
        let name = clean(request.name);
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        let identifier = clean(request.identifier);
        if identifier.is_empty() {
            return Err(ValidationError::MissingField("userId"));
        }
        if identifier.chars().count() > MAX_IDENTIFIER_LEN {
            return Err(ValidationError::TooLong {
                field: "userId",
                max: MAX_IDENTIFIER_LEN,
            });
        }

        Ok(Self {
            name,
            role: clean(request.role),
            city: clean(request.city),
            email: clean(request.email),
            identifier,
        })
    }
}

/// Whether `identifier` can appear unquoted in a `Content-Disposition`
/// filename and on any common filesystem.
pub fn is_filename_safe(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Derives the download filename of a badge.
///
/// Identifiers made only of ASCII letters, digits, `.`, `_` and `-` are kept
/// verbatim (`badge-<identifier>.pdf`). Anything else is reduced to a
/// lower-case slug, and identifiers with nothing usable in them give
/// `badge.pdf`.
pub fn badge_filename(identifier: &str) -> String {
    if is_filename_safe(identifier) {
        return format!("badge-{}.pdf", identifier);
    }
    let slug = slug::slugify(identifier);
    if slug.is_empty() {
        "badge.pdf".to_string()
    } else {
        format!("badge-{}.pdf", slug)
    }
}

/// A rendered badge ready to be sent or saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub filename: String,
    pub bytes: Vec<u8>,
}
