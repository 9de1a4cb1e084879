//! Catalog data model
//!
//! Wire shapes returned by the character catalog API plus a few derived
//! views used by the presentation side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Location
// ============================================================================

/// Named reference to a location resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    /// Display name ("unknown" when the server does not know)
    pub name: String,
    /// Resource URL, empty when unresolvable
    pub url: String,
}

impl LocationRef {
    /// Whether the reference points at a resolvable resource
    pub fn is_resolvable(&self) -> bool {
        !self.url.is_empty()
    }
}

// ============================================================================
// Character
// ============================================================================

/// One catalog entry, immutable once received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    /// Free-text status as delivered ("Alive", "Dead", "unknown")
    pub status: String,
    pub species: String,
    /// Sub-species, often empty
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    /// Avatar image URL
    pub image: String,
    /// Episode resource URLs
    pub episode: Vec<String>,
    /// Canonical self URL
    pub url: String,
    /// Creation timestamp (RFC 3339 on the live API)
    pub created: String,
}

impl Character {
    /// Parse the creation timestamp, `None` if it is not RFC 3339
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Classified status
    pub fn status_kind(&self) -> CharacterStatus {
        CharacterStatus::parse(&self.status)
    }

    /// Number of episodes the character appears in
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }

    /// Detail view of this character
    pub fn detail(&self) -> CharacterDetail {
        CharacterDetail::from(self)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Case-insensitive classification of a character status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    /// Classify free text; anything unrecognized is `Unknown`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }

    /// Wire value used for the `status` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

// ============================================================================
// Page
// ============================================================================

/// Pagination metadata of one page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters matching the query
    pub count: u64,
    /// Total number of pages
    pub pages: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub prev: Option<String>,
}

impl PageInfo {
    /// Whether the server advertises a following page
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

/// One server-returned batch of characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// Number of characters on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the page carries no characters
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// ============================================================================
// Detail View
// ============================================================================

/// Flattened view shown on the detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterDetail {
    pub name: String,
    pub species: String,
    pub gender: String,
    pub location: String,
    pub status: String,
    pub image_url: String,
}

impl From<&Character> for CharacterDetail {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            species: character.species.clone(),
            gender: character.gender.clone(),
            location: character.location.name.clone(),
            status: character.status.clone(),
            image_url: character.image.clone(),
        }
    }
}

impl fmt::Display for CharacterDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Species:  {}", self.species)?;
        writeln!(f, "  Gender:   {}", self.gender)?;
        writeln!(f, "  Location: {}", self.location)?;
        writeln!(f, "  Status:   {}", self.status)?;
        write!(f, "  Image:    {}", self.image_url)
    }
}
