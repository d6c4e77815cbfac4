use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::PortfolioItemId;
use crate::model::kind::ParseKindError;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PortfolioDraftError {
    #[error("project title cannot be empty")]
    EmptyTitle,
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PortfolioCategory {
    #[serde(rename = "exterior")]
    Exterior,
    #[serde(rename = "interior")]
    Interior,
    #[serde(rename = "concept")]
    Concept,
    #[serde(rename = "sketch")]
    Sketch,
    #[serde(rename = "3d_model")]
    Model3d,
}

impl PortfolioCategory {
    pub const ALL: [Self; 5] = [
        Self::Exterior,
        Self::Interior,
        Self::Concept,
        Self::Sketch,
        Self::Model3d,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exterior => "exterior",
            Self::Interior => "interior",
            Self::Concept => "concept",
            Self::Sketch => "sketch",
            Self::Model3d => "3d_model",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Exterior => "Exterior Design",
            Self::Interior => "Interior Design",
            Self::Concept => "Concept Design",
            Self::Sketch => "Sketches",
            Self::Model3d => "3D Models",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Exterior => "🚗",
            Self::Interior => "🪑",
            Self::Concept => "💡",
            Self::Sketch => "✏️",
            Self::Model3d => "🎯",
        }
    }
}

impl fmt::Display for PortfolioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortfolioCategory {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseKindError::new("portfolio category", s))
    }
}

//
// ─── ITEM ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub title: String,
    pub description: String,
    pub category: PortfolioCategory,
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_public: bool,
    pub likes: u32,
    pub views: u32,
    pub comments: u32,
}

impl PortfolioItem {
    /// Popularity used by the "most popular" ordering.
    #[must_use]
    pub fn popularity(&self) -> u64 {
        u64::from(self.likes) + u64::from(self.views)
    }
}

/// User-entered fields for a new portfolio project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioDraft {
    pub title: String,
    pub description: String,
    pub category: PortfolioCategory,
    /// Comma-separated, as typed in the form.
    pub tags: String,
    pub images: Vec<String>,
    pub is_public: bool,
}

impl PortfolioDraft {
    /// Normalize the draft into a new item with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioDraftError::EmptyTitle` if the title is blank.
    pub fn validate(
        self,
        id: PortfolioItemId,
        now: DateTime<Utc>,
    ) -> Result<PortfolioItem, PortfolioDraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PortfolioDraftError::EmptyTitle);
        }

        Ok(PortfolioItem {
            id,
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            category: self.category,
            images: self.images,
            videos: Vec::new(),
            documents: Vec::new(),
            tags: split_tags(&self.tags),
            created_at: now,
            updated_at: now,
            is_public: self.is_public,
            likes: 0,
            views: 0,
            comments: 0,
        })
    }
}

/// Partial edit of an existing item; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<PortfolioCategory>,
    pub tags: Option<String>,
}

impl PortfolioPatch {
    /// Apply the patch in place and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioDraftError::EmptyTitle` if a blank title is supplied.
    /// The item is left untouched on error.
    pub fn apply(self, item: &mut PortfolioItem, now: DateTime<Utc>) -> Result<(), PortfolioDraftError> {
        let title = match self.title {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(PortfolioDraftError::EmptyTitle);
                }
                Some(trimmed.to_owned())
            }
            None => None,
        };

        if let Some(title) = title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description.trim().to_owned();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(tags) = self.tags {
            item.tags = split_tags(&tags);
        }
        item.updated_at = now;
        Ok(())
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}
