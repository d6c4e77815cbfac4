use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::model::ids::{MentorId, MentorshipSessionId, StudentId};
use crate::model::kind::ParseKindError;

//
// ─── MENTOR ────────────────────────────────────────────────────────────────────
//

/// Weekly availability of a mentor, in the mentor's own timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub timezone: String,
    /// Slot labels ("9:00 AM") per weekday, Monday first.
    pub schedule: BTreeMap<u8, Vec<String>>,
}

impl Availability {
    #[must_use]
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            schedule: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_day(mut self, day: Weekday, slots: &[&str]) -> Self {
        self.schedule.insert(
            day.num_days_from_monday() as u8,
            slots.iter().map(|s| (*s).to_owned()).collect(),
        );
        self
    }

    #[must_use]
    pub fn slots_on(&self, day: Weekday) -> &[String] {
        self.schedule
            .get(&(day.num_days_from_monday() as u8))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of bookable slots in a week.
    #[must_use]
    pub fn weekly_slot_count(&self) -> usize {
        self.schedule.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertMentor {
    pub id: MentorId,
    pub name: String,
    pub title: String,
    pub company: String,
    /// Years of industry experience.
    pub experience: u32,
    pub specialties: Vec<String>,
    pub availability: Availability,
    pub rating: f32,
    pub bio: String,
    pub profile_image: String,
    pub linkedin_url: Option<Url>,
    pub portfolio_url: Option<Url>,
}

impl ExpertMentor {
    /// First letter of each name part, used as an avatar fallback.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    PortfolioReview,
    SkillGuidance,
    CareerAdvice,
    LiveWorkshop,
}

impl SessionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PortfolioReview => "portfolio_review",
            Self::SkillGuidance => "skill_guidance",
            Self::CareerAdvice => "career_advice",
            Self::LiveWorkshop => "live_workshop",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PortfolioReview => "Portfolio Review",
            Self::SkillGuidance => "Skill Guidance",
            Self::CareerAdvice => "Career Advice",
            Self::LiveWorkshop => "Live Workshop",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SessionType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portfolio_review" => Ok(Self::PortfolioReview),
            "skill_guidance" => Ok(Self::SkillGuidance),
            "career_advice" => Ok(Self::CareerAdvice),
            "live_workshop" => Ok(Self::LiveWorkshop),
            _ => Err(ParseKindError::new("session type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl SessionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for SessionStatus {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseKindError::new("session status", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorshipSession {
    pub id: MentorshipSessionId,
    pub mentor_id: MentorId,
    pub student_id: StudentId,
    #[serde(rename = "type")]
    pub kind: SessionType,
    pub scheduled_time: DateTime<Utc>,
    /// Length in minutes.
    pub duration: u32,
    pub status: SessionStatus,
    pub notes: Option<String>,
    pub feedback: Option<String>,
    pub recording_url: Option<Url>,
}

impl MentorshipSession {
    /// A scheduled session that has not started yet.
    #[must_use]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.status == SessionStatus::Scheduled && self.scheduled_time > now
    }
}
