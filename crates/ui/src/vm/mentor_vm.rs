use services::{SessionListing, SessionSchedule};
use studio_core::model::{ExpertMentor, SessionStatus};

use crate::vm::markdown::markdown_to_html;
use crate::vm::time_fmt::format_datetime;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityRowVm {
    pub day: &'static str,
    pub slots: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentorCardVm {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub role_line: String,
    pub experience_label: String,
    pub rating_label: String,
    pub specialties: Vec<String>,
    pub bio: String,
    pub timezone: String,
    pub availability: Vec<AvailabilityRowVm>,
    pub slots_label: String,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

impl From<&ExpertMentor> for MentorCardVm {
    fn from(mentor: &ExpertMentor) -> Self {
        let availability = mentor
            .availability
            .schedule
            .iter()
            .filter(|(_, slots)| !slots.is_empty())
            .filter_map(|(day, slots)| {
                DAY_NAMES.get(usize::from(*day)).map(|name| AvailabilityRowVm {
                    day: name,
                    slots: slots.join(", "),
                })
            })
            .collect();

        Self {
            id: mentor.id.as_str().to_owned(),
            name: mentor.name.clone(),
            initials: mentor.initials(),
            role_line: format!("{} at {}", mentor.title, mentor.company),
            experience_label: format!("{} years experience", mentor.experience),
            rating_label: format!("★ {:.1}", mentor.rating),
            specialties: mentor.specialties.clone(),
            bio: mentor.bio.clone(),
            timezone: mentor.availability.timezone.clone(),
            availability,
            slots_label: format!(
                "{} open slots per week",
                mentor.availability.weekly_slot_count()
            ),
            linkedin_url: mentor.linkedin_url.as_ref().map(ToString::to_string),
            portfolio_url: mentor.portfolio_url.as_ref().map(ToString::to_string),
        }
    }
}

#[must_use]
pub fn map_mentor_cards(mentors: &[ExpertMentor]) -> Vec<MentorCardVm> {
    mentors.iter().map(MentorCardVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRowVm {
    pub id: String,
    pub kind_label: &'static str,
    pub mentor_name: String,
    pub when_label: String,
    pub duration_label: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    /// Sanitized HTML.
    pub notes_html: Option<String>,
    pub feedback: Option<String>,
    pub recording_url: Option<String>,
}

#[must_use]
pub fn session_status_class(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Scheduled => "status status--scheduled",
        SessionStatus::Completed => "status status--completed",
        SessionStatus::Cancelled => "status status--cancelled",
    }
}

impl From<&SessionListing> for SessionRowVm {
    fn from(listing: &SessionListing) -> Self {
        let session = &listing.session;
        Self {
            id: session.id.as_str().to_owned(),
            kind_label: session.kind.label(),
            mentor_name: listing
                .mentor_name
                .clone()
                .unwrap_or_else(|| "Unknown mentor".to_owned()),
            when_label: format_datetime(session.scheduled_time),
            duration_label: format!("{} min", session.duration),
            status_label: session.status.label(),
            status_class: session_status_class(session.status),
            notes_html: session.notes.as_deref().map(markdown_to_html),
            feedback: session.feedback.clone(),
            recording_url: session.recording_url.as_ref().map(ToString::to_string),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleVm {
    pub upcoming: Vec<SessionRowVm>,
    pub past: Vec<SessionRowVm>,
}

#[must_use]
pub fn map_schedule(schedule: &SessionSchedule) -> ScheduleVm {
    ScheduleVm {
        upcoming: schedule.upcoming.iter().map(SessionRowVm::from).collect(),
        past: schedule.past.iter().map(SessionRowVm::from).collect(),
    }
}
