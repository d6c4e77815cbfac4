use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewState, view_error, view_state_from_resource};
use crate::vm::{MentorCardVm, ScheduleVm, SessionRowVm, map_mentor_cards, map_schedule};

#[derive(Clone, Debug, PartialEq)]
struct MentorsData {
    mentors: Vec<MentorCardVm>,
    schedule: ScheduleVm,
}

#[component]
pub fn MentorsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mentorship = ctx.mentorship();
    let student_id = ctx.student_id();
    let expanded = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let mentorship = mentorship.clone();
        let student_id = student_id.clone();
        async move {
            let mentors = mentorship.list_mentors().await.map_err(view_error)?;
            let schedule = mentorship.schedule(&student_id).await.map_err(view_error)?;
            Ok(MentorsData {
                mentors: map_mentor_cards(&mentors),
                schedule: map_schedule(&schedule),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Expert Mentorship" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    section { class: "mentor-list",
                        h3 { "Mentors" }
                        for mentor in data.mentors {
                            MentorAccordion {
                                key: "{mentor.id}",
                                open: expanded().as_deref() == Some(mentor.id.as_str()),
                                mentor,
                                expanded,
                            }
                        }
                    }
                    section { class: "sessions",
                        h3 { "Upcoming Sessions" }
                        if data.schedule.upcoming.is_empty() {
                            p { "No sessions booked." }
                        } else {
                            for row in data.schedule.upcoming {
                                SessionRow { key: "{row.id}", row }
                            }
                        }
                        h3 { "Past Sessions" }
                        if data.schedule.past.is_empty() {
                            p { "No past sessions yet." }
                        } else {
                            for row in data.schedule.past {
                                SessionRow { key: "{row.id}", row }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn MentorAccordion(
    mentor: MentorCardVm,
    open: bool,
    mut expanded: Signal<Option<String>>,
) -> Element {
    let id = mentor.id.clone();
    rsx! {
        div { class: "mentor",
            button {
                class: if open { "mentor-header mentor-header--open" } else { "mentor-header" },
                r#type: "button",
                onclick: move |_| {
                    if open {
                        expanded.set(None);
                    } else {
                        expanded.set(Some(id.clone()));
                    }
                },
                span { class: "avatar", "{mentor.initials}" }
                span { class: "mentor-name", "{mentor.name}" }
                span { class: "mentor-role", "{mentor.role_line}" }
                span { class: "mentor-rating", "{mentor.rating_label}" }
            }
            if open {
                div { class: "mentor-body",
                    p { "{mentor.bio}" }
                    p { class: "mentor-experience", "{mentor.experience_label}" }
                    div { class: "tags",
                        for specialty in mentor.specialties {
                            span { class: "tag", "{specialty}" }
                        }
                    }
                    h5 { "Availability ({mentor.timezone})" }
                    ul { class: "availability",
                        for row in mentor.availability {
                            li { key: "{row.day}", strong { "{row.day}: " } "{row.slots}" }
                        }
                    }
                    p { class: "mentor-slots", "{mentor.slots_label}" }
                    div { class: "mentor-links",
                        if let Some(url) = mentor.linkedin_url {
                            a { href: "{url}", target: "_blank", "LinkedIn" }
                        }
                        if let Some(url) = mentor.portfolio_url {
                            a { href: "{url}", target: "_blank", "Portfolio" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionRow(row: SessionRowVm) -> Element {
    rsx! {
        div { class: "session-row",
            div { class: "session-main",
                span { class: "session-kind", "{row.kind_label}" }
                span { class: "session-mentor", "with {row.mentor_name}" }
                span { class: "{row.status_class}", "{row.status_label}" }
            }
            div { class: "session-meta",
                span { "{row.when_label}" }
                span { "{row.duration_label}" }
            }
            if let Some(html) = row.notes_html {
                div { class: "session-notes", dangerous_inner_html: "{html}" }
            }
            if let Some(feedback) = row.feedback {
                p { class: "session-feedback", "{feedback}" }
            }
            if let Some(url) = row.recording_url {
                a { href: "{url}", target: "_blank", "Watch recording" }
            }
        }
    }
}
