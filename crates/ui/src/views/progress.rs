use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_error, view_state_from_resource};
use crate::vm::{ProgressTab, ProgressVm, ScoreBarVm, map_progress};

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let student_id = ctx.student_id();
    let mut tab = use_signal(ProgressTab::default);

    let resource = use_resource(move || {
        let progress = progress.clone();
        let student_id = student_id.clone();
        async move {
            let dashboard = progress
                .dashboard(&student_id)
                .await
                .map_err(view_error)?
                .ok_or(ViewError::NotFound)?;
            Ok(map_progress(&dashboard))
        }
    });

    let state = view_state_from_resource(resource);
    let active = tab();

    rsx! {
        div { class: "page",
            h2 { "Learning Progress" }

            div { class: "tabs",
                for candidate in ProgressTab::ALL {
                    button {
                        key: "{candidate.label()}",
                        class: if candidate == active { "tab tab--active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| tab.set(candidate),
                        "{candidate.label()}"
                    }
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => match active {
                    ProgressTab::Overview => rsx! { OverviewTab { vm } },
                    ProgressTab::Skills => rsx! { SkillsTab { vm } },
                    ProgressTab::Achievements => rsx! { AchievementsTab { vm } },
                    ProgressTab::Schedule => rsx! { ScheduleTab { vm } },
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn OverviewTab(vm: ProgressVm) -> Element {
    rsx! {
        div { class: "stat-grid",
            div { class: "stat",
                span { class: "stat-label", "Overall completion" }
                span { class: "stat-value", "{vm.completion_label}" }
                div { class: "bar",
                    div { class: "bar-fill", style: "{vm.completion_width}" }
                }
                span { class: "stat-note", "{vm.lessons_label}" }
            }
            div { class: "stat",
                span { class: "stat-label", "Current level" }
                span { class: "stat-value", "{vm.level_name}" }
                span { class: "stat-note", "{vm.term_title}" }
            }
            div { class: "stat",
                span { class: "stat-label", "Time invested" }
                span { class: "stat-value", "{vm.time_label}" }
            }
            div { class: "{vm.streak_class}",
                span { class: "stat-label", "Learning streak" }
                span { class: "stat-value", "{vm.streak_label}" }
                span { class: "stat-note", "Last active: {vm.last_active_label}" }
            }
        }
    }
}

#[component]
fn SkillsTab(vm: ProgressVm) -> Element {
    rsx! {
        div { class: "skill-categories",
            for category in vm.categories {
                div { class: "skill-category", key: "{category.name}",
                    h4 { "{category.name}" }
                    span { class: "skill-average", "Average {category.average_label}" }
                    for bar in category.skills {
                        ScoreBar { key: "{bar.label}", bar }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ScoreBar(bar: ScoreBarVm) -> Element {
    rsx! {
        div { class: "score-bar",
            span { class: "score-label", "{bar.label}" }
            div { class: "bar",
                div { class: "bar-fill", style: "{bar.width}" }
            }
            span { class: "score-value", "{bar.value}" }
        }
    }
}

#[component]
fn AchievementsTab(vm: ProgressVm) -> Element {
    rsx! {
        if vm.achievements.is_empty() {
            p { "No achievements yet. Complete lessons to earn badges." }
        } else {
            ul { class: "achievements",
                for achievement in vm.achievements {
                    li { class: "achievement", "🏆 {achievement}" }
                }
            }
        }
    }
}

#[component]
fn ScheduleTab(vm: ProgressVm) -> Element {
    rsx! {
        if vm.deadlines.is_empty() {
            p { "No upcoming deadlines." }
        } else {
            ul { class: "deadlines",
                for deadline in vm.deadlines {
                    li { class: "{deadline.kind_class}",
                        span { class: "deadline-kind", "{deadline.kind_label}" }
                        span { class: "deadline-title", "{deadline.title}" }
                        span { class: "deadline-due", "Due {deadline.due_label}" }
                    }
                }
            }
        }
    }
}
