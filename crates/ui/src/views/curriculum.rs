use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_error, view_state_from_resource};
use crate::vm::{LevelCardVm, TermCardVm, bar_width, format_percent, map_level_cards};

#[derive(Clone, Debug, PartialEq)]
struct CurriculumData {
    overall: f64,
    levels: Vec<LevelCardVm>,
}

#[component]
pub fn CurriculumView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let student_id = ctx.student_id();
    let mut selected = use_signal(|| 0_usize);

    let resource = use_resource(move || {
        let progress = progress.clone();
        let student_id = student_id.clone();
        async move {
            let completed = progress
                .record(&student_id)
                .await
                .map_err(view_error)?
                .map(|record| record.completed_lessons)
                .unwrap_or_default();
            Ok(CurriculumData {
                overall: catalog.overall_completion(&completed),
                levels: map_level_cards(&catalog.level_overviews(&completed), &completed),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Curriculum" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => {
                    let active = selected().min(data.levels.len().saturating_sub(1));
                    rsx! {
                        div { class: "overall-progress",
                            span { "Overall progress: {format_percent(data.overall)}" }
                            div { class: "bar",
                                div { class: "bar-fill", style: "{bar_width(data.overall)}" }
                            }
                        }
                        div { class: "level-tabs",
                            for (index, level) in data.levels.iter().enumerate() {
                                button {
                                    key: "{level.id}",
                                    class: if index == active { "tab tab--active" } else { "tab" },
                                    r#type: "button",
                                    onclick: move |_| selected.set(index),
                                    "{level.icon} {level.name}"
                                }
                            }
                        }
                        if let Some(level) = data.levels.get(active).cloned() {
                            LevelPanel { level }
                        }
                    }
                }
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn LevelPanel(level: LevelCardVm) -> Element {
    rsx! {
        div { class: "{level.class}",
            h3 { "{level.name}" }
            p { "{level.description}" }
            p { class: "level-status", "{level.student_status}" }
            p { class: "level-goal", "Goal: {level.goal}" }
            p { class: "level-totals", "{level.totals_label}" }
            div { class: "bar",
                div { class: "bar-fill", style: "{bar_width(level.completion)}" }
            }
            p { class: "level-completion", "{level.completion_label} complete" }
            div { class: "term-grid",
                for term in level.terms {
                    TermCard { key: "{term.id}", term }
                }
            }
        }
    }
}

#[component]
fn TermCard(term: TermCardVm) -> Element {
    rsx! {
        div { class: "term-card",
            h4 { "{term.title}" }
            span { class: "term-duration", "{term.duration}" }
            p { "{term.description}" }
            if !term.objectives.is_empty() {
                ul { class: "objectives",
                    for objective in term.objectives {
                        li { "{objective}" }
                    }
                }
            }
            ul { class: "lesson-list",
                for lesson in term.lessons {
                    li {
                        key: "{lesson.id}",
                        class: if lesson.completed { "lesson-row lesson-row--done" } else { "lesson-row" },
                        Link { to: Route::Lesson { lesson_id: lesson.id.clone() }, "{lesson.title}" }
                        span { class: "lesson-duration", "{lesson.duration}" }
                        if lesson.completed {
                            span { class: "lesson-check", "✓" }
                        }
                    }
                }
            }
        }
    }
}
