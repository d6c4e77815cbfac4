use dioxus::prelude::*;
use dioxus_router::Link;
use studio_core::model::LessonId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_error, view_state_from_resource};
use crate::vm::{LessonDetailVm, map_lesson_detail};

#[component]
pub fn LessonView(lesson_id: String) -> Element {
    // Keyed so that next/previous navigation remounts with fresh hooks.
    rsx! {
        LessonPage { key: "{lesson_id}", lesson_id: lesson_id.clone() }
    }
}

#[component]
fn LessonPage(lesson_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let student_id = ctx.student_id();
    let mut action_error = use_signal(|| None::<ViewError>);

    let mut resource = {
        let progress = progress.clone();
        let student_id = student_id.clone();
        let lesson_id = lesson_id.clone();
        use_resource(move || {
            let progress = progress.clone();
            let student_id = student_id.clone();
            let lesson_id = lesson_id.clone();
            async move {
                let completed = progress
                    .record(&student_id)
                    .await
                    .map_err(view_error)?
                    .map(|record| record.completed_lessons)
                    .unwrap_or_default();
                let view = catalog
                    .lesson_view(&lesson_id, &completed)
                    .ok_or(ViewError::NotFound)?;
                Ok(map_lesson_detail(catalog.catalog(), &view))
            }
        })
    };

    let on_complete = move |_: MouseEvent| {
        let progress = progress.clone();
        let student_id = student_id.clone();
        let lesson_id = LessonId::new(lesson_id.clone());
        spawn(async move {
            match progress.mark_lesson_complete(&student_id, &lesson_id).await {
                Ok(_) => {
                    action_error.set(None);
                    resource.restart();
                }
                Err(err) => action_error.set(Some(view_error(err))),
            }
        });
    };

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page page--lesson",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(lesson) => rsx! {
                    LessonBody { lesson, on_complete }
                    if let Some(err) = action_error() {
                        p { class: "form-error", "{err.message()}" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    h2 { "Lesson" }
                    p { "{err.message()}" }
                    Link { to: Route::Curriculum {}, "Back to curriculum" }
                },
            }
        }
    }
}

#[component]
fn LessonBody(lesson: LessonDetailVm, on_complete: EventHandler<MouseEvent>) -> Element {
    rsx! {
        p { class: "breadcrumb", "{lesson.level_name} › {lesson.term_title}" }
        h2 { "{lesson.title}" }
        span { class: "lesson-duration", "⏱ {lesson.duration}" }
        p { "{lesson.description}" }

        if !lesson.unlocked {
            div { class: "notice notice--locked",
                "Complete the prerequisites below to unlock this lesson."
            }
        }

        div { class: "lesson-columns",
            div {
                h4 { "Skills" }
                ul {
                    for skill in lesson.skills {
                        li { "{skill}" }
                    }
                }
            }
            div {
                h4 { "Equipment" }
                ul {
                    for item in lesson.equipment {
                        li { "{item}" }
                    }
                }
            }
            div {
                h4 { "Prerequisites" }
                if lesson.prerequisites.is_empty() {
                    p { "None" }
                } else {
                    ul {
                        for prerequisite in lesson.prerequisites {
                            li {
                                key: "{prerequisite.id}",
                                class: if prerequisite.met { "prereq prereq--met" } else { "prereq" },
                                Link {
                                    to: Route::Lesson { lesson_id: prerequisite.id.clone() },
                                    "{prerequisite.title}"
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(html) = lesson.interactive_html {
            div { class: "interactive", dangerous_inner_html: "{html}" }
        }

        if let Some(assessment) = lesson.assessment {
            div { class: "assessment",
                h4 { "Assessment: {assessment.label}" }
                ul {
                    for criterion in assessment.criteria {
                        li { "{criterion}" }
                    }
                }
                if assessment.ai_feedback {
                    p { class: "ai-badge", "AI feedback available" }
                }
            }
        }

        div { class: "lesson-resources",
            if let Some(url) = lesson.video_url {
                a { href: "{url}", target: "_blank", "Watch video" }
            }
            if let Some(url) = lesson.document_url {
                a { href: "{url}", target: "_blank", "Read document" }
            }
        }

        div { class: "lesson-actions",
            if lesson.completed {
                span { class: "lesson-check", "✓ Completed" }
            } else {
                button {
                    class: "btn btn--primary",
                    r#type: "button",
                    disabled: !lesson.unlocked,
                    onclick: move |evt| on_complete.call(evt),
                    "Mark as complete"
                }
            }
        }

        nav { class: "lesson-nav",
            if let Some(previous) = lesson.previous {
                Link { to: Route::Lesson { lesson_id: previous.id.clone() }, "← {previous.title}" }
            }
            if let Some(next) = lesson.next {
                Link { to: Route::Lesson { lesson_id: next.id.clone() }, "{next.title} →" }
            }
        }
    }
}
