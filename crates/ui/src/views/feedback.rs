use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::progress::ScoreBar;
use crate::views::{ViewError, ViewState, view_error, view_state_from_resource};
use crate::vm::{FeedbackTab, FeedbackVm, map_feedback};

#[component]
pub fn FeedbackView() -> Element {
    let ctx = use_context::<AppContext>();
    let feedback = ctx.feedback();
    let student_id = ctx.student_id();
    let mut tab = use_signal(FeedbackTab::default);

    let resource = use_resource(move || {
        let feedback = feedback.clone();
        let student_id = student_id.clone();
        async move {
            let report = feedback
                .latest_for_student(&student_id)
                .await
                .map_err(view_error)?
                .ok_or(ViewError::NotFound)?;
            Ok(map_feedback(&report))
        }
    });

    let state = view_state_from_resource(resource);
    let active = tab();

    rsx! {
        div { class: "page",
            h2 { "AI Design Feedback" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    div { class: "feedback-summary",
                        div { class: "{vm.band_class}",
                            span { class: "score-number", "{vm.overall}" }
                            span { class: "score-out-of", "/100" }
                        }
                        div {
                            h3 { "{vm.lesson_title}" }
                            p { class: "feedback-headline", "{vm.headline}" }
                            p { class: "feedback-meta",
                                "Skill level: {vm.skill_level} · Reviewed {vm.reviewed_label} · {vm.confidence_label}"
                            }
                        }
                    }
                    div { class: "tabs",
                        for candidate in FeedbackTab::ALL {
                            button {
                                key: "{candidate.label()}",
                                class: if candidate == active { "tab tab--active" } else { "tab" },
                                r#type: "button",
                                onclick: move |_| tab.set(candidate),
                                "{candidate.label()}"
                            }
                        }
                    }
                    match active {
                        FeedbackTab::Overview => rsx! { OverviewTab { vm: vm.clone() } },
                        FeedbackTab::Technical => rsx! { TechnicalTab { vm: vm.clone() } },
                        FeedbackTab::NextSteps => rsx! { NextStepsTab { vm: vm.clone() } },
                    }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    p { "No feedback yet. Submit an assignment to get your first review." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn BulletList(title: &'static str, items: Vec<String>) -> Element {
    rsx! {
        if !items.is_empty() {
            div { class: "bullet-list",
                h4 { "{title}" }
                ul {
                    for item in items {
                        li { "{item}" }
                    }
                }
            }
        }
    }
}

#[component]
fn OverviewTab(vm: FeedbackVm) -> Element {
    rsx! {
        div { class: "feedback-columns",
            BulletList { title: "Strengths", items: vm.strengths }
            BulletList { title: "Areas for Improvement", items: vm.improvements }
        }
        BulletList { title: "Specific Recommendations", items: vm.specific_recommendations }
        if let Some(submission) = vm.submission {
            div { class: "submission",
                h4 { "Your Submission" }
                p { "{submission.kind_label} · {submission.files_label} · {submission.status_label}" }
                if let Some(html) = submission.description_html {
                    div { class: "submission-description", dangerous_inner_html: "{html}" }
                }
            }
        }
    }
}

#[component]
fn TechnicalTab(vm: FeedbackVm) -> Element {
    rsx! {
        div { class: "technical",
            h4 { "Technical Assessment" }
            for bar in vm.technical {
                ScoreBar { key: "{bar.label}", bar }
            }
        }
        if let Some(analysis) = vm.analysis {
            div { class: "analysis",
                h4 { "Quality Metrics" }
                p { class: "analysis-confidence", "{analysis.confidence_label}" }
                for bar in analysis.quality {
                    ScoreBar { key: "{bar.label}", bar }
                }
                BulletList { title: "Detected Elements", items: analysis.detected_elements }
                BulletList { title: "Common Mistakes", items: analysis.common_mistakes }
            }
        }
    }
}

#[component]
fn NextStepsTab(vm: FeedbackVm) -> Element {
    let exercises = vm
        .analysis
        .as_ref()
        .map(|analysis| analysis.practice_exercises.clone())
        .unwrap_or_default();
    rsx! {
        div { class: "next-steps",
            h4 { "Recommended Lessons" }
            ul {
                for lesson in vm.recommended_lessons {
                    li { key: "{lesson.id}",
                        if lesson.linkable {
                            Link { to: Route::Lesson { lesson_id: lesson.id.clone() }, "{lesson.name}" }
                        } else {
                            span { "{lesson.name}" }
                        }
                    }
                }
            }
            BulletList { title: "Practice Areas", items: vm.practice_areas }
            BulletList { title: "Practice Exercises", items: exercises }
            BulletList { title: "Resources", items: vm.resources }
        }
    }
}
