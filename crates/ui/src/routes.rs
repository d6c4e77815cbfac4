use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use studio_core::content::BRAND;

use crate::views::{
    CurriculumView, FeedbackView, HomeView, LessonView, MentorsView, PortfolioView, ProgressView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/curriculum", CurriculumView)] Curriculum {},
        #[route("/lesson/:lesson_id", LessonView)] Lesson { lesson_id: String },
        #[route("/progress", ProgressView)] Progress {},
        #[route("/portfolio", PortfolioView)] Portfolio {},
        #[route("/mentors", MentorsView)] Mentors {},
        #[route("/feedback", FeedbackView)] Feedback {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { class: "brand", "{BRAND}" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Curriculum {}, "Curriculum" } }
                li { Link { to: Route::Progress {}, "Progress" } }
                li { Link { to: Route::Portfolio {}, "Portfolio" } }
                li { Link { to: Route::Mentors {}, "Mentors" } }
                li { Link { to: Route::Feedback {}, "AI Feedback" } }
            }
        }
    }
}
