use dioxus::prelude::*;
use dioxus_router::Link;
use services::Acknowledgement;
use studio_core::content::{
    ABOUT, ABOUT_FEATURES, CONTACT_SECTION, COURSES_SECTION, GALLERY_SECTION, HERO, Section,
};
use studio_core::model::{ContactError, ContactForm};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{course_cards, gallery_tiles};

#[component]
pub fn HomeView() -> Element {
    let courses = course_cards();
    let selected = use_signal(|| None::<usize>);

    rsx! {
        div { class: "page page--home",
            section { class: "hero",
                h2 { class: "hero-title",
                    "{HERO.headline} "
                    span { class: "highlight", "{HERO.highlight}" }
                }
                p { class: "hero-tagline", "{HERO.tagline}" }
                div { class: "hero-actions",
                    Link { class: "btn btn--primary", to: Route::Curriculum {}, "{HERO.primary_action}" }
                    a { class: "btn btn--ghost", href: "#courses", "{HERO.secondary_action}" }
                }
            }

            section { class: "about", id: "about",
                SectionHeading { section: ABOUT }
                div { class: "feature-grid",
                    for feature in ABOUT_FEATURES {
                        div { class: "feature-card", key: "{feature.title}",
                            span { class: "feature-icon", "{feature.icon}" }
                            h4 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }

            section { class: "courses", id: "courses",
                SectionHeading { section: COURSES_SECTION }
                div { class: "course-grid",
                    for course in courses {
                        div { class: "course-card", key: "{course.title}",
                            h4 { "{course.title}" }
                            p { "{course.description}" }
                            div { class: "course-meta",
                                span { "⏱ {course.duration}" }
                                span { "{course.level}" }
                            }
                        }
                    }
                }
            }

            section { class: "gallery", id: "gallery",
                SectionHeading { section: GALLERY_SECTION }
                Gallery { selected }
            }

            section { class: "contact", id: "contact",
                SectionHeading { section: CONTACT_SECTION }
                ContactPanel {}
            }
        }
    }
}

/// Gallery grid; `selected` holds the tile shown in the lightbox.
#[component]
pub(crate) fn Gallery(mut selected: Signal<Option<usize>>) -> Element {
    let tiles = gallery_tiles();
    let total = tiles.len();
    let open = selected().and_then(|index| tiles.get(index).copied().map(|tile| (index, tile)));

    rsx! {
        div { class: "gallery-grid",
            for (index, tile) in tiles.into_iter().enumerate() {
                button {
                    class: "{tile.class}",
                    key: "{tile.title}",
                    r#type: "button",
                    onclick: move |_| selected.set(Some(index)),
                    h4 { "{tile.title}" }
                    p { "{tile.category}" }
                }
            }
        }
        if let Some((index, tile)) = open {
            div { class: "lightbox", onclick: move |_| selected.set(None),
                div {
                    class: "lightbox-body {tile.class}",
                    onclick: move |evt| evt.stop_propagation(),
                    h3 { "{tile.title}" }
                    p { "{tile.category}" }
                    div { class: "lightbox-nav",
                        button {
                            class: "btn btn--ghost",
                            r#type: "button",
                            disabled: index == 0,
                            onclick: move |_| selected.set(Some(index.saturating_sub(1))),
                            "Previous"
                        }
                        span { class: "lightbox-count", "{index + 1} / {total}" }
                        button {
                            class: "btn btn--ghost",
                            r#type: "button",
                            disabled: index + 1 >= total,
                            onclick: move |_| selected.set(Some((index + 1).min(total - 1))),
                            "Next"
                        }
                    }
                    button {
                        class: "btn btn--primary",
                        r#type: "button",
                        onclick: move |_| selected.set(None),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn SectionHeading(section: Section) -> Element {
    rsx! {
        h3 { class: "section-title",
            "{section.title} "
            span { class: "highlight", "{section.highlight}" }
        }
        p { class: "section-intro", "{section.intro}" }
    }
}

#[component]
fn ContactPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let contact = ctx.contact();

    let mut form = use_signal(ContactForm::default);
    let mut error = use_signal(|| None::<ContactError>);
    let mut acknowledgement = use_signal(|| None::<Acknowledgement>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = contact.submit(&form.read());
        match result {
            Ok(ack) => {
                form.write().clear();
                error.set(None);
                acknowledgement.set(Some(ack));
            }
            Err(err) => {
                acknowledgement.set(None);
                error.set(Some(err));
            }
        }
    };

    let current = form();

    rsx! {
        if let Some(ack) = acknowledgement() {
            div { class: "contact-ack",
                h4 { "{ack.title}" }
                p { "{ack.body}" }
                button {
                    class: "btn btn--ghost",
                    r#type: "button",
                    onclick: move |_| acknowledgement.set(None),
                    "Send another message"
                }
            }
        } else {
            form { class: "contact-form", onsubmit: on_submit,
                input {
                    id: "contact-name",
                    class: "input",
                    placeholder: "Your Name",
                    value: "{current.name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
                input {
                    id: "contact-email",
                    class: "input",
                    r#type: "email",
                    placeholder: "Email Address",
                    value: "{current.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                input {
                    id: "contact-phone",
                    class: "input",
                    r#type: "tel",
                    placeholder: "Phone Number (optional)",
                    value: "{current.phone}",
                    oninput: move |evt| form.write().phone = evt.value(),
                }
                textarea {
                    id: "contact-message",
                    class: "input",
                    placeholder: "Tell us about your design goals",
                    value: "{current.message}",
                    oninput: move |evt| form.write().message = evt.value(),
                }
                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }
                button { class: "btn btn--primary", r#type: "submit", "Send Message" }
            }
        }
    }
}
