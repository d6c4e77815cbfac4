use dioxus::prelude::*;
use studio_core::model::{PortfolioCategory, PortfolioDraft, PortfolioItemId, PortfolioPatch};
use studio_core::portfolio::{CategoryFilter, PortfolioQuery, SortOrder};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_error, view_state_from_resource};
use crate::vm::{
    CategoryTabVm, EditFormVm, PortfolioCardVm, ViewMode, map_category_tabs, map_portfolio_cards,
};

#[derive(Clone, Debug, PartialEq)]
struct PortfolioData {
    tabs: Vec<CategoryTabVm>,
    cards: Vec<PortfolioCardVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct DraftForm {
    title: String,
    description: String,
    category: PortfolioCategory,
    tags: String,
    is_public: bool,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: PortfolioCategory::Exterior,
            tags: String::new(),
            is_public: true,
        }
    }
}

impl From<DraftForm> for PortfolioDraft {
    fn from(form: DraftForm) -> Self {
        Self {
            title: form.title,
            description: form.description,
            category: form.category,
            tags: form.tags,
            images: Vec::new(),
            is_public: form.is_public,
        }
    }
}

#[component]
pub fn PortfolioView() -> Element {
    let ctx = use_context::<AppContext>();
    let portfolio = ctx.portfolio();
    let mut query = use_signal(PortfolioQuery::default);
    let mut action_error = use_signal(|| None::<String>);
    let mut show_form = use_signal(|| false);
    let mut draft = use_signal(DraftForm::default);
    let mut view_mode = use_signal(ViewMode::default);
    let mut editing = use_signal(|| None::<PortfolioItemId>);

    let mut resource = {
        let portfolio = portfolio.clone();
        use_resource(move || {
            let portfolio = portfolio.clone();
            let query = query();
            async move {
                let counts = portfolio.category_counts().await.map_err(view_error)?;
                let items = portfolio.list(&query).await.map_err(view_error)?;
                Ok::<_, ViewError>(PortfolioData {
                    tabs: map_category_tabs(&counts),
                    cards: map_portfolio_cards(&items),
                })
            }
        })
    };

    let on_toggle = {
        let portfolio = portfolio.clone();
        Callback::new(move |id: PortfolioItemId| {
            let portfolio = portfolio.clone();
            spawn(async move {
                match portfolio.toggle_public(id).await {
                    Ok(_) => resource.restart(),
                    Err(err) => action_error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_delete = {
        let portfolio = portfolio.clone();
        Callback::new(move |id: PortfolioItemId| {
            let portfolio = portfolio.clone();
            spawn(async move {
                match portfolio.delete(id).await {
                    Ok(()) => resource.restart(),
                    Err(err) => action_error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_edit = Callback::new(move |id: Option<PortfolioItemId>| editing.set(id));

    let on_save = {
        let portfolio = portfolio.clone();
        Callback::new(move |(id, patch): (PortfolioItemId, PortfolioPatch)| {
            let portfolio = portfolio.clone();
            spawn(async move {
                match portfolio.edit(id, patch).await {
                    Ok(_) => {
                        editing.set(None);
                        action_error.set(None);
                        resource.restart();
                    }
                    Err(err) => action_error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_add = move |evt: FormEvent| {
        evt.prevent_default();
        let portfolio = portfolio.clone();
        let submitted = draft();
        spawn(async move {
            match portfolio.add(submitted.into()).await {
                Ok(_) => {
                    draft.set(DraftForm::default());
                    show_form.set(false);
                    action_error.set(None);
                    resource.restart();
                }
                Err(err) => action_error.set(Some(err.to_string())),
            }
        });
    };

    let state = view_state_from_resource(resource);
    let current = query();
    let form_value = draft();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "My Portfolio" }
                button {
                    class: "btn btn--primary",
                    r#type: "button",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "Add Project" }
                }
            }

            if show_form() {
                form { class: "portfolio-form", onsubmit: on_add,
                    input {
                        id: "project-title",
                        class: "input",
                        placeholder: "Project title",
                        value: "{form_value.title}",
                        oninput: move |evt| draft.write().title = evt.value(),
                    }
                    select {
                        id: "project-category",
                        class: "input",
                        value: "{form_value.category.as_str()}",
                        onchange: move |evt| {
                            if let Ok(category) = evt.value().parse::<PortfolioCategory>() {
                                draft.write().category = category;
                            }
                        },
                        for category in PortfolioCategory::ALL {
                            option { value: "{category.as_str()}", "{category.label()}" }
                        }
                    }
                    textarea {
                        id: "project-description",
                        class: "input",
                        placeholder: "Description",
                        value: "{form_value.description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                    input {
                        id: "project-tags",
                        class: "input",
                        placeholder: "Tags, separated by commas",
                        value: "{form_value.tags}",
                        oninput: move |evt| draft.write().tags = evt.value(),
                    }
                    label { class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: form_value.is_public,
                            onchange: move |evt| draft.write().is_public = evt.checked(),
                        }
                        "Public"
                    }
                    button { class: "btn btn--primary", r#type: "submit", "Save Project" }
                }
            }

            if let Some(message) = action_error() {
                p { class: "form-error", "{message}" }
            }

            div { class: "portfolio-controls",
                input {
                    id: "portfolio-search",
                    class: "input",
                    placeholder: "Search projects, descriptions, tags...",
                    value: "{current.text}",
                    oninput: move |evt| query.write().text = evt.value(),
                }
                select {
                    id: "portfolio-sort",
                    class: "input",
                    value: "{current.sort.as_str()}",
                    onchange: move |evt| {
                        if let Ok(sort) = evt.value().parse::<SortOrder>() {
                            query.write().sort = sort;
                        }
                    },
                    for order in SortOrder::ALL {
                        option { value: "{order.as_str()}", "{order.label()}" }
                    }
                }
                div { class: "view-mode",
                    for mode in ViewMode::ALL {
                        button {
                            key: "{mode.label()}",
                            class: if mode == view_mode() { "tab tab--active" } else { "tab" },
                            r#type: "button",
                            onclick: move |_| view_mode.set(mode),
                            "{mode.label()}"
                        }
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
                ViewState::Ready(data) => rsx! {
                    div { class: "category-tabs",
                        for tab in data.tabs {
                            CategoryTab {
                                key: "{tab.filter.as_str()}",
                                tab,
                                active: current.category,
                                on_select: move |filter: CategoryFilter| query.write().category = filter,
                            }
                        }
                    }
                    if data.cards.is_empty() {
                        p { class: "empty", "No projects match your filters." }
                    } else {
                        PortfolioCards {
                            cards: data.cards,
                            mode: view_mode(),
                            editing: editing(),
                            on_toggle,
                            on_delete,
                            on_edit,
                            on_save,
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
fn CategoryTab(
    tab: CategoryTabVm,
    active: CategoryFilter,
    on_select: Callback<CategoryFilter>,
) -> Element {
    let filter = tab.filter;
    rsx! {
        button {
            class: if filter == active { "tab tab--active" } else { "tab" },
            r#type: "button",
            onclick: move |_| on_select.call(filter),
            "{tab.label} ({tab.count})"
        }
    }
}

#[component]
pub(crate) fn PortfolioCards(
    cards: Vec<PortfolioCardVm>,
    mode: ViewMode,
    #[props(!optional)] editing: Option<PortfolioItemId>,
    on_toggle: Callback<PortfolioItemId>,
    on_delete: Callback<PortfolioItemId>,
    on_edit: Callback<Option<PortfolioItemId>>,
    on_save: Callback<(PortfolioItemId, PortfolioPatch)>,
) -> Element {
    rsx! {
        div { class: "{mode.container_class()}",
            for card in cards {
                PortfolioCard {
                    key: "{card.id}",
                    editing: editing == Some(card.id),
                    card,
                    mode,
                    on_toggle,
                    on_delete,
                    on_edit,
                    on_save,
                }
            }
        }
    }
}

#[component]
fn PortfolioCard(
    card: PortfolioCardVm,
    mode: ViewMode,
    editing: bool,
    on_toggle: Callback<PortfolioItemId>,
    on_delete: Callback<PortfolioItemId>,
    on_edit: Callback<Option<PortfolioItemId>>,
    on_save: Callback<(PortfolioItemId, PortfolioPatch)>,
) -> Element {
    let id = card.id;
    if editing {
        return rsx! {
            div { class: "{mode.card_class()}",
                EditForm { card, on_edit, on_save }
            }
        };
    }
    rsx! {
        div { class: "{mode.card_class()}",
            div { class: "portfolio-card-header",
                span { class: "category-icon", "{card.icon}" }
                span { class: "category-label", "{card.category_label}" }
                span {
                    class: if card.is_public { "visibility visibility--public" } else { "visibility" },
                    "{card.visibility_label}"
                }
            }
            h4 { "{card.title}" }
            p { "{card.description}" }
            div { class: "tags",
                for tag in card.tags {
                    span { class: "tag", "#{tag}" }
                }
            }
            div { class: "portfolio-card-footer",
                span { class: "created", "{card.created_label}" }
                span { class: "stats", "{card.stats_label}" }
            }
            div { class: "portfolio-card-actions",
                button {
                    class: "btn btn--ghost",
                    r#type: "button",
                    onclick: move |_| on_edit.call(Some(id)),
                    "Edit"
                }
                button {
                    class: "btn btn--ghost",
                    r#type: "button",
                    onclick: move |_| on_toggle.call(id),
                    "{card.toggle_label}"
                }
                button {
                    class: "btn btn--danger",
                    r#type: "button",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn EditForm(
    card: PortfolioCardVm,
    on_edit: Callback<Option<PortfolioItemId>>,
    on_save: Callback<(PortfolioItemId, PortfolioPatch)>,
) -> Element {
    let mut form = {
        let card = card.clone();
        use_signal(move || EditFormVm::from(&card))
    };
    let value = form();
    let id = card.id;

    rsx! {
        form {
            class: "portfolio-edit",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_save.call((id, form().into_patch(&card)));
            },
            input {
                class: "input",
                placeholder: "Project title",
                value: "{value.title}",
                oninput: move |evt| form.write().title = evt.value(),
            }
            select {
                class: "input",
                value: "{value.category.as_str()}",
                onchange: move |evt| {
                    if let Ok(category) = evt.value().parse::<PortfolioCategory>() {
                        form.write().category = category;
                    }
                },
                for category in PortfolioCategory::ALL {
                    option { value: "{category.as_str()}", "{category.label()}" }
                }
            }
            textarea {
                class: "input",
                placeholder: "Description",
                value: "{value.description}",
                oninput: move |evt| form.write().description = evt.value(),
            }
            input {
                class: "input",
                placeholder: "Tags, separated by commas",
                value: "{value.tags}",
                oninput: move |evt| form.write().tags = evt.value(),
            }
            div { class: "portfolio-card-actions",
                button {
                    class: "btn btn--ghost",
                    r#type: "button",
                    onclick: move |_| on_edit.call(None),
                    "Cancel"
                }
                button { class: "btn btn--primary", r#type: "submit", "Save Changes" }
            }
        }
    }
}
