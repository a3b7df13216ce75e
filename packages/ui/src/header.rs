use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::{sign_out, use_auth, ActivityLogToggle, Page};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar: brand, main links, and either the signed-in user or the
/// login/signup buttons.
#[component]
pub fn Header(
    /// Highlights the matching link.
    #[props(default)]
    current: Option<Page>,
    on_navigate: EventHandler<Page>,
) -> Element {
    let mut auth = use_auth();
    let account = auth()
        .user()
        .map(|u| (u.user.display_name().to_string(), u.user.avatar.clone()));
    let is_admin = auth().is_admin();

    let link_class = |page: Page| {
        if current.as_ref() == Some(&page) {
            "header-link active"
        } else {
            "header-link"
        }
    };

    let handle_logout = move |_| {
        spawn(async move {
            sign_out(&mut auth).await;
            on_navigate.call(Page::Login);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "app-header",
            div {
                class: "header-brand",
                onclick: move |_| on_navigate.call(Page::Notes),
                span { class: "header-logo", "C" }
                span { class: "header-title", "Chattrix" }
            }

            nav {
                class: "header-nav",
                button {
                    class: link_class(Page::Notes),
                    onclick: move |_| on_navigate.call(Page::Notes),
                    "Notes"
                }
                button {
                    class: link_class(Page::Feedback),
                    onclick: move |_| on_navigate.call(Page::Feedback),
                    "Feedback"
                }
                if is_admin {
                    button {
                        class: link_class(Page::Admin),
                        onclick: move |_| on_navigate.call(Page::Admin),
                        "Manage Users"
                    }
                }
            }

            div {
                class: "header-account",
                ActivityLogToggle {}
                if let Some((name, avatar)) = account {
                    div {
                        class: "header-user",
                        onclick: move |_| on_navigate.call(Page::Profile),
                        Avatar { name: name.clone(), src: avatar }
                        span { class: "header-user-name", "{name}" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_logout,
                        "Logout"
                    }
                } else {
                    Button {
                        variant: if current == Some(Page::Login) { ButtonVariant::Primary } else { ButtonVariant::Outline },
                        onclick: move |_| on_navigate.call(Page::Login),
                        "Login"
                    }
                    Button {
                        variant: if current == Some(Page::Signup) { ButtonVariant::Primary } else { ButtonVariant::Outline },
                        onclick: move |_| on_navigate.call(Page::Signup),
                        "Sign Up"
                    }
                }
            }
        }
    }
}

/// Round avatar: the picture when there is one, else the first letter.
#[component]
pub fn Avatar(name: String, #[props(default)] src: Option<String>) -> Element {
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    rsx! {
        if let Some(src) = src.filter(|s| !s.is_empty()) {
            img { class: "avatar", src: "{src}", alt: "{name}" }
        } else {
            span { class: "avatar", "{initial}" }
        }
    }
}
