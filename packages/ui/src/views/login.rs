use dioxus::prelude::*;
use store::validate;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};
use crate::{
    log_activity, report_error, report_success, sign_in, use_activity_log, use_api, use_auth,
    use_config, LogLevel, Page,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Email and password login. A successful login is persisted for the
/// configured session lifetime and lands on the feed.
#[component]
pub fn LoginView(on_navigate: EventHandler<Page>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut auth = use_auth();
    let mut activity_log = use_activity_log();
    let toast_api = use_toast();
    let api = use_api();
    let ttl_hours = use_config().session.ttl_hours;

    // Already signed in
    use_effect(move || {
        if !auth().loading && auth().session.is_some() {
            on_navigate.call(Page::Notes);
        }
    });

    let handle_submit = move |_| {
        let credentials = match validate::login(&email(), &password()) {
            Ok(c) => c,
            Err(e) => {
                toast_api.error(e.to_string(), ToastOptions::new());
                return;
            }
        };
        let api = api();
        spawn(async move {
            submitting.set(true);
            match api.login(&credentials.email, &credentials.password).await {
                Ok(user) => {
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Signed in as {}", user.user.email),
                    );
                    sign_in(&mut auth, user, ttl_hours).await;
                    report_success(&mut activity_log, &toast_api, "Successfully logged in!");
                    on_navigate.call(Page::Notes);
                }
                Err(e) => {
                    report_error(&mut activity_log, &toast_api, &e.user_message("Login failed"), &e)
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            div {
                class: "card auth-card",
                h1 { class: "view-title", "Welcome back" }
                p { class: "view-muted", "Log in to share your thoughts on Chattrix." }

                div {
                    class: "form-field",
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Logging in..." } else { "Login" }
                }
                p {
                    class: "view-muted",
                    "No account yet? "
                    a {
                        class: "link",
                        onclick: move |_| on_navigate.call(Page::Signup),
                        "Sign up"
                    }
                }
            }
        }
    }
}
