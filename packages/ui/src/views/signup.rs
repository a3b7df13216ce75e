use dioxus::prelude::*;
use store::validate;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};
use crate::{report_error, report_success, use_activity_log, use_api, Page};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn SignupView(on_navigate: EventHandler<Page>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut activity_log = use_activity_log();
    let toast_api = use_toast();
    let api = use_api();

    let handle_submit = move |_| {
        let registration = match validate::signup(&name(), &email(), &password(), &confirm()) {
            Ok(r) => r,
            Err(e) => {
                toast_api.error(e.to_string(), ToastOptions::new());
                return;
            }
        };
        let api = api();
        spawn(async move {
            submitting.set(true);
            match api
                .signup(&registration.name, &registration.email, &registration.password)
                .await
            {
                Ok(()) => {
                    report_success(
                        &mut activity_log,
                        &toast_api,
                        "Account created! You can now login.",
                    );
                    on_navigate.call(Page::Login);
                }
                Err(e) => report_error(
                    &mut activity_log,
                    &toast_api,
                    &e.user_message("Signup failed"),
                    &e,
                ),
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
                h1 { class: "view-title", "Create an account" }

                div {
                    class: "form-field",
                    Label { html_for: "signup-name", "Name" }
                    Input {
                        id: "signup-name",
                        r#type: "text",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "signup-email", "Email" }
                    Input {
                        id: "signup-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "signup-password", "Password" }
                    Input {
                        id: "signup-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "signup-confirm", "Confirm password" }
                    Input {
                        id: "signup-confirm",
                        r#type: "password",
                        value: confirm(),
                        oninput: move |evt: FormEvent| confirm.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Creating account..." } else { "Sign Up" }
                }
                p {
                    class: "view-muted",
                    "Already registered? "
                    a {
                        class: "link",
                        onclick: move |_| on_navigate.call(Page::Login),
                        "Log in"
                    }
                }
            }
        }
    }
}
