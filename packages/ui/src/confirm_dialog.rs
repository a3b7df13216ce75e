use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Yes/no prompt shown before any mutation is sent.
/// Clicking the backdrop counts as "cancel".
#[component]
pub fn ConfirmDialog(
    title: String,
    #[props(default)] message: String,
    #[props(default = "Yes".to_string())] confirm_label: String,
    #[props(default)] destructive: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let variant = if destructive {
        ButtonVariant::Destructive
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { class: "modal-title", "{title}" }
                if !message.is_empty() {
                    p { class: "modal-message", "{message}" }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: variant,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
