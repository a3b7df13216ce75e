use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Textarea};
use crate::icons::{FaPenToSquare, FaTrashCan};
use crate::{Avatar, Icon, LikeButton};

/// Confirmation that a comment or feedback page is waiting on.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MessageAction {
    Add(String),
    Edit { id: String, text: String },
    Delete(String),
}

impl MessageAction {
    pub(crate) fn prompt(&self) -> &'static str {
        match self {
            MessageAction::Add(_) => "Post this message?",
            MessageAction::Edit { .. } => "Save your changes?",
            MessageAction::Delete(_) => "Delete this message?",
        }
    }

    pub(crate) fn is_destructive(&self) -> bool {
        matches!(self, MessageAction::Delete(_))
    }
}

/// A comment or feedback entry, with inline editing for its author.
#[component]
pub(crate) fn MessageCard(
    author: String,
    #[props(default)] avatar: Option<String>,
    #[props(default)] author_is_admin: bool,
    #[props(default)] posted: String,
    body: String,
    like_count: u64,
    #[props(default)] liked: bool,
    #[props(default)] can_edit: bool,
    #[props(default)] can_delete: bool,
    #[props(default)] editing: bool,
    #[props(default)] draft: String,
    on_like: EventHandler<()>,
    on_start_edit: EventHandler<()>,
    on_draft: EventHandler<String>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        article {
            class: "card message-card",
            div {
                class: "card-header",
                Avatar { name: author.clone(), src: avatar }
                div {
                    class: "card-meta",
                    span {
                        class: "card-author",
                        "{author}"
                        if author_is_admin {
                            span { class: "badge", " admin" }
                        }
                    }
                    if !posted.is_empty() {
                        span { class: "card-date", "{posted}" }
                    }
                }
            }

            if editing {
                Textarea {
                    rows: "3",
                    value: draft,
                    oninput: move |evt: FormEvent| on_draft.call(evt.value()),
                }
                div {
                    class: "form-actions",
                    Button { variant: ButtonVariant::Primary, onclick: move |_| on_save.call(()), "Save" }
                    Button { variant: ButtonVariant::Outline, onclick: move |_| on_cancel.call(()), "Cancel" }
                }
            } else {
                p { class: "card-body", "{body}" }
            }

            div {
                class: "card-actions",
                LikeButton { count: like_count, liked, on_toggle: move |_| on_like.call(()) }
                div { class: "spacer" }
                if can_edit && !editing {
                    button {
                        class: "icon-button",
                        title: "Edit",
                        onclick: move |_| on_start_edit.call(()),
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                }
                if can_delete {
                    button {
                        class: "icon-button danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(()),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_prompts() {
        assert_eq!(MessageAction::Add("hi".to_string()).prompt(), "Post this message?");
        assert!(MessageAction::Delete("c1".to_string()).is_destructive());
        assert!(
            !MessageAction::Edit { id: "c1".to_string(), text: "x".to_string() }.is_destructive(),
        );
    }
}
