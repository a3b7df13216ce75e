use dioxus::prelude::*;
use store::access::{can_delete, can_edit, can_like};
use store::{validate, Comment, ItemKind, LikeLedger, Note};

use super::message_card::{MessageAction, MessageCard};
use crate::components::{use_toast, Button, ButtonVariant, Textarea, ToastOptions};
use crate::icons::FaArrowLeft;
use crate::{
    load_like_counts, log_activity, posted_at, report_error, report_success, toggle_like,
    use_activity_log, use_api, use_auth, ConfirmDialog, Icon, LogLevel, Page,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Comment thread under a single note.
#[component]
pub fn CommentsView(note_id: String, on_navigate: EventHandler<Page>) -> Element {
    let mut note_signal = use_signal(|| note_id.clone());
    if *note_signal.peek() != note_id {
        note_signal.set(note_id.clone());
    }

    let mut note = use_signal(|| Option::<Note>::None);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut likes = use_signal(LikeLedger::new);
    let mut draft = use_signal(String::new);
    let mut editing = use_signal(|| Option::<(String, String)>::None);
    let mut pending = use_signal(|| Option::<MessageAction>::None);
    let mut loaded = use_signal(|| false);

    let auth = use_auth();
    let api = use_api();
    let mut activity_log = use_activity_log();
    let toast_api = use_toast();

    let _loader = use_resource(move || {
        let api = api();
        let id = note_signal();
        async move {
            if let Ok(found) = api.get_note(&id).await {
                note.set(Some(found));
            }
            match api.list_comments(&id).await {
                Ok(list) => {
                    let ids = list.iter().map(|c| c.id.clone()).collect();
                    load_like_counts(&api, &mut likes, ItemKind::Comment, ids).await;
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Loaded {} comments", list.len()),
                    );
                    comments.set(list);
                }
                Err(e) => report_error(&mut activity_log, &toast_api, "Error fetching comments", e),
            }
            loaded.set(true);
        }
    });

    let viewer = auth().user().cloned();
    let logged_in = viewer.is_some();

    let handle_like = use_callback(move |id: String| {
        if !can_like(auth().user()) {
            toast_api.error("Please log in to like comments".to_string(), ToastOptions::new());
            return;
        }
        let api = api();
        spawn(async move {
            if let Err(e) = toggle_like(&api, &mut likes, ItemKind::Comment, &id).await {
                report_error(&mut activity_log, &toast_api, "Error toggling like", e);
            }
        });
    });

    let handle_post = move |_| match validate::new_message(&draft()) {
        Ok(text) => pending.set(Some(MessageAction::Add(text))),
        Err(e) => {
            toast_api.error(e.to_string(), ToastOptions::new());
        }
    };

    let handle_save = use_callback(move |_: ()| {
        let Some((id, text)) = editing() else {
            return;
        };
        match validate::edited_message(&text) {
            Ok(text) => pending.set(Some(MessageAction::Edit { id, text })),
            Err(e) => {
                toast_api.error(e.to_string(), ToastOptions::new());
            }
        }
    });

    let handle_confirm = move |_| {
        let Some(action) = pending() else {
            return;
        };
        pending.set(None);
        let api = api();
        let note_id = note_signal();
        spawn(async move {
            match action {
                MessageAction::Add(text) => match api.create_comment(&note_id, &text).await {
                    Ok(comment) => {
                        likes.write().set_count(ItemKind::Comment, &comment.id, 0);
                        comments.write().insert(0, comment);
                        draft.set(String::new());
                        report_success(&mut activity_log, &toast_api, "Comment added!");
                    }
                    Err(e) => {
                        report_error(&mut activity_log, &toast_api, "Error creating comment", e)
                    }
                },
                MessageAction::Edit { id, text } => match api.update_comment(&id, &text).await {
                    Ok(()) => {
                        if let Some(c) = comments.write().iter_mut().find(|c| c.id == id) {
                            c.content = text;
                        }
                        editing.set(None);
                        report_success(&mut activity_log, &toast_api, "Comment updated!");
                    }
                    Err(e) => {
                        report_error(&mut activity_log, &toast_api, "Error updating comment", e)
                    }
                },
                MessageAction::Delete(id) => match api.delete_comment(&id).await {
                    Ok(()) => {
                        comments.write().retain(|c| c.id != id);
                        likes.write().remove(ItemKind::Comment, &id);
                        report_success(&mut activity_log, &toast_api, "Comment deleted!");
                    }
                    Err(e) => {
                        report_error(&mut activity_log, &toast_api, "Error deleting comment", e)
                    }
                },
            }
        });
    };

    let heading = note().map(|n| n.title).unwrap_or_else(|| "Comments".to_string());
    let editing_id = editing().map(|(id, _)| id);
    let editing_text = editing().map(|(_, text)| text).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page feed",

            button {
                class: "link back-link",
                onclick: move |_| on_navigate.call(Page::Notes),
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                " Back to notes"
            }
            h1 { class: "view-title", "{heading}" }

            if logged_in {
                div {
                    class: "card compose-card",
                    Textarea {
                        rows: "3",
                        placeholder: "Write a comment...",
                        value: draft(),
                        oninput: move |evt: FormEvent| draft.set(evt.value()),
                    }
                    div {
                        class: "form-actions",
                        Button { variant: ButtonVariant::Primary, onclick: handle_post, "Post Comment" }
                    }
                }
            } else {
                p {
                    class: "view-muted",
                    a { class: "link", onclick: move |_| on_navigate.call(Page::Login), "Log in" }
                    " to join the conversation."
                }
            }

            if comments().is_empty() && loaded() {
                p { class: "view-empty", "No comments yet." }
            }

            for comment in comments() {
                MessageCard {
                    key: "{comment.id}",
                    author: comment.user.as_ref().and_then(|a| a.name()).unwrap_or("Unknown").to_string(),
                    avatar: comment.user.as_ref().and_then(|a| a.avatar()).map(str::to_string),
                    author_is_admin: comment.user.as_ref().is_some_and(|a| a.is_admin()),
                    posted: posted_at(&comment),
                    body: comment.content.clone(),
                    like_count: likes().count(ItemKind::Comment, &comment.id),
                    liked: likes().is_liked(ItemKind::Comment, &comment.id),
                    can_edit: can_edit(viewer.as_ref(), comment.author_id()),
                    can_delete: can_delete(viewer.as_ref(), comment.author_id()),
                    editing: editing_id.as_deref() == Some(comment.id.as_str()),
                    draft: editing_text.clone(),
                    on_like: {
                        let id = comment.id.clone();
                        move |_| handle_like.call(id.clone())
                    },
                    on_start_edit: {
                        let id = comment.id.clone();
                        let text = comment.content.clone();
                        move |_| editing.set(Some((id.clone(), text.clone())))
                    },
                    on_draft: move |text: String| {
                        if let Some((_, current)) = editing.write().as_mut() {
                            *current = text;
                        }
                    },
                    on_save: move |_| handle_save.call(()),
                    on_cancel: move |_| editing.set(None),
                    on_delete: {
                        let id = comment.id.clone();
                        move |_| pending.set(Some(MessageAction::Delete(id.clone())))
                    },
                }
            }

            if let Some(action) = pending() {
                ConfirmDialog {
                    title: action.prompt().to_string(),
                    confirm_label: if action.is_destructive() { "Delete".to_string() } else { "Yes".to_string() },
                    destructive: action.is_destructive(),
                    on_confirm: handle_confirm,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}
