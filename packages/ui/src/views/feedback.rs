use dioxus::prelude::*;
use store::access::{can_delete, can_edit, can_like};
use store::feed::sort_items;
use store::{validate, Feedback, FeedbackInput, ItemKind, LikeLedger, SortOption};

use super::message_card::{MessageAction, MessageCard};
use crate::components::{use_toast, Button, ButtonVariant, Textarea, ToastOptions};
use crate::{
    load_like_counts, log_activity, posted_at, report_error, report_success, toggle_like,
    use_activity_log, use_api, use_auth, ConfirmDialog, LogLevel, Page,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Site feedback board. Anyone can read it, members can post and like.
#[component]
pub fn FeedbackView(on_navigate: EventHandler<Page>) -> Element {
    let mut entries = use_signal(Vec::<Feedback>::new);
    let mut likes = use_signal(LikeLedger::new);
    let mut sort = use_signal(|| SortOption::Newest);
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
        async move {
            match api.list_feedback().await {
                Ok(list) => {
                    let ids = list.iter().map(|f| f.id.clone()).collect();
                    load_like_counts(&api, &mut likes, ItemKind::Feedback, ids).await;
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Loaded {} feedback entries", list.len()),
                    );
                    entries.set(list);
                }
                Err(e) => report_error(&mut activity_log, &toast_api, "Error fetching feedback", e),
            }
            loaded.set(true);
        }
    });

    let viewer = auth().user().cloned();
    let logged_in = viewer.is_some();
    let mut visible = entries();
    sort_items(&mut visible, sort(), ItemKind::Feedback, &likes());

    let handle_like = use_callback(move |id: String| {
        if !can_like(auth().user()) {
            toast_api.error("Please login to like feedback".to_string(), ToastOptions::new());
            return;
        }
        let api = api();
        spawn(async move {
            if let Err(e) = toggle_like(&api, &mut likes, ItemKind::Feedback, &id).await {
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
        let author = auth()
            .user()
            .map(|u| (u.user.display_name().to_string(), u.user.email.clone()));
        spawn(async move {
            match action {
                MessageAction::Add(message) => {
                    let Some((user, email)) = author else {
                        toast_api.error(
                            "Please login to leave feedback".to_string(),
                            ToastOptions::new(),
                        );
                        return;
                    };
                    let input = FeedbackInput { user, email, message };
                    match api.create_feedback(&input).await {
                        Ok(created) => {
                            likes.write().set_count(ItemKind::Feedback, &created.id, 0);
                            entries.write().insert(0, created);
                            draft.set(String::new());
                            report_success(&mut activity_log, &toast_api, "Feedback added!");
                        }
                        Err(e) => report_error(
                            &mut activity_log,
                            &toast_api,
                            "Error creating feedback",
                            e,
                        ),
                    }
                }
                MessageAction::Edit { id, text } => match api.update_feedback(&id, &text).await {
                    Ok(()) => {
                        if let Some(f) = entries.write().iter_mut().find(|f| f.id == id) {
                            f.message = text;
                        }
                        editing.set(None);
                        report_success(&mut activity_log, &toast_api, "Feedback updated!");
                    }
                    Err(e) => {
                        report_error(&mut activity_log, &toast_api, "Error updating feedback", e)
                    }
                },
                MessageAction::Delete(id) => match api.delete_feedback(&id).await {
                    Ok(()) => {
                        entries.write().retain(|f| f.id != id);
                        likes.write().remove(ItemKind::Feedback, &id);
                        report_success(&mut activity_log, &toast_api, "Feedback deleted!");
                    }
                    Err(e) => {
                        report_error(&mut activity_log, &toast_api, "Error deleting feedback", e)
                    }
                },
            }
        });
    };

    let editing_id = editing().map(|(id, _)| id);
    let editing_text = editing().map(|(_, text)| text).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page feed",
            h1 { class: "view-title", "Feedback" }

            if logged_in {
                div {
                    class: "card compose-card",
                    Textarea {
                        rows: "3",
                        placeholder: "Tell us what you think...",
                        value: draft(),
                        oninput: move |evt: FormEvent| draft.set(evt.value()),
                    }
                    div {
                        class: "form-actions",
                        Button { variant: ButtonVariant::Primary, onclick: handle_post, "Submit Feedback" }
                    }
                }
            } else {
                p {
                    class: "view-muted",
                    a { class: "link", onclick: move |_| on_navigate.call(Page::Login), "Log in" }
                    " to leave feedback."
                }
            }

            div {
                class: "sort-bar",
                for option in [SortOption::MostLiked, SortOption::Newest] {
                    Button {
                        variant: if sort() == option { ButtonVariant::Primary } else { ButtonVariant::Outline },
                        onclick: move |_| sort.set(option),
                        {option.label()}
                    }
                }
            }

            if visible.is_empty() && loaded() {
                p { class: "view-empty", "No feedback yet." }
            }

            for entry in visible {
                MessageCard {
                    key: "{entry.id}",
                    author: if entry.user.is_empty() { entry.email.clone() } else { entry.user.clone() },
                    avatar: entry.owner.as_ref().and_then(|a| a.avatar()).map(str::to_string),
                    author_is_admin: entry.owner.as_ref().is_some_and(|a| a.is_admin()),
                    posted: posted_at(&entry),
                    body: entry.message.clone(),
                    like_count: likes().count(ItemKind::Feedback, &entry.id),
                    liked: likes().is_liked(ItemKind::Feedback, &entry.id),
                    can_edit: can_edit(viewer.as_ref(), entry.author_id()),
                    can_delete: can_delete(viewer.as_ref(), entry.author_id()),
                    editing: editing_id.as_deref() == Some(entry.id.as_str()),
                    draft: editing_text.clone(),
                    on_like: {
                        let id = entry.id.clone();
                        move |_| handle_like.call(id.clone())
                    },
                    on_start_edit: {
                        let id = entry.id.clone();
                        let text = entry.message.clone();
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
                        let id = entry.id.clone();
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
