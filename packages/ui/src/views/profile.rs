use api::ApiError;
use dioxus::prelude::*;
use store::access::{can_block, can_delete, can_edit};
use store::{ItemKind, LikeLedger, Note, User};

use crate::components::{use_toast, Button, ButtonVariant};
use crate::{
    load_like_counts, log_activity, report_error, report_success, toggle_like, use_activity_log,
    use_api, use_auth, use_config, use_login_guard, Avatar, ConfirmDialog, LogLevel, NoteCard, Page,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Debug, PartialEq)]
enum ProfileAction {
    DeleteNote(Note),
    Block(bool),
}

/// A member's page: their notes and the notes they liked. Without
/// `user_id` it shows the signed-in user.
#[component]
pub fn ProfileView(
    #[props(default)] user_id: Option<String>,
    on_navigate: EventHandler<Page>,
) -> Element {
    let page = match &user_id {
        Some(id) => Page::UserProfile(id.clone()),
        None => Page::Profile,
    };
    use_login_guard(page, on_navigate);

    let mut target_signal = use_signal(|| user_id.clone());
    if *target_signal.peek() != user_id {
        target_signal.set(user_id.clone());
    }

    let mut profile = use_signal(|| Option::<User>::None);
    let mut notes = use_signal(Vec::<Note>::new);
    let mut liked = use_signal(Vec::<Note>::new);
    let mut likes = use_signal(LikeLedger::new);
    let mut pending = use_signal(|| Option::<ProfileAction>::None);

    let auth = use_auth();
    let api = use_api();
    let media_base = use_config().media_base();
    let mut activity_log = use_activity_log();
    let toast_api = use_toast();

    let _loader = use_resource(move || {
        let api = api();
        let viewer_id = auth().user().map(|u| u.id().to_string());
        let target = target_signal().or_else(|| viewer_id.clone());
        async move {
            let Some(id) = target else {
                return;
            };
            let loaded = async {
                let user = api.get_user(&id).await?;
                let own = api.user_notes(&id).await?;
                let fav = api.user_liked_notes(&id).await?;
                Ok::<_, ApiError>((user, own, fav))
            };
            match loaded.await {
                Ok((user, own, fav)) => {
                    let ids = own.iter().chain(fav.iter()).map(|n| n.id.clone()).collect();
                    load_like_counts(&api, &mut likes, ItemKind::Note, ids).await;
                    for note_id in viewer_liked_ids(viewer_id.as_deref(), &id, &fav) {
                        likes.write().mark_liked(ItemKind::Note, &note_id, true);
                    }
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Loaded profile of {}", user.display_name()),
                    );
                    profile.set(Some(user));
                    notes.set(own);
                    liked.set(fav);
                }
                Err(e) => report_error(&mut activity_log, &toast_api, "Failed to load profile", e),
            }
        }
    });

    let viewer = auth().user().cloned();
    let is_own = match (&viewer, profile()) {
        (Some(v), Some(p)) => v.id() == p.id,
        _ => false,
    };

    let handle_like = use_callback(move |id: String| {
        let api = api();
        spawn(async move {
            if let Err(e) = toggle_like(&api, &mut likes, ItemKind::Note, &id).await {
                report_error(&mut activity_log, &toast_api, "Error toggling like", e);
            }
        });
    });

    let handle_unlike = use_callback(move |id: String| {
        let api = api();
        spawn(async move {
            match toggle_like(&api, &mut likes, ItemKind::Note, &id).await {
                Ok(()) => {
                    liked.write().retain(|n| n.id != id);
                    report_success(&mut activity_log, &toast_api, "Unliked note");
                }
                Err(e) => report_error(&mut activity_log, &toast_api, "Failed to unlike note", e),
            }
        });
    });

    let handle_confirm = move |_| {
        let Some(action) = pending() else {
            return;
        };
        pending.set(None);
        let api = api();
        spawn(async move {
            match action {
                ProfileAction::DeleteNote(note) => match api.delete_note(&note.id).await {
                    Ok(()) => {
                        notes.write().retain(|n| n.id != note.id);
                        liked.write().retain(|n| n.id != note.id);
                        likes.write().remove(ItemKind::Note, &note.id);
                        report_success(&mut activity_log, &toast_api, "Note deleted");
                    }
                    Err(e) => {
                        report_error(&mut activity_log, &toast_api, "Failed to delete note", e)
                    }
                },
                ProfileAction::Block(blocked) => {
                    let Some(id) = profile().map(|p| p.id) else {
                        return;
                    };
                    match api.set_blocked(&id, blocked).await {
                        Ok(user) => {
                            profile.set(Some(user));
                            let message = if blocked { "User blocked" } else { "User unblocked" };
                            report_success(&mut activity_log, &toast_api, message);
                        }
                        Err(e) => report_error(
                            &mut activity_log,
                            &toast_api,
                            "Error updating block status",
                            e,
                        ),
                    }
                }
            }
        });
    };

    let Some(user) = profile() else {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div { class: "view-page", p { class: "view-muted", "Loading profile..." } }
        };
    };
    let show_block = can_block(viewer.as_ref(), &user);
    let role_label = if user.is_admin() { "Admin" } else { "Member" };
    let display_name = user.display_name().to_string();
    let blocked = user.is_blocked;

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page feed",

            div {
                class: "card profile-card",
                Avatar { name: display_name.clone(), src: user.avatar.clone() }
                div {
                    class: "profile-info",
                    h1 { class: "view-title", "{display_name}" }
                    span { class: "view-muted", "{user.email}" }
                    span { class: "badge", "{role_label}" }
                    if blocked {
                        span { class: "badge danger", "Blocked" }
                    }
                }
                if show_block {
                    Button {
                        variant: if blocked { ButtonVariant::Secondary } else { ButtonVariant::Destructive },
                        onclick: move |_| pending.set(Some(ProfileAction::Block(!blocked))),
                        if blocked { "Unblock" } else { "Block" }
                    }
                }
            }

            h2 { class: "section-title", "Notes" }
            if notes().is_empty() {
                p { class: "view-empty", "No notes yet." }
            }
            for note in notes() {
                NoteCard {
                    key: "own-{note.id}",
                    like_count: likes().count(ItemKind::Note, &note.id),
                    liked: likes().is_liked(ItemKind::Note, &note.id),
                    can_edit: can_edit(viewer.as_ref(), note.author_id()),
                    can_delete: can_delete(viewer.as_ref(), note.author_id()),
                    media_base: media_base.clone(),
                    on_like: {
                        let id = note.id.clone();
                        move |_| handle_like.call(id.clone())
                    },
                    on_comments: {
                        let id = note.id.clone();
                        move |_| on_navigate.call(Page::Comments(id.clone()))
                    },
                    on_edit: {
                        let id = note.id.clone();
                        move |_| on_navigate.call(Page::EditNote(id.clone()))
                    },
                    on_delete: {
                        let note = note.clone();
                        move |_| pending.set(Some(ProfileAction::DeleteNote(note.clone())))
                    },
                    note: note.clone(),
                }
            }

            h2 { class: "section-title", "Liked Notes" }
            if liked().is_empty() {
                p { class: "view-empty", "No liked notes yet." }
            }
            for note in liked() {
                NoteCard {
                    key: "liked-{note.id}",
                    like_count: likes().count(ItemKind::Note, &note.id),
                    liked: likes().is_liked(ItemKind::Note, &note.id),
                    can_unlike: is_own,
                    media_base: media_base.clone(),
                    on_like: {
                        let id = note.id.clone();
                        move |_| handle_like.call(id.clone())
                    },
                    on_unlike: {
                        let id = note.id.clone();
                        move |_| handle_unlike.call(id.clone())
                    },
                    on_comments: {
                        let id = note.id.clone();
                        move |_| on_navigate.call(Page::Comments(id.clone()))
                    },
                    on_author: move |id: String| on_navigate.call(Page::UserProfile(id)),
                    note: note.clone(),
                }
            }

            if let Some(action) = pending() {
                ConfirmDialog {
                    title: match &action {
                        ProfileAction::DeleteNote(_) => "Delete this note?".to_string(),
                        ProfileAction::Block(true) => "Block this user?".to_string(),
                        ProfileAction::Block(false) => "Unblock this user?".to_string(),
                    },
                    destructive: !matches!(action, ProfileAction::Block(false)),
                    on_confirm: handle_confirm,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}

/// A profile's liked list only tells the viewer what they liked themselves
/// when it is their own profile.
fn viewer_liked_ids(viewer_id: Option<&str>, target_id: &str, liked: &[Note]) -> Vec<String> {
    if viewer_id != Some(target_id) {
        return Vec::new();
    }
    liked.iter().map(|n| n.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            title: format!("title {id}"),
            content: String::new(),
            media: Vec::new(),
            user: None,
            created_at: None,
        }
    }

    #[test]
    fn test_own_profile_marks_liked_notes() {
        let fav = vec![note("n1"), note("n2")];
        assert_eq!(viewer_liked_ids(Some("u1"), "u1", &fav), vec!["n1", "n2"]);
    }

    #[test]
    fn test_other_profile_marks_nothing() {
        let fav = vec![note("n1")];
        assert!(viewer_liked_ids(Some("u2"), "u1", &fav).is_empty());
        assert!(viewer_liked_ids(None, "u1", &fav).is_empty());
    }
}
