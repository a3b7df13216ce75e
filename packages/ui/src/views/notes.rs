use api::NoteQuery;
use dioxus::prelude::*;
use store::access::{can_delete, can_edit, can_like};
use store::feed::{filter_notes, sort_items};
use store::{ItemKind, LikeLedger, Note, SortOption};

use crate::components::{use_toast, Button, ButtonVariant, Input, ToastOptions};
use crate::icons::{FaMagnifyingGlass, FaPlus};
use crate::{
    load_like_counts, log_activity, report_error, report_success, toggle_like, use_activity_log,
    use_api, use_auth, use_config, use_debounced, ConfirmDialog, Icon, LogLevel, NoteCard, Page,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The public feed: search, sort, like, and per-note controls for the
/// author (edit) and the author or an admin (delete).
#[component]
pub fn NotesView(on_navigate: EventHandler<Page>) -> Element {
    let mut notes = use_signal(Vec::<Note>::new);
    let mut likes = use_signal(LikeLedger::new);
    let search = use_signal(String::new);
    let mut sort = use_signal(SortOption::default);
    let mut pending_delete = use_signal(|| Option::<Note>::None);
    let mut loaded = use_signal(|| false);

    let auth = use_auth();
    let api = use_api();
    let config = use_config();
    let media_base = config.media_base();
    let debounced = use_debounced(search, config.search.debounce_ms);
    let mut activity_log = use_activity_log();
    let toast_api = use_toast();

    // Refetch whenever the settled search, the sort or the login changes.
    let _loader = use_resource(move || {
        let api = api();
        let query = NoteQuery {
            search: debounced(),
            sort: sort(),
        };
        async move {
            match api.list_notes(&query).await {
                Ok(list) => {
                    let ids = list.iter().map(|n| n.id.clone()).collect();
                    load_like_counts(&api, &mut likes, ItemKind::Note, ids).await;
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Loaded {} notes", list.len()),
                    );
                    notes.set(list);
                }
                Err(e) => report_error(&mut activity_log, &toast_api, "Error loading notes", e),
            }
            loaded.set(true);
        }
    });

    let query_text = search();
    let viewer = auth().user().cloned();
    let logged_in = viewer.is_some();
    let mut visible = filter_notes(&notes(), &search());
    sort_items(&mut visible, sort(), ItemKind::Note, &likes());

    let handle_like = use_callback(move |id: String| {
        if !can_like(auth().user()) {
            toast_api.error("Please login to like posts".to_string(), ToastOptions::new());
            return;
        }
        let api = api();
        spawn(async move {
            if let Err(e) = toggle_like(&api, &mut likes, ItemKind::Note, &id).await {
                report_error(&mut activity_log, &toast_api, "Error toggling like", e);
            }
        });
    });

    let handle_confirm_delete = move |_| {
        let Some(note) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let api = api();
        spawn(async move {
            match api.delete_note(&note.id).await {
                Ok(()) => {
                    notes.write().retain(|n| n.id != note.id);
                    likes.write().remove(ItemKind::Note, &note.id);
                    report_success(&mut activity_log, &toast_api, "Note deleted");
                }
                Err(e) => report_error(&mut activity_log, &toast_api, "Error deleting note", e),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page feed",

            div {
                class: "card share-card",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !logged_in,
                    onclick: move |_| on_navigate.call(Page::NewNote),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    if logged_in { " Share Your Thought Here" } else { " Login to Share Your Thought" }
                }
            }

            div {
                class: "search-bar",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                SearchInput { search: search, placeholder: "Search notes..." }
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
                p {
                    class: "view-empty",
                    if query_text.trim().is_empty() {
                        "No posts yet."
                    } else {
                        "No posts found for \"{query_text}\""
                    }
                }
            }

            for note in visible {
                NoteCard {
                    key: "{note.id}",
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
                        move |_| pending_delete.set(Some(note.clone()))
                    },
                    on_author: move |id: String| on_navigate.call(Page::UserProfile(id)),
                    note: note.clone(),
                }
            }

            if let Some(note) = pending_delete() {
                ConfirmDialog {
                    title: "Delete this note?",
                    message: format!("\"{}\" will be removed permanently.", note.title),
                    confirm_label: "Delete",
                    destructive: true,
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

/// Search box bound straight to a signal.
#[component]
pub(crate) fn SearchInput(search: Signal<String>, placeholder: String) -> Element {
    let mut search = search;
    rsx! {
        Input {
            r#type: "search",
            placeholder: "{placeholder}",
            value: search(),
            oninput: move |evt: FormEvent| search.set(evt.value()),
        }
    }
}
