use dioxus::prelude::*;
use store::models::Timestamped;
use store::Note;

use crate::header::Avatar;
use crate::icons::{FaComment, FaPenToSquare, FaTrashCan};
use crate::likes::{LikeButton, UnlikeButton};
use crate::media_gallery::MediaGallery;
use crate::Icon;

/// One note in a feed or profile list. Which controls show is decided by
/// the caller.
#[component]
pub fn NoteCard(
    note: Note,
    media_base: String,
    like_count: u64,
    #[props(default)] liked: bool,
    #[props(default)] can_edit: bool,
    #[props(default)] can_delete: bool,
    #[props(default)] can_unlike: bool,
    on_like: EventHandler<()>,
    on_comments: EventHandler<()>,
    #[props(default)] on_edit: EventHandler<()>,
    #[props(default)] on_delete: EventHandler<()>,
    #[props(default)] on_unlike: EventHandler<()>,
    #[props(default)] on_author: EventHandler<String>,
) -> Element {
    let author_name = note.author_name().unwrap_or("Unknown").to_string();
    let author_avatar = note.user.as_ref().and_then(|a| a.avatar()).map(str::to_string);
    let author_id = note.author_id().map(str::to_string);
    let posted = posted_at(&note);

    rsx! {
        article {
            class: "card note-card",
            div {
                class: "card-header",
                onclick: move |_| {
                    if let Some(id) = &author_id {
                        on_author.call(id.clone());
                    }
                },
                Avatar { name: author_name.clone(), src: author_avatar }
                div {
                    class: "card-meta",
                    span { class: "card-author", "{author_name}" }
                    if !posted.is_empty() {
                        span { class: "card-date", "{posted}" }
                    }
                }
            }
            h3 { class: "card-title", "{note.title}" }
            p { class: "card-body", "{note.content}" }
            MediaGallery { media: note.media.clone(), media_base }
            div {
                class: "card-actions",
                LikeButton { count: like_count, liked, on_toggle: move |_| on_like.call(()) }
                button {
                    class: "icon-button",
                    title: "Comments",
                    onclick: move |_| on_comments.call(()),
                    Icon { icon: FaComment, width: 14, height: 14 }
                }
                if can_unlike {
                    UnlikeButton { on_unlike: move |_| on_unlike.call(()) }
                }
                div { class: "spacer" }
                if can_edit {
                    button {
                        class: "icon-button",
                        title: "Edit note",
                        onclick: move |_| on_edit.call(()),
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                }
                if can_delete {
                    button {
                        class: "icon-button danger",
                        title: "Delete note",
                        onclick: move |_| on_delete.call(()),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

/// Creation time as shown on cards, empty when the server sent none.
pub fn posted_at(item: &impl Timestamped) -> String {
    item.created_at()
        .map(|t| t.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_default()
}
