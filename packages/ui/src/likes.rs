//! Like buttons and the request flow behind them.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{ItemKind, LikeLedger};

use crate::icons::{FaThumbsDown, FaThumbsUp};
use crate::Icon;

/// Fetch like counts for `ids` into the ledger. Failed lookups count as zero.
pub async fn load_like_counts(
    api: &ApiClient,
    ledger: &mut Signal<LikeLedger>,
    kind: ItemKind,
    ids: Vec<String>,
) {
    for id in ids {
        let count = api.like_count_or_zero(&id, kind).await;
        ledger.write().set_count(kind, &id, count);
    }
}

/// Flip the like locally, send the toggle, then adopt the server's count.
/// On failure the ledger is put back the way it was.
pub async fn toggle_like(
    api: &ApiClient,
    ledger: &mut Signal<LikeLedger>,
    kind: ItemKind,
    id: &str,
) -> Result<(), ApiError> {
    let pending = ledger.write().begin_toggle(kind, id);
    match api.toggle_like(id, kind).await {
        Ok(toggle) => {
            let count = match toggle.count {
                Some(count) => Some(count),
                None => api.like_count(id, kind).await.ok(),
            };
            ledger.write().settle(&pending, count, toggle.liked);
            Ok(())
        }
        Err(e) => {
            ledger.write().rollback(pending);
            Err(e)
        }
    }
}

/// Thumbs-up with the current count.
#[component]
pub fn LikeButton(
    count: u64,
    #[props(default)] liked: bool,
    #[props(default)] disabled: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: if liked { "like-button liked" } else { "like-button" },
            title: if disabled { "Login to like" } else { "Like" },
            onclick: move |_| on_toggle.call(()),
            Icon { icon: FaThumbsUp, width: 14, height: 14 }
            span { "{count}" }
        }
    }
}

/// Thumbs-down shown on one's own liked notes.
#[component]
pub fn UnlikeButton(on_unlike: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "like-button",
            title: "Unlike",
            onclick: move |_| on_unlike.call(()),
            Icon { icon: FaThumbsDown, width: 14, height: 14 }
        }
    }
}
