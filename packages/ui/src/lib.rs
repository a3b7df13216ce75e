//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/chattrix.css");

mod platform;
pub use platform::{load_config, session_store};

mod page;
pub use page::Page;

mod auth;
pub use auth::{
    refresh_role, sign_in, sign_out, use_api, use_auth, use_config, use_login_guard, AuthProvider,
    AuthState,
};

pub mod activity_log;
pub use activity_log::{
    log_activity, report_error, report_success, use_activity_log, ActivityLog, LogLevel,
};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod header;
pub use header::{Avatar, Header};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod debounce;
pub use debounce::use_debounced;

mod likes;
pub use likes::{load_like_counts, toggle_like, LikeButton, UnlikeButton};

mod media_gallery;
pub use media_gallery::{MediaGallery, MediaPicker};

mod note_card;
pub use note_card::{posted_at, NoteCard};
