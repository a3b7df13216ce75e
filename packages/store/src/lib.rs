//! Client-side state for Chattrix: models mirrored from the REST API, the
//! persisted login session, client configuration and the pure view-model
//! helpers the pages are built on.

pub mod access;
pub mod config;
pub mod error;
pub mod feed;
pub mod likes;
pub mod media;
pub mod models;
pub mod session;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::ClientConfig;
pub use error::StoreError;
pub use feed::SortOption;
pub use likes::{LikeKey, LikeLedger, PendingToggle};
pub use models::{
    AuthUser, AuthorRef, Comment, Feedback, FeedbackInput, ItemKind, Note, NoteInput, Role, User,
};
pub use session::{Session, SessionStore};
pub use validate::ValidationError;
