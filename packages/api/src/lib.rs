//! # API crate: typed client for the Chattrix REST backend
//!
//! Every page in the `ui` crate talks to the server through [`ApiClient`]. The
//! client is cheap to clone, carries the bearer token of the current session
//! (if any), and exposes one method per endpoint, grouped by resource.
//!
//! ## Modules
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`users`] | `POST /users/login`, `POST /users/signup`, `GET/PUT /users/:id`, `GET /users/:id/notes`, `GET /users/:id/likes`, `PUT /users/:id/role`, `PUT /users/:id/block`, `GET /users?search=` |
//! | [`notes`] | `GET/POST /notes`, `GET/PUT/DELETE /notes/:id` |
//! | [`comments`] | `GET/POST /comments/:noteId`, `GET /comments/:noteId/count`, `PUT/DELETE /comments/:id` |
//! | [`feedback`] | `GET/POST /feedback`, `GET/PUT/DELETE /feedback/:id` |
//! | [`likes`] | `POST /likes/:itemId/toggle`, `GET /likes/count?itemId&itemType` |
//! | [`media`] | `POST /image` (multipart) |
//!
//! Calls that need a login fail with [`ApiError::NotAuthenticated`] before any
//! request is sent when the client holds no token.

mod client;
mod error;

pub mod comments;
pub mod feedback;
pub mod likes;
pub mod media;
pub mod notes;
pub mod users;

pub use client::ApiClient;
pub use error::ApiError;
pub use likes::LikeToggle;
pub use media::MediaFile;
pub use notes::NoteQuery;
pub use users::UserUpdate;

pub use store::models::{
    AuthUser, AuthorRef, Comment, Feedback, FeedbackInput, ItemKind, Note, NoteInput, Role, User,
};
