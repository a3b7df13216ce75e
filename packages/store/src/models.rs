//! # Domain models mirrored from the REST API
//!
//! The server owns every entity; these types only describe the JSON it sends
//! back so pages can hold them in signals. Field names follow the wire format
//! (`_id`, camelCase) through serde renames.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A member account: name, email, role and blocked flag. |
//! | [`AuthUser`] | The logged-in user as returned by `POST /users/login`, carrying the bearer token. |
//! | [`AuthorRef`] | Owner reference on notes, comments and feedback. The server sends either a populated object or a bare id. |
//! | [`Note`] | A post with title, body, ordered media URLs and author. |
//! | [`Comment`] | A reply attached to a note. |
//! | [`Feedback`] | Free-form product feedback, independent of notes. |
//! | [`ItemKind`] | Which kind of item a like targets. |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role as reported by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

// Unknown roles are treated as regular users.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "admin" => Role::Admin,
            _ => Role::User,
        })
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// A member account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "isBlocked", default)]
    pub is_blocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown in headers and cards, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// The logged-in user together with the bearer token issued at login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}

/// Populated author object embedded in notes, comments and feedback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Owner reference: either populated by the server or just the owner's id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Populated(AuthorInfo),
    Id(String),
}

impl AuthorRef {
    pub fn id(&self) -> &str {
        match self {
            AuthorRef::Populated(info) => &info.id,
            AuthorRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AuthorRef::Populated(info) => info.name.as_deref(),
            AuthorRef::Id(_) => None,
        }
    }

    pub fn avatar(&self) -> Option<&str> {
        match self {
            AuthorRef::Populated(info) => info.avatar.as_deref(),
            AuthorRef::Id(_) => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, AuthorRef::Populated(info) if info.role == Role::Admin)
    }
}

/// A user-authored post with optional media attachments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub user: Option<AuthorRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn author_id(&self) -> Option<&str> {
        self.user.as_ref().map(AuthorRef::id)
    }

    pub fn author_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(AuthorRef::name)
    }
}

/// Body of `POST /notes` and `PUT /notes/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
    pub media: Vec<String>,
}

/// A reply attached to a note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "noteId", default)]
    pub note_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "userId", default)]
    pub user: Option<AuthorRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn author_id(&self) -> Option<&str> {
        self.user.as_ref().map(AuthorRef::id)
    }
}

/// A piece of site feedback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name captured when the feedback was posted.
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "userId", default)]
    pub owner: Option<AuthorRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Feedback {
    pub fn author_id(&self) -> Option<&str> {
        self.owner.as_ref().map(AuthorRef::id)
    }
}

/// Body of `POST /feedback`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackInput {
    pub user: String,
    pub email: String,
    pub message: String,
}

/// Likeable item kinds, sent as `itemType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Note,
    Comment,
    Feedback,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Note => "note",
            ItemKind::Comment => "comment",
            ItemKind::Feedback => "feedback",
        }
    }
}

/// Anything that carries a server id and a creation time.
pub trait Timestamped {
    fn item_id(&self) -> &str;
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

impl Timestamped for Note {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Timestamped for Comment {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Timestamped for Feedback {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_with_populated_author() {
        let json = r#"{
            "_id": "n1",
            "title": "Hello",
            "content": "First post",
            "media": ["uploads/a.png", "https://cdn.example.com/b.mp4"],
            "user": { "_id": "u1", "name": "Ada", "role": "admin" },
            "createdAt": "2024-05-01T10:00:00.000Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, "n1");
        assert_eq!(note.media.len(), 2);
        assert_eq!(note.author_id(), Some("u1"));
        assert_eq!(note.author_name(), Some("Ada"));
        assert!(note.user.as_ref().unwrap().is_admin());
        assert!(note.created_at.is_some());
    }

    #[test]
    fn test_note_with_bare_author_id_and_missing_fields() {
        let json = r#"{ "_id": "n2", "user": "u9" }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.author_id(), Some("u9"));
        assert_eq!(note.author_name(), None);
        assert!(note.media.is_empty());
        assert!(note.created_at.is_none());
    }

    #[test]
    fn test_login_response_carries_token() {
        let json = r#"{
            "_id": "u1",
            "name": "Ada",
            "email": "ada@example.com",
            "role": "admin",
            "isBlocked": false,
            "token": "abc.def"
        }"#;
        let auth: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(auth.token, "abc.def");
        assert_eq!(auth.id(), "u1");
        assert!(auth.is_admin());
    }

    #[test]
    fn test_unknown_role_falls_back_to_user() {
        let user: User =
            serde_json::from_str(r#"{ "_id": "u2", "name": "Bo", "role": "moderator" }"#).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(!user.is_blocked);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: User =
            serde_json::from_str(r#"{ "_id": "u3", "email": "cy@example.com" }"#).unwrap();
        assert_eq!(user.display_name(), "cy@example.com");
    }

    #[test]
    fn test_comment_and_feedback_owner_fields() {
        let comment: Comment = serde_json::from_str(
            r#"{ "_id": "c1", "noteId": "n1", "content": "nice", "userId": { "_id": "u1", "name": "Ada" } }"#,
        )
        .unwrap();
        assert_eq!(comment.author_id(), Some("u1"));

        let feedback: Feedback = serde_json::from_str(
            r#"{ "_id": "f1", "user": "Ada", "email": "ada@example.com", "message": "great", "userId": "u1" }"#,
        )
        .unwrap();
        assert_eq!(feedback.author_id(), Some("u1"));
        assert_eq!(feedback.user, "Ada");
    }

    #[test]
    fn test_item_kind_wire_names() {
        assert_eq!(serde_json::to_string(&ItemKind::Feedback).unwrap(), "\"feedback\"");
        assert_eq!(ItemKind::Comment.as_str(), "comment");
    }
}
