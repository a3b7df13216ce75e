//! Form checks run before any request is issued. The `Display` text of each
//! error is what the toast shows.

use thiserror::Error;

use crate::models::NoteInput;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill up all the fields")]
    MissingFields,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Title is required")]
    MissingTitle,
    #[error("Content is required")]
    MissingContent,
    #[error("Please type something first!")]
    EmptyMessage,
    #[error("Message cannot be empty")]
    EmptyEdit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn login(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Registration, ValidationError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(Registration {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn note(title: &str, content: &str, media: Vec<String>) -> Result<NoteInput, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::MissingContent);
    }
    Ok(NoteInput {
        title: title.to_string(),
        content: content.to_string(),
        media,
    })
}

/// Body of a new comment or feedback entry.
pub fn new_message(text: &str) -> Result<String, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(text.to_string())
}

/// Body of an edited comment or feedback entry.
pub fn edited_message(text: &str) -> Result<String, ValidationError> {
    new_message(text).map_err(|_| ValidationError::EmptyEdit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(login("", "pw"), Err(ValidationError::MissingFields));
        assert_eq!(login("ada@example.com", ""), Err(ValidationError::MissingFields));
        assert_eq!(login("  ada@example.com ", "pw").unwrap().email, "ada@example.com");
    }

    #[test]
    fn test_signup_checks() {
        assert_eq!(signup("Ada", "ada@example.com", "pw", ""), Err(ValidationError::MissingFields));
        assert_eq!(
            signup("Ada", "ada.example.com", "pw", "pw"),
            Err(ValidationError::InvalidEmail),
        );
        assert_eq!(
            signup("Ada", "ada@example.com", "pw", "px"),
            Err(ValidationError::PasswordMismatch),
        );

        let reg = signup(" Ada ", "ada@example.com", "pw", "pw").unwrap();
        assert_eq!(reg.name, "Ada");
    }

    #[test]
    fn test_note_requires_title_and_content() {
        assert_eq!(note("  ", "body", vec![]), Err(ValidationError::MissingTitle));
        assert_eq!(note("Title", "\n", vec![]), Err(ValidationError::MissingContent));

        let input = note(" Title ", "body", vec!["a.png".to_string()]).unwrap();
        assert_eq!(input.title, "Title");
        assert_eq!(input.media, vec!["a.png".to_string()]);
    }

    #[test]
    fn test_empty_comment_is_rejected() {
        assert_eq!(new_message("   "), Err(ValidationError::EmptyMessage));
        assert_eq!(new_message(" hi ").unwrap(), "hi");
        assert_eq!(
            ValidationError::EmptyMessage.to_string(),
            "Please type something first!"
        );
    }

    #[test]
    fn test_empty_edit_has_its_own_message() {
        assert_eq!(edited_message(""), Err(ValidationError::EmptyEdit));
        assert_eq!(ValidationError::EmptyEdit.to_string(), "Message cannot be empty");
    }
}
