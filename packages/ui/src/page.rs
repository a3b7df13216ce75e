/// Navigation targets the shared views can ask for. Each platform maps
/// these onto its own router.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Notes,
    NewNote,
    EditNote(String),
    Comments(String),
    Feedback,
    Profile,
    UserProfile(String),
    Admin,
    Login,
    Signup,
}

impl Page {
    /// URL path of the page, for logging and plain links.
    pub fn path(&self) -> String {
        match self {
            Page::Notes => "/notes".to_string(),
            Page::NewNote => "/notes/new".to_string(),
            Page::EditNote(id) => format!("/notes/{id}/edit"),
            Page::Comments(note_id) => format!("/comments/{note_id}"),
            Page::Feedback => "/feedback".to_string(),
            Page::Profile => "/profile".to_string(),
            Page::UserProfile(id) => format!("/profile/{id}"),
            Page::Admin => "/admin".to_string(),
            Page::Login => "/login".to_string(),
            Page::Signup => "/signup".to_string(),
        }
    }

    /// Pages that make no sense without a login.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Page::NewNote
                | Page::EditNote(_)
                | Page::Profile
                | Page::UserProfile(_)
                | Page::Admin
        )
    }
}
