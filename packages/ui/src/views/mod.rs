mod message_card;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod notes;
pub use notes::NotesView;

mod note_form;
pub use note_form::NoteFormView;

mod comments;
pub use comments::CommentsView;

mod feedback;
pub use feedback::FeedbackView;

mod profile;
pub use profile::ProfileView;

mod admin;
pub use admin::AdminView;
