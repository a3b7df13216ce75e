//! Route targets. Each one hands the shared view a navigator.

use dioxus::prelude::*;
use ui::views::{
    AdminView, CommentsView, FeedbackView, LoginView, NoteFormView, NotesView, ProfileView,
    SignupView,
};

use super::use_page_navigator;

#[component]
pub fn Notes() -> Element {
    let on_navigate = use_page_navigator();
    rsx! { NotesView { on_navigate } }
}

#[component]
pub fn NewNote() -> Element {
    let on_navigate = use_page_navigator();
    rsx! { NoteFormView { on_navigate } }
}

#[component]
pub fn EditNote(id: String) -> Element {
    let on_navigate = use_page_navigator();
    rsx! { NoteFormView { note_id: Some(id), on_navigate } }
}

#[component]
pub fn Comments(note_id: String) -> Element {
    let on_navigate = use_page_navigator();
    rsx! { CommentsView { note_id, on_navigate } }
}

#[component]
pub fn Feedback() -> Element {
    let on_navigate = use_page_navigator();
    rsx! { FeedbackView { on_navigate } }
}

#[component]
pub fn Profile() -> Element {
    let on_navigate = use_page_navigator();
    rsx! { ProfileView { on_navigate } }
}

#[component]
pub fn UserProfile(id: String) -> Element {
    let on_navigate = use_page_navigator();
    rsx! { ProfileView { user_id: Some(id), on_navigate } }
}

#[component]
pub fn Admin() -> Element {
    let on_navigate = use_page_navigator();
    rsx! { AdminView { on_navigate } }
}

#[component]
pub fn Login() -> Element {
    let on_navigate = use_page_navigator();
    rsx! { LoginView { on_navigate } }
}

#[component]
pub fn Signup() -> Element {
    let on_navigate = use_page_navigator();
    rsx! { SignupView { on_navigate } }
}
