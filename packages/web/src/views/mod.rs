use dioxus::prelude::*;
use ui::Page;

use crate::Route;

mod layout;
pub use layout::AppLayout;

mod pages;
pub use pages::{
    Admin, Comments, EditNote, Feedback, Login, NewNote, Notes, Profile, Signup, UserProfile,
};

/// Turns the shared views' page requests into router pushes.
pub(crate) fn use_page_navigator() -> EventHandler<Page> {
    let nav = use_navigator();
    use_callback(move |page: Page| {
        tracing::debug!("navigate to {}", page.path());
        nav.push(Route::from(page));
    })
}
