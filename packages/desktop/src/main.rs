use dioxus::prelude::*;
use ui::Page;
use views::{
    Admin, AppLayout, Comments, EditNote, Feedback, Login, NewNote, Notes, Profile, Signup,
    UserProfile,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Root {},
        #[route("/notes")]
        Notes {},
        #[route("/notes/new")]
        NewNote {},
        #[route("/notes/:id/edit")]
        EditNote { id: String },
        #[route("/comments/:note_id")]
        Comments { note_id: String },
        #[route("/feedback")]
        Feedback {},
        #[route("/profile")]
        Profile {},
        #[route("/profile/:id")]
        UserProfile { id: String },
        #[route("/admin")]
        Admin {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Notes => Route::Notes {},
            Page::NewNote => Route::NewNote {},
            Page::EditNote(id) => Route::EditNote { id },
            Page::Comments(note_id) => Route::Comments { note_id },
            Page::Feedback => Route::Feedback {},
            Page::Profile => Route::Profile {},
            Page::UserProfile(id) => Route::UserProfile { id },
            Page::Admin => Route::Admin {},
            Page::Login => Route::Login {},
            Page::Signup => Route::Signup {},
        }
    }
}

impl Route {
    /// The shared page this route shows, for highlighting the header.
    fn page(&self) -> Page {
        match self {
            Route::Root {} | Route::Notes {} => Page::Notes,
            Route::NewNote {} => Page::NewNote,
            Route::EditNote { id } => Page::EditNote(id.clone()),
            Route::Comments { note_id } => Page::Comments(note_id.clone()),
            Route::Feedback {} => Page::Feedback,
            Route::Profile {} => Page::Profile,
            Route::UserProfile { id } => Page::UserProfile(id.clone()),
            Route::Admin {} => Page::Admin,
            Route::Login {} => Page::Login,
            Route::Signup {} => Page::Signup,
        }
    }
}

fn main() {
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};
        let window = WindowBuilder::new().with_title("Chattrix");
        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(window))
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        ui::AuthProvider {
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// `/` shows the feed.
#[component]
fn Root() -> Element {
    rsx! { Notes {} }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_map_to_their_paths() {
        for page in [
            Page::Notes,
            Page::EditNote("n1".to_string()),
            Page::Comments("n1".to_string()),
            Page::UserProfile("u1".to_string()),
            Page::Admin,
        ] {
            let path = page.path();
            assert_eq!(Route::from(page).to_string(), path);
        }
    }

    #[test]
    fn test_root_highlights_notes() {
        assert_eq!(Route::Root {}.page(), Page::Notes);
        assert_eq!(Route::from(Page::Signup).page(), Page::Signup);
    }
}
