use dioxus::prelude::*;
use ui::{ActivityLogPanel, Header};

use super::use_page_navigator;
use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let route = use_route::<Route>();
    let on_navigate = use_page_navigator();

    rsx! {
        Header { current: Some(route.page()), on_navigate }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
        ActivityLogPanel {}
    }
}
