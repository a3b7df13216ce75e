use dioxus::prelude::*;
use store::access::{can_block_listed, can_manage_users, can_promote};
use store::feed::filter_users;
use store::{Role, User};

use super::notes::SearchInput;
use crate::components::{use_toast, Button, ButtonVariant};
use crate::icons::FaMagnifyingGlass;
use crate::{
    log_activity, refresh_role, report_error, report_success, use_activity_log, use_api, use_auth,
    use_config, use_debounced, use_login_guard, Avatar, ConfirmDialog, Icon, LogLevel, Page,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Debug, PartialEq)]
enum AdminAction {
    Promote(User),
    Block(User, bool),
}

impl AdminAction {
    fn prompt(&self) -> String {
        match self {
            AdminAction::Promote(user) => format!("Make {} an admin?", user.display_name()),
            AdminAction::Block(user, true) => format!("Block {}?", user.display_name()),
            AdminAction::Block(user, false) => format!("Unblock {}?", user.display_name()),
        }
    }
}

/// User management for admins: search, promote to admin, block and unblock.
#[component]
pub fn AdminView(on_navigate: EventHandler<Page>) -> Element {
    use_login_guard(Page::Admin, on_navigate);

    let mut users = use_signal(Vec::<User>::new);
    let search = use_signal(String::new);
    let mut pending = use_signal(|| Option::<AdminAction>::None);
    let mut loaded = use_signal(|| false);

    let mut auth = use_auth();
    let api = use_api();
    let config = use_config();
    let debounced = use_debounced(search, config.search.debounce_ms);
    let mut activity_log = use_activity_log();
    let toast_api = use_toast();

    let _loader = use_resource(move || {
        let api = api();
        let query = debounced();
        let allowed = can_manage_users(auth().user());
        async move {
            if !allowed {
                return;
            }
            match api.list_users(&query).await {
                Ok(list) => {
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Loaded {} users", list.len()),
                    );
                    users.set(list);
                }
                Err(e) => report_error(&mut activity_log, &toast_api, "Error fetching users", e),
            }
            loaded.set(true);
        }
    });

    let viewer = auth().user().cloned();
    if !can_manage_users(viewer.as_ref()) {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "view-page",
                p { class: "view-empty", "Access denied. Admins only." }
            }
        };
    }

    let visible = filter_users(&users(), &search());

    let handle_confirm = move |_| {
        let Some(action) = pending() else {
            return;
        };
        pending.set(None);
        let api = api();
        let own_id = auth().user().map(|u| u.id().to_string());
        spawn(async move {
            match action {
                AdminAction::Promote(target) => {
                    match api.update_role(&target.id, Role::Admin).await {
                        Ok(updated) => {
                            if own_id.as_deref() == Some(updated.id.as_str()) {
                                refresh_role(&mut auth, updated.role).await;
                            }
                            replace_user(&mut users, updated);
                            report_success(
                                &mut activity_log,
                                &toast_api,
                                "User role updated to admin",
                            );
                        }
                        Err(e) => {
                            report_error(&mut activity_log, &toast_api, "Error updating role", e)
                        }
                    }
                }
                AdminAction::Block(target, blocked) => {
                    match api.set_blocked(&target.id, blocked).await {
                        Ok(updated) => {
                            replace_user(&mut users, updated);
                            let message = if blocked { "User blocked" } else { "User unblocked" };
                            report_success(&mut activity_log, &toast_api, message);
                        }
                        Err(e) => report_error(
                            &mut activity_log,
                            &toast_api,
                            "Error updating block status",
                            e,
                        ),
                    }
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title", "Manage Users" }

            div {
                class: "search-bar",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                SearchInput { search: search, placeholder: "Search by name or email..." }
            }

            if visible.is_empty() && loaded() {
                p { class: "view-empty", "No users found." }
            }

            table {
                class: "user-table",
                thead {
                    tr {
                        th { "User" }
                        th { "Email" }
                        th { "Role" }
                        th { "Status" }
                        th { "" }
                    }
                }
                tbody {
                    for user in visible {
                        UserRow {
                            key: "{user.id}",
                            can_promote: can_promote(viewer.as_ref(), &user),
                            can_block: can_block_listed(viewer.as_ref(), &user),
                            on_open: {
                                let id = user.id.clone();
                                move |_| on_navigate.call(Page::UserProfile(id.clone()))
                            },
                            on_promote: {
                                let user = user.clone();
                                move |_| pending.set(Some(AdminAction::Promote(user.clone())))
                            },
                            on_block: {
                                let user = user.clone();
                                move |_| pending.set(Some(AdminAction::Block(user.clone(), !user.is_blocked)))
                            },
                            user: user.clone(),
                        }
                    }
                }
            }

            if let Some(action) = pending() {
                ConfirmDialog {
                    title: action.prompt(),
                    destructive: matches!(action, AdminAction::Block(_, true)),
                    on_confirm: handle_confirm,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: User,
    can_promote: bool,
    can_block: bool,
    on_open: EventHandler<()>,
    on_promote: EventHandler<()>,
    on_block: EventHandler<()>,
) -> Element {
    let name = user.display_name().to_string();
    let role = user.role.as_str();
    let status = if user.is_blocked { "Blocked" } else { "Active" };

    rsx! {
        tr {
            class: if user.is_blocked { "user-row blocked" } else { "user-row" },
            td {
                class: "user-cell",
                onclick: move |_| on_open.call(()),
                Avatar { name: name.clone(), src: user.avatar.clone() }
                span { "{name}" }
            }
            td { "{user.email}" }
            td { span { class: "badge", "{role}" } }
            td { "{status}" }
            td {
                class: "user-actions",
                if can_promote {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_promote.call(()),
                        "Make Admin"
                    }
                }
                if can_block {
                    Button {
                        variant: if user.is_blocked { ButtonVariant::Outline } else { ButtonVariant::Destructive },
                        onclick: move |_| on_block.call(()),
                        if user.is_blocked { "Unblock" } else { "Block" }
                    }
                }
            }
        }
    }
}

fn replace_user(users: &mut Signal<Vec<User>>, updated: User) {
    if let Some(slot) = users.write().iter_mut().find(|u| u.id == updated.id) {
        *slot = updated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: format!("id-{name}"),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            role: Role::User,
            is_blocked: false,
            avatar: None,
        }
    }

    #[test]
    fn test_prompts_name_the_target() {
        assert_eq!(AdminAction::Promote(user("ada")).prompt(), "Make ada an admin?");
        assert_eq!(AdminAction::Block(user("bo"), true).prompt(), "Block bo?");
        assert_eq!(AdminAction::Block(user("cy"), false).prompt(), "Unblock cy?");
    }
}
