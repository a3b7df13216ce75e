//! Role-gated UI decisions.
//!
//! These only decide which controls to render. The server enforces the real
//! rules and rejects anything these checks would have hidden.

use crate::models::{AuthUser, User};

fn is_owner(viewer: &AuthUser, author_id: Option<&str>) -> bool {
    author_id.is_some_and(|id| !id.is_empty() && id == viewer.id())
}

/// Only the author edits their own content.
pub fn can_edit(viewer: Option<&AuthUser>, author_id: Option<&str>) -> bool {
    viewer.is_some_and(|v| is_owner(v, author_id))
}

/// The author or any admin may delete.
pub fn can_delete(viewer: Option<&AuthUser>, author_id: Option<&str>) -> bool {
    viewer.is_some_and(|v| v.is_admin() || is_owner(v, author_id))
}

pub fn can_like(viewer: Option<&AuthUser>) -> bool {
    viewer.is_some()
}

pub fn can_manage_users(viewer: Option<&AuthUser>) -> bool {
    viewer.is_some_and(AuthUser::is_admin)
}

/// Promotion is one-way: admins are never offered a demotion.
pub fn can_promote(viewer: Option<&AuthUser>, target: &User) -> bool {
    can_manage_users(viewer) && !target.is_admin()
}

/// Admins may block or unblock anyone but themselves.
pub fn can_block(viewer: Option<&AuthUser>, target: &User) -> bool {
    viewer.is_some_and(|v| v.is_admin() && v.id() != target.id)
}

/// The user table only offers blocking on non-admin rows; a profile page
/// still allows it through [`can_block`].
pub fn can_block_listed(viewer: Option<&AuthUser>, target: &User) -> bool {
    can_block(viewer, target) && !target.is_admin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: id.to_string(),
            email: format!("{id}@example.com"),
            role,
            is_blocked: false,
            avatar: None,
        }
    }

    fn viewer(id: &str, role: Role) -> AuthUser {
        AuthUser {
            user: user(id, role),
            token: "t".to_string(),
        }
    }

    #[test]
    fn test_anonymous_gets_no_controls() {
        assert!(!can_edit(None, Some("u1")));
        assert!(!can_delete(None, Some("u1")));
        assert!(!can_like(None));
        assert!(!can_manage_users(None));
    }

    #[test]
    fn test_owner_can_edit_and_delete() {
        let me = viewer("u1", Role::User);
        assert!(can_edit(Some(&me), Some("u1")));
        assert!(can_delete(Some(&me), Some("u1")));
    }

    #[test]
    fn test_non_owner_sees_no_edit_control() {
        let me = viewer("u2", Role::User);
        assert!(!can_edit(Some(&me), Some("u1")));
        assert!(!can_delete(Some(&me), Some("u1")));
        assert!(!can_edit(Some(&me), None));
    }

    #[test]
    fn test_admin_deletes_but_does_not_edit_others() {
        let admin = viewer("a1", Role::Admin);
        assert!(!can_edit(Some(&admin), Some("u1")));
        assert!(can_delete(Some(&admin), Some("u1")));
        assert!(can_delete(Some(&admin), None));
    }

    #[test]
    fn test_empty_author_id_is_nobody() {
        let me = viewer("", Role::User);
        assert!(!can_edit(Some(&me), Some("")));
    }

    #[test]
    fn test_promotion_is_one_way() {
        let admin = viewer("a1", Role::Admin);
        assert!(can_promote(Some(&admin), &user("u1", Role::User)));
        assert!(!can_promote(Some(&admin), &user("a2", Role::Admin)));
        assert!(!can_promote(Some(&viewer("u2", Role::User)), &user("u1", Role::User)));
    }

    #[test]
    fn test_admin_cannot_block_self() {
        let admin = viewer("a1", Role::Admin);
        assert!(can_block(Some(&admin), &user("u1", Role::User)));
        assert!(can_block(Some(&admin), &user("a2", Role::Admin)));
        assert!(!can_block(Some(&admin), &user("a1", Role::Admin)));
        assert!(!can_block(Some(&viewer("u2", Role::User)), &user("u1", Role::User)));
    }

    #[test]
    fn test_user_table_hides_block_for_admins() {
        let admin = viewer("a1", Role::Admin);
        assert!(can_block_listed(Some(&admin), &user("u1", Role::User)));
        assert!(!can_block_listed(Some(&admin), &user("a2", Role::Admin)));
        assert!(can_block(Some(&admin), &user("a2", Role::Admin)));
        assert!(!can_block_listed(None, &user("u1", Role::User)));
    }
}
