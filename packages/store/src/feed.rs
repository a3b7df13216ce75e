//! Search filtering and ordering for the note feed, feedback board and admin
//! user list. All of it runs on data already fetched; the server receives the
//! same search and sort parameters and may narrow the list further.

use std::cmp::Ordering;

use crate::likes::LikeLedger;
use crate::models::{ItemKind, Note, Timestamped, User};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    Newest,
    MostLiked,
}

impl SortOption {
    /// Value of the `sort` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::MostLiked => "mostLiked",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::MostLiked => "Most liked",
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Notes whose title, content or author name contains `query`, ignoring case.
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|n| {
            contains_ci(&n.title, &needle)
                || contains_ci(&n.content, &needle)
                || n.author_name().is_some_and(|name| contains_ci(name, &needle))
        })
        .cloned()
        .collect()
}

/// Users whose name or email contains `query`, ignoring case.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return users.to_vec();
    }
    users
        .iter()
        .filter(|u| contains_ci(&u.name, &needle) || contains_ci(&u.email, &needle))
        .cloned()
        .collect()
}

fn newest_first<T: Timestamped>(a: &T, b: &T) -> Ordering {
    // None sorts below Some, so undated items end up last.
    b.created_at().cmp(&a.created_at())
}

/// Stable in-place sort. `MostLiked` breaks ties newest first.
pub fn sort_items<T: Timestamped>(
    items: &mut [T],
    option: SortOption,
    kind: ItemKind,
    likes: &LikeLedger,
) {
    match option {
        SortOption::Newest => items.sort_by(newest_first),
        SortOption::MostLiked => items.sort_by(|a, b| {
            likes
                .count(kind, b.item_id())
                .cmp(&likes.count(kind, a.item_id()))
                .then_with(|| newest_first(a, b))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthorInfo, AuthorRef, Feedback, Role};
    use chrono::{TimeZone, Utc};

    fn note(id: &str, title: &str, content: &str, author: Option<&str>, day: Option<u32>) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            media: Vec::new(),
            user: author.map(|name| {
                AuthorRef::Populated(AuthorInfo {
                    id: format!("u-{name}"),
                    name: Some(name.to_string()),
                    avatar: None,
                    role: Role::User,
                })
            }),
            created_at: day.map(|d| Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()),
        }
    }

    fn user(name: &str, email: &str) -> User {
        User {
            id: name.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
            is_blocked: false,
            avatar: None,
        }
    }

    #[test]
    fn test_filter_matches_title_content_and_author() {
        let notes = vec![
            note("1", "Rust tips", "borrowing", Some("Ada"), Some(1)),
            note("2", "Groceries", "buy RUSTIC bread", Some("Bo"), Some(2)),
            note("3", "Holiday", "beach", Some("Rusty"), Some(3)),
            note("4", "Misc", "nothing", None, Some(4)),
        ];

        let ids: Vec<_> = filter_notes(&notes, "rust").into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_blank_query_keeps_everything_in_order() {
        let notes = vec![
            note("1", "a", "", None, Some(2)),
            note("2", "b", "", None, Some(1)),
        ];
        let ids: Vec<_> = filter_notes(&notes, "   ").into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_filter_users_by_name_or_email() {
        let users = vec![
            user("Ada", "ada@example.com"),
            user("Bo", "bo@chattrix.io"),
            user("Cy", "cy@example.com"),
        ];
        let names: Vec<_> = filter_users(&users, "CHATTRIX").into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Bo"]);
        let names: Vec<_> = filter_users(&users, "ada").into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Ada"]);
    }

    #[test]
    fn test_newest_puts_undated_last() {
        let mut notes = vec![
            note("old", "", "", None, Some(1)),
            note("undated", "", "", None, None),
            note("new", "", "", None, Some(9)),
        ];
        sort_items(&mut notes, SortOption::Newest, ItemKind::Note, &LikeLedger::new());
        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_most_liked_descending_with_newest_tiebreak() {
        let mut notes = vec![
            note("a", "", "", None, Some(1)),
            note("b", "", "", None, Some(2)),
            note("c", "", "", None, Some(3)),
        ];
        let mut likes = LikeLedger::new();
        likes.set_count(ItemKind::Note, "a", 5);
        likes.set_count(ItemKind::Note, "b", 2);
        likes.set_count(ItemKind::Note, "c", 5);

        sort_items(&mut notes, SortOption::MostLiked, ItemKind::Note, &likes);
        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_feedback_by_likes_uses_feedback_counts() {
        let fb = |id: &str| Feedback {
            id: id.to_string(),
            user: String::new(),
            email: String::new(),
            message: String::new(),
            owner: None,
            created_at: None,
        };
        let mut items = vec![fb("x"), fb("y")];
        let mut likes = LikeLedger::new();
        likes.set_count(ItemKind::Note, "x", 100);
        likes.set_count(ItemKind::Feedback, "y", 1);

        sort_items(&mut items, SortOption::MostLiked, ItemKind::Feedback, &likes);
        assert_eq!(items[0].id, "y");
    }

    #[test]
    fn test_sort_params() {
        assert_eq!(SortOption::Newest.as_param(), "newest");
        assert_eq!(SortOption::MostLiked.as_param(), "mostLiked");
    }
}
