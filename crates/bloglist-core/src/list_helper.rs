//! Aggregations over a list of blogs.
//!
//! All helpers make a single pass over the slice and never mutate it.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Blog;

/// An author together with the number of blogs attributed to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs<'a> {
    pub author: &'a str,
    pub blogs: usize,
}

/// Sum of the likes of every blog. Zero for an empty list.
///
/// Saturates at `i64::MAX` instead of overflowing.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs
        .iter()
        .fold(0i64, |total, blog| total.saturating_add(blog.likes))
}

/// The blog with the most likes; the earliest one wins a tie.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best: Option<&Blog>, blog| match best {
        Some(current) if blog.likes <= current.likes => Some(current),
        _ => Some(blog),
    })
}

/// The author with the most blogs.
///
/// On a tie the author who first reached the winning count during a
/// left-to-right scan is returned.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs<'_>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<AuthorBlogs<'_>> = None;

    for blog in blogs {
        let count = counts.entry(blog.author.as_str()).or_insert(0);
        *count += 1;

        if best.is_none_or(|b| *count > b.blogs) {
            best = Some(AuthorBlogs {
                author: blog.author.as_str(),
                blogs: *count,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn blog(title: &str, author: &str, likes: i64) -> Blog {
        let now = Utc::now();
        Blog {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.to_string(),
            url: format!("https://example.com/{}", title.replace(' ', "-")),
            likes,
            created_at: now,
            updated_at: now,
        }
    }

    fn blogs() -> Vec<Blog> {
        vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
            blog("First class tests", "Robert C. Martin", 10),
            blog("TDD harms architecture", "Robert C. Martin", 0),
            blog("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn test_total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn test_total_likes_of_single_blog() {
        let list = vec![blog("React patterns", "Michael Chan", 7)];
        assert_eq!(total_likes(&list), 7);
    }

    #[test]
    fn test_total_likes_of_bigger_list() {
        assert_eq!(total_likes(&blogs()), 36);
    }

    #[test]
    fn test_total_likes_saturates_instead_of_overflowing() {
        let list = vec![
            blog("Viral", "Michael Chan", i64::MAX),
            blog("One more", "Michael Chan", 1),
        ];
        assert_eq!(total_likes(&list), i64::MAX);
    }

    #[test]
    fn test_favorite_blog_of_empty_list_is_none() {
        assert!(favorite_blog(&[]).is_none());
    }

    #[test]
    fn test_favorite_blog_of_single_blog() {
        let list = vec![blog("React patterns", "Michael Chan", 7)];
        assert_eq!(favorite_blog(&list), Some(&list[0]));
    }

    #[test]
    fn test_favorite_blog_of_bigger_list() {
        let list = blogs();
        let favorite = favorite_blog(&list).unwrap();

        assert_eq!(favorite.title, "Canonical string reduction");
        assert_eq!(favorite.likes, 12);
    }

    #[test]
    fn test_favorite_blog_tie_keeps_first() {
        let list = vec![
            blog("first", "A", 3),
            blog("second", "B", 5),
            blog("third", "C", 5),
        ];
        assert_eq!(favorite_blog(&list).unwrap().title, "second");
    }

    #[test]
    fn test_most_blogs_of_empty_list_is_none() {
        assert!(most_blogs(&[]).is_none());
    }

    #[test]
    fn test_most_blogs_of_single_blog() {
        let list = vec![blog("React patterns", "Michael Chan", 7)];
        assert_eq!(
            most_blogs(&list),
            Some(AuthorBlogs {
                author: "Michael Chan",
                blogs: 1
            })
        );
    }

    #[test]
    fn test_most_blogs_of_bigger_list() {
        let list = blogs();
        assert_eq!(
            most_blogs(&list),
            Some(AuthorBlogs {
                author: "Robert C. Martin",
                blogs: 3
            })
        );
    }

    #[test]
    fn test_most_blogs_tie_goes_to_first_to_reach_count() {
        let list = vec![
            blog("a1", "A", 0),
            blog("b1", "B", 0),
            blog("b2", "B", 0),
            blog("a2", "A", 0),
        ];
        assert_eq!(most_blogs(&list).unwrap().author, "B");
    }

    #[test]
    fn test_helpers_do_not_mutate_input() {
        let list = blogs();
        let before = list.clone();

        total_likes(&list);
        favorite_blog(&list);
        most_blogs(&list);

        assert_eq!(list, before);
    }
}
