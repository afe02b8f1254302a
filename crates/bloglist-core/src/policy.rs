//! Ownership rules for mutating blogs.
//!
//! Only the owner may change a blog's title, author or url, or delete it.
//! Setting `likes` alone is open to any authenticated user.

use uuid::Uuid;

use crate::domain::{Blog, BlogChanges};
use crate::error::DomainError;

/// Check whether `user_id` may apply `changes` to `blog`.
pub fn authorize_update(
    blog: &Blog,
    user_id: Uuid,
    changes: &BlogChanges,
) -> Result<(), DomainError> {
    if changes.is_likes_only() || blog.is_owned_by(user_id) {
        Ok(())
    } else {
        Err(DomainError::Unauthorized("blog"))
    }
}

/// Check whether `user_id` may delete `blog`.
pub fn authorize_delete(blog: &Blog, user_id: Uuid) -> Result<(), DomainError> {
    if blog.is_owned_by(user_id) {
        Ok(())
    } else {
        Err(DomainError::Unauthorized("blog"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewBlog;

    fn blog_owned_by(owner: Uuid) -> Blog {
        Blog::new(
            owner,
            NewBlog {
                title: Some("Type wars".into()),
                author: Some("Robert C. Martin".into()),
                url: Some("http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html".into()),
                likes: Some(2),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_owner_may_edit_everything() {
        let owner = Uuid::new_v4();
        let blog = blog_owned_by(owner);
        let changes = BlogChanges {
            title: Some("Type wars, revisited".into()),
            likes: Some(3),
            ..Default::default()
        };

        assert!(authorize_update(&blog, owner, &changes).is_ok());
    }

    #[test]
    fn test_anyone_may_set_likes() {
        let blog = blog_owned_by(Uuid::new_v4());
        let changes = BlogChanges {
            likes: Some(3),
            ..Default::default()
        };

        assert!(authorize_update(&blog, Uuid::new_v4(), &changes).is_ok());
    }

    #[test]
    fn test_stranger_may_not_edit_fields() {
        let blog = blog_owned_by(Uuid::new_v4());
        let changes = BlogChanges {
            url: Some("https://example.com".into()),
            likes: Some(3),
            ..Default::default()
        };

        let result = authorize_update(&blog, Uuid::new_v4(), &changes);
        assert!(matches!(result, Err(DomainError::Unauthorized(_))));
    }

    #[test]
    fn test_only_owner_may_delete() {
        let owner = Uuid::new_v4();
        let blog = blog_owned_by(owner);

        assert!(authorize_delete(&blog, owner).is_ok());
        assert!(authorize_delete(&blog, Uuid::new_v4()).is_err());
    }
}
