//! Domain entities - the core business objects.

mod blog;
mod user;

pub use blog::{Blog, BlogChanges, NewBlog};
pub use user::{NewUser, User, ValidatedUser};

/// Minimum length of usernames and passwords.
pub const MIN_CREDENTIAL_LEN: usize = 3;
