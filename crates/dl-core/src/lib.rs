pub mod collection;
pub mod error;
pub mod models;
pub mod policy;

pub use collection::Keyed;
pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::comment::Comment;
pub use models::education::Education;
pub use models::experience::Experience;
pub use models::post::Post;
pub use models::profile::{parse_skills, Profile, ProfileUpdate};
pub use models::social_links::SocialLinks;
pub use models::user::{avatar_url, User};

#[cfg(test)]
mod tests;
