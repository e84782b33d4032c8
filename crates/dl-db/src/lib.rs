pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::post_repository::PostRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_repository::UserRepository;
