pub mod error_location;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Caller {caller} does not own the resource {location}")]
    NotOwner {
        caller: Uuid,
        location: ErrorLocation,
    },

    #[error("Member {member} is already present {location}")]
    DuplicateMember {
        member: Uuid,
        location: ErrorLocation,
    },

    #[error("Member {member} is not present {location}")]
    MemberNotPresent {
        member: Uuid,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
