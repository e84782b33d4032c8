//! Ownership decisions for mutations that target an existing owned resource.

use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;

use uuid::Uuid;

/// Equality of caller and owner is necessary and sufficient.
/// No role hierarchy, no delegation.
pub fn permit(resource_owner: Uuid, caller: Uuid) -> bool {
    resource_owner == caller
}

/// Fail with [`CoreError::NotOwner`] unless `caller` owns the resource.
#[track_caller]
pub fn ensure_owner(resource_owner: Uuid, caller: Uuid) -> Result<()> {
    if permit(resource_owner, caller) {
        Ok(())
    } else {
        Err(CoreError::NotOwner {
            caller,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
