//! Editing primitives for collections embedded in an aggregate.
//!
//! These functions mutate the in-memory representation only. Callers load
//! the owning aggregate, apply one of these, then persist the aggregate
//! whole. That read-modify-write seam is where stronger concurrency
//! control could later be substituted.

use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;

use uuid::Uuid;

/// Implemented by embedded entries addressable by a generated identifier.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

/// Prepend `entry`, keeping newest-first iteration order.
pub fn insert_front<T>(entries: &mut Vec<T>, entry: T) {
    entries.insert(0, entry);
}

/// Remove the single entry whose key equals `id`.
///
/// Returns `false` when no entry matches; the sequence is left unchanged
/// and the caller persists the aggregate either way (lenient delete).
pub fn remove_by_key<T: Keyed>(entries: &mut Vec<T>, id: Uuid) -> bool {
    match entries.iter().position(|entry| entry.key() == id) {
        Some(index) => {
            entries.remove(index);
            true
        }
        None => false,
    }
}

/// Add `member` to a membership set, newest first.
///
/// Fails with [`CoreError::DuplicateMember`] when already present. The
/// conflict marks a state-already-achieved condition, not an error to retry.
#[track_caller]
pub fn add_member(members: &mut Vec<Uuid>, member: Uuid) -> Result<()> {
    if members.contains(&member) {
        return Err(CoreError::DuplicateMember {
            member,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    members.insert(0, member);
    Ok(())
}

/// Remove `member` from a membership set.
///
/// Fails with [`CoreError::MemberNotPresent`] when absent.
#[track_caller]
pub fn remove_member(members: &mut Vec<Uuid>, member: Uuid) -> Result<()> {
    match members.iter().position(|m| *m == member) {
        Some(index) => {
            members.remove(index);
            Ok(())
        }
        None => Err(CoreError::MemberNotPresent {
            member,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
