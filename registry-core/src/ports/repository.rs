//! Repository port - user store abstraction

use crate::domain::result::Result;
use crate::domain::User;

/// User store abstraction
///
/// Implementations own the records outright and hand out borrows. Listing
/// order is insertion order.
pub trait UserRepository {
    /// Store a new record, rejecting an id that is already present
    fn insert(&mut self, user: User) -> Result<&User>;

    /// Get a record by id
    fn get(&self, id: &str) -> Option<&User>;

    /// Get a record by id for status changes
    fn get_mut(&mut self, id: &str) -> Option<&mut User>;

    /// Check whether an id is already taken
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All records, oldest first
    fn list(&self) -> Vec<&User>;

    fn len(&self) -> usize;

    /// Drop every record
    fn clear(&mut self);
}
