//! ID allocation
//!
//! New ids are one more than the largest id currently in the collection.
//! Deleting the highest-numbered entity makes its id available again.

use super::Entity;

/// Next id for a collection: `max(id) + 1`, or 1 when empty
///
/// `None` once the largest id is `i64::MAX`.
pub fn next_id<T: Entity>(items: &[T]) -> Option<i64> {
    match items.iter().map(|item| item.id()).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
