//! Record identifiers.
//!
//! Every table uses a serial integer key, so a valid id is always positive.
//! Ids are plain `i32` to match the column type; shape is checked with
//! [`is_valid_id`] before any lookup.

/// Return `true` if `id` could have been assigned by the database.
pub fn is_valid_id(id: i32) -> bool {
    id > 0
}
