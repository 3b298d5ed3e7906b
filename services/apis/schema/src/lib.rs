//! sea-orm entities for the APIS database, one module per table.
//!
//! Every table keys on a serial `<entity>_id` column. Child rows reference
//! their parent with `ON DELETE CASCADE`.

pub mod actions;
pub mod apiaries;
pub mod colonies;
pub mod hives;
pub mod inspections;
pub mod observations;
pub mod queens;
pub mod sessions;
pub mod users;
