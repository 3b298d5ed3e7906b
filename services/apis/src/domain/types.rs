use chrono::{DateTime, Utc};
use serde::Serialize;

/// Registered user. `password_hash` is an Argon2 PHC string and never leaves
/// the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

/// Login session opened for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    #[serde(rename = "session_id")]
    pub id: i32,
    #[serde(serialize_with = "apis_core::serde::to_rfc3339_ms")]
    pub session_start: DateTime<Utc>,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFields {
    pub session_start: DateTime<Utc>,
    pub user_id: i32,
}

impl SessionFields {
    /// A session for `user_id` starting at the current instant.
    pub fn starting_now(user_id: i32) -> Self {
        Self {
            session_start: Utc::now(),
            user_id,
        }
    }
}

/// A site where hives are kept, owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Apiary {
    #[serde(rename = "apiary_id")]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiaryFields {
    pub name: String,
    pub location: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hive {
    #[serde(rename = "hive_id")]
    pub id: i32,
    pub name: String,
    pub apiary_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiveFields {
    pub name: String,
    pub apiary_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Colony {
    #[serde(rename = "colony_id")]
    pub id: i32,
    pub hive_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColonyFields {
    pub hive_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Queen {
    #[serde(rename = "queen_id")]
    pub id: i32,
    pub colour: String,
    pub clipped: bool,
    pub colony_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueenFields {
    pub colour: String,
    pub clipped: bool,
    pub colony_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    #[serde(rename = "inspection_id")]
    pub id: i32,
    #[serde(
        rename = "inspection_timestamp",
        serialize_with = "apis_core::serde::to_rfc3339_ms"
    )]
    pub timestamp: DateTime<Utc>,
    pub colony_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionFields {
    pub timestamp: DateTime<Utc>,
    pub colony_id: i32,
}

/// Something the beekeeper did during an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(rename = "action_id")]
    pub id: i32,
    pub notes: String,
    pub inspection_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionFields {
    pub notes: String,
    pub inspection_id: i32,
}

/// Colony condition recorded during an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    #[serde(rename = "observation_id")]
    pub id: i32,
    pub queenright: bool,
    pub queen_cells: i32,
    pub bias: bool,
    pub brood_frames: i32,
    pub store_frames: i32,
    pub chalk_brood: bool,
    pub foul_brood: bool,
    pub varroa_count: i32,
    pub temper: i32,
    pub notes: String,
    pub inspection_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationFields {
    pub queenright: bool,
    pub queen_cells: i32,
    pub bias: bool,
    pub brood_frames: i32,
    pub store_frames: i32,
    pub chalk_brood: bool,
    pub foul_brood: bool,
    pub varroa_count: i32,
    pub temper: i32,
    pub notes: String,
    pub inspection_id: i32,
}
