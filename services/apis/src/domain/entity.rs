//! Per-entity rules for the generic child-entity use cases.
//!
//! Each `*Fields` type names its entity and parent (used in
//! `Invalid <name>_id`), exposes its parent id and trims/validates its own
//! text fields. Everything else about create/find/update/delete is shared.

use crate::domain::types::{
    ActionFields, ApiaryFields, ColonyFields, HiveFields, InspectionFields, ObservationFields,
    QueenFields, SessionFields,
};
use crate::error::ApiServiceError;

pub trait EntityFields: Sized + Send + Sync {
    /// Entity name as it appears in `Invalid <ENTITY>_id`.
    const ENTITY: &'static str;
    /// Parent entity name as it appears in `Invalid <PARENT>_id`.
    const PARENT: &'static str;

    fn parent_id(&self) -> i32;

    /// Trim text fields and reject empty required ones. Runs before any
    /// repository call; the returned value is what gets persisted.
    fn normalize(self) -> Result<Self, ApiServiceError> {
        Ok(self)
    }
}

/// Trim `value`, failing with `message` if nothing is left.
fn required(value: String, message: &'static str) -> Result<String, ApiServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiServiceError::Required(message));
    }
    Ok(trimmed.to_owned())
}

impl EntityFields for ApiaryFields {
    const ENTITY: &'static str = "apiary";
    const PARENT: &'static str = "user";

    fn parent_id(&self) -> i32 {
        self.user_id
    }

    fn normalize(self) -> Result<Self, ApiServiceError> {
        Ok(Self {
            name: required(self.name, "Apiary name is required")?,
            location: required(self.location, "Location is required")?,
            user_id: self.user_id,
        })
    }
}

impl EntityFields for HiveFields {
    const ENTITY: &'static str = "hive";
    const PARENT: &'static str = "apiary";

    fn parent_id(&self) -> i32 {
        self.apiary_id
    }

    fn normalize(self) -> Result<Self, ApiServiceError> {
        Ok(Self {
            name: required(self.name, "Hive name is required")?,
            apiary_id: self.apiary_id,
        })
    }
}

impl EntityFields for ColonyFields {
    const ENTITY: &'static str = "colony";
    const PARENT: &'static str = "hive";

    fn parent_id(&self) -> i32 {
        self.hive_id
    }
}

impl EntityFields for QueenFields {
    const ENTITY: &'static str = "queen";
    const PARENT: &'static str = "colony";

    fn parent_id(&self) -> i32 {
        self.colony_id
    }
}

impl EntityFields for InspectionFields {
    const ENTITY: &'static str = "inspection";
    const PARENT: &'static str = "colony";

    fn parent_id(&self) -> i32 {
        self.colony_id
    }
}

impl EntityFields for ActionFields {
    const ENTITY: &'static str = "action";
    const PARENT: &'static str = "inspection";

    fn parent_id(&self) -> i32 {
        self.inspection_id
    }
}

impl EntityFields for ObservationFields {
    const ENTITY: &'static str = "observation";
    const PARENT: &'static str = "inspection";

    fn parent_id(&self) -> i32 {
        self.inspection_id
    }
}

impl EntityFields for SessionFields {
    const ENTITY: &'static str = "session";
    const PARENT: &'static str = "user";

    fn parent_id(&self) -> i32 {
        self.user_id
    }
}
