//! Request bodies and [`Resource`] bindings for each child entity.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::types::{
    Action, ActionFields, Apiary, ApiaryFields, Colony, ColonyFields, Hive, HiveFields,
    Inspection, InspectionFields, Observation, ObservationFields, Queen, QueenFields, Session,
    SessionFields,
};
use crate::handlers::entity::Resource;
use crate::infra::db::{
    DbActionRepository, DbApiaryRepository, DbColonyRepository, DbHiveRepository,
    DbInspectionRepository, DbObservationRepository, DbQueenRepository, DbSessionRepository,
    DbUserRepository,
};
use crate::state::AppState;

// ── Apiaries ─────────────────────────────────────────────────────────────────

pub struct Apiaries;

#[derive(Deserialize)]
pub struct ApiaryRequest {
    pub name: String,
    pub location: String,
    pub user_id: i32,
}

impl Resource for Apiaries {
    type Record = Apiary;
    type Fields = ApiaryFields;
    type Repo = DbApiaryRepository;
    type Parents = DbUserRepository;
    type Request = ApiaryRequest;

    const NOT_FOUND: &'static str = "Apiary not found";
    const NONE_FOUND: &'static str = "No apiaries found";
    const NONE_FOUND_FOR_PARENT: &'static str = "No apiaries found for this user";
    const CREATE_FAILED: &'static str = "Failed to create apiary";
    const UPDATE_FAILED: &'static str = "Failed to update apiary";

    fn repo(state: &AppState) -> Self::Repo {
        state.apiary_repo()
    }

    fn parents(state: &AppState) -> Self::Parents {
        state.user_repo()
    }

    fn fields(request: ApiaryRequest) -> ApiaryFields {
        ApiaryFields {
            name: request.name,
            location: request.location,
            user_id: request.user_id,
        }
    }
}

// ── Hives ────────────────────────────────────────────────────────────────────

pub struct Hives;

#[derive(Deserialize)]
pub struct HiveRequest {
    pub name: String,
    pub apiary_id: i32,
}

impl Resource for Hives {
    type Record = Hive;
    type Fields = HiveFields;
    type Repo = DbHiveRepository;
    type Parents = DbApiaryRepository;
    type Request = HiveRequest;

    const NOT_FOUND: &'static str = "Hive not found";
    const NONE_FOUND: &'static str = "No hives found";
    const NONE_FOUND_FOR_PARENT: &'static str = "No hives found for this apiary";
    const CREATE_FAILED: &'static str = "Failed to create hive";
    const UPDATE_FAILED: &'static str = "Failed to update hive";

    fn repo(state: &AppState) -> Self::Repo {
        state.hive_repo()
    }

    fn parents(state: &AppState) -> Self::Parents {
        state.apiary_repo()
    }

    fn fields(request: HiveRequest) -> HiveFields {
        HiveFields {
            name: request.name,
            apiary_id: request.apiary_id,
        }
    }
}

// ── Colonies ─────────────────────────────────────────────────────────────────

pub struct Colonies;

#[derive(Deserialize)]
pub struct ColonyRequest {
    pub hive_id: i32,
}

impl Resource for Colonies {
    type Record = Colony;
    type Fields = ColonyFields;
    type Repo = DbColonyRepository;
    type Parents = DbHiveRepository;
    type Request = ColonyRequest;

    const NOT_FOUND: &'static str = "Colony not found";
    const NONE_FOUND: &'static str = "No colonies found";
    const NONE_FOUND_FOR_PARENT: &'static str = "No colonies found for this hive";
    const CREATE_FAILED: &'static str = "Failed to create colony";
    const UPDATE_FAILED: &'static str = "Failed to update colony";

    fn repo(state: &AppState) -> Self::Repo {
        state.colony_repo()
    }

    fn parents(state: &AppState) -> Self::Parents {
        state.hive_repo()
    }

    fn fields(request: ColonyRequest) -> ColonyFields {
        ColonyFields {
            hive_id: request.hive_id,
        }
    }
}

// ── Queens ───────────────────────────────────────────────────────────────────

pub struct Queens;

#[derive(Deserialize)]
pub struct QueenRequest {
    pub colour: String,
    pub clipped: bool,
    pub colony_id: i32,
}

impl Resource for Queens {
    type Record = Queen;
    type Fields = QueenFields;
    type Repo = DbQueenRepository;
    type Parents = DbColonyRepository;
    type Request = QueenRequest;

    const NOT_FOUND: &'static str = "Queen not found";
    const NONE_FOUND: &'static str = "No queens found";
    const NONE_FOUND_FOR_PARENT: &'static str = "No queens found for this colony";
    const CREATE_FAILED: &'static str = "Failed to create queen";
    const UPDATE_FAILED: &'static str = "Failed to update queen";

    fn repo(state: &AppState) -> Self::Repo {
        state.queen_repo()
    }

    fn parents(state: &AppState) -> Self::Parents {
        state.colony_repo()
    }

    fn fields(request: QueenRequest) -> QueenFields {
        QueenFields {
            colour: request.colour,
            clipped: request.clipped,
            colony_id: request.colony_id,
        }
    }
}

// ── Inspections ──────────────────────────────────────────────────────────────

pub struct Inspections;

/// `inspection_timestamp` must carry an offset; a naive timestamp is rejected
/// as a type error.
#[derive(Deserialize)]
pub struct InspectionRequest {
    pub inspection_timestamp: DateTime<Utc>,
    pub colony_id: i32,
}

impl Resource for Inspections {
    type Record = Inspection;
    type Fields = InspectionFields;
    type Repo = DbInspectionRepository;
    type Parents = DbColonyRepository;
    type Request = InspectionRequest;

    const NOT_FOUND: &'static str = "Inspection not found";
    const NONE_FOUND: &'static str = "No inspections found";
    const NONE_FOUND_FOR_PARENT: &'static str = "No inspections found for this colony";
    const CREATE_FAILED: &'static str = "Failed to create inspection";
    const UPDATE_FAILED: &'static str = "Failed to update inspection";

    fn repo(state: &AppState) -> Self::Repo {
        state.inspection_repo()
    }

    fn parents(state: &AppState) -> Self::Parents {
        state.colony_repo()
    }

    fn fields(request: InspectionRequest) -> InspectionFields {
        InspectionFields {
            timestamp: request.inspection_timestamp,
            colony_id: request.colony_id,
        }
    }
}

// ── Actions ──────────────────────────────────────────────────────────────────

pub struct Actions;

#[derive(Deserialize)]
pub struct ActionRequest {
    pub notes: String,
    pub inspection_id: i32,
}

impl Resource for Actions {
    type Record = Action;
    type Fields = ActionFields;
    type Repo = DbActionRepository;
    type Parents = DbInspectionRepository;
    type Request = ActionRequest;

    const NOT_FOUND: &'static str = "Action not found";
    const NONE_FOUND: &'static str = "No actions found";
    const NONE_FOUND_FOR_PARENT: &'static str = "No actions found for this inspection";
    const CREATE_FAILED: &'static str = "Failed to create action";
    const UPDATE_FAILED: &'static str = "Failed to update action";

    fn repo(state: &AppState) -> Self::Repo {
        state.action_repo()
    }

    fn parents(state: &AppState) -> Self::Parents {
        state.inspection_repo()
    }

    fn fields(request: ActionRequest) -> ActionFields {
        ActionFields {
            notes: request.notes,
            inspection_id: request.inspection_id,
        }
    }
}

// ── Observations ─────────────────────────────────────────────────────────────

pub struct Observations;

#[derive(Deserialize)]
pub struct ObservationRequest {
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

impl Resource for Observations {
    type Record = Observation;
    type Fields = ObservationFields;
    type Repo = DbObservationRepository;
    type Parents = DbInspectionRepository;
    type Request = ObservationRequest;

    const NOT_FOUND: &'static str = "Observation not found";
    const NONE_FOUND: &'static str = "No observations found";
    const NONE_FOUND_FOR_PARENT: &'static str = "No observations found for this inspection";
    const CREATE_FAILED: &'static str = "Failed to create observation";
    const UPDATE_FAILED: &'static str = "Failed to update observation";

    fn repo(state: &AppState) -> Self::Repo {
        state.observation_repo()
    }

    fn parents(state: &AppState) -> Self::Parents {
        state.inspection_repo()
    }

    fn fields(request: ObservationRequest) -> ObservationFields {
        ObservationFields {
            queenright: request.queenright,
            queen_cells: request.queen_cells,
            bias: request.bias,
            brood_frames: request.brood_frames,
            store_frames: request.store_frames,
            chalk_brood: request.chalk_brood,
            foul_brood: request.foul_brood,
            varroa_count: request.varroa_count,
            temper: request.temper,
            notes: request.notes,
            inspection_id: request.inspection_id,
        }
    }
}

// ── Sessions ─────────────────────────────────────────────────────────────────

pub struct Sessions;

/// The start time is stamped by the server.
#[derive(Deserialize)]
pub struct SessionRequest {
    pub user_id: i32,
}

impl Resource for Sessions {
    type Record = Session;
    type Fields = SessionFields;
    type Repo = DbSessionRepository;
    type Parents = DbUserRepository;
    type Request = SessionRequest;

    const NOT_FOUND: &'static str = "Session not found";
    const NONE_FOUND: &'static str = "No sessions found";
    const NONE_FOUND_FOR_PARENT: &'static str = "No sessions found for this user";
    const CREATE_FAILED: &'static str = "Failed to create session";

    fn repo(state: &AppState) -> Self::Repo {
        state.session_repo()
    }

    fn parents(state: &AppState) -> Self::Parents {
        state.user_repo()
    }

    fn fields(request: SessionRequest) -> SessionFields {
        SessionFields::starting_now(request.user_id)
    }
}
