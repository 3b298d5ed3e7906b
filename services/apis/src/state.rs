use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbActionRepository, DbApiaryRepository, DbColonyRepository, DbHiveRepository,
    DbInspectionRepository, DbObservationRepository, DbQueenRepository, DbSessionRepository,
    DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
///
/// Holds the pool opened in `main`; repositories are cheap handles onto it.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn session_repo(&self) -> DbSessionRepository {
        DbSessionRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn apiary_repo(&self) -> DbApiaryRepository {
        DbApiaryRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn hive_repo(&self) -> DbHiveRepository {
        DbHiveRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn colony_repo(&self) -> DbColonyRepository {
        DbColonyRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn queen_repo(&self) -> DbQueenRepository {
        DbQueenRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn inspection_repo(&self) -> DbInspectionRepository {
        DbInspectionRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn action_repo(&self) -> DbActionRepository {
        DbActionRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn observation_repo(&self) -> DbObservationRepository {
        DbObservationRepository {
            db: Arc::clone(&self.db),
        }
    }
}
