use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PrimaryKeyTrait, QueryFilter, QueryOrder, SqlErr,
};

use apis_schema::{
    actions, apiaries, colonies, hives, inspections, observations, queens, sessions, users,
};

use crate::domain::repository::{EntityRepository, FindById, UserRepository};
use crate::domain::types::{
    Action, ActionFields, Apiary, ApiaryFields, Colony, ColonyFields, Hive, HiveFields,
    Inspection, InspectionFields, Observation, ObservationFields, Queen, QueenFields, Session,
    SessionFields, User,
};
use crate::error::ApiServiceError;

// ── Shared query helpers ─────────────────────────────────────────────────────

async fn find_one<E>(db: &DatabaseConnection, id: i32) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    E::find_by_id(id).one(db).await
}

/// Rows where `column = value`, oldest first.
async fn find_where<E: EntityTrait>(
    db: &DatabaseConnection,
    column: E::Column,
    value: i32,
    order_by: E::Column,
) -> Result<Vec<E::Model>, DbErr> {
    E::find()
        .filter(column.eq(value))
        .order_by_asc(order_by)
        .all(db)
        .await
}

async fn find_all<E: EntityTrait>(
    db: &DatabaseConnection,
    order_by: E::Column,
) -> Result<Vec<E::Model>, DbErr> {
    E::find().order_by_asc(order_by).all(db).await
}

async fn delete_one<E>(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    let result = E::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// An update that matched no row is `None`, not an error.
fn updated<M>(result: Result<M, DbErr>, what: &'static str) -> Result<Option<M>, ApiServiceError> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(anyhow::Error::new(e).context(what).into()),
    }
}

fn non_empty<T>(records: Vec<T>) -> Option<Vec<T>> {
    (!records.is_empty()).then_some(records)
}

fn map_all<M, T: From<M>>(models: Vec<M>) -> Option<Vec<T>> {
    non_empty(models.into_iter().map(T::from).collect())
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

/// The unique index on `username` backs the service-level check when two
/// writers race.
fn user_write_error(err: DbErr, what: &'static str) -> ApiServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiServiceError::UsernameTaken,
        _ => anyhow::Error::new(err).context(what).into(),
    }
}

impl FindById for DbUserRepository {
    type Record = User;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiServiceError> {
        let model = find_one::<users::Entity>(&*self.db, id)
            .await
            .context("find user by id")?;
        Ok(model.map(User::from))
    }
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&*self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(User::from))
    }

    async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, ApiServiceError> {
        let model = users::ActiveModel {
            username: Set(username.to_owned()),
            password: Set(password_hash.to_owned()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| user_write_error(e, "create user"))?;
        Ok(Some(model.into()))
    }

    async fn read_all(&self) -> Result<Option<Vec<User>>, ApiServiceError> {
        let models = find_all::<users::Entity>(&*self.db, users::Column::UserId)
            .await
            .context("list users")?;
        Ok(map_all(models))
    }

    async fn update(
        &self,
        id: i32,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, ApiServiceError> {
        let result = users::ActiveModel {
            user_id: Set(id),
            username: Set(username.to_owned()),
            password: Set(password_hash.to_owned()),
        }
        .update(&*self.db)
        .await;
        match result {
            Err(e) if e.sql_err().is_some() => Err(user_write_error(e, "update user")),
            other => Ok(updated(other, "update user")?.map(User::from)),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        Ok(delete_one::<users::Entity>(&*self.db, id)
            .await
            .context("delete user")?)
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.user_id,
            username: model.username,
            password_hash: model.password,
        }
    }
}

// ── Session repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSessionRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FindById for DbSessionRepository {
    type Record = Session;

    async fn find_by_id(&self, id: i32) -> Result<Option<Session>, ApiServiceError> {
        let model = find_one::<sessions::Entity>(&*self.db, id)
            .await
            .context("find session by id")?;
        Ok(model.map(Session::from))
    }
}

impl EntityRepository for DbSessionRepository {
    type Fields = SessionFields;

    async fn create(&self, fields: &SessionFields) -> Result<Option<Session>, ApiServiceError> {
        let model = sessions::ActiveModel {
            session_start: Set(fields.session_start),
            user_id: Set(fields.user_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .context("create session")?;
        Ok(Some(model.into()))
    }

    async fn find_by_parent_id(
        &self,
        user_id: i32,
    ) -> Result<Option<Vec<Session>>, ApiServiceError> {
        let models = find_where::<sessions::Entity>(
            &*self.db,
            sessions::Column::UserId,
            user_id,
            sessions::Column::SessionId,
        )
        .await
        .context("list sessions by user")?;
        Ok(map_all(models))
    }

    async fn read_all(&self) -> Result<Option<Vec<Session>>, ApiServiceError> {
        let models = find_all::<sessions::Entity>(&*self.db, sessions::Column::SessionId)
            .await
            .context("list sessions")?;
        Ok(map_all(models))
    }

    async fn update(
        &self,
        id: i32,
        fields: &SessionFields,
    ) -> Result<Option<Session>, ApiServiceError> {
        let result = sessions::ActiveModel {
            session_id: Set(id),
            session_start: Set(fields.session_start),
            user_id: Set(fields.user_id),
        }
        .update(&*self.db)
        .await;
        Ok(updated(result, "update session")?.map(Session::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        Ok(delete_one::<sessions::Entity>(&*self.db, id)
            .await
            .context("delete session")?)
    }
}

impl From<sessions::Model> for Session {
    fn from(model: sessions::Model) -> Self {
        Self {
            id: model.session_id,
            session_start: model.session_start,
            user_id: model.user_id,
        }
    }
}

// ── Apiary repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbApiaryRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FindById for DbApiaryRepository {
    type Record = Apiary;

    async fn find_by_id(&self, id: i32) -> Result<Option<Apiary>, ApiServiceError> {
        let model = find_one::<apiaries::Entity>(&*self.db, id)
            .await
            .context("find apiary by id")?;
        Ok(model.map(Apiary::from))
    }
}

impl EntityRepository for DbApiaryRepository {
    type Fields = ApiaryFields;

    async fn create(&self, fields: &ApiaryFields) -> Result<Option<Apiary>, ApiServiceError> {
        let model = apiaries::ActiveModel {
            name: Set(fields.name.clone()),
            location: Set(fields.location.clone()),
            user_id: Set(fields.user_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .context("create apiary")?;
        Ok(Some(model.into()))
    }

    async fn find_by_parent_id(
        &self,
        user_id: i32,
    ) -> Result<Option<Vec<Apiary>>, ApiServiceError> {
        let models = find_where::<apiaries::Entity>(
            &*self.db,
            apiaries::Column::UserId,
            user_id,
            apiaries::Column::ApiaryId,
        )
        .await
        .context("list apiaries by user")?;
        Ok(map_all(models))
    }

    async fn read_all(&self) -> Result<Option<Vec<Apiary>>, ApiServiceError> {
        let models = find_all::<apiaries::Entity>(&*self.db, apiaries::Column::ApiaryId)
            .await
            .context("list apiaries")?;
        Ok(map_all(models))
    }

    async fn update(
        &self,
        id: i32,
        fields: &ApiaryFields,
    ) -> Result<Option<Apiary>, ApiServiceError> {
        let result = apiaries::ActiveModel {
            apiary_id: Set(id),
            name: Set(fields.name.clone()),
            location: Set(fields.location.clone()),
            user_id: Set(fields.user_id),
        }
        .update(&*self.db)
        .await;
        Ok(updated(result, "update apiary")?.map(Apiary::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        Ok(delete_one::<apiaries::Entity>(&*self.db, id)
            .await
            .context("delete apiary")?)
    }
}

impl From<apiaries::Model> for Apiary {
    fn from(model: apiaries::Model) -> Self {
        Self {
            id: model.apiary_id,
            name: model.name,
            location: model.location,
            user_id: model.user_id,
        }
    }
}

// ── Hive repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbHiveRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FindById for DbHiveRepository {
    type Record = Hive;

    async fn find_by_id(&self, id: i32) -> Result<Option<Hive>, ApiServiceError> {
        let model = find_one::<hives::Entity>(&*self.db, id)
            .await
            .context("find hive by id")?;
        Ok(model.map(Hive::from))
    }
}

impl EntityRepository for DbHiveRepository {
    type Fields = HiveFields;

    async fn create(&self, fields: &HiveFields) -> Result<Option<Hive>, ApiServiceError> {
        let model = hives::ActiveModel {
            name: Set(fields.name.clone()),
            apiary_id: Set(fields.apiary_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .context("create hive")?;
        Ok(Some(model.into()))
    }

    async fn find_by_parent_id(
        &self,
        apiary_id: i32,
    ) -> Result<Option<Vec<Hive>>, ApiServiceError> {
        let models = find_where::<hives::Entity>(
            &*self.db,
            hives::Column::ApiaryId,
            apiary_id,
            hives::Column::HiveId,
        )
        .await
        .context("list hives by apiary")?;
        Ok(map_all(models))
    }

    async fn read_all(&self) -> Result<Option<Vec<Hive>>, ApiServiceError> {
        let models = find_all::<hives::Entity>(&*self.db, hives::Column::HiveId)
            .await
            .context("list hives")?;
        Ok(map_all(models))
    }

    async fn update(&self, id: i32, fields: &HiveFields) -> Result<Option<Hive>, ApiServiceError> {
        let result = hives::ActiveModel {
            hive_id: Set(id),
            name: Set(fields.name.clone()),
            apiary_id: Set(fields.apiary_id),
        }
        .update(&*self.db)
        .await;
        Ok(updated(result, "update hive")?.map(Hive::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        Ok(delete_one::<hives::Entity>(&*self.db, id)
            .await
            .context("delete hive")?)
    }
}

impl From<hives::Model> for Hive {
    fn from(model: hives::Model) -> Self {
        Self {
            id: model.hive_id,
            name: model.name,
            apiary_id: model.apiary_id,
        }
    }
}

// ── Colony repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbColonyRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FindById for DbColonyRepository {
    type Record = Colony;

    async fn find_by_id(&self, id: i32) -> Result<Option<Colony>, ApiServiceError> {
        let model = find_one::<colonies::Entity>(&*self.db, id)
            .await
            .context("find colony by id")?;
        Ok(model.map(Colony::from))
    }
}

impl EntityRepository for DbColonyRepository {
    type Fields = ColonyFields;

    async fn create(&self, fields: &ColonyFields) -> Result<Option<Colony>, ApiServiceError> {
        let model = colonies::ActiveModel {
            hive_id: Set(fields.hive_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .context("create colony")?;
        Ok(Some(model.into()))
    }

    async fn find_by_parent_id(
        &self,
        hive_id: i32,
    ) -> Result<Option<Vec<Colony>>, ApiServiceError> {
        let models = find_where::<colonies::Entity>(
            &*self.db,
            colonies::Column::HiveId,
            hive_id,
            colonies::Column::ColonyId,
        )
        .await
        .context("list colonies by hive")?;
        Ok(map_all(models))
    }

    async fn read_all(&self) -> Result<Option<Vec<Colony>>, ApiServiceError> {
        let models = find_all::<colonies::Entity>(&*self.db, colonies::Column::ColonyId)
            .await
            .context("list colonies")?;
        Ok(map_all(models))
    }

    async fn update(
        &self,
        id: i32,
        fields: &ColonyFields,
    ) -> Result<Option<Colony>, ApiServiceError> {
        let result = colonies::ActiveModel {
            colony_id: Set(id),
            hive_id: Set(fields.hive_id),
        }
        .update(&*self.db)
        .await;
        Ok(updated(result, "update colony")?.map(Colony::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        Ok(delete_one::<colonies::Entity>(&*self.db, id)
            .await
            .context("delete colony")?)
    }
}

impl From<colonies::Model> for Colony {
    fn from(model: colonies::Model) -> Self {
        Self {
            id: model.colony_id,
            hive_id: model.hive_id,
        }
    }
}

// ── Queen repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbQueenRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FindById for DbQueenRepository {
    type Record = Queen;

    async fn find_by_id(&self, id: i32) -> Result<Option<Queen>, ApiServiceError> {
        let model = find_one::<queens::Entity>(&*self.db, id)
            .await
            .context("find queen by id")?;
        Ok(model.map(Queen::from))
    }
}

impl EntityRepository for DbQueenRepository {
    type Fields = QueenFields;

    async fn create(&self, fields: &QueenFields) -> Result<Option<Queen>, ApiServiceError> {
        let model = queens::ActiveModel {
            colour: Set(fields.colour.clone()),
            clipped: Set(fields.clipped),
            colony_id: Set(fields.colony_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .context("create queen")?;
        Ok(Some(model.into()))
    }

    async fn find_by_parent_id(
        &self,
        colony_id: i32,
    ) -> Result<Option<Vec<Queen>>, ApiServiceError> {
        let models = find_where::<queens::Entity>(
            &*self.db,
            queens::Column::ColonyId,
            colony_id,
            queens::Column::QueenId,
        )
        .await
        .context("list queens by colony")?;
        Ok(map_all(models))
    }

    async fn read_all(&self) -> Result<Option<Vec<Queen>>, ApiServiceError> {
        let models = find_all::<queens::Entity>(&*self.db, queens::Column::QueenId)
            .await
            .context("list queens")?;
        Ok(map_all(models))
    }

    async fn update(
        &self,
        id: i32,
        fields: &QueenFields,
    ) -> Result<Option<Queen>, ApiServiceError> {
        let result = queens::ActiveModel {
            queen_id: Set(id),
            colour: Set(fields.colour.clone()),
            clipped: Set(fields.clipped),
            colony_id: Set(fields.colony_id),
        }
        .update(&*self.db)
        .await;
        Ok(updated(result, "update queen")?.map(Queen::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        Ok(delete_one::<queens::Entity>(&*self.db, id)
            .await
            .context("delete queen")?)
    }
}

impl From<queens::Model> for Queen {
    fn from(model: queens::Model) -> Self {
        Self {
            id: model.queen_id,
            colour: model.colour,
            clipped: model.clipped,
            colony_id: model.colony_id,
        }
    }
}

// ── Inspection repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInspectionRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FindById for DbInspectionRepository {
    type Record = Inspection;

    async fn find_by_id(&self, id: i32) -> Result<Option<Inspection>, ApiServiceError> {
        let model = find_one::<inspections::Entity>(&*self.db, id)
            .await
            .context("find inspection by id")?;
        Ok(model.map(Inspection::from))
    }
}

impl EntityRepository for DbInspectionRepository {
    type Fields = InspectionFields;

    async fn create(
        &self,
        fields: &InspectionFields,
    ) -> Result<Option<Inspection>, ApiServiceError> {
        let model = inspections::ActiveModel {
            inspection_timestamp: Set(fields.timestamp),
            colony_id: Set(fields.colony_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .context("create inspection")?;
        Ok(Some(model.into()))
    }

    async fn find_by_parent_id(
        &self,
        colony_id: i32,
    ) -> Result<Option<Vec<Inspection>>, ApiServiceError> {
        let models = find_where::<inspections::Entity>(
            &*self.db,
            inspections::Column::ColonyId,
            colony_id,
            inspections::Column::InspectionId,
        )
        .await
        .context("list inspections by colony")?;
        Ok(map_all(models))
    }

    async fn read_all(&self) -> Result<Option<Vec<Inspection>>, ApiServiceError> {
        let models = find_all::<inspections::Entity>(&*self.db, inspections::Column::InspectionId)
            .await
            .context("list inspections")?;
        Ok(map_all(models))
    }

    async fn update(
        &self,
        id: i32,
        fields: &InspectionFields,
    ) -> Result<Option<Inspection>, ApiServiceError> {
        let result = inspections::ActiveModel {
            inspection_id: Set(id),
            inspection_timestamp: Set(fields.timestamp),
            colony_id: Set(fields.colony_id),
        }
        .update(&*self.db)
        .await;
        Ok(updated(result, "update inspection")?.map(Inspection::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        Ok(delete_one::<inspections::Entity>(&*self.db, id)
            .await
            .context("delete inspection")?)
    }
}

impl From<inspections::Model> for Inspection {
    fn from(model: inspections::Model) -> Self {
        Self {
            id: model.inspection_id,
            timestamp: model.inspection_timestamp,
            colony_id: model.colony_id,
        }
    }
}

// ── Action repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActionRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FindById for DbActionRepository {
    type Record = Action;

    async fn find_by_id(&self, id: i32) -> Result<Option<Action>, ApiServiceError> {
        let model = find_one::<actions::Entity>(&*self.db, id)
            .await
            .context("find action by id")?;
        Ok(model.map(Action::from))
    }
}

impl EntityRepository for DbActionRepository {
    type Fields = ActionFields;

    async fn create(&self, fields: &ActionFields) -> Result<Option<Action>, ApiServiceError> {
        let model = actions::ActiveModel {
            notes: Set(fields.notes.clone()),
            inspection_id: Set(fields.inspection_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .context("create action")?;
        Ok(Some(model.into()))
    }

    async fn find_by_parent_id(
        &self,
        inspection_id: i32,
    ) -> Result<Option<Vec<Action>>, ApiServiceError> {
        let models = find_where::<actions::Entity>(
            &*self.db,
            actions::Column::InspectionId,
            inspection_id,
            actions::Column::ActionId,
        )
        .await
        .context("list actions by inspection")?;
        Ok(map_all(models))
    }

    async fn read_all(&self) -> Result<Option<Vec<Action>>, ApiServiceError> {
        let models = find_all::<actions::Entity>(&*self.db, actions::Column::ActionId)
            .await
            .context("list actions")?;
        Ok(map_all(models))
    }

    async fn update(
        &self,
        id: i32,
        fields: &ActionFields,
    ) -> Result<Option<Action>, ApiServiceError> {
        let result = actions::ActiveModel {
            action_id: Set(id),
            notes: Set(fields.notes.clone()),
            inspection_id: Set(fields.inspection_id),
        }
        .update(&*self.db)
        .await;
        Ok(updated(result, "update action")?.map(Action::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        Ok(delete_one::<actions::Entity>(&*self.db, id)
            .await
            .context("delete action")?)
    }
}

impl From<actions::Model> for Action {
    fn from(model: actions::Model) -> Self {
        Self {
            id: model.action_id,
            notes: model.notes,
            inspection_id: model.inspection_id,
        }
    }
}

// ── Observation repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbObservationRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FindById for DbObservationRepository {
    type Record = Observation;

    async fn find_by_id(&self, id: i32) -> Result<Option<Observation>, ApiServiceError> {
        let model = find_one::<observations::Entity>(&*self.db, id)
            .await
            .context("find observation by id")?;
        Ok(model.map(Observation::from))
    }
}

impl EntityRepository for DbObservationRepository {
    type Fields = ObservationFields;

    async fn create(
        &self,
        fields: &ObservationFields,
    ) -> Result<Option<Observation>, ApiServiceError> {
        let model = observation_active_model(fields)
            .insert(&*self.db)
            .await
            .context("create observation")?;
        Ok(Some(model.into()))
    }

    async fn find_by_parent_id(
        &self,
        inspection_id: i32,
    ) -> Result<Option<Vec<Observation>>, ApiServiceError> {
        let models = find_where::<observations::Entity>(
            &*self.db,
            observations::Column::InspectionId,
            inspection_id,
            observations::Column::ObservationId,
        )
        .await
        .context("list observations by inspection")?;
        Ok(map_all(models))
    }

    async fn read_all(&self) -> Result<Option<Vec<Observation>>, ApiServiceError> {
        let models =
            find_all::<observations::Entity>(&*self.db, observations::Column::ObservationId)
                .await
                .context("list observations")?;
        Ok(map_all(models))
    }

    async fn update(
        &self,
        id: i32,
        fields: &ObservationFields,
    ) -> Result<Option<Observation>, ApiServiceError> {
        let mut model = observation_active_model(fields);
        model.observation_id = Set(id);
        let result = model.update(&*self.db).await;
        Ok(updated(result, "update observation")?.map(Observation::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        Ok(delete_one::<observations::Entity>(&*self.db, id)
            .await
            .context("delete observation")?)
    }
}

fn observation_active_model(fields: &ObservationFields) -> observations::ActiveModel {
    observations::ActiveModel {
        queenright: Set(fields.queenright),
        queen_cells: Set(fields.queen_cells),
        bias: Set(fields.bias),
        brood_frames: Set(fields.brood_frames),
        store_frames: Set(fields.store_frames),
        chalk_brood: Set(fields.chalk_brood),
        foul_brood: Set(fields.foul_brood),
        varroa_count: Set(fields.varroa_count),
        temper: Set(fields.temper),
        notes: Set(fields.notes.clone()),
        inspection_id: Set(fields.inspection_id),
        ..Default::default()
    }
}

impl From<observations::Model> for Observation {
    fn from(model: observations::Model) -> Self {
        Self {
            id: model.observation_id,
            queenright: model.queenright,
            queen_cells: model.queen_cells,
            bias: model.bias,
            brood_frames: model.brood_frames,
            store_frames: model.store_frames,
            chalk_brood: model.chalk_brood,
            foul_brood: model.foul_brood,
            varroa_count: model.varroa_count,
            temper: model.temper,
            notes: model.notes,
            inspection_id: model.inspection_id,
        }
    }
}
