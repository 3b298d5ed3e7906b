use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use apis::domain::entity::EntityFields;
use apis::domain::password::hash_password;
use apis::domain::repository::{EntityRepository, FindById, UserRepository};
use apis::domain::types::{
    Apiary, ApiaryFields, Colony, ColonyFields, Hive, HiveFields, Session, SessionFields, User,
};
use apis::error::ApiServiceError;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    pub lookups: Arc<AtomicUsize>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            lookups: Arc::default(),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl FindById for MockUserRepo {
    type Record = User;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiServiceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiServiceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            username: username.to_owned(),
            password_hash: password_hash.to_owned(),
        };
        users.push(user.clone());
        Ok(Some(user))
    }

    async fn read_all(&self) -> Result<Option<Vec<User>>, ApiServiceError> {
        let users = self.users.lock().unwrap().clone();
        Ok((!users.is_empty()).then_some(users))
    }

    async fn update(
        &self,
        id: i32,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.id == id).map(|u| {
            u.username = username.to_owned();
            u.password_hash = password_hash.to_owned();
            u.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

pub fn test_user(id: i32, username: &str) -> User {
    User {
        id,
        username: username.to_owned(),
        password_hash: hash_password("passwordlongerthanten").unwrap(),
    }
}

// ── MemoryRepo ───────────────────────────────────────────────────────────────

/// Records the in-memory repository can store and build from their fields.
pub trait Stored: Clone + Send + Sync + 'static {
    type Fields: EntityFields;

    fn build(id: i32, fields: &Self::Fields) -> Self;
    fn id(&self) -> i32;
    fn parent_id(&self) -> i32;
}

impl Stored for Apiary {
    type Fields = ApiaryFields;

    fn build(id: i32, fields: &ApiaryFields) -> Self {
        Self {
            id,
            name: fields.name.clone(),
            location: fields.location.clone(),
            user_id: fields.user_id,
        }
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn parent_id(&self) -> i32 {
        self.user_id
    }
}

impl Stored for Hive {
    type Fields = HiveFields;

    fn build(id: i32, fields: &HiveFields) -> Self {
        Self {
            id,
            name: fields.name.clone(),
            apiary_id: fields.apiary_id,
        }
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn parent_id(&self) -> i32 {
        self.apiary_id
    }
}

impl Stored for Colony {
    type Fields = ColonyFields;

    fn build(id: i32, fields: &ColonyFields) -> Self {
        Self {
            id,
            hive_id: fields.hive_id,
        }
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn parent_id(&self) -> i32 {
        self.hive_id
    }
}

impl Stored for Session {
    type Fields = SessionFields;

    fn build(id: i32, fields: &SessionFields) -> Self {
        Self {
            id,
            session_start: fields.session_start,
            user_id: fields.user_id,
        }
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn parent_id(&self) -> i32 {
        self.user_id
    }
}

/// In-memory repository that counts every call reaching it.
pub struct MemoryRepo<T> {
    pub rows: Arc<Mutex<Vec<T>>>,
    pub lookups: Arc<AtomicUsize>,
    pub writes: Arc<AtomicUsize>,
}

impl<T> Clone for MemoryRepo<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            lookups: Arc::clone(&self.lookups),
            writes: Arc::clone(&self.writes),
        }
    }
}

impl<T: Stored> MemoryRepo<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            lookups: Arc::default(),
            writes: Arc::default(),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows.lock().unwrap().clone()
    }
}

impl<T: Stored> FindById for MemoryRepo<T> {
    type Record = T;

    async fn find_by_id(&self, id: i32) -> Result<Option<T>, ApiServiceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id() == id).cloned())
    }
}

impl<T: Stored> EntityRepository for MemoryRepo<T> {
    type Fields = T::Fields;

    async fn create(&self, fields: &T::Fields) -> Result<Option<T>, ApiServiceError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(Stored::id).max().unwrap_or(0) + 1;
        let record = T::build(id, fields);
        rows.push(record.clone());
        Ok(Some(record))
    }

    async fn find_by_parent_id(&self, parent_id: i32) -> Result<Option<Vec<T>>, ApiServiceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        let matching: Vec<T> = rows
            .iter()
            .filter(|r| r.parent_id() == parent_id)
            .cloned()
            .collect();
        Ok((!matching.is_empty()).then_some(matching))
    }

    async fn read_all(&self) -> Result<Option<Vec<T>>, ApiServiceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap().clone();
        Ok((!rows.is_empty()).then_some(rows))
    }

    async fn update(&self, id: i32, fields: &T::Fields) -> Result<Option<T>, ApiServiceError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.id() == id).map(|r| {
            *r = T::build(id, fields);
            r.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        Ok(rows.len() < before)
    }
}
