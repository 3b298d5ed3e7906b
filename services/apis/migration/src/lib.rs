use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_sessions;
mod m20240101_000003_create_apiaries;
mod m20240101_000004_create_hives;
mod m20240101_000005_create_colonies;
mod m20240101_000006_create_queens;
mod m20240101_000007_create_inspections;
mod m20240101_000008_create_actions;
mod m20240101_000009_create_observations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_sessions::Migration),
            Box::new(m20240101_000003_create_apiaries::Migration),
            Box::new(m20240101_000004_create_hives::Migration),
            Box::new(m20240101_000005_create_colonies::Migration),
            Box::new(m20240101_000006_create_queens::Migration),
            Box::new(m20240101_000007_create_inspections::Migration),
            Box::new(m20240101_000008_create_actions::Migration),
            Box::new(m20240101_000009_create_observations::Migration),
        ]
    }
}
