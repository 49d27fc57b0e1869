pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_verification_code_table;
mod m20250601_000003_create_event_table;
mod m20250601_000004_create_inscription_table;
mod m20250601_000005_create_participation_table;
mod m20250601_000006_create_content_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_verification_code_table::Migration),
            Box::new(m20250601_000003_create_event_table::Migration),
            Box::new(m20250601_000004_create_inscription_table::Migration),
            Box::new(m20250601_000005_create_participation_table::Migration),
            Box::new(m20250601_000006_create_content_tables::Migration),
        ]
    }
}
