pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_family_table;
mod m20250801_000002_create_family_member_table;
mod m20250801_000003_create_survey_completion_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_family_table::Migration),
            Box::new(m20250801_000002_create_family_member_table::Migration),
            Box::new(m20250801_000003_create_survey_completion_table::Migration),
        ]
    }
}
