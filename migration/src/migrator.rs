use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202309250001_create_users::Migration),
            Box::new(migrations::m202309250002_create_courses::Migration),
            Box::new(migrations::m202309250003_create_enrollments::Migration),
            Box::new(migrations::m202309250004_create_lessons::Migration),
            Box::new(migrations::m202309250005_create_assignments::Migration),
        ]
    }
}
