pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_user_table;
mod m20250101_000002_create_post_table;
mod m20250101_000003_create_post_member_table;
mod m20250101_000004_create_post_image_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_user_table::Migration),
            Box::new(m20250101_000002_create_post_table::Migration),
            Box::new(m20250101_000003_create_post_member_table::Migration),
            Box::new(m20250101_000004_create_post_image_table::Migration),
        ]
    }
}
