pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_car_table;
mod m20260105_000003_create_car_availability_table;
mod m20260105_000004_create_booking_table;
mod m20260105_000005_create_contact_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_car_table::Migration),
            Box::new(m20260105_000003_create_car_availability_table::Migration),
            Box::new(m20260105_000004_create_booking_table::Migration),
            Box::new(m20260105_000005_create_contact_message_table::Migration),
        ]
    }
}
