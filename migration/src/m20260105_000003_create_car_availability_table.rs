use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_car_table::Car;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarAvailability::Table)
                    .if_not_exists()
                    .col(pk_auto(CarAvailability::Id))
                    .col(integer(CarAvailability::CarId))
                    .col(timestamp_with_time_zone(CarAvailability::AvailableFrom))
                    .col(timestamp_with_time_zone(CarAvailability::AvailableTo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_availability_car_id")
                            .from(CarAvailability::Table, CarAvailability::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_availability_range")
                    .table(CarAvailability::Table)
                    .col(CarAvailability::AvailableFrom)
                    .col(CarAvailability::AvailableTo)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CarAvailability {
    Table,
    Id,
    CarId,
    AvailableFrom,
    AvailableTo,
}
