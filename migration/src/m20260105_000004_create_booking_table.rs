use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260105_000002_create_car_table::Car};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::CarId))
                    .col(integer(Booking::UserId))
                    .col(string(Booking::PickupLocation))
                    .col(string(Booking::DropoffLocation))
                    .col(timestamp_with_time_zone(Booking::PickupDate))
                    .col(timestamp_with_time_zone(Booking::DropoffDate))
                    .col(string_len(Booking::PickupTime, 5))
                    .col(string(Booking::Email))
                    .col(integer(Booking::TotalDays))
                    .col(double(Booking::TotalPrice))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_car_id")
                            .from(Booking::Table, Booking::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Rejects duplicate ranges for a car at insert time. Overlapping (but not
        // identical) ranges are serialized by the booking service's per-car lock.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_car_range_unique")
                    .table(Booking::Table)
                    .col(Booking::CarId)
                    .col(Booking::PickupDate)
                    .col(Booking::DropoffDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    CarId,
    UserId,
    PickupLocation,
    DropoffLocation,
    PickupDate,
    DropoffDate,
    PickupTime,
    Email,
    TotalDays,
    TotalPrice,
    CreatedAt,
}
