use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string_len(Car::Name, 50))
                    .col(string(Car::Brand))
                    .col(string(Car::Image))
                    .col(string(Car::Mileage))
                    .col(string(Car::Transmission))
                    .col(integer(Car::Seats))
                    .col(integer(Car::Luggage))
                    .col(double(Car::PricePerDay))
                    .col(json(Car::Features))
                    .col(
                        timestamp_with_time_zone(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_brand_price")
                    .table(Car::Table)
                    .col(Car::Brand)
                    .col(Car::PricePerDay)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    Name,
    Brand,
    Image,
    Mileage,
    Transmission,
    Seats,
    Luggage,
    PricePerDay,
    Features,
    CreatedAt,
}
