use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserVehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserVehicles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserVehicles::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserVehicles::Make).string().not_null())
                    .col(ColumnDef::new(UserVehicles::ModelName).string().not_null())
                    .col(
                        ColumnDef::new(UserVehicles::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserVehicles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserVehicles {
    Table,
    Id,
    Username,
    Make,
    ModelName,
    CreatedAt,
}
