use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faq::Table)
                    .if_not_exists()
                    .col(pk_uuid(Faq::Id))
                    .col(text(Faq::Question))
                    .col(text(Faq::Answer))
                    .col(timestamp_with_time_zone(Faq::CreatedAt))
                    .col(timestamp_with_time_zone(Faq::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_uuid(Review::Id))
                    .col(uuid(Review::UserId))
                    .col(double(Review::Rating))
                    .col(text_null(Review::Comment))
                    .col(uuid(Review::ReviewableId))
                    .col(string(Review::ReviewableType))
                    .col(timestamp_with_time_zone(Review::CreatedAt))
                    .col(timestamp_with_time_zone(Review::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-review-user_id")
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(pk_uuid(Image::Id))
                    .col(string(Image::Url))
                    .col(string_uniq(Image::PublicId))
                    .col(timestamp_with_time_zone(Image::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faq::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Faq {
    Table,
    Id,
    Question,
    Answer,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    UserId,
    Rating,
    Comment,
    ReviewableId,
    ReviewableType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Image {
    Table,
    Id,
    Url,
    PublicId,
    CreatedAt,
}
