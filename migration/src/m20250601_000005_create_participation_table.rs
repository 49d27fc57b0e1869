use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250601_000001_create_user_table::User, m20250601_000003_create_event_table::Event};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participation::Table)
                    .if_not_exists()
                    .col(pk_uuid(Participation::Id))
                    .col(uuid(Participation::UserId))
                    .col(uuid(Participation::EventId))
                    .col(string(Participation::Name))
                    .col(string(Participation::Email))
                    .col(date(Participation::DateOfBirth))
                    .col(string(Participation::Document))
                    .col(string(Participation::Status).default("PENDING"))
                    .col(timestamp_with_time_zone_null(Participation::CheckinIn))
                    .col(timestamp_with_time_zone_null(Participation::CheckinOut))
                    .col(double_null(Participation::AvaliationNote))
                    .col(text_null(Participation::AvaliationComment))
                    .col(timestamp_with_time_zone(Participation::CreatedAt))
                    .col(timestamp_with_time_zone(Participation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-participation-user_id")
                            .from(Participation::Table, Participation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-participation-event_id")
                            .from(Participation::Table, Participation::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One attendance record per user and flash event.
        manager
            .create_index(
                Index::create()
                    .name("idx-participation-user_id-event_id")
                    .table(Participation::Table)
                    .col(Participation::UserId)
                    .col(Participation::EventId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Participation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Participation {
    Table,
    Id,
    UserId,
    EventId,
    Name,
    Email,
    DateOfBirth,
    Document,
    Status,
    CheckinIn,
    CheckinOut,
    AvaliationNote,
    AvaliationComment,
    CreatedAt,
    UpdatedAt,
}
