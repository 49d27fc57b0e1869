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
                    .table(Inscription::Table)
                    .if_not_exists()
                    .col(pk_uuid(Inscription::Id))
                    .col(uuid(Inscription::UserId))
                    .col(uuid(Inscription::EventId))
                    .col(boolean(Inscription::ForAnotherOne).default(false))
                    .col(string(Inscription::ParticipantName))
                    .col(string(Inscription::ParticipantEmail))
                    .col(date(Inscription::ParticipantDateOfBirth))
                    .col(string(Inscription::ParticipantDocument))
                    .col(string(Inscription::Status).default("PENDING"))
                    .col(string(Inscription::ParticipationStatus).default("PENDING"))
                    .col(timestamp_with_time_zone_null(Inscription::CheckinIn))
                    .col(timestamp_with_time_zone_null(Inscription::CheckinOut))
                    .col(string_null(Inscription::CertificateDocument))
                    .col(string_null(Inscription::CertificateStatus))
                    .col(double_null(Inscription::AvaliationNote))
                    .col(text_null(Inscription::AvaliationComment))
                    .col(timestamp_with_time_zone(Inscription::CreatedAt))
                    .col(timestamp_with_time_zone(Inscription::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inscription-user_id")
                            .from(Inscription::Table, Inscription::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inscription-event_id")
                            .from(Inscription::Table, Inscription::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-inscription-event_id-status")
                    .table(Inscription::Table)
                    .col(Inscription::EventId)
                    .col(Inscription::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inscription {
    Table,
    Id,
    UserId,
    EventId,
    ForAnotherOne,
    ParticipantName,
    ParticipantEmail,
    ParticipantDateOfBirth,
    ParticipantDocument,
    Status,
    ParticipationStatus,
    CheckinIn,
    CheckinOut,
    CertificateDocument,
    CertificateStatus,
    AvaliationNote,
    AvaliationComment,
    CreatedAt,
    UpdatedAt,
}
