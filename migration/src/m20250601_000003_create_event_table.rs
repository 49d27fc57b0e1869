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
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_uuid(Event::Id))
                    .col(uuid(Event::OwnerId))
                    .col(string(Event::Name))
                    .col(text(Event::Description))
                    .col(json(Event::Categories))
                    .col(timestamp_with_time_zone(Event::Date))
                    .col(string(Event::Address))
                    .col(string(Event::City))
                    .col(string(Event::State))
                    .col(string(Event::Country))
                    .col(string_null(Event::AdditionalInfo))
                    .col(integer(Event::CapacityMax))
                    .col(integer(Event::CapacityCurrent).default(0))
                    .col(integer(Event::CapacityTotal).default(0))
                    .col(timestamp_with_time_zone(Event::ScheduleStart))
                    .col(timestamp_with_time_zone(Event::ScheduleEnd))
                    .col(string(Event::EventType))
                    .col(json(Event::InscriptionTiers))
                    .col(boolean(Event::Certificates))
                    .col(string(Event::CertificateTemplateName))
                    .col(string(Event::CertificateCourseName))
                    .col(text(Event::CertificateCourseDescription))
                    .col(json(Event::Contents))
                    .col(string_null(Event::EntryQrCode))
                    .col(timestamp_with_time_zone(Event::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event-owner_id")
                            .from(Event::Table, Event::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-event-entry_qr_code")
                    .table(Event::Table)
                    .col(Event::EntryQrCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventOrganizer::Table)
                    .if_not_exists()
                    .col(uuid(EventOrganizer::EventId))
                    .col(uuid(EventOrganizer::UserId))
                    .col(string(EventOrganizer::Level))
                    .primary_key(
                        Index::create()
                            .col(EventOrganizer::EventId)
                            .col(EventOrganizer::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_organizer-event_id")
                            .from(EventOrganizer::Table, EventOrganizer::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_organizer-user_id")
                            .from(EventOrganizer::Table, EventOrganizer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventOrganizer::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Categories,
    Date,
    Address,
    City,
    State,
    Country,
    AdditionalInfo,
    CapacityMax,
    CapacityCurrent,
    CapacityTotal,
    ScheduleStart,
    ScheduleEnd,
    EventType,
    InscriptionTiers,
    Certificates,
    CertificateTemplateName,
    CertificateCourseName,
    CertificateCourseDescription,
    Contents,
    EntryQrCode,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EventOrganizer {
    Table,
    EventId,
    UserId,
    Level,
}
