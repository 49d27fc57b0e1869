use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{InscriptionStatus, ParticipationStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inscription")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub for_another_one: bool,
    pub participant_name: String,
    pub participant_email: String,
    pub participant_date_of_birth: Date,
    pub participant_document: String,
    pub status: InscriptionStatus,
    pub participation_status: ParticipationStatus,
    pub checkin_in: Option<DateTimeUtc>,
    pub checkin_out: Option<DateTimeUtc>,
    pub certificate_document: Option<String>,
    pub certificate_status: Option<String>,
    pub avaliation_note: Option<f64>,
    pub avaliation_comment: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
