use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EventType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub categories: Json,
    pub date: DateTimeUtc,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub additional_info: Option<String>,
    pub capacity_max: i32,
    pub capacity_current: i32,
    pub capacity_total: i32,
    pub schedule_start: DateTimeUtc,
    pub schedule_end: DateTimeUtc,
    pub event_type: EventType,
    pub inscription_tiers: Json,
    pub certificates: bool,
    pub certificate_template_name: String,
    pub certificate_course_name: String,
    pub certificate_course_description: String,
    pub contents: Json,
    pub entry_qr_code: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::event_organizer::Entity")]
    EventOrganizer,
    #[sea_orm(has_many = "super::inscription::Entity")]
    Inscription,
    #[sea_orm(has_many = "super::participation::Entity")]
    Participation,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::event_organizer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventOrganizer.def()
    }
}

impl Related<super::inscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inscription.def()
    }
}

impl Related<super::participation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
