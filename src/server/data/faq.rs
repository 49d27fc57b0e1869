use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::server::model::faq::{CreateFaqParams, Faq, UpdateFaqParams};

pub struct FaqRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateFaqParams) -> Result<Faq, DbErr> {
        let now = Utc::now();
        let model = entity::faq::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            question: ActiveValue::Set(params.question),
            answer: ActiveValue::Set(params.answer),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Faq::from_entity(model))
    }

    /// Gets all FAQs in creation order.
    pub async fn get_all(&self) -> Result<Vec<Faq>, DbErr> {
        Ok(entity::prelude::Faq::find()
            .order_by_asc(entity::faq::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Faq::from_entity)
            .collect())
    }

    pub async fn update(&self, id: Uuid, params: UpdateFaqParams) -> Result<Option<Faq>, DbErr> {
        let Some(model) = entity::prelude::Faq::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::faq::ActiveModel = model.into();
        if let Some(question) = params.question {
            active.question = ActiveValue::Set(question);
        }
        if let Some(answer) = params.answer {
            active.answer = ActiveValue::Set(answer);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Faq::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Faq::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }
}
