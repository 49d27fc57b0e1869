use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::faq::{CreateFaqDto, FaqDto, UpdateFaqDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Faq {
    pub fn from_entity(entity: entity::faq::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FaqDto {
        FaqDto {
            id: self.id,
            question: self.question,
            answer: self.answer,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFaqParams {
    pub question: String,
    pub answer: String,
}

impl CreateFaqParams {
    pub fn from_dto(dto: CreateFaqDto) -> Result<Self, String> {
        let question = dto.question.trim().to_string();
        let answer = dto.answer.trim().to_string();
        if question.is_empty() || answer.is_empty() {
            return Err("Question and answer are required".to_string());
        }
        Ok(Self { question, answer })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFaqParams {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl UpdateFaqParams {
    pub fn from_dto(dto: UpdateFaqDto) -> Self {
        Self {
            question: dto
                .question
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            answer: dto
                .answer
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        }
    }
}
