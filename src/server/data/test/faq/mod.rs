use crate::server::{
    data::faq::FaqRepository,
    model::faq::{CreateFaqParams, UpdateFaqParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod crud;
