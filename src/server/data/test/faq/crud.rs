use super::*;

/// Tests FAQs are listed in creation order.
///
/// Expected: the created entries come back in insertion order
#[tokio::test]
async fn lists_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FaqRepository::new(db);
    let first = repo
        .create(CreateFaqParams {
            question: "Where?".to_string(),
            answer: "Here.".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateFaqParams {
            question: "When?".to_string(),
            answer: "Now.".to_string(),
        })
        .await?;

    let ids: Vec<Uuid> = repo.get_all().await?.into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests a partial update keeps fields that were not sent.
///
/// Expected: answer changed, question unchanged
#[tokio::test]
async fn partial_update_keeps_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let faq = factory::create_faq(db).await?;
    let repo = FaqRepository::new(db);
    let updated = repo
        .update(
            faq.id,
            UpdateFaqParams {
                question: None,
                answer: Some("Updated.".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.question, faq.question);
    assert_eq!(updated.answer, "Updated.");

    Ok(())
}

/// Tests updating or deleting an unknown FAQ.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn missing_faq_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FaqRepository::new(db);
    assert!(repo
        .update(Uuid::new_v4(), UpdateFaqParams::default())
        .await?
        .is_none());
    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
