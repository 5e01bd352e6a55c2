use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use serde_json::json;
use uuid::Uuid;

use crate::{db, document, Document, StoreError};

async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL missing or SKIP_DB_TESTS set");
        return None;
    }
    let db = db::connect_from_env().await.ok()?;
    migration::Migrator::up(&db, None).await.ok()?;
    Some(db)
}

fn fields(v: serde_json::Value) -> Document {
    v.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn insert_then_find_round_trips() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let collection = format!("movies_{}", Uuid::new_v4().simple());

    let payload = fields(json!({"title": "Example Movie", "directedBy": "Jane Dow", "releaseYear": 1999}));
    let created = document::insert(&db, &collection, payload.clone()).await?;
    assert!(!created.id.is_empty());
    assert_eq!(created.fields, payload);

    let found = document::find(&db, &collection, &created.id).await?;
    assert_eq!(found, created);
    Ok(())
}

#[tokio::test]
async fn list_is_scoped_to_collection_and_ordered() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let collection = format!("authors_{}", Uuid::new_v4().simple());
    let other = format!("authors_{}", Uuid::new_v4().simple());

    assert!(document::list(&db, &collection).await?.is_empty());

    let a = document::insert(&db, &collection, fields(json!({"firstName": "A"}))).await?;
    let b = document::insert(&db, &collection, fields(json!({"firstName": "B"}))).await?;
    document::insert(&db, &other, fields(json!({"firstName": "C"}))).await?;

    let ids: Vec<String> = document::list(&db, &collection).await?.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    Ok(())
}

#[tokio::test]
async fn find_unknown_id_is_not_found() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let res = document::find(&db, "movies", "ffffffffffffffffffffffffffffffff").await;
    assert!(matches!(res, Err(StoreError::NotFound { .. })));
    Ok(())
}

#[tokio::test]
async fn find_in_wrong_collection_is_not_found() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let created = document::insert(&db, "movies", fields(json!({"title": "X"}))).await?;
    let res = document::find(&db, "authors", &created.id).await;
    assert!(matches!(res, Err(StoreError::NotFound { .. })));
    Ok(())
}
