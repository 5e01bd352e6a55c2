use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::StoreError, record::{self, Document, Record}};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub collection: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub fields: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_record(self) -> Result<Record, StoreError> {
        match self.fields {
            Json::Object(fields) => Ok(Record::new(self.id, fields)),
            other => Err(StoreError::Serialization(format!(
                "document {} holds non-object fields: {}",
                self.id, other
            ))),
        }
    }
}

pub async fn insert(
    db: &DatabaseConnection,
    collection: &str,
    fields: Document,
) -> Result<Record, StoreError> {
    let am = ActiveModel {
        id: Set(record::new_id()),
        collection: Set(collection.to_string()),
        fields: Set(Json::Object(fields)),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await?.into_record()
}

/// All documents of a collection in insertion order.
pub async fn list(db: &DatabaseConnection, collection: &str) -> Result<Vec<Record>, StoreError> {
    Entity::find()
        .filter(Column::Collection.eq(collection))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Model::into_record)
        .collect()
}

pub async fn find(db: &DatabaseConnection, collection: &str, id: &str) -> Result<Record, StoreError> {
    Entity::find_by_id(id.to_string())
        .filter(Column::Collection.eq(collection))
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found(collection, id))?
        .into_record()
}
