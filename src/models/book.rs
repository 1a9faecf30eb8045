use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Copies currently on the shelf. Copies out on loan are not counted.
    /// Never negative.
    pub quantity: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::borrow::Entity")]
    Borrows,
}

impl Related<super::borrow::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Borrows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Catalog line as exposed to callers
#[derive(Debug, Clone, Serialize)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
    pub quantity: i32,
}

impl From<Model> for BookSummary {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            quantity: model.quantity,
        }
    }
}
