use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "borrowed_books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_name: String,
    /// May reference a book that has since been removed from the catalog;
    /// such records still list and can still be cancelled.
    pub book_id: i32,
    pub borrow_date: String,
    /// Due date, not the physical return date. Stored as `%m/%d/%y` text.
    pub return_date: String,
    /// Late fine frozen at creation time, never recomputed afterward.
    pub fine: f64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Input for the borrow operation. Dates are typed here; the service layer
/// handles the storage encoding.
#[derive(Debug, Clone, Deserialize)]
pub struct BorrowRequest {
    pub student_name: String,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Borrow record joined with its book title for listing and search
#[derive(Debug, Clone, Serialize)]
pub struct BorrowRow {
    pub id: i32,
    pub student_name: String,
    pub book_title: String,
    pub borrow_date: String,
    pub return_date: String,
    pub fine: f64,
}
