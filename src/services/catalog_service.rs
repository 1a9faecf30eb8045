//! Catalog Service - Inventory ledger for book titles
//!
//! Owns the `books` rows and their available-copy counts. The borrow and
//! cancel flows in `borrow_service` call the quantity helpers inside their
//! own transactions so inventory and borrow records always move together.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::DomainError;
use crate::models::book::{self, BookSummary, Entity as Book};

/// List titles with at least one copy on the shelf, ordered by id
pub async fn list_available(db: &DatabaseConnection) -> Result<Vec<BookSummary>, DomainError> {
    let books = Book::find()
        .filter(book::Column::Quantity.gt(0))
        .order_by_asc(book::Column::Id)
        .all(db)
        .await?;

    Ok(books.into_iter().map(BookSummary::from).collect())
}

/// Add a title to the catalog with an initial copy count
pub async fn add_title(
    db: &DatabaseConnection,
    title: &str,
    quantity: i32,
) -> Result<BookSummary, DomainError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::InvalidInput("title required".to_string()));
    }
    if quantity < 0 {
        return Err(DomainError::InvalidInput(
            "quantity cannot be negative".to_string(),
        ));
    }

    let now = chrono::Utc::now().to_rfc3339();
    let new_book = book::ActiveModel {
        title: Set(title.to_string()),
        quantity: Set(quantity),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_book.insert(db).await?;
    tracing::info!("Added title {} ({} copies)", model.id, model.quantity);
    Ok(BookSummary::from(model))
}

/// Take one copy of `book_id` off the shelf.
///
/// Callers check availability before borrowing; this re-checks so the count
/// can never go below zero even when that guard was skipped. Generic over
/// the connection so it participates in the caller's transaction.
pub async fn decrement_quantity<C: ConnectionTrait>(
    conn: &C,
    book_id: i32,
) -> Result<(), DomainError> {
    let book = Book::find_by_id(book_id)
        .one(conn)
        .await?
        .ok_or(DomainError::NotFound)?;

    if book.quantity == 0 {
        return Err(DomainError::NoStock);
    }

    let quantity = book.quantity - 1;
    let mut active: book::ActiveModel = book.into();
    active.quantity = Set(quantity);
    active.updated_at = Set(chrono::Utc::now().to_rfc3339());
    active.update(conn).await?;

    Ok(())
}

/// Put one copy of `book_id` back on the shelf.
///
/// A missing title is a no-op success: a borrow record may outlive its
/// book, and returning such a record has no shelf line to restock.
pub async fn increment_quantity<C: ConnectionTrait>(
    conn: &C,
    book_id: i32,
) -> Result<(), DomainError> {
    let Some(book) = Book::find_by_id(book_id).one(conn).await? else {
        return Ok(());
    };

    let quantity = book.quantity + 1;
    let mut active: book::ActiveModel = book.into();
    active.quantity = Set(quantity);
    active.updated_at = Set(chrono::Utc::now().to_rfc3339());
    active.update(conn).await?;

    Ok(())
}

/// Count total titles
pub async fn count_books(db: &DatabaseConnection) -> Result<i64, DomainError> {
    let count = Book::find().count(db).await?;
    Ok(count as i64)
}
