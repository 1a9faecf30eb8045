//! Borrow Service - Lending transactions over the catalog
//!
//! Pure business logic without a presentation layer. Every mutation pairs a
//! borrow-record write with the matching inventory update inside one
//! transaction, so the ledger and the record set can never be observed out
//! of step.

use chrono::NaiveDate;
use sea_orm::*;

use crate::domain::DomainError;
use crate::domain::dates::format_date;
use crate::models::book::Entity as Book;
use crate::models::borrow::{self, BorrowRequest, BorrowRow, Entity as Borrow};
use crate::services::catalog_service;
use crate::services::fine::fine_for_due_date;

/// Create a borrow record and take one copy off the shelf.
///
/// All validation happens before anything is written; the record insert and
/// the quantity decrement then commit atomically. `today` is a parameter
/// rather than a clock read so tests can pin it.
pub async fn borrow(
    db: &DatabaseConnection,
    request: BorrowRequest,
    today: NaiveDate,
) -> Result<i32, DomainError> {
    create_record(db, request, today, false).await
}

/// Log a loan that was handed out in the past.
///
/// Same contract as [`borrow`] minus the no-backdating rule, so a record
/// whose due date has already lapsed enters with its fine frozen at the
/// overdue amount.
pub async fn backfill(
    db: &DatabaseConnection,
    request: BorrowRequest,
    today: NaiveDate,
) -> Result<i32, DomainError> {
    create_record(db, request, today, true).await
}

async fn create_record(
    db: &DatabaseConnection,
    request: BorrowRequest,
    today: NaiveDate,
    backdated: bool,
) -> Result<i32, DomainError> {
    let student = request.student_name.trim();
    if student.is_empty() {
        return Err(DomainError::InvalidInput(
            "student name required".to_string(),
        ));
    }

    // Availability guard; decrement_quantity re-checks inside the
    // transaction below.
    let book = Book::find_by_id(request.book_id).one(db).await?;
    let available = book.map(|b| b.quantity > 0).unwrap_or(false);
    if !available {
        return Err(DomainError::InvalidInput("book not available".to_string()));
    }

    if !backdated && request.borrow_date < today {
        return Err(DomainError::InvalidInput(
            "borrow date cannot be in the past".to_string(),
        ));
    }

    if request.return_date < request.borrow_date {
        return Err(DomainError::InvalidInput(
            "return date cannot be before borrow date".to_string(),
        ));
    }

    // Frozen at creation: the stored fine reflects the due date as of
    // `today` and is never refreshed for open records.
    let fine = fine_for_due_date(request.return_date, today);

    let now = chrono::Utc::now().to_rfc3339();
    let txn = db.begin().await?;

    let record = borrow::ActiveModel {
        student_name: Set(student.to_string()),
        book_id: Set(request.book_id),
        borrow_date: Set(format_date(request.borrow_date)),
        return_date: Set(format_date(request.return_date)),
        fine: Set(fine),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };
    let record = record.insert(&txn).await?;

    // An error here drops the transaction and rolls the insert back.
    catalog_service::decrement_quantity(&txn, request.book_id).await?;

    txn.commit().await?;

    tracing::info!(
        "Borrow record {} created for book {}",
        record.id,
        record.book_id
    );
    Ok(record.id)
}

/// Delete a borrow record and put its copy back on the shelf.
///
/// The increment is skipped when the referenced title no longer exists; the
/// record itself is still removed.
pub async fn cancel(db: &DatabaseConnection, record_id: i32) -> Result<(), DomainError> {
    let record = Borrow::find_by_id(record_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    let book_id = record.book_id;
    let txn = db.begin().await?;

    record.delete(&txn).await?;
    catalog_service::increment_quantity(&txn, book_id).await?;

    txn.commit().await?;

    tracing::info!("Borrow record {} cancelled", record_id);
    Ok(())
}

/// List borrow records joined with their book titles, id ascending.
///
/// `filter` matches case-insensitively against the student name or the
/// title. A record whose book was removed lists as "Unknown".
pub async fn search(
    db: &DatabaseConnection,
    filter: Option<&str>,
) -> Result<Vec<BorrowRow>, DomainError> {
    let records = Borrow::find()
        .order_by_asc(borrow::Column::Id)
        .find_also_related(Book)
        .all(db)
        .await?;

    let needle = filter
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty());

    let rows = records
        .into_iter()
        .map(|(record, book)| {
            let book_title = book
                .map(|b| b.title)
                .unwrap_or_else(|| "Unknown".to_string());

            BorrowRow {
                id: record.id,
                student_name: record.student_name,
                book_title,
                borrow_date: record.borrow_date,
                return_date: record.return_date,
                fine: record.fine,
            }
        })
        .filter(|row| match &needle {
            Some(needle) => {
                row.student_name.to_lowercase().contains(needle)
                    || row.book_title.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect();

    Ok(rows)
}

/// Count total borrow records
pub async fn count_records(db: &DatabaseConnection) -> Result<i64, DomainError> {
    let count = Borrow::find().count(db).await?;
    Ok(count as i64)
}
