use sea_orm::*;

use crate::domain::DomainError;
use crate::domain::dates::format_date;
use crate::models::{book, borrow};
use crate::services::catalog_service;

/// Seed the sample catalog and two open borrow records, only into empty
/// tables. Quantities are decremented for the seeded records so the ledger
/// starts consistent.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    let now = chrono::Utc::now().to_rfc3339();

    // 1. Sample books if none exist
    if book::Entity::find().count(db).await? == 0 {
        let sample_books = vec![
            ("Learn Python", 3),
            ("Database Systems", 2),
            ("Intro to Algorithms", 1),
            ("Effective Java", 2),
            ("Clean Code", 1),
        ];

        for (title, quantity) in sample_books {
            let entry = book::ActiveModel {
                title: Set(title.to_owned()),
                quantity: Set(quantity),
                created_at: Set(now.clone()),
                updated_at: Set(now.clone()),
                ..Default::default()
            };
            entry.insert(db).await?;
        }
    }

    // 2. Sample borrow records if none exist
    if borrow::Entity::find().count(db).await? == 0 {
        let samples = vec![
            ("Alice Johnson", 1, (2025, 6, 1), (2025, 6, 10)),
            ("Bob Smith", 2, (2025, 6, 5), (2025, 6, 12)),
        ];

        for (student, book_id, (by, bm, bd), (ry, rm, rd)) in samples {
            let borrow_date = chrono::NaiveDate::from_ymd_opt(by, bm, bd).unwrap();
            let return_date = chrono::NaiveDate::from_ymd_opt(ry, rm, rd).unwrap();

            let record = borrow::ActiveModel {
                student_name: Set(student.to_owned()),
                book_id: Set(book_id),
                borrow_date: Set(format_date(borrow_date)),
                return_date: Set(format_date(return_date)),
                fine: Set(0.0),
                created_at: Set(now.clone()),
                updated_at: Set(now.clone()),
                ..Default::default()
            };
            record.insert(db).await?;

            catalog_service::decrement_quantity(db, book_id).await?;
        }
    }

    Ok(())
}
