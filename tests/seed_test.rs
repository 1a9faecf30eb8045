use bibliotrack::services::{borrow_service, catalog_service};
use bibliotrack::{db, seed};
use sea_orm::DatabaseConnection;

async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

#[tokio::test]
async fn seed_populates_a_consistent_ledger() {
    let db = setup_test_db().await;
    seed::seed_demo_data(&db).await.expect("Seed failed");

    assert_eq!(catalog_service::count_books(&db).await.unwrap(), 5);
    assert_eq!(borrow_service::count_records(&db).await.unwrap(), 2);

    // Two copies are out on loan, so the first two titles are short one
    let available = catalog_service::list_available(&db)
        .await
        .expect("List failed");
    let quantities: Vec<(String, i32)> = available
        .into_iter()
        .map(|b| (b.title, b.quantity))
        .collect();
    assert_eq!(
        quantities,
        vec![
            ("Learn Python".to_string(), 2),
            ("Database Systems".to_string(), 1),
            ("Intro to Algorithms".to_string(), 1),
            ("Effective Java".to_string(), 2),
            ("Clean Code".to_string(), 1),
        ]
    );

    let rows = borrow_service::search(&db, None)
        .await
        .expect("Search failed");
    assert_eq!(rows[0].student_name, "Alice Johnson");
    assert_eq!(rows[0].book_title, "Learn Python");
    assert_eq!(rows[0].borrow_date, "06/01/25");
    assert_eq!(rows[0].return_date, "06/10/25");
    assert_eq!(rows[0].fine, 0.0);
    assert_eq!(rows[1].student_name, "Bob Smith");
}

#[tokio::test]
async fn seed_is_idempotent() {
    let db = setup_test_db().await;
    seed::seed_demo_data(&db).await.expect("Seed failed");
    seed::seed_demo_data(&db).await.expect("Re-seed failed");

    assert_eq!(catalog_service::count_books(&db).await.unwrap(), 5);
    assert_eq!(borrow_service::count_records(&db).await.unwrap(), 2);
}
