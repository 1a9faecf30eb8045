pub mod book;
pub mod borrow;

pub use book::BookSummary;
pub use borrow::{BorrowRequest, BorrowRow};
