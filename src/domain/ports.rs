use crate::domain::model::{
    Book, BookId, BorrowRecord, ChargeOutcome, HistoryEntry, NewBook, OutstandingLoan,
    RefundOutcome,
};
use crate::utils::error::{GatewayError, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence port for books and borrow records.
///
/// The borrow and return workflows each issue a pair of writes (record +
/// availability). Implementations must make each pair atomic at the store
/// level; the core issues the calls in sequence and has no compensation
/// logic if the second write fails.
#[async_trait]
pub trait LibraryStore: Send + Sync {
    async fn book_by_id(&self, book_id: BookId) -> Result<Option<Book>, StoreError>;

    async fn book_by_isbn(&self, isbn: &str) -> Result<Option<Book>, StoreError>;

    /// All catalog entries in the store's natural order.
    async fn all_books(&self) -> Result<Vec<Book>, StoreError>;

    async fn insert_book(&self, book: NewBook) -> Result<BookId, StoreError>;

    /// Number of unreturned borrow records for the patron.
    async fn outstanding_count(&self, patron_id: &str) -> Result<u32, StoreError>;

    /// The patron's unreturned loans, joined with book title and author.
    async fn outstanding_loans(&self, patron_id: &str) -> Result<Vec<OutstandingLoan>, StoreError>;

    async fn insert_borrow_record(&self, record: BorrowRecord) -> Result<(), StoreError>;

    /// Applies `delta` to the book's available copy count.
    async fn adjust_availability(&self, book_id: BookId, delta: i32) -> Result<(), StoreError>;

    /// Sets the return date on the patron's outstanding record for the book.
    async fn mark_returned(
        &self,
        patron_id: &str,
        book_id: BookId,
        returned_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Full borrowing history joined with book title/author, borrow_date
    /// ascending.
    async fn borrow_history(&self, patron_id: &str) -> Result<Vec<HistoryEntry>, StoreError>;
}

/// External payment-processing collaborator.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process_payment(
        &self,
        patron_id: &str,
        amount: f64,
        description: &str,
    ) -> Result<ChargeOutcome, GatewayError>;

    async fn refund_payment(
        &self,
        transaction_id: &str,
        amount: f64,
    ) -> Result<RefundOutcome, GatewayError>;
}
