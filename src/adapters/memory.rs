use crate::domain::model::{Book, BookId, BorrowRecord, HistoryEntry, NewBook, OutstandingLoan};
use crate::domain::ports::LibraryStore;
use crate::utils::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// Reference `LibraryStore` backed by in-process tables. Used by the demo
/// binary and the integration tests; each workflow's write pair runs under
/// the single table lock, so the pairs are atomic here.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    books: Vec<Book>,
    records: Vec<BorrowRecord>,
    next_book_id: BookId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.inner.lock().expect("memory store lock poisoned")
    }
}

impl Tables {
    fn join_history(&self, record: &BorrowRecord) -> HistoryEntry {
        let (title, author) = self
            .books
            .iter()
            .find(|b| b.id == record.book_id)
            .map(|b| (b.title.clone(), b.author.clone()))
            .unwrap_or_default();
        HistoryEntry {
            patron_id: record.patron_id.clone(),
            book_id: record.book_id,
            title,
            author,
            borrow_date: record.borrow_date,
            due_date: record.due_date,
            return_date: record.return_date,
        }
    }
}

#[async_trait]
impl LibraryStore for MemoryStore {
    async fn book_by_id(&self, book_id: BookId) -> Result<Option<Book>, StoreError> {
        Ok(self.lock().books.iter().find(|b| b.id == book_id).cloned())
    }

    async fn book_by_isbn(&self, isbn: &str) -> Result<Option<Book>, StoreError> {
        Ok(self.lock().books.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn all_books(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.lock().books.clone())
    }

    async fn insert_book(&self, book: NewBook) -> Result<BookId, StoreError> {
        let mut tables = self.lock();
        tables.next_book_id += 1;
        let id = tables.next_book_id;
        tables.books.push(Book {
            id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            total_copies: book.total_copies,
            available_copies: book.available_copies,
        });
        Ok(id)
    }

    async fn outstanding_count(&self, patron_id: &str) -> Result<u32, StoreError> {
        let count = self
            .lock()
            .records
            .iter()
            .filter(|r| r.patron_id == patron_id && r.return_date.is_none())
            .count();
        Ok(count as u32)
    }

    async fn outstanding_loans(&self, patron_id: &str) -> Result<Vec<OutstandingLoan>, StoreError> {
        let tables = self.lock();
        let loans = tables
            .records
            .iter()
            .filter(|r| r.patron_id == patron_id && r.return_date.is_none())
            .map(|r| {
                let (title, author) = tables
                    .books
                    .iter()
                    .find(|b| b.id == r.book_id)
                    .map(|b| (b.title.clone(), b.author.clone()))
                    .unwrap_or_default();
                OutstandingLoan {
                    book_id: r.book_id,
                    title,
                    author,
                    due_date: r.due_date,
                }
            })
            .collect();
        Ok(loans)
    }

    async fn insert_borrow_record(&self, record: BorrowRecord) -> Result<(), StoreError> {
        self.lock().records.push(record);
        Ok(())
    }

    async fn adjust_availability(&self, book_id: BookId, delta: i32) -> Result<(), StoreError> {
        let mut tables = self.lock();
        let book = tables
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or(StoreError::RowNotFound {
                entity: format!("book {}", book_id),
            })?;
        book.available_copies = (book.available_copies as i64 + delta as i64).max(0) as u32;
        Ok(())
    }

    async fn mark_returned(
        &self,
        patron_id: &str,
        book_id: BookId,
        returned_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut tables = self.lock();
        let record = tables
            .records
            .iter_mut()
            .find(|r| r.patron_id == patron_id && r.book_id == book_id && r.return_date.is_none())
            .ok_or(StoreError::RowNotFound {
                entity: format!("outstanding loan of book {} by {}", book_id, patron_id),
            })?;
        record.return_date = Some(returned_at);
        Ok(())
    }

    async fn borrow_history(&self, patron_id: &str) -> Result<Vec<HistoryEntry>, StoreError> {
        let tables = self.lock();
        let mut history: Vec<HistoryEntry> = tables
            .records
            .iter()
            .filter(|r| r.patron_id == patron_id)
            .map(|r| tables.join_history(r))
            .collect();
        history.sort_by_key(|entry| entry.borrow_date);
        Ok(history)
    }
}
