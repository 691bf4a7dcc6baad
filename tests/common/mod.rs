#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use libris::{
    Book, BookId, BorrowRecord, ChargeOutcome, GatewayError, HistoryEntry, LibraryStore,
    MemoryStore, NewBook, OutstandingLoan, PaymentGateway, RefundOutcome, StoreError,
};
use std::sync::Mutex;

pub async fn seed_book(
    store: &MemoryStore,
    title: &str,
    author: &str,
    isbn: &str,
    copies: u32,
) -> BookId {
    store
        .insert_book(NewBook {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            total_copies: copies,
            available_copies: copies,
        })
        .await
        .unwrap()
}

/// Inserts an outstanding loan whose due date lies `days_overdue` days in
/// the past (negative values put it in the future), taking one copy.
pub async fn seed_loan(store: &MemoryStore, patron_id: &str, book_id: BookId, days_overdue: i64) {
    seed_loan_borrowed_at(
        store,
        patron_id,
        book_id,
        Utc::now() - Duration::days(days_overdue) - Duration::days(14),
    )
    .await;
}

pub async fn seed_loan_borrowed_at(
    store: &MemoryStore,
    patron_id: &str,
    book_id: BookId,
    borrow_date: DateTime<Utc>,
) {
    store
        .insert_borrow_record(BorrowRecord {
            patron_id: patron_id.to_string(),
            book_id,
            borrow_date,
            due_date: borrow_date + Duration::days(14),
            return_date: None,
        })
        .await
        .unwrap();
    store.adjust_availability(book_id, -1).await.unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChargeCall {
    pub patron_id: String,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefundCall {
    pub transaction_id: String,
    pub amount: f64,
}

pub enum GatewayScript {
    Approve {
        transaction_id: String,
        message: String,
    },
    Decline {
        message: String,
    },
    Fail {
        message: String,
    },
}

/// Scripted `PaymentGateway` double that records every call.
pub struct RecordingGateway {
    script: GatewayScript,
    pub charge_calls: Mutex<Vec<ChargeCall>>,
    pub refund_calls: Mutex<Vec<RefundCall>>,
}

impl RecordingGateway {
    fn with_script(script: GatewayScript) -> Self {
        Self {
            script,
            charge_calls: Mutex::new(Vec::new()),
            refund_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn approving(transaction_id: &str, message: &str) -> Self {
        Self::with_script(GatewayScript::Approve {
            transaction_id: transaction_id.to_string(),
            message: message.to_string(),
        })
    }

    pub fn declining(message: &str) -> Self {
        Self::with_script(GatewayScript::Decline {
            message: message.to_string(),
        })
    }

    pub fn failing(message: &str) -> Self {
        Self::with_script(GatewayScript::Fail {
            message: message.to_string(),
        })
    }

    pub fn charge_calls(&self) -> Vec<ChargeCall> {
        self.charge_calls.lock().unwrap().clone()
    }

    pub fn refund_calls(&self) -> Vec<RefundCall> {
        self.refund_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn process_payment(
        &self,
        patron_id: &str,
        amount: f64,
        description: &str,
    ) -> Result<ChargeOutcome, GatewayError> {
        self.charge_calls.lock().unwrap().push(ChargeCall {
            patron_id: patron_id.to_string(),
            amount,
            description: description.to_string(),
        });
        match &self.script {
            GatewayScript::Approve {
                transaction_id,
                message,
            } => Ok(ChargeOutcome {
                approved: true,
                transaction_id: transaction_id.clone(),
                message: message.clone(),
            }),
            GatewayScript::Decline { message } => Ok(ChargeOutcome {
                approved: false,
                transaction_id: String::new(),
                message: message.clone(),
            }),
            GatewayScript::Fail { message } => Err(GatewayError::Transport(message.clone())),
        }
    }

    async fn refund_payment(
        &self,
        transaction_id: &str,
        amount: f64,
    ) -> Result<RefundOutcome, GatewayError> {
        self.refund_calls.lock().unwrap().push(RefundCall {
            transaction_id: transaction_id.to_string(),
            amount,
        });
        match &self.script {
            GatewayScript::Approve { message, .. } => Ok(RefundOutcome {
                approved: true,
                message: message.clone(),
            }),
            GatewayScript::Decline { message } => Ok(RefundOutcome {
                approved: false,
                message: message.clone(),
            }),
            GatewayScript::Fail { message } => Err(GatewayError::Transport(message.clone())),
        }
    }
}

/// Which write operations of a `FailingStore` should fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailState {
    pub insert_book: bool,
    pub insert_borrow_record: bool,
    pub adjust_availability: bool,
    pub mark_returned: bool,
}

/// `LibraryStore` wrapper that injects write failures for the persistence
/// error paths.
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail: FailState,
}

impl FailingStore {
    pub fn new(inner: MemoryStore, fail: FailState) -> Self {
        Self { inner, fail }
    }

    fn injected() -> StoreError {
        StoreError::Backend("injected failure".to_string())
    }
}

#[async_trait]
impl LibraryStore for FailingStore {
    async fn book_by_id(&self, book_id: BookId) -> Result<Option<Book>, StoreError> {
        self.inner.book_by_id(book_id).await
    }

    async fn book_by_isbn(&self, isbn: &str) -> Result<Option<Book>, StoreError> {
        self.inner.book_by_isbn(isbn).await
    }

    async fn all_books(&self) -> Result<Vec<Book>, StoreError> {
        self.inner.all_books().await
    }

    async fn insert_book(&self, book: NewBook) -> Result<BookId, StoreError> {
        if self.fail.insert_book {
            return Err(Self::injected());
        }
        self.inner.insert_book(book).await
    }

    async fn outstanding_count(&self, patron_id: &str) -> Result<u32, StoreError> {
        self.inner.outstanding_count(patron_id).await
    }

    async fn outstanding_loans(&self, patron_id: &str) -> Result<Vec<OutstandingLoan>, StoreError> {
        self.inner.outstanding_loans(patron_id).await
    }

    async fn insert_borrow_record(&self, record: BorrowRecord) -> Result<(), StoreError> {
        if self.fail.insert_borrow_record {
            return Err(Self::injected());
        }
        self.inner.insert_borrow_record(record).await
    }

    async fn adjust_availability(&self, book_id: BookId, delta: i32) -> Result<(), StoreError> {
        if self.fail.adjust_availability {
            return Err(Self::injected());
        }
        self.inner.adjust_availability(book_id, delta).await
    }

    async fn mark_returned(
        &self,
        patron_id: &str,
        book_id: BookId,
        returned_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        if self.fail.mark_returned {
            return Err(Self::injected());
        }
        self.inner.mark_returned(patron_id, book_id, returned_at).await
    }

    async fn borrow_history(&self, patron_id: &str) -> Result<Vec<HistoryEntry>, StoreError> {
        self.inner.borrow_history(patron_id).await
    }
}
