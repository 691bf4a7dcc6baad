use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type BookId = i64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: u32,
    pub available_copies: u32,
}

/// Insertion view of a catalog entry; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: u32,
    pub available_copies: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub patron_id: String,
    pub book_id: BookId,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

/// A patron's unreturned loan, joined with the book's title and author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutstandingLoan {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub due_date: DateTime<Utc>,
}

/// One row of a patron's full borrowing history, borrow_date ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub patron_id: String,
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeStatus {
    Success,
    PatronNotFound,
    BookNotFound,
}

impl fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeeStatus::Success => "Success",
            FeeStatus::PatronNotFound => "Patron not found or book not found",
            FeeStatus::BookNotFound => "Book not found for this patron",
        };
        f.write_str(s)
    }
}

/// Derived on demand from a borrow record's due date; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LateFeeResult {
    pub fee_amount: f64,
    pub days_overdue: i64,
    pub status: FeeStatus,
}

impl LateFeeResult {
    pub fn none(status: FeeStatus) -> Self {
        Self {
            fee_amount: 0.0,
            days_overdue: 0,
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Success,
    PatronNotFound,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportStatus::Success => "Success",
            ReportStatus::PatronNotFound => "Patron not found",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatronStatusReport {
    pub borrowed_books: Vec<OutstandingLoan>,
    pub total_late_fees: f64,
    pub total_books_borrowed: u32,
    pub borrowing_history: Vec<HistoryEntry>,
    pub status: ReportStatus,
}

/// Gateway reply to a charge request. A decline is a normal reply with
/// `approved == false`, not a transport error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeOutcome {
    pub approved: bool,
    pub transaction_id: String,
    pub message: String,
}

/// Gateway reply to a refund request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundOutcome {
    pub approved: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub message: String,
}

/// Circulation knobs. The defaults are the library's standing rules; a
/// deployment may override them through `[policy]` in the TOML config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPolicy {
    pub loan_period_days: i64,
    pub max_active_loans: u32,
    pub daily_fee: f64,
    pub escalated_daily_fee: f64,
    pub escalation_threshold_days: i64,
    pub fee_cap: f64,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: 14,
            max_active_loans: 5,
            daily_fee: 0.50,
            escalated_daily_fee: 1.00,
            escalation_threshold_days: 7,
            fee_cap: 15.00,
        }
    }
}
