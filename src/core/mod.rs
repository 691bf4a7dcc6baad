pub mod catalog;
pub mod circulation;
pub mod fees;
pub mod payments;
pub mod report;
pub mod service;

pub use crate::domain::model::{
    Book, BookId, BorrowRecord, ChargeOutcome, FeeStatus, HistoryEntry, LateFeeResult, LoanPolicy,
    NewBook, OutstandingLoan, PatronStatusReport, PaymentReceipt, RefundOutcome, ReportStatus,
};
pub use crate::domain::ports::{LibraryStore, PaymentGateway};
pub use crate::utils::error::Result;
pub use fees::late_fee_for_days;
pub use service::LibraryService;
