pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LibraryConfig;

pub use adapters::{HttpGateway, MemoryStore};
pub use crate::core::LibraryService;
pub use domain::model::{
    Book, BookId, BorrowRecord, ChargeOutcome, FeeStatus, HistoryEntry, LateFeeResult, LoanPolicy,
    NewBook, OutstandingLoan, PatronStatusReport, PaymentReceipt, RefundOutcome, ReportStatus,
};
pub use domain::ports::{LibraryStore, PaymentGateway};
pub use utils::error::{ErrorCategory, GatewayError, LibraryError, Result, StoreError};
