use thiserror::Error;

/// Failure raised by a `LibraryStore` implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),

    #[error("no matching row for {entity}")]
    RowNotFound { entity: String },
}

/// Failure raised by a `PaymentGateway` implementation. A declined charge or
/// refund is not an error; this covers the transport path only.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Transport(String),
}

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("{message}")]
    Validation { message: String },

    #[error("Invalid patron ID. Must be exactly 6 digits.")]
    InvalidPatronId,

    #[error("Invalid transaction ID.")]
    InvalidTransactionId,

    #[error("Refund amount must be greater than 0.")]
    InvalidRefundAmount,

    #[error("Refund amount exceeds maximum late fee.")]
    RefundExceedsMaximum,

    #[error("A book with this ISBN already exists.")]
    DuplicateIsbn,

    #[error("Book not found.")]
    BookNotFound,

    #[error("This book is currently not available.")]
    BookUnavailable,

    #[error("You have reached the maximum borrowing limit of 5 books.")]
    BorrowLimitReached,

    #[error("Patron not found or no books borrowed")]
    NoActiveLoans,

    #[error("Book not borrowed")]
    BookNotBorrowed,

    #[error("No late fees to pay for this book.")]
    NoFeesOwed,

    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("Payment failed: {reason}")]
    PaymentDeclined { reason: String },

    #[error("{message}")]
    RefundDeclined { message: String },

    #[error("Payment processing error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigParse { field: String, message: String },
}

/// Coarse taxonomy surfaced to route/CLI consumers alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    StateConflict,
    Persistence,
    Gateway,
    Config,
}

impl LibraryError {
    pub fn validation(message: impl Into<String>) -> Self {
        LibraryError::Validation {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>, source: StoreError) -> Self {
        LibraryError::Persistence {
            message: message.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        use LibraryError::*;
        match self {
            Validation { .. } | InvalidPatronId | InvalidTransactionId | InvalidRefundAmount
            | RefundExceedsMaximum => ErrorCategory::Validation,
            BookNotFound | NoActiveLoans | BookNotBorrowed => ErrorCategory::NotFound,
            DuplicateIsbn | BookUnavailable | BorrowLimitReached | NoFeesOwed => {
                ErrorCategory::StateConflict
            }
            Persistence { .. } | Store(_) => ErrorCategory::Persistence,
            PaymentDeclined { .. } | RefundDeclined { .. } | Gateway(_) => ErrorCategory::Gateway,
            InvalidConfigValue { .. } | ConfigParse { .. } => ErrorCategory::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
