use crate::core::service::LibraryService;
use crate::domain::model::{BookId, BorrowRecord};
use crate::domain::ports::LibraryStore;
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::is_valid_patron_id;
use chrono::{Duration, Utc};

impl<S: LibraryStore> LibraryService<S> {
    /// Lends an available copy to the patron and records the loan.
    pub async fn borrow_book_by_patron(&self, patron_id: &str, book_id: BookId) -> Result<String> {
        if !is_valid_patron_id(patron_id) {
            return Err(LibraryError::InvalidPatronId);
        }

        let book = self
            .store
            .book_by_id(book_id)
            .await?
            .ok_or(LibraryError::BookNotFound)?;

        if book.available_copies == 0 {
            return Err(LibraryError::BookUnavailable);
        }

        let outstanding = self.store.outstanding_count(patron_id).await?;
        if outstanding >= self.policy.max_active_loans {
            return Err(LibraryError::BorrowLimitReached);
        }

        let borrow_date = Utc::now();
        let due_date = borrow_date + Duration::days(self.policy.loan_period_days);

        self.store
            .insert_borrow_record(BorrowRecord {
                patron_id: patron_id.to_string(),
                book_id,
                borrow_date,
                due_date,
                return_date: None,
            })
            .await
            .map_err(|e| {
                LibraryError::persistence(
                    "Database error occurred while creating borrow record.",
                    e,
                )
            })?;

        self.store
            .adjust_availability(book_id, -1)
            .await
            .map_err(|e| {
                LibraryError::persistence(
                    "Database error occurred while updating book availability.",
                    e,
                )
            })?;

        tracing::info!(patron_id, book_id, due = %due_date.format("%Y-%m-%d"), "book borrowed");
        Ok(format!(
            "Successfully borrowed \"{}\". Due date: {}.",
            book.title,
            due_date.format("%Y-%m-%d")
        ))
    }

    /// Takes a copy back from the patron, recording the return date and any
    /// late fee owed. The fee is computed before any state changes.
    pub async fn return_book_by_patron(&self, patron_id: &str, book_id: BookId) -> Result<String> {
        let loans = self.store.outstanding_loans(patron_id).await?;
        if loans.is_empty() {
            return Err(LibraryError::NoActiveLoans);
        }
        if !loans.iter().any(|l| l.book_id == book_id) {
            return Err(LibraryError::BookNotBorrowed);
        }

        let fee = self.calculate_late_fee_for_book(patron_id, book_id).await?;

        self.store
            .adjust_availability(book_id, 1)
            .await
            .map_err(|e| LibraryError::persistence("Book availability not updated", e))?;

        self.store
            .mark_returned(patron_id, book_id, Utc::now())
            .await
            .map_err(|e| LibraryError::persistence("Return date not updated", e))?;

        tracing::info!(patron_id, book_id, fee = fee.fee_amount, "book returned");
        Ok(format!(
            "Successfully returned. Late fees: ${:.2}",
            fee.fee_amount
        ))
    }
}
