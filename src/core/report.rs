use crate::core::fees::late_fee_for_days;
use crate::core::service::LibraryService;
use crate::domain::model::{PatronStatusReport, ReportStatus};
use crate::domain::ports::LibraryStore;
use crate::utils::error::Result;
use chrono::Utc;

impl<S: LibraryStore> LibraryService<S> {
    /// Builds the patron's status: outstanding loans with due dates, total
    /// late fees owed, outstanding count, and full borrowing history.
    ///
    /// Fees attach to outstanding loans only; a patron whose every loan has
    /// been returned owes nothing, so the history-only branch reports zero.
    pub async fn get_patron_status_report(&self, patron_id: &str) -> Result<PatronStatusReport> {
        let loans = self.store.outstanding_loans(patron_id).await?;
        let history = self.store.borrow_history(patron_id).await?;

        if loans.is_empty() && history.is_empty() {
            return Ok(PatronStatusReport {
                borrowed_books: Vec::new(),
                total_late_fees: 0.0,
                total_books_borrowed: 0,
                borrowing_history: Vec::new(),
                status: ReportStatus::PatronNotFound,
            });
        }

        if loans.is_empty() {
            return Ok(PatronStatusReport {
                borrowed_books: Vec::new(),
                total_late_fees: 0.0,
                total_books_borrowed: 0,
                borrowing_history: history,
                status: ReportStatus::Success,
            });
        }

        let total_books_borrowed = self.store.outstanding_count(patron_id).await?;

        let now = Utc::now();
        let total_late_fees = loans
            .iter()
            .map(|loan| {
                let days_overdue = (now - loan.due_date).num_days().max(0);
                late_fee_for_days(days_overdue, &self.policy)
            })
            .sum();

        Ok(PatronStatusReport {
            borrowed_books: loans,
            total_late_fees,
            total_books_borrowed,
            borrowing_history: history,
            status: ReportStatus::Success,
        })
    }
}
