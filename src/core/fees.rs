use crate::core::service::LibraryService;
use crate::domain::model::{BookId, FeeStatus, LateFeeResult, LoanPolicy};
use crate::domain::ports::LibraryStore;
use crate::utils::error::Result;
use chrono::Utc;

/// Fee owed for a loan `days_overdue` days past due. Zero when not overdue;
/// the daily rate escalates past the threshold and the total is capped.
pub fn late_fee_for_days(days_overdue: i64, policy: &LoanPolicy) -> f64 {
    if days_overdue <= 0 {
        return 0.0;
    }
    let fee = if days_overdue <= policy.escalation_threshold_days {
        days_overdue as f64 * policy.daily_fee
    } else {
        policy.escalation_threshold_days as f64 * policy.daily_fee
            + (days_overdue - policy.escalation_threshold_days) as f64 * policy.escalated_daily_fee
    };
    fee.min(policy.fee_cap)
}

impl<S: LibraryStore> LibraryService<S> {
    /// Computes the late fee the patron currently owes on one outstanding
    /// loan. The not-found cases are reported in the result's status with a
    /// zero fee rather than as errors.
    pub async fn calculate_late_fee_for_book(
        &self,
        patron_id: &str,
        book_id: BookId,
    ) -> Result<LateFeeResult> {
        let loans = self.store.outstanding_loans(patron_id).await?;
        if loans.is_empty() {
            return Ok(LateFeeResult::none(FeeStatus::PatronNotFound));
        }

        let Some(loan) = loans.iter().find(|l| l.book_id == book_id) else {
            return Ok(LateFeeResult::none(FeeStatus::BookNotFound));
        };

        let days_overdue = (Utc::now() - loan.due_date).num_days().max(0);
        let fee_amount = late_fee_for_days(days_overdue, &self.policy);

        Ok(LateFeeResult {
            fee_amount,
            days_overdue,
            status: FeeStatus::Success,
        })
    }
}
