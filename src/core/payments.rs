use crate::core::service::LibraryService;
use crate::domain::model::{BookId, PaymentReceipt};
use crate::domain::ports::{LibraryStore, PaymentGateway};
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::{is_valid_patron_id, is_valid_transaction_ref};

impl<S: LibraryStore> LibraryService<S> {
    /// Charges the patron's outstanding late fee for one book through the
    /// gateway. The gateway is never invoked for malformed patron ids or
    /// when nothing is owed.
    pub async fn pay_late_fees<G: PaymentGateway>(
        &self,
        patron_id: &str,
        book_id: BookId,
        gateway: &G,
    ) -> Result<PaymentReceipt> {
        if !is_valid_patron_id(patron_id) {
            return Err(LibraryError::InvalidPatronId);
        }

        let fee = self.calculate_late_fee_for_book(patron_id, book_id).await?;
        if fee.fee_amount <= 0.0 {
            return Err(LibraryError::NoFeesOwed);
        }

        let book = self
            .store
            .book_by_id(book_id)
            .await?
            .ok_or(LibraryError::BookNotFound)?;
        let description = format!("Late fees for '{}'", book.title);

        let outcome = gateway
            .process_payment(patron_id, fee.fee_amount, &description)
            .await?;

        if !outcome.approved {
            tracing::warn!(patron_id, book_id, "payment declined");
            return Err(LibraryError::PaymentDeclined {
                reason: outcome.message,
            });
        }

        tracing::info!(
            patron_id,
            book_id,
            transaction_id = %outcome.transaction_id,
            amount = fee.fee_amount,
            "late fee paid"
        );
        Ok(PaymentReceipt {
            message: format!("Payment successful! {}", outcome.message),
            transaction_id: outcome.transaction_id,
        })
    }

    /// Refunds a prior late-fee payment through the gateway. Amounts must be
    /// positive and cannot exceed the maximum possible late fee; invalid
    /// arguments never reach the gateway.
    pub async fn refund_late_fee_payment<G: PaymentGateway>(
        &self,
        transaction_id: &str,
        amount: f64,
        gateway: &G,
    ) -> Result<String> {
        if !is_valid_transaction_ref(transaction_id) {
            return Err(LibraryError::InvalidTransactionId);
        }
        if amount <= 0.0 {
            return Err(LibraryError::InvalidRefundAmount);
        }
        if amount > self.policy.fee_cap {
            return Err(LibraryError::RefundExceedsMaximum);
        }

        let outcome = gateway.refund_payment(transaction_id, amount).await?;
        if !outcome.approved {
            tracing::warn!(transaction_id, "refund declined");
            return Err(LibraryError::RefundDeclined {
                message: outcome.message,
            });
        }

        tracing::info!(transaction_id, amount, "late fee refunded");
        Ok(outcome.message)
    }
}
