//! Mock payment-request flow.
//!
//! Mirrors the manual top-up form: pick a plan, quote the amount, hand over a
//! transaction reference, and wait out a fake review delay. Nothing is
//! submitted anywhere and no ledger is mutated.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::error::StudioError;

/// Available plan tiers, in credits.
pub const PLAN_TIERS: &[u32] = &[50, 100, 200];

/// Price per credit in PKR.
pub const PRICE_PER_CREDIT: u32 = 2;

/// A manual payment request. Constructed only to satisfy the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Plan tier in credits.
    pub plan: u32,
    /// Computed amount in PKR.
    pub amount: u32,
    /// Transaction reference string.
    pub trx_id: String,
}

impl PaymentRequest {
    /// Build a request for the given plan tier and transaction reference.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown plan tier or an empty transaction id.
    pub fn new(plan: u32, trx_id: &str) -> Result<Self, StudioError> {
        if !PLAN_TIERS.contains(&plan) {
            return Err(StudioError::InvalidArgument(format!(
                "Unknown plan '{plan}'. Valid: 50, 100, 200 credits"
            )));
        }
        let trx_id = trx_id.trim();
        if trx_id.is_empty() {
            return Err(StudioError::InvalidArgument(
                "Transaction ID must not be empty".into(),
            ));
        }
        Ok(Self { plan, amount: plan * PRICE_PER_CREDIT, trx_id: trx_id.to_string() })
    }
}

/// Boxed future returned by [`VerificationTimer::wait`].
pub type WaitFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// The fake review delay, as an explicit abstraction.
///
/// Dropping the returned future cancels the wait.
pub trait VerificationTimer: Send + Sync {
    /// Wait out the review delay.
    fn wait(&self) -> WaitFuture<'_>;
}

/// Tokio-backed review delay.
pub struct ReviewDelay {
    delay: Duration,
}

impl ReviewDelay {
    /// Create a delay of the given duration.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl VerificationTimer for ReviewDelay {
    fn wait(&self) -> WaitFuture<'_> {
        Box::pin(tokio::time::sleep(self.delay))
    }
}

/// Run the mock submission: wait out the review delay, then acknowledge.
pub async fn submit_request(request: &PaymentRequest, timer: &dyn VerificationTimer) -> String {
    timer.wait().await;
    format!(
        "Payment request sent: {} credits for PKR {} (transaction {}). \
         Admin will review your transaction ID and approve credits shortly.",
        request.plan, request.amount, request.trx_id
    )
}
