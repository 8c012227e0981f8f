use crate::config::PurchaseConfig;
use crate::domain::ports::{
    PaymentServiceBox, ReservationServiceBox, SeatReservationService, TicketPaymentService,
};
use crate::domain::purchase::{PurchaseContext, PurchaseSummary};
use crate::domain::ticket::TicketTypeRequest;
use crate::error::PurchaseError;
use tracing::debug;

/// Validates ticket purchases and hands the totals to payment and seating.
///
/// `TicketService` holds no state between calls. Each purchase is checked,
/// aggregated in a single pass, and only then charged and seated, so a
/// rejected purchase never reaches either collaborator.
pub struct TicketService<P = PaymentServiceBox, R = ReservationServiceBox>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    payment_service: P,
    reservation_service: R,
    config: PurchaseConfig,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a new `TicketService`.
    ///
    /// # Arguments
    ///
    /// * `payment_service` - Charges the account for the purchase.
    /// * `reservation_service` - Reserves the seats for the purchase.
    /// * `config` - Ticket prices and the per-purchase ticket limit.
    pub fn new(payment_service: P, reservation_service: R, config: PurchaseConfig) -> Self {
        Self {
            payment_service,
            reservation_service,
            config,
        }
    }

    pub fn config(&self) -> &PurchaseConfig {
        &self.config
    }

    /// Purchases the requested tickets for `account_id`.
    ///
    /// On success the account is charged once for the full cost, then seats
    /// are reserved once for every non-infant ticket.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        self.purchase(account_id, requests).map(|_| ())
    }

    /// Same as [`purchase_tickets`](Self::purchase_tickets), but hands back the
    /// totals that were charged and seated.
    pub fn purchase(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        let summary = self.quote(account_id, requests)?;

        self.payment_service
            .make_payment(summary.account_id, summary.total_cost);
        self.reservation_service
            .reserve_seat(summary.account_id, summary.total_seats);

        debug!(
            account_id = summary.account_id,
            total_cost = summary.total_cost,
            total_seats = summary.total_seats,
            "purchase completed"
        );
        Ok(summary)
    }

    /// Runs every purchase check and returns the totals without charging or
    /// seating anyone.
    pub fn quote(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        self.check(account_id, requests).inspect_err(|err| {
            debug!(account_id, error = %err, "purchase rejected");
        })
    }

    fn check(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        if account_id <= 0 {
            return Err(PurchaseError::InvalidAccount);
        }
        if requests.is_empty() {
            return Err(PurchaseError::InvalidRequest);
        }

        let context = PurchaseContext::aggregate(requests, &self.config);

        if context.total_tickets > u64::from(self.config.max_allowed_tickets) {
            return Err(PurchaseError::PurchaseLimitExceeded {
                max: self.config.max_allowed_tickets,
            });
        }
        // Zero tickets slips past this check; the empty-list check above keeps
        // that case out.
        if context.total_adults == 0 && context.total_tickets > 0 {
            return Err(PurchaseError::NoAdultPresent);
        }

        Ok(PurchaseSummary {
            account_id,
            total_tickets: context.total_tickets,
            total_cost: context.total_cost,
            total_seats: context.total_seats,
        })
    }
}
