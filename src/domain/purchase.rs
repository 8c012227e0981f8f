use super::ticket::TicketTypeRequest;
use crate::config::PurchaseConfig;

/// Running totals for a single purchase.
///
/// Lives only for the duration of one `purchase_tickets` call. Every counter
/// saturates rather than wrapping.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct PurchaseContext {
    pub total_tickets: u64,
    pub total_adults: u64,
    pub total_cost: u64,
    pub total_seats: u64,
}

impl PurchaseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one line item into the totals.
    pub fn record(&mut self, request: &TicketTypeRequest, config: &PurchaseConfig) {
        let count = u64::from(request.ticket_count());
        let rule = request.ticket_type().rule(config);

        self.total_tickets = self.total_tickets.saturating_add(count);
        self.total_cost = self
            .total_cost
            .saturating_add(count.saturating_mul(u64::from(rule.unit_cost)));
        if rule.takes_seat {
            self.total_seats = self.total_seats.saturating_add(count);
        }
        if rule.is_adult {
            self.total_adults = self.total_adults.saturating_add(count);
        }
    }

    /// Builds the totals for a whole request list in one pass.
    pub fn aggregate<'a, I>(requests: I, config: &PurchaseConfig) -> Self
    where
        I: IntoIterator<Item = &'a TicketTypeRequest>,
    {
        requests
            .into_iter()
            .fold(Self::new(), |mut context, request| {
                context.record(request, config);
                context
            })
    }
}

/// The outcome of a purchase that passed every check.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PurchaseSummary {
    pub account_id: i64,
    pub total_tickets: u64,
    pub total_cost: u64,
    pub total_seats: u64,
}
