use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use parking_lot::Mutex;
use std::sync::Arc;

/// A payment taken through [`InMemoryPaymentService`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Payment {
    pub account_id: i64,
    pub amount: u64,
}

/// A reservation made through [`InMemorySeatReservationService`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Reservation {
    pub account_id: i64,
    pub seats: u64,
}

/// A thread-safe payment service that records every payment in call order.
///
/// Uses `Arc<Mutex<Vec<Payment>>>` so clones share one log. Handy for tests
/// and for the command-line driver, where no real gateway exists.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPaymentService {
    payments: Arc<Mutex<Vec<Payment>>>,
}

impl InMemoryPaymentService {
    /// Creates a payment service with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the payments taken so far.
    pub fn payments(&self) -> Vec<Payment> {
        self.payments.lock().clone()
    }

    /// Sums every payment taken from `account_id`.
    pub fn total_for(&self, account_id: i64) -> u64 {
        self.payments
            .lock()
            .iter()
            .filter(|payment| payment.account_id == account_id)
            .map(|payment| payment.amount)
            .sum()
    }
}

impl TicketPaymentService for InMemoryPaymentService {
    fn make_payment(&self, account_id: i64, amount: u64) {
        self.payments.lock().push(Payment { account_id, amount });
    }
}

/// A thread-safe seat reservation service that records every reservation.
#[derive(Debug, Default, Clone)]
pub struct InMemorySeatReservationService {
    reservations: Arc<Mutex<Vec<Reservation>>>,
}

impl InMemorySeatReservationService {
    /// Creates a reservation service with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.lock().clone()
    }

    pub fn seats_for(&self, account_id: i64) -> u64 {
        self.reservations
            .lock()
            .iter()
            .filter(|reservation| reservation.account_id == account_id)
            .map(|reservation| reservation.seats)
            .sum()
    }
}

impl SeatReservationService for InMemorySeatReservationService {
    fn reserve_seat(&self, account_id: i64, seats: u64) {
        self.reservations
            .lock()
            .push(Reservation { account_id, seats });
    }
}
