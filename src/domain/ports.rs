/// Takes payment for a purchase. Implementations are assumed to always succeed.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: i64, amount: u64);
}

/// Reserves seats for a purchase. Implementations are assumed to always succeed.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: i64, seats: u64);
}

pub type PaymentServiceBox = Box<dyn TicketPaymentService>;
pub type ReservationServiceBox = Box<dyn SeatReservationService>;

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: i64, amount: u64) {
        (**self).make_payment(account_id, amount);
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(&self, account_id: i64, seats: u64) {
        (**self).reserve_seat(account_id, seats);
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for std::sync::Arc<T> {
    fn make_payment(&self, account_id: i64, amount: u64) {
        (**self).make_payment(account_id, amount);
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for std::sync::Arc<T> {
    fn reserve_seat(&self, account_id: i64, seats: u64) {
        (**self).reserve_seat(account_id, seats);
    }
}
