#![allow(dead_code)]

use cinema_tickets::application::ticket_service::TicketService;
use cinema_tickets::config::PurchaseConfig;
use cinema_tickets::domain::ticket::{TicketType, TicketTypeRequest};
use cinema_tickets::infrastructure::in_memory::{
    InMemoryPaymentService, InMemorySeatReservationService,
};
use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub type RecordingService = TicketService<InMemoryPaymentService, InMemorySeatReservationService>;

pub fn recording_service(
    config: PurchaseConfig,
) -> (
    RecordingService,
    InMemoryPaymentService,
    InMemorySeatReservationService,
) {
    let payments = InMemoryPaymentService::new();
    let reservations = InMemorySeatReservationService::new();
    let service = TicketService::new(payments.clone(), reservations.clone(), config);
    (service, payments, reservations)
}

pub fn request(ticket_type: TicketType, count: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(ticket_type, count).expect("count must be positive")
}

/// Builds between one and five line items of random types, each with a
/// count between one and `max_per_line`.
pub fn random_requests<R: Rng>(rng: &mut R, max_per_line: u32) -> Vec<TicketTypeRequest> {
    let lines = rng.gen_range(1..=5);
    (0..lines)
        .map(|_| {
            let ticket_type = TicketType::ALL[rng.gen_range(0..TicketType::ALL.len())];
            request(ticket_type, rng.gen_range(1..=max_per_line))
        })
        .collect()
}

pub fn count_of(requests: &[TicketTypeRequest], ticket_type: TicketType) -> u64 {
    requests
        .iter()
        .filter(|r| r.ticket_type() == ticket_type)
        .map(|r| u64::from(r.ticket_count()))
        .sum()
}

/// Writes `orders` single-adult purchases, one per account.
pub fn generate_csv(path: &Path, orders: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["purchase", "account", "type", "tickets"])?;

    for i in 1..=orders {
        let id = i.to_string();
        wtr.write_record([id.as_str(), id.as_str(), "adult", "1"])?;
    }

    wtr.flush()?;
    Ok(())
}
