//! Application layer containing the purchase orchestration.
//!
//! This module defines the `TicketService`, the single entry point for buying
//! tickets. It validates a purchase, aggregates its totals, and delegates
//! payment and seat reservation to the domain ports.

pub mod ticket_service;
