//! Domain layer: ticket types, purchase totals and the collaborator ports.

pub mod ports;
pub mod purchase;
pub mod ticket;
