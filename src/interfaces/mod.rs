//! Input and output formats for driving the ticket service from files.

pub mod csv;
