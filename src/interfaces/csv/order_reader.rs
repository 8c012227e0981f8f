use crate::domain::ticket::{TicketType, TicketTypeRequest};
use crate::error::{PurchaseError, Result, TicketError};
use serde::Deserialize;
use std::io::Read;
use std::iter::Peekable;

/// One CSV row: a number of tickets of one type within a purchase.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRecord {
    pub purchase: u32,
    pub account: i64,
    pub r#type: TicketType,
    pub tickets: u32,
}

/// A line item as read from the input, before any validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OrderLine {
    pub ticket_type: TicketType,
    pub tickets: u32,
}

/// Consecutive rows sharing a purchase id and account.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PurchaseOrder {
    pub purchase: u32,
    pub account: i64,
    pub lines: Vec<OrderLine>,
}

impl PurchaseOrder {
    /// Turns every line into a [`TicketTypeRequest`], failing on the first bad line.
    pub fn requests(&self) -> std::result::Result<Vec<TicketTypeRequest>, PurchaseError> {
        self.lines
            .iter()
            .map(|line| TicketTypeRequest::new(line.ticket_type, line.tickets))
            .collect()
    }

    fn starts_with(record: OrderRecord) -> Self {
        Self {
            purchase: record.purchase,
            account: record.account,
            lines: vec![OrderLine {
                ticket_type: record.r#type,
                tickets: record.tickets,
            }],
        }
    }

    fn continues_with(&self, record: &OrderRecord) -> bool {
        self.purchase == record.purchase && self.account == record.account
    }
}

/// Reads purchase orders from a CSV source.
///
/// Expects the columns `purchase, account, type, tickets`. Whitespace is
/// trimmed and record lengths may vary.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily groups rows into orders.
    ///
    /// A row that fails to parse comes out as an `Err` item and is otherwise
    /// skipped; it also ends the order being built.
    pub fn orders(self) -> Orders<R> {
        Orders {
            records: self.reader.into_deserialize().peekable(),
        }
    }
}

pub struct Orders<R: Read> {
    records: Peekable<csv::DeserializeRecordsIntoIter<R, OrderRecord>>,
}

impl<R: Read> Iterator for Orders<R> {
    type Item = Result<PurchaseOrder>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(TicketError::from(e))),
        };

        let mut order = PurchaseOrder::starts_with(first);
        while let Some(Ok(record)) = self
            .records
            .next_if(|next| matches!(next, Ok(record) if order.continues_with(record)))
        {
            order.lines.push(OrderLine {
                ticket_type: record.r#type,
                tickets: record.tickets,
            });
        }
        Some(Ok(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "purchase, account, type, tickets\n";

    fn read(body: &str) -> Vec<Result<PurchaseOrder>> {
        let data = format!("{HEADER}{body}");
        OrderReader::new(data.as_bytes()).orders().collect()
    }

    #[test]
    fn test_groups_consecutive_rows() {
        let orders = read("1, 10, adult, 2\n1, 10, child, 1\n2, 11, adult, 1\n");

        assert_eq!(orders.len(), 2);
        let first = orders[0].as_ref().unwrap();
        assert_eq!(first.purchase, 1);
        assert_eq!(first.account, 10);
        assert_eq!(
            first.lines,
            vec![
                OrderLine {
                    ticket_type: TicketType::Adult,
                    tickets: 2
                },
                OrderLine {
                    ticket_type: TicketType::Child,
                    tickets: 1
                },
            ]
        );
        assert_eq!(orders[1].as_ref().unwrap().lines.len(), 1);
    }

    #[test]
    fn test_account_change_starts_new_order() {
        let orders = read("1, 10, adult, 1\n1, 12, adult, 1\n");
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].as_ref().unwrap().account, 12);
    }

    #[test]
    fn test_malformed_line_is_reported_and_skipped() {
        let orders = read("1, 10, adult, 1\n1, 10, senior, 1\n2, 10, adult, 3\n");

        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].as_ref().unwrap().lines.len(), 1);
        assert!(orders[1].is_err());
        assert_eq!(orders[2].as_ref().unwrap().lines[0].tickets, 3);
    }

    #[test]
    fn test_negative_account_is_read_as_is() {
        let orders = read("1, -5, adult, 1\n");
        assert_eq!(orders[0].as_ref().unwrap().account, -5);
    }

    #[test]
    fn test_requests_reject_zero_count() {
        let orders = read("1, 10, adult, 1\n1, 10, child, 0\n");
        let order = orders[0].as_ref().unwrap();
        assert_eq!(order.requests(), Err(PurchaseError::InvalidTicketCount));
    }
}
