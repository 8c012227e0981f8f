use crate::domain::purchase::PurchaseSummary;
use crate::error::{PurchaseError, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Accepted,
    Rejected,
}

/// One output row describing what happened to a purchase order.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PurchaseOutcome {
    pub purchase: u32,
    pub account: i64,
    pub tickets: u64,
    pub seats: u64,
    pub amount: u64,
    pub status: OutcomeStatus,
    pub reason: Option<String>,
}

impl PurchaseOutcome {
    pub fn accepted(purchase: u32, summary: &PurchaseSummary) -> Self {
        Self {
            purchase,
            account: summary.account_id,
            tickets: summary.total_tickets,
            seats: summary.total_seats,
            amount: summary.total_cost,
            status: OutcomeStatus::Accepted,
            reason: None,
        }
    }

    pub fn rejected(purchase: u32, account: i64, error: &PurchaseError) -> Self {
        Self {
            purchase,
            account,
            tickets: 0,
            seats: 0,
            amount: 0,
            status: OutcomeStatus::Rejected,
            reason: Some(error.to_string()),
        }
    }
}

/// Writes purchase outcomes as CSV, header first.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(&mut self, outcome: &PurchaseOutcome) -> Result<()> {
        self.writer.serialize(outcome)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(outcomes: Vec<PurchaseOutcome>) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = OutcomeWriter::new(&mut buffer);
            for outcome in &outcomes {
                writer.write_outcome(outcome).unwrap();
            }
            writer.flush().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_accepted_outcome() {
        let summary = PurchaseSummary {
            account_id: 1,
            total_tickets: 4,
            total_cost: 50,
            total_seats: 3,
        };
        let output = render(vec![PurchaseOutcome::accepted(9, &summary)]);

        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("purchase,account,tickets,seats,amount,status,reason")
        );
        assert_eq!(lines.next(), Some("9,1,4,3,50,accepted,"));
    }

    #[test]
    fn test_write_rejected_outcome() {
        let output = render(vec![PurchaseOutcome::rejected(
            2,
            5,
            &PurchaseError::PurchaseLimitExceeded { max: 25 },
        )]);

        assert!(
            output.contains("2,5,0,0,0,rejected,Cannot purchase more than 25 tickets at a time.")
        );
    }
}
