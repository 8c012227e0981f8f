use crate::config::PurchaseConfig;
use crate::error::PurchaseError;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Infant,
    Child,
    Adult,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Infant, TicketType::Child, TicketType::Adult];

    /// Looks up how one ticket of this type is charged and seated.
    pub fn rule(self, config: &PurchaseConfig) -> TicketRule {
        match self {
            TicketType::Infant => TicketRule {
                unit_cost: 0,
                takes_seat: false,
                is_adult: false,
            },
            TicketType::Child => TicketRule {
                unit_cost: config.child_price,
                takes_seat: true,
                is_adult: false,
            },
            TicketType::Adult => TicketRule {
                unit_cost: config.adult_price,
                takes_seat: true,
                is_adult: true,
            },
        }
    }
}

/// Per-ticket pricing and seating behaviour of a [`TicketType`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TicketRule {
    pub unit_cost: u32,
    pub takes_seat: bool,
    pub is_adult: bool,
}

/// A line item: a number of tickets of a single type.
///
/// Immutable once built; the count is always at least one.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    ticket_count: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, ticket_count: u32) -> Result<Self, PurchaseError> {
        if ticket_count > 0 {
            Ok(Self {
                ticket_type,
                ticket_count,
            })
        } else {
            Err(PurchaseError::InvalidTicketCount)
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn ticket_count(&self) -> u32 {
        self.ticket_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PurchaseConfig {
        PurchaseConfig {
            child_price: 10,
            adult_price: 20,
            max_allowed_tickets: 25,
        }
    }

    #[test]
    fn test_request_rejects_zero_count() {
        assert!(TicketTypeRequest::new(TicketType::Adult, 1).is_ok());
        assert_eq!(
            TicketTypeRequest::new(TicketType::Child, 0),
            Err(PurchaseError::InvalidTicketCount)
        );
    }

    #[test]
    fn test_infant_is_free_and_unseated() {
        let rule = TicketType::Infant.rule(&config());
        assert_eq!(rule.unit_cost, 0);
        assert!(!rule.takes_seat);
        assert!(!rule.is_adult);
    }

    #[test]
    fn test_rule_prices_follow_config() {
        let config = config();
        assert_eq!(TicketType::Child.rule(&config).unit_cost, 10);
        assert_eq!(TicketType::Adult.rule(&config).unit_cost, 20);
        assert!(TicketType::Child.rule(&config).takes_seat);
        assert!(!TicketType::Child.rule(&config).is_adult);
        assert!(TicketType::Adult.rule(&config).is_adult);
    }

    #[test]
    fn test_ticket_type_deserialization() {
        let parsed: TicketType = serde_json::from_str("\"adult\"").unwrap();
        assert_eq!(parsed, TicketType::Adult);
        assert!(serde_json::from_str::<TicketType>("\"senior\"").is_err());
    }
}
