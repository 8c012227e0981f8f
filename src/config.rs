use crate::error::{Result, TicketError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CHILD_PRICE: u32 = 0;
pub const DEFAULT_ADULT_PRICE: u32 = 25;
pub const DEFAULT_MAX_ALLOWED_TICKETS: u32 = 25;

/// Prices and limits a [`TicketService`](crate::application::ticket_service::TicketService)
/// is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseConfig {
    pub child_price: u32,
    pub adult_price: u32,
    pub max_allowed_tickets: u32,
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            child_price: DEFAULT_CHILD_PRICE,
            adult_price: DEFAULT_ADULT_PRICE,
            max_allowed_tickets: DEFAULT_MAX_ALLOWED_TICKETS,
        }
    }
}

/// A config where any value may be left out; missing values fall through to
/// the next layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub child_price: Option<u32>,
    pub adult_price: Option<u32>,
    pub max_allowed_tickets: Option<u32>,
}

impl PartialConfig {
    /// Values set in `self` win over those in `lower`.
    pub fn or(self, lower: PartialConfig) -> PartialConfig {
        PartialConfig {
            child_price: self.child_price.or(lower.child_price),
            adult_price: self.adult_price.or(lower.adult_price),
            max_allowed_tickets: self.max_allowed_tickets.or(lower.max_allowed_tickets),
        }
    }
}

impl PurchaseConfig {
    /// Fills the gaps in `partial` with defaults and checks the result.
    pub fn resolve(partial: PartialConfig) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            child_price: partial.child_price.unwrap_or(defaults.child_price),
            adult_price: partial.adult_price.unwrap_or(defaults.adult_price),
            max_allowed_tickets: partial
                .max_allowed_tickets
                .unwrap_or(defaults.max_allowed_tickets),
        };

        if config.max_allowed_tickets == 0 {
            return Err(TicketError::InvalidConfig(
                "max_allowed_tickets must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

/// Reads a JSON config file holding any subset of the config keys.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<PartialConfig> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
