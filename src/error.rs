use thiserror::Error;

/// The two families a purchase failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller broke the calling contract (bad account, empty request list).
    CallerInput,
    /// The request was well-formed but the purchase rules reject it.
    BusinessRule,
}

/// Reasons a ticket purchase is refused.
///
/// Every variant is raised before any collaborator is invoked, so a failed
/// purchase never leaves a payment or reservation behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Invalid account ID")]
    InvalidAccount,
    #[error("Invalid ticket type requests")]
    InvalidRequest,
    #[error("Ticket count must be positive")]
    InvalidTicketCount,
    #[error("Cannot purchase more than {max} tickets at a time.")]
    PurchaseLimitExceeded { max: u32 },
    #[error("Child and Infant tickets cannot be purchased without an Adult ticket.")]
    NoAdultPresent,
}

impl PurchaseError {
    pub fn class(&self) -> ErrorClass {
        match self {
            PurchaseError::InvalidAccount
            | PurchaseError::InvalidRequest
            | PurchaseError::InvalidTicketCount => ErrorClass::CallerInput,
            PurchaseError::PurchaseLimitExceeded { .. } | PurchaseError::NoAdultPresent => {
                ErrorClass::BusinessRule
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum TicketError {
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config file error: {0}")]
    ConfigFormat(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TicketError>;
