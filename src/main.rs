use cinema_tickets::application::ticket_service::TicketService;
use cinema_tickets::config::{PartialConfig, PurchaseConfig, load_config_file};
use cinema_tickets::domain::ports::{PaymentServiceBox, ReservationServiceBox};
use cinema_tickets::error::PurchaseError;
use cinema_tickets::infrastructure::in_memory::{
    InMemoryPaymentService, InMemorySeatReservationService,
};
use cinema_tickets::interfaces::csv::order_reader::{OrderReader, PurchaseOrder};
use cinema_tickets::interfaces::csv::outcome_writer::{OutcomeWriter, PurchaseOutcome};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input purchases CSV file (purchase, account, type, tickets)
    input: PathBuf,

    /// JSON file with any of child_price, adult_price, max_allowed_tickets
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Price of one child ticket
    #[arg(long, env = "CINEMA_CHILD_PRICE", value_name = "N")]
    child_price: Option<u32>,

    /// Price of one adult ticket
    #[arg(long, env = "CINEMA_ADULT_PRICE", value_name = "N")]
    adult_price: Option<u32>,

    /// Maximum number of tickets in a single purchase
    #[arg(long, env = "CINEMA_MAX_TICKETS", value_name = "N")]
    max_tickets: Option<u32>,
}

impl Cli {
    fn purchase_config(&self) -> Result<PurchaseConfig> {
        let file_config = match self.config.as_ref() {
            Some(path) => load_config_file(path).into_diagnostic()?,
            None => PartialConfig::default(),
        };
        let cli_config = PartialConfig {
            child_price: self.child_price,
            adult_price: self.adult_price,
            max_allowed_tickets: self.max_tickets,
        };
        PurchaseConfig::resolve(cli_config.or(file_config)).into_diagnostic()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn process_order(service: &TicketService, order: &PurchaseOrder) -> PurchaseOutcome {
    // Account first: an invalid account is reported ahead of any bad line.
    let result = if order.account <= 0 {
        Err(PurchaseError::InvalidAccount)
    } else {
        order
            .requests()
            .and_then(|requests| service.purchase(order.account, &requests))
    };

    match result {
        Ok(summary) => PurchaseOutcome::accepted(order.purchase, &summary),
        Err(e) => {
            warn!(
                purchase = order.purchase,
                account = order.account,
                class = ?e.class(),
                "Purchase rejected: {}",
                e
            );
            PurchaseOutcome::rejected(order.purchase, order.account, &e)
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.purchase_config()?;
    info!(?config, "starting ticket service");

    let payments = InMemoryPaymentService::new();
    let reservations = InMemorySeatReservationService::new();
    let service = TicketService::new(
        Box::new(payments.clone()) as PaymentServiceBox,
        Box::new(reservations.clone()) as ReservationServiceBox,
        config,
    );

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = OrderReader::new(file);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    for order_result in reader.orders() {
        match order_result {
            Ok(order) => {
                let outcome = process_order(&service, &order);
                writer.write_outcome(&outcome).into_diagnostic()?;
            }
            Err(e) => {
                warn!("Error reading purchase: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    info!(
        payments = payments.payments().len(),
        reservations = reservations.reservations().len(),
        "finished processing purchases"
    );
    Ok(())
}
