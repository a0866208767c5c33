//! Payments CLI
//!
//! Command-line interface for the payment record API.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use payments_client::PaymentsClient;
use payments_types::{CreatePaymentRequest, PaymentId, Timestamp, UpdatePaymentRequest};

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payment record API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List payments, optionally for one user
    List {
        /// Only payments of this user
        #[arg(long)]
        user: Option<String>,
    },
    /// Look up one payment by reservation or borrow id
    Get {
        #[arg(long, conflicts_with = "borrow_id", required_unless_present = "borrow_id")]
        reserve_id: Option<String>,
        #[arg(long)]
        borrow_id: Option<String>,
    },
    /// Create a payment
    Create(PaymentFields),
    /// Overwrite every field of a payment
    Update {
        /// Payment ID
        id: String,
        #[command(flatten)]
        fields: PaymentFields,
    },
    /// Delete a payment
    Delete {
        /// Payment ID
        id: String,
    },
    /// Check API health
    Health,
}

#[derive(Args)]
struct PaymentFields {
    #[arg(long)]
    user_id: String,
    #[arg(long)]
    reserve_id: String,
    #[arg(long)]
    borrow_id: String,
    #[arg(long, default_value = "active")]
    status: String,
    /// Epoch number or free-form text, stored as given
    #[arg(long)]
    timestamp: Timestamp,
    #[arg(long)]
    price: f64,
}

impl PaymentFields {
    fn into_create(self) -> CreatePaymentRequest {
        CreatePaymentRequest {
            user_id: self.user_id,
            reserve_id: self.reserve_id,
            status: self.status,
            timestamp: self.timestamp,
            price: self.price,
            borrow_id: self.borrow_id,
        }
    }

    fn into_update(self, id: PaymentId) -> UpdatePaymentRequest {
        UpdatePaymentRequest {
            id,
            user_id: self.user_id,
            reserve_id: self.reserve_id,
            status: self.status,
            timestamp: self.timestamp,
            price: self.price,
            borrow_id: self.borrow_id,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = PaymentsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::List { user } => {
            let payments = match user {
                Some(user_id) => client.list_user_payments(&user_id).await?,
                None => client.list_payments().await?,
            };
            println!("{}", serde_json::to_string_pretty(&payments)?);
        }

        Commands::Get {
            reserve_id,
            borrow_id,
        } => {
            let payment = match (reserve_id, borrow_id) {
                (Some(reserve_id), _) => client.get_by_reserve_id(&reserve_id).await?,
                (None, Some(borrow_id)) => client.get_by_borrow_id(&borrow_id).await?,
                (None, None) => anyhow::bail!("Pass --reserve-id or --borrow-id"),
            };
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Create(fields) => {
            let id = client.create_payment(&fields.into_create()).await?;
            println!("{}", id);
        }

        Commands::Update { id, fields } => {
            client
                .update_payment(&fields.into_update(PaymentId::from_string(id)))
                .await?;
            println!("✓ Payment updated");
        }

        Commands::Delete { id } => {
            client.delete_payment(&PaymentId::from_string(id)).await?;
            println!("✓ Payment deleted");
        }
    }

    Ok(())
}
