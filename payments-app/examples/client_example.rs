//! Client example walking a payment through its whole lifecycle against a
//! locally started server.
//!
//! Run with: cargo run -p payments-app --example client_example

use payments_client::PaymentsClient;
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::{Backend, RepoConfig, build_repo};
use payments_types::{CreatePaymentRequest, UpdatePaymentRequest};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind first so the port is known before the server starts
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    println!("🚀 Starting server on {addr} (in-memory table)...");

    let repo = build_repo(&RepoConfig {
        backend: Backend::Memory,
        ..RepoConfig::default()
    })
    .await?;
    let router = HttpServer::new(PaymentService::new(repo)).router();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = PaymentsClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: create → read → update → delete
    // ─────────────────────────────────────────────────────────────────────────

    let id = client
        .create_payment(&CreatePaymentRequest {
            user_id: "u1".into(),
            reserve_id: "r1".into(),
            status: "active".into(),
            timestamp: 1000.into(),
            price: 9.99,
            borrow_id: "b1".into(),
        })
        .await?;
    println!("✓ Created payment {id}");

    let payment = client.get_by_reserve_id("r1").await?;
    println!("✓ Found by reserveId: {}", serde_json::to_string(&payment)?);

    client
        .update_payment(&UpdatePaymentRequest {
            id: id.clone(),
            user_id: payment.user_id,
            reserve_id: payment.reserve_id,
            status: "closed".into(),
            timestamp: payment.timestamp,
            price: payment.price,
            borrow_id: payment.borrow_id,
        })
        .await?;
    let payment = client.get_by_borrow_id("b1").await?;
    println!("✓ Status after update: {}", payment.status);

    let mine = client.list_user_payments("u1").await?;
    println!("✓ u1 has {} payment(s)", mine.len());

    client.delete_payment(&id).await?;
    let remaining = client.list_payments().await?;
    println!("✓ Deleted; {} payment(s) left", remaining.len());

    match client.get_by_reserve_id("r1").await {
        Err(e) if e.is_not_found() => println!("✓ Lookup after delete: not found"),
        other => println!("? Unexpected lookup result: {other:?}"),
    }

    Ok(())
}
