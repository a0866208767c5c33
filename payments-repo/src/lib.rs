//! # Payments Repository
//!
//! Concrete repository implementations (adapters) for the payment record service.
//! This crate provides storage adapters that implement the `PaymentRepository` port:
//!
//! - `dynamodb` (feature `dynamodb`) - the managed table used in production
//! - `memory` - a process-local table for tests, demos and local runs

use std::str::FromStr;

use async_trait::async_trait;
use payments_types::{PaymentFilter, PaymentId, PaymentRecord, PaymentRepository, RepoError};

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod memory;

#[cfg(feature = "dynamodb")]
mod item;

#[cfg(test)]
mod memory_tests;

// Re-export individual repos for direct use if needed
#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepo;
pub use memory::MemoryRepo;

/// Table used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "payments";
/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Which storage adapter backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    DynamoDb,
    Memory,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(Backend::DynamoDb),
            "memory" | "mem" => Ok(Backend::Memory),
            other => anyhow::bail!("Unknown backend: {}. Supported: dynamodb, memory", other),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::DynamoDb => write!(f, "dynamodb"),
            Backend::Memory => write!(f, "memory"),
        }
    }
}

/// Storage settings. One table binding serves every endpoint.
#[derive(Debug, Clone)]
pub struct RepoConfig {
    pub backend: Backend,
    pub table_name: String,
    pub region: String,
    /// Overrides the store endpoint, e.g. a local emulator.
    pub endpoint_url: Option<String>,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            backend: Backend::DynamoDb,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
        }
    }
}

/// Unified repository wrapper over the available adapters.
pub enum Repo {
    Memory(MemoryRepo),
    #[cfg(feature = "dynamodb")]
    DynamoDb(DynamoDbRepo),
}

/// Build a repository from configuration.
///
/// The DynamoDB client is created here, once, and reused by every request.
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo(&RepoConfig::default()).await?;
/// ```
pub async fn build_repo(config: &RepoConfig) -> anyhow::Result<Repo> {
    Repo::new(config).await
}

impl Repo {
    #[cfg(feature = "dynamodb")]
    pub async fn new(config: &RepoConfig) -> anyhow::Result<Self> {
        match config.backend {
            Backend::Memory => Ok(Repo::Memory(MemoryRepo::new())),
            Backend::DynamoDb => Ok(Repo::DynamoDb(DynamoDbRepo::connect(config).await?)),
        }
    }

    #[cfg(not(feature = "dynamodb"))]
    pub async fn new(config: &RepoConfig) -> anyhow::Result<Self> {
        match config.backend {
            Backend::Memory => Ok(Repo::Memory(MemoryRepo::new())),
            Backend::DynamoDb => {
                anyhow::bail!("DynamoDB backend requested but the `dynamodb` feature is disabled")
            }
        }
    }

    /// Name of the adapter in use, for logging.
    pub fn backend(&self) -> Backend {
        match self {
            Repo::Memory(_) => Backend::Memory,
            #[cfg(feature = "dynamodb")]
            Repo::DynamoDb(_) => Backend::DynamoDb,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Implement PaymentRepository for Repo (delegation)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for Repo {
    async fn scan_payments(
        &self,
        filter: Option<PaymentFilter>,
    ) -> Result<Vec<PaymentRecord>, RepoError> {
        match self {
            Repo::Memory(inner) => inner.scan_payments(filter).await,
            #[cfg(feature = "dynamodb")]
            Repo::DynamoDb(inner) => inner.scan_payments(filter).await,
        }
    }

    async fn put_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
        match self {
            Repo::Memory(inner) => inner.put_payment(record).await,
            #[cfg(feature = "dynamodb")]
            Repo::DynamoDb(inner) => inner.put_payment(record).await,
        }
    }

    async fn update_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
        match self {
            Repo::Memory(inner) => inner.update_payment(record).await,
            #[cfg(feature = "dynamodb")]
            Repo::DynamoDb(inner) => inner.update_payment(record).await,
        }
    }

    async fn delete_payment(&self, id: &PaymentId) -> Result<(), RepoError> {
        match self {
            Repo::Memory(inner) => inner.delete_payment(id).await,
            #[cfg(feature = "dynamodb")]
            Repo::DynamoDb(inner) => inner.delete_payment(id).await,
        }
    }
}
