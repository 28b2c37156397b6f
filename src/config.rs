use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

/// Which store implementation backs the item table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(StoreBackend::DynamoDb),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!(
                "STORE_BACKEND must be one of: dynamodb, memory, got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::DynamoDb => f.write_str("dynamodb"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub dynamo_table: Option<String>,
    pub aws_endpoint_url: Option<String>,
    pub service_port: u16,
    pub service_host: String,
    /// Set when the Lambda runtime API is present in the environment
    pub lambda_runtime: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_backend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "dynamodb".to_string())
            .parse::<StoreBackend>()?;

        let dynamo_table = match store_backend {
            StoreBackend::DynamoDb => Some(
                env::var("DYNAMO_TABLE")
                    .context("DYNAMO_TABLE environment variable is required")?,
            ),
            StoreBackend::Memory => env::var("DYNAMO_TABLE").ok(),
        };

        let aws_endpoint_url = env::var("AWS_ENDPOINT_URL").ok();

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let lambda_runtime = env::var_os("AWS_LAMBDA_RUNTIME_API").is_some();

        Ok(Config {
            store_backend,
            dynamo_table,
            aws_endpoint_url,
            service_port,
            service_host,
            lambda_runtime,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {}", self.store_backend);
        tracing::info!(
            "  DynamoDB table: {}",
            self.dynamo_table.as_deref().unwrap_or("(none)")
        );
        tracing::info!(
            "  DynamoDB endpoint: {}",
            self.aws_endpoint_url
                .as_deref()
                .unwrap_or("default (using AWS)")
        );
        if self.lambda_runtime {
            tracing::info!("  Running as Lambda function");
        } else {
            tracing::info!(
                "  Service listening on: {}:{}",
                self.service_host,
                self.service_port
            );
        }
    }
}
