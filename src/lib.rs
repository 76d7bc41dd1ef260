//! # CloudTrail Plugin Config
//!
//! Init configuration for a plugin that ingests AWS CloudTrail logs from S3,
//! either by listing a bucket or by following SQS notifications.
//!
//! ## Features
//!
//! - A single [`config::PluginConfig`] record with documented defaults
//! - Reset-to-defaults that cascades into the nested AWS settings
//! - JSON payload overlay where missing keys keep their current value
//! - Validation of download concurrency and AWS account IDs
//! - A schema table and generated JSON Schema for settings tooling
//! - AWS SDK and SQS client construction from the loaded settings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloudtrail_plugin_config::{client::create_sqs_client, config::PluginConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PluginConfig::load(r#"{"s3DownloadConcurrency": 8, "sqsDelete": false}"#)?;
//!     let sqs_client = create_sqs_client(&config).await;
//!
//!     println!("Downloading with {} workers", config.download_concurrency());
//!     let _ = sqs_client.list_queues().send().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod errors;
