use aws_config::Region;
use aws_config::SdkConfig;
use aws_runtime::env_config::file::{EnvConfigFileKind, EnvConfigFiles};
use aws_sdk_sqs::config::BehaviorVersion;
use aws_sdk_sqs::operation::get_queue_url::builders::GetQueueUrlFluentBuilder;

use crate::config::{PluginConfig, PluginConfigAws};

/// Loads the shared AWS configuration, applying the plugin's overrides.
///
/// Anything not overridden falls back to the usual environment lookup:
/// - `AWS_PROFILE`
/// - `AWS_REGION`
/// - `AWS_CONFIG_FILE`
/// - the default shared config and credentials files
///
/// # Example
///
/// ```rust,no_run
/// use cloudtrail_plugin_config::{client::load_sdk_config, config::PluginConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let config = PluginConfig::load(r#"{"aws": {"region": "eu-west-1"}}"#).unwrap();
///     let sdk_config = load_sdk_config(&config.aws).await;
///     // Build S3 or SQS clients from `sdk_config`...
/// }
/// ```
pub async fn load_sdk_config(aws: &PluginConfigAws) -> SdkConfig {
    let mut loader = aws_config::from_env();

    if let Some(profile) = aws.profile() {
        tracing::debug!("Using AWS profile override: {}", profile);
        loader = loader.profile_name(profile);
    }

    if let Some(region) = aws.region() {
        tracing::debug!("Using AWS region override: {}", region);
        loader = loader.region(Region::new(region.to_string()));
    }

    if let Some(config_file) = aws.config_file() {
        tracing::debug!("Using AWS shared config file override: {}", config_file);
        let profile_files = EnvConfigFiles::builder()
            .with_file(EnvConfigFileKind::Config, config_file)
            .include_default_credentials_file(true)
            .build();
        loader = loader.profile_files(profile_files);
    }

    loader.load().await
}

/// Creates an SQS client from the plugin's AWS settings.
///
/// The shared configuration is loaded with [`load_sdk_config`], so the
/// `aws` profile, region and config file overrides apply.
///
/// # Arguments
///
/// * `config` - The loaded plugin configuration
///
/// # Returns
///
/// Returns a configured `aws_sdk_sqs::Client` ready for use.
///
/// # Example
///
/// ```rust,no_run
/// use cloudtrail_plugin_config::{client::create_sqs_client, config::PluginConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let config = PluginConfig::load(r#"{"aws": {"profile": "audit"}}"#).unwrap();
///     let sqs_client = create_sqs_client(&config).await;
///     // Use the client...
/// }
/// ```
pub async fn create_sqs_client(config: &PluginConfig) -> aws_sdk_sqs::Client {
    let sdk_config = load_sdk_config(&config.aws).await;
    aws_sdk_sqs::Client::new(&sdk_config)
}

/// Creates an SQS client for an explicit region without touching the
/// environment. Credentials are resolved lazily, on the first request.
///
/// # Arguments
///
/// * `region` - The AWS region (e.g., "us-east-1", "eu-west-1")
///
/// # Returns
///
/// Returns a configured `aws_sdk_sqs::Client` ready for use.
///
/// # Example
///
/// ```rust,no_run
/// use cloudtrail_plugin_config::client::create_sqs_client_with_region;
///
/// let sqs_client = create_sqs_client_with_region("us-east-1");
/// ```
pub fn create_sqs_client_with_region(region: &str) -> aws_sdk_sqs::Client {
    let config = aws_sdk_sqs::config::Builder::new()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .build();

    aws_sdk_sqs::Client::from_conf(config)
}

/// Prepares the `GetQueueUrl` call for `queue_name`.
///
/// When the queue belongs to another account (`sqsOwnerAccount`), that account
/// is set on the request. Sending it is left to the caller.
///
/// # Arguments
///
/// * `sqs_client` - The SQS client the request is built on
/// * `queue_name` - The name of the queue receiving CloudTrail notifications
/// * `config` - The loaded plugin configuration
///
/// # Returns
///
/// Returns the unsent `GetQueueUrl` request builder.
///
/// # Example
///
/// ```rust,no_run
/// use cloudtrail_plugin_config::{client, config::PluginConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = PluginConfig::load(r#"{"sqsOwnerAccount": "123456789012"}"#)?;
///     let sqs_client = client::create_sqs_client(&config).await;
///
///     let output = client::queue_url_request(&sqs_client, "cloudtrail-events", &config)
///         .send()
///         .await?;
///     println!("Queue URL: {:?}", output.queue_url());
///
///     Ok(())
/// }
/// ```
pub fn queue_url_request(
    sqs_client: &aws_sdk_sqs::Client,
    queue_name: &str,
    config: &PluginConfig,
) -> GetQueueUrlFluentBuilder {
    let request = sqs_client.get_queue_url().queue_name(queue_name);

    match config.sqs_owner_account() {
        Some(owner) => request.queue_owner_aws_account_id(owner),
        None => request,
    }
}
