use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ConfigError;

pub mod aws;
pub mod schema;

pub use aws::PluginConfigAws;
use aws::{PluginConfigAwsPatch, non_empty};

pub const DEFAULT_S3_DOWNLOAD_CONCURRENCY: i64 = 32;
pub const DEFAULT_S3_INTERVAL: &str = "";
pub const DEFAULT_SQS_DELETE: bool = true;
pub const DEFAULT_USE_ASYNC: bool = true;
pub const DEFAULT_USE_S3_SNS: bool = false;
pub const DEFAULT_S3_ACCOUNT_LIST: &str = "";
pub const DEFAULT_SQS_OWNER_ACCOUNT: &str = "";

const ACCOUNT_ID_LEN: usize = 12;

/// Init configuration of the CloudTrail plugin.
///
/// The record is filled once while the plugin is opened and then only read by
/// the ingestion side. Use [`PluginConfig::load`] for the usual
/// reset, overlay and validate sequence, or combine [`PluginConfig::reset`]
/// and [`PluginConfig::apply_json`] directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Upper bound on S3 downloads running at the same time.
    pub s3_download_concurrency: i64,

    /// Time window of the log files to read. Empty means no window.
    pub s3_interval: String,

    /// Delete SQS messages as soon as they are received.
    pub sqs_delete: bool,

    /// Enable the async field extraction path.
    pub use_async: bool,

    /// Queue messages are SNS envelopes around S3 notifications rather than
    /// notifications sent by CloudTrail itself.
    #[serde(rename = "useS3SNS")]
    pub use_s3_sns: bool,

    /// Comma separated account IDs of an organizational trail.
    pub s3_account_list: String,

    /// Account that owns the SQS queue, when it is not the caller's account.
    pub sqs_owner_account: String,

    pub aws: PluginConfigAws,
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig {
            s3_download_concurrency: DEFAULT_S3_DOWNLOAD_CONCURRENCY,
            s3_interval: DEFAULT_S3_INTERVAL.to_string(),
            sqs_delete: DEFAULT_SQS_DELETE,
            use_async: DEFAULT_USE_ASYNC,
            use_s3_sns: DEFAULT_USE_S3_SNS,
            s3_account_list: DEFAULT_S3_ACCOUNT_LIST.to_string(),
            sqs_owner_account: DEFAULT_SQS_OWNER_ACCOUNT.to_string(),
            aws: PluginConfigAws::default(),
        }
    }
}

impl PluginConfig {
    /// Builds the configuration from the plugin's init string.
    ///
    /// Defaults are applied first, so keys missing from `payload` keep their
    /// default value. A blank payload yields the default configuration.
    /// The result is validated before it is returned.
    pub fn load(payload: &str) -> Result<Self, ConfigError> {
        let mut config = PluginConfig::default();

        if payload.trim().is_empty() {
            tracing::debug!("Empty init config, using defaults");
        } else {
            config.apply_json(payload)?;
        }

        config.validate()?;
        tracing::debug!(?config, "Loaded plugin config");
        Ok(config)
    }

    /// Sets every field, including the nested AWS settings, back to its
    /// default.
    pub fn reset(&mut self) {
        self.s3_download_concurrency = DEFAULT_S3_DOWNLOAD_CONCURRENCY;
        self.s3_interval = DEFAULT_S3_INTERVAL.to_string();
        self.sqs_delete = DEFAULT_SQS_DELETE;
        self.use_async = DEFAULT_USE_ASYNC;
        self.use_s3_sns = DEFAULT_USE_S3_SNS;
        self.s3_account_list = DEFAULT_S3_ACCOUNT_LIST.to_string();
        self.sqs_owner_account = DEFAULT_SQS_OWNER_ACCOUNT.to_string();
        self.aws.reset();
    }

    /// Overlays a JSON object onto the current values.
    ///
    /// Only keys present in `payload` with a non-null value are written.
    /// Unrecognized keys are ignored. A bare `null` payload writes nothing.
    /// On error the record is left untouched.
    pub fn apply_json(&mut self, payload: &str) -> Result<(), ConfigError> {
        let value: Value = serde_json::from_str(payload)?;
        let fields = match &value {
            Value::Object(fields) => fields,
            Value::Null => {
                tracing::debug!("Null init config, keeping current values");
                return Ok(());
            }
            _ => return Err(ConfigError::NotAnObject),
        };

        for key in fields.keys() {
            if schema::lookup(key).is_none() {
                tracing::warn!("Ignoring unrecognized plugin config key: {}", key);
            }
        }

        let patch: PluginConfigPatch = serde_json::from_value(value)?;
        self.apply(patch);
        Ok(())
    }

    /// Checks the values an ingestion engine relies on.
    ///
    /// `s3_interval` is passed through as is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.s3_download_concurrency <= 0 {
            return Err(ConfigError::invalid(
                "s3DownloadConcurrency",
                format!("must be positive, got {}", self.s3_download_concurrency),
            ));
        }

        for account_id in self.account_ids() {
            if !is_account_id(account_id) {
                return Err(ConfigError::invalid(
                    "s3AccountList",
                    format!("'{}' is not a 12-digit AWS account ID", account_id),
                ));
            }
        }

        if let Some(owner) = self.sqs_owner_account() {
            if !is_account_id(owner) {
                return Err(ConfigError::invalid(
                    "sqsOwnerAccount",
                    format!("'{}' is not a 12-digit AWS account ID", owner),
                ));
            }
        }

        Ok(())
    }

    /// Account IDs from `s3_account_list`, trimmed, with empty entries dropped.
    pub fn account_ids(&self) -> Vec<&str> {
        self.s3_account_list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect()
    }

    /// Worker bound for the download pool. Non-positive values map to zero;
    /// [`PluginConfig::validate`] rejects them. Values beyond `usize::MAX`
    /// saturate.
    pub fn download_concurrency(&self) -> usize {
        match usize::try_from(self.s3_download_concurrency) {
            Ok(workers) => workers,
            Err(_) if self.s3_download_concurrency > 0 => usize::MAX,
            Err(_) => 0,
        }
    }

    pub fn sqs_owner_account(&self) -> Option<&str> {
        non_empty(&self.sqs_owner_account)
    }

    fn apply(&mut self, patch: PluginConfigPatch) {
        if let Some(v) = patch.s3_download_concurrency {
            self.s3_download_concurrency = v;
        }
        if let Some(v) = patch.s3_interval {
            self.s3_interval = v;
        }
        if let Some(v) = patch.sqs_delete {
            self.sqs_delete = v;
        }
        if let Some(v) = patch.use_async {
            self.use_async = v;
        }
        if let Some(v) = patch.use_s3_sns {
            self.use_s3_sns = v;
        }
        if let Some(v) = patch.s3_account_list {
            self.s3_account_list = v;
        }
        if let Some(v) = patch.sqs_owner_account {
            self.sqs_owner_account = v;
        }
        if let Some(aws) = patch.aws {
            self.aws.apply(aws);
        }
    }
}

/// Keys present in an init payload. Absent or `null` keys stay `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PluginConfigPatch {
    s3_download_concurrency: Option<i64>,
    s3_interval: Option<String>,
    sqs_delete: Option<bool>,
    use_async: Option<bool>,
    #[serde(rename = "useS3SNS")]
    use_s3_sns: Option<bool>,
    s3_account_list: Option<String>,
    sqs_owner_account: Option<String>,
    aws: Option<PluginConfigAwsPatch>,
}

fn is_account_id(value: &str) -> bool {
    value.len() == ACCOUNT_ID_LEN && value.bytes().all(|b| b.is_ascii_digit())
}
