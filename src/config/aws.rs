use serde::{Deserialize, Serialize};

/// AWS settings shared by the plugin's S3 and SQS clients.
///
/// Each field overrides the matching value the SDK would otherwise pick up
/// from the environment or the shared config files. An empty string means
/// "no override".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PluginConfigAws {
    /// Shared config profile, e.g. `default`.
    pub profile: String,

    /// Region, e.g. `us-east-1`.
    pub region: String,

    /// Path to the shared config file, e.g. `~/.aws/config`.
    #[serde(rename = "config")]
    pub config_file: String,
}

impl PluginConfigAws {
    /// Sets every AWS setting back to its default.
    pub fn reset(&mut self) {
        self.profile.clear();
        self.region.clear();
        self.config_file.clear();
    }

    pub fn profile(&self) -> Option<&str> {
        non_empty(&self.profile)
    }

    pub fn region(&self) -> Option<&str> {
        non_empty(&self.region)
    }

    pub fn config_file(&self) -> Option<&str> {
        non_empty(&self.config_file)
    }

    pub(crate) fn apply(&mut self, patch: PluginConfigAwsPatch) {
        if let Some(profile) = patch.profile {
            self.profile = profile;
        }
        if let Some(region) = patch.region {
            self.region = region;
        }
        if let Some(config_file) = patch.config_file {
            self.config_file = config_file;
        }
    }
}

/// Keys present in an `aws` payload object. Absent or `null` keys stay `None`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PluginConfigAwsPatch {
    profile: Option<String>,
    region: Option<String>,
    #[serde(rename = "config")]
    config_file: Option<String>,
}

pub(crate) fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
