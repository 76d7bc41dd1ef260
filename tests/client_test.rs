use std::io::Write;

use cloudtrail_plugin_config::client;
use cloudtrail_plugin_config::config::{PluginConfig, PluginConfigAws};

#[test]
fn test_sqs_client_with_region() {
    let sqs_client = client::create_sqs_client_with_region("us-east-1");

    let region = sqs_client.config().region().map(|r| r.as_ref().to_string());
    assert_eq!(region.as_deref(), Some("us-east-1"));
}

#[test]
fn test_queue_url_request_without_owner() {
    let sqs_client = client::create_sqs_client_with_region("us-east-1");
    let config = PluginConfig::default();

    let request = client::queue_url_request(&sqs_client, "cloudtrail-events", &config);

    assert_eq!(request.get_queue_name().as_deref(), Some("cloudtrail-events"));
    assert_eq!(request.get_queue_owner_aws_account_id(), &None);
}

#[test]
fn test_queue_url_request_with_owner_account() {
    let sqs_client = client::create_sqs_client_with_region("us-east-1");
    let config = PluginConfig::load(r#"{"sqsOwnerAccount": "123456789012"}"#).unwrap();

    let request = client::queue_url_request(&sqs_client, "org-trail", &config);

    assert_eq!(request.get_queue_name().as_deref(), Some("org-trail"));
    assert_eq!(
        request.get_queue_owner_aws_account_id().as_deref(),
        Some("123456789012")
    );
}

#[tokio::test]
async fn test_sdk_config_uses_region_override() {
    let aws = PluginConfigAws {
        region: "eu-central-1".to_string(),
        ..PluginConfigAws::default()
    };

    let sdk_config = client::load_sdk_config(&aws).await;

    assert_eq!(
        sdk_config.region().map(|r| r.as_ref()),
        Some("eu-central-1")
    );
}

#[tokio::test]
async fn test_sqs_client_from_plugin_config() {
    let config = PluginConfig::load(r#"{"aws": {"region": "ap-southeast-2"}}"#).unwrap();

    let sqs_client = client::create_sqs_client(&config).await;

    let region = sqs_client.config().region().map(|r| r.as_ref().to_string());
    assert_eq!(region.as_deref(), Some("ap-southeast-2"));
}

#[tokio::test]
async fn test_sdk_config_uses_profile_from_config_file_override() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(config_file, "[profile audit]\nregion = sa-east-1").unwrap();

    let aws = PluginConfigAws {
        profile: "audit".to_string(),
        config_file: config_file.path().to_string_lossy().into_owned(),
        ..PluginConfigAws::default()
    };

    let sdk_config = client::load_sdk_config(&aws).await;

    assert_eq!(sdk_config.region().map(|r| r.as_ref()), Some("sa-east-1"));
}
