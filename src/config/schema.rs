//! Descriptive metadata for every init config key.
//!
//! The tables here are kept next to, but separate from, the config structs.
//! They carry nothing the loader depends on; they exist so tooling can render
//! a settings form or documentation page, and so the plugin can advertise its
//! init schema.

use serde_json::{Map, Value, json};

use super::{
    DEFAULT_S3_ACCOUNT_LIST, DEFAULT_S3_DOWNLOAD_CONCURRENCY, DEFAULT_S3_INTERVAL,
    DEFAULT_SQS_DELETE, DEFAULT_SQS_OWNER_ACCOUNT, DEFAULT_USE_ASYNC, DEFAULT_USE_S3_SNS,
};

/// Documented default of a config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Integer(i64),
    Bool(bool),
    Str(&'static str),
    /// A nested object whose fields are described by their own table.
    Object(&'static [FieldSchema]),
}

impl DefaultValue {
    fn json_type(&self) -> &'static str {
        match self {
            DefaultValue::Integer(_) => "integer",
            DefaultValue::Bool(_) => "boolean",
            DefaultValue::Str(_) => "string",
            DefaultValue::Object(_) => "object",
        }
    }

    fn to_json(self) -> Value {
        match self {
            DefaultValue::Integer(v) => json!(v),
            DefaultValue::Bool(v) => json!(v),
            DefaultValue::Str(v) => json!(v),
            DefaultValue::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|field| (field.key.to_string(), field.default.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Title, description and default of a single payload key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Key as it appears in the JSON payload.
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub default: DefaultValue,
}

pub const AWS_CONFIG_FIELDS: &[FieldSchema] = &[
    FieldSchema {
        key: "profile",
        title: "Shared AWS Config Profile",
        description: "If non-empty, overrides the AWS shared configuration profile (e.g. 'default') and environment variables such as AWS_PROFILE (Default: empty)",
        default: DefaultValue::Str(""),
    },
    FieldSchema {
        key: "region",
        title: "AWS Region",
        description: "If non-empty, overrides the AWS region from the profile (e.g. 'us-east-1') and environment variables such as AWS_REGION (Default: empty)",
        default: DefaultValue::Str(""),
    },
    FieldSchema {
        key: "config",
        title: "Shared AWS Config File",
        description: "If non-empty, overrides the AWS shared configuration file path (e.g. ~/.aws/config) and environment variables such as AWS_CONFIG_FILE (Default: empty)",
        default: DefaultValue::Str(""),
    },
];

pub const PLUGIN_CONFIG_FIELDS: &[FieldSchema] = &[
    FieldSchema {
        key: "s3DownloadConcurrency",
        title: "S3 download concurrency",
        description: "Controls the number of background workers used to download S3 files (Default: 32)",
        default: DefaultValue::Integer(DEFAULT_S3_DOWNLOAD_CONCURRENCY),
    },
    FieldSchema {
        key: "s3Interval",
        title: "S3 log interval",
        description: "Download log files over the specified interval (Default: no interval)",
        default: DefaultValue::Str(DEFAULT_S3_INTERVAL),
    },
    FieldSchema {
        key: "sqsDelete",
        title: "Delete SQS messages",
        description: "If true then the plugin will delete SQS messages from the queue immediately after receiving them (Default: true)",
        default: DefaultValue::Bool(DEFAULT_SQS_DELETE),
    },
    FieldSchema {
        key: "useAsync",
        title: "Use async extraction",
        description: "If true then async extraction optimization is enabled (Default: true)",
        default: DefaultValue::Bool(DEFAULT_USE_ASYNC),
    },
    FieldSchema {
        key: "useS3SNS",
        title: "Use S3 SNS",
        description: "If true then the plugin will expect SNS messages to originate from S3 instead of directly from Cloudtrail (Default: false)",
        default: DefaultValue::Bool(DEFAULT_USE_S3_SNS),
    },
    FieldSchema {
        key: "s3AccountList",
        title: "S3 account list",
        description: "A comma separated list of account IDs for organizational Cloudtrails (Default: no account IDs)",
        default: DefaultValue::Str(DEFAULT_S3_ACCOUNT_LIST),
    },
    FieldSchema {
        key: "sqsOwnerAccount",
        title: "SQS owner account",
        description: "The AWS account ID that owns the SQS queue in case the queue is owned by a different account (Default: no account ID)",
        default: DefaultValue::Str(DEFAULT_SQS_OWNER_ACCOUNT),
    },
    FieldSchema {
        key: "aws",
        title: "AWS settings",
        description: "Overrides for the AWS profile, region and shared config file",
        default: DefaultValue::Object(AWS_CONFIG_FIELDS),
    },
];

/// Finds the entry for a top-level payload key.
pub fn lookup(key: &str) -> Option<&'static FieldSchema> {
    PLUGIN_CONFIG_FIELDS.iter().find(|field| field.key == key)
}

/// Builds the JSON Schema advertised as the plugin's init schema.
///
/// Unknown keys are tolerated by the loader, so `additionalProperties` is
/// left open at every level.
pub fn init_schema() -> Value {
    let mut schema = object_schema(PLUGIN_CONFIG_FIELDS);
    if let Value::Object(root) = &mut schema {
        root.insert(
            "$schema".to_string(),
            json!("https://json-schema.org/draft/2020-12/schema"),
        );
        root.insert("title".to_string(), json!("CloudTrail plugin init config"));
    }
    schema
}

fn object_schema(fields: &[FieldSchema]) -> Value {
    let properties: Map<String, Value> = fields
        .iter()
        .map(|field| (field.key.to_string(), property_schema(field)))
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": true,
    })
}

fn property_schema(field: &FieldSchema) -> Value {
    let mut property = match field.default {
        DefaultValue::Object(nested) => object_schema(nested),
        _ => json!({ "type": field.default.json_type() }),
    };

    if let Value::Object(map) = &mut property {
        map.insert("title".to_string(), json!(field.title));
        map.insert("description".to_string(), json!(field.description));
        map.insert("default".to_string(), field.default.to_json());
        if let DefaultValue::Integer(_) = field.default {
            map.insert("minimum".to_string(), json!(1));
        }
    }
    property
}
