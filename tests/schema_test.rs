use cloudtrail_plugin_config::config::PluginConfig;
use cloudtrail_plugin_config::config::schema::{
    AWS_CONFIG_FIELDS, DefaultValue, PLUGIN_CONFIG_FIELDS, init_schema, lookup,
};

#[test]
fn test_table_defaults_match_default_record() {
    let defaults = serde_json::to_value(PluginConfig::default()).unwrap();
    let object = defaults.as_object().unwrap();

    assert_eq!(object.len(), PLUGIN_CONFIG_FIELDS.len());

    for field in PLUGIN_CONFIG_FIELDS {
        let actual = &defaults[field.key];
        match field.default {
            DefaultValue::Integer(v) => assert_eq!(*actual, v, "{}", field.key),
            DefaultValue::Bool(v) => assert_eq!(*actual, v, "{}", field.key),
            DefaultValue::Str(v) => assert_eq!(*actual, v, "{}", field.key),
            DefaultValue::Object(nested) => {
                for nested_field in nested {
                    let DefaultValue::Str(v) = nested_field.default else {
                        panic!("unexpected default for {}", nested_field.key);
                    };
                    assert_eq!(actual[nested_field.key], v);
                }
            }
        }
    }
}

#[test]
fn test_lookup_finds_top_level_keys_only() {
    let field = lookup("s3DownloadConcurrency").unwrap();
    assert_eq!(field.title, "S3 download concurrency");
    assert_eq!(field.default, DefaultValue::Integer(32));

    assert_eq!(lookup("useS3SNS").unwrap().default, DefaultValue::Bool(false));
    assert!(lookup("aws").is_some());
    assert!(lookup("region").is_none());
    assert!(lookup("S3DownloadConcurrency").is_none());
}

#[test]
fn test_every_field_is_documented() {
    for field in PLUGIN_CONFIG_FIELDS.iter().chain(AWS_CONFIG_FIELDS) {
        assert!(!field.title.is_empty(), "{} has no title", field.key);
        assert!(!field.description.is_empty(), "{} has no description", field.key);
    }
}

#[test]
fn test_init_schema_shape() {
    let schema = init_schema();

    assert_eq!(schema["type"], "object");
    assert_eq!(schema["additionalProperties"], true);

    let properties = schema["properties"].as_object().unwrap();
    assert_eq!(properties.len(), PLUGIN_CONFIG_FIELDS.len());

    let concurrency = &properties["s3DownloadConcurrency"];
    assert_eq!(concurrency["type"], "integer");
    assert_eq!(concurrency["default"], 32);
    assert_eq!(concurrency["minimum"], 1);

    assert_eq!(properties["sqsDelete"]["type"], "boolean");
    assert_eq!(properties["sqsDelete"]["default"], true);
    assert_eq!(properties["s3AccountList"]["type"], "string");
    assert_eq!(properties["s3AccountList"]["default"], "");

    let aws = &properties["aws"];
    assert_eq!(aws["type"], "object");
    assert_eq!(aws["properties"]["region"]["type"], "string");
    assert_eq!(aws["properties"]["config"]["title"], "Shared AWS Config File");
    assert_eq!(aws["default"]["profile"], "");
}

#[test]
fn test_schema_default_is_a_loadable_payload() {
    let schema = init_schema();
    let defaults: serde_json::Map<String, serde_json::Value> = schema["properties"]
        .as_object()
        .unwrap()
        .iter()
        .map(|(key, property)| (key.clone(), property["default"].clone()))
        .collect();

    let payload = serde_json::Value::Object(defaults).to_string();
    assert_eq!(PluginConfig::load(&payload).unwrap(), PluginConfig::default());
}
