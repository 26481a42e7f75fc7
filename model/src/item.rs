//! Translation between DynamoDB items and plain JSON documents.
//!
//! Records in this project are opaque: the lambda never looks past the key
//! attributes, so items are carried around as `serde_json` maps and only
//! converted to `AttributeValue`s at the edge of the SDK.

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A record as returned to callers.
pub type Item = Map<String, Value>;

/// A record as the SDK sees it.
pub type DynamoItem = HashMap<String, AttributeValue>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarshallOptions {
    /// Store empty strings as `NULL`.
    pub convert_empty_values: bool,
    /// Drop object entries bound to `null` instead of storing `NULL`.
    pub remove_undefined_values: bool,
}

pub fn from_dynamo_item(item: DynamoItem) -> Result<Item, serde_dynamo::Error> {
    serde_dynamo::from_item(item)
}

pub fn from_dynamo_items(items: Vec<DynamoItem>) -> Result<Vec<Item>, serde_dynamo::Error> {
    serde_dynamo::from_items(items)
}

pub fn to_dynamo_item(item: &Item, options: &MarshallOptions) -> Result<DynamoItem, serde_dynamo::Error> {
    serde_dynamo::to_item(prepare(Value::Object(item.clone()), options))
}

pub fn to_attribute_value(value: &Value, options: &MarshallOptions) -> Result<AttributeValue, serde_dynamo::Error> {
    serde_dynamo::to_attribute_value(prepare(value.clone(), options))
}

fn prepare(value: Value, options: &MarshallOptions) -> Value {
    match value {
        Value::String(s) if s.is_empty() && options.convert_empty_values => Value::Null,
        Value::Array(values) => values
            .into_iter()
            .map(|value| prepare(value, options))
            .collect(),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !(options.remove_undefined_values && value.is_null()))
                .map(|(name, value)| (name, prepare(value, options)))
                .collect(),
        ),
        other => other,
    }
}
