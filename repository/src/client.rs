use crate::error::RepositoryError;
use aws_sdk_dynamodb::{config::Region, Client};
use model::item::{from_dynamo_item, from_dynamo_items, to_attribute_value, to_dynamo_item, Item, MarshallOptions};
use serde_json::Value;

/// Thin document layer over the DynamoDB client: keys and expression values
/// go in as JSON, items come back as JSON with numbers as native numbers.
pub struct DocumentClient {
    client: Client,
    marshall: MarshallOptions,
}

/// One page of query results.
#[derive(Debug, Default)]
pub struct QueryPage {
    pub items: Vec<Item>,
    /// The store reported a `LastEvaluatedKey`.
    pub has_more: bool,
}

pub fn document_marshalling() -> MarshallOptions {
    MarshallOptions {
        convert_empty_values: true,
        remove_undefined_values: true,
    }
}

impl DocumentClient {
    /// Loads the shared AWS config from the environment, pinning the region when one is given.
    pub async fn connect(region: Option<String>) -> DocumentClient {
        let mut loader = aws_config::from_env();
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let shared_config = loader.load().await;

        DocumentClient::new(Client::new(&shared_config), document_marshalling())
    }

    pub fn new(client: Client, marshall: MarshallOptions) -> DocumentClient {
        DocumentClient { client, marshall }
    }

    pub async fn get(&self, table_name: &str, key: &Item) -> Result<Option<Item>, RepositoryError> {
        let translation_error = |source: serde_dynamo::Error| RepositoryError::Item {
            table: table_name.to_owned(),
            source,
        };

        let output = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(to_dynamo_item(key, &self.marshall).map_err(translation_error)?))
            .send()
            .await
            .map_err(|source| RepositoryError::GetItem {
                table: table_name.to_owned(),
                source,
            })?;

        output
            .item
            .map(from_dynamo_item)
            .transpose()
            .map_err(translation_error)
    }

    /// Single-page query for every item whose `attribute` equals `value`.
    pub async fn query_eq(
        &self,
        table_name: &str,
        attribute: &str,
        value: &Value,
    ) -> Result<QueryPage, RepositoryError> {
        let translation_error = |source: serde_dynamo::Error| RepositoryError::Item {
            table: table_name.to_owned(),
            source,
        };

        let output = self
            .client
            .query()
            .table_name(table_name)
            .key_condition_expression("#key = :value")
            .expression_attribute_names("#key", attribute)
            .expression_attribute_values(
                ":value",
                to_attribute_value(value, &self.marshall).map_err(translation_error)?,
            )
            .send()
            .await
            .map_err(|source| RepositoryError::Query {
                table: table_name.to_owned(),
                source,
            })?;

        let has_more = output.last_evaluated_key().is_some();
        let items = from_dynamo_items(output.items.unwrap_or_default()).map_err(translation_error)?;

        Ok(QueryPage { items, has_more })
    }
}
