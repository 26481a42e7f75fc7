use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{get_item::GetItemError, query::QueryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("environment variable `{0}` is not set")]
    MissingTable(&'static str),
    #[error("GetItem on table `{table}` failed")]
    GetItem {
        table: String,
        #[source]
        source: SdkError<GetItemError>,
    },
    #[error("Query on table `{table}` failed")]
    Query {
        table: String,
        #[source]
        source: SdkError<QueryError>,
    },
    #[error("item for table `{table}` could not be translated")]
    Item {
        table: String,
        #[source]
        source: serde_dynamo::Error,
    },
}
