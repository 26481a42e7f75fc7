use crate::client::{DocumentClient, QueryPage};
use crate::error::RepositoryError;
use model::item::Item;
use model::movie::{CastRecord, MovieRecord, CAST_PARTITION_KEY, MOVIE_KEY};
use serde_json::Value;
use std::future::Future;

/// Read access to movies and their cast.
pub trait MovieStore {
    fn has_cast_table(&self) -> bool;

    fn get_movie(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<MovieRecord>, RepositoryError>> + Send;

    /// All cast records for `id`, in the order the store returns them.
    fn get_cast(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Vec<CastRecord>, RepositoryError>> + Send;
}

pub struct MovieRepository {
    client: DocumentClient,
    table_name: Option<String>,
    cast_table_name: Option<String>,
}

impl MovieRepository {
    pub fn new(
        client: DocumentClient,
        table_name: Option<String>,
        cast_table_name: Option<String>,
    ) -> MovieRepository {
        MovieRepository {
            client,
            table_name,
            cast_table_name,
        }
    }
}

impl MovieStore for MovieRepository {
    fn has_cast_table(&self) -> bool {
        self.cast_table_name.is_some()
    }

    async fn get_movie(&self, id: i64) -> Result<Option<MovieRecord>, RepositoryError> {
        let table_name = self
            .table_name
            .as_deref()
            .ok_or(RepositoryError::MissingTable("TABLE_NAME"))?;

        self.client.get(table_name, &movie_key(id)).await
    }

    async fn get_cast(&self, id: i64) -> Result<Vec<CastRecord>, RepositoryError> {
        let table_name = self
            .cast_table_name
            .as_deref()
            .ok_or(RepositoryError::MissingTable("CAST_TABLE_NAME"))?;

        let page = self
            .client
            .query_eq(table_name, CAST_PARTITION_KEY, &Value::from(id))
            .await?;

        Ok(first_page(id, page))
    }
}

fn first_page(id: i64, page: QueryPage) -> Vec<CastRecord> {
    if page.has_more {
        tracing::warn!(
            movie_id = id,
            returned = page.items.len(),
            "cast query has further pages, only the first one is returned"
        );
    }
    page.items
}

fn movie_key(id: i64) -> Item {
    let mut key = Item::new();
    key.insert(MOVIE_KEY.to_owned(), Value::from(id));
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::document_marshalling;
    use aws_sdk_dynamodb::config::{BehaviorVersion, Region};
    use aws_sdk_dynamodb::{Client, Config};
    use serde_json::json;

    fn repository(table_name: Option<&str>, cast_table_name: Option<&str>) -> MovieRepository {
        let config = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-central-1"))
            .build();
        let client = DocumentClient::new(Client::from_conf(config), document_marshalling());

        MovieRepository::new(
            client,
            table_name.map(str::to_owned),
            cast_table_name.map(str::to_owned),
        )
    }

    #[test]
    fn movies_are_keyed_by_numeric_id() {
        assert_eq!(Value::Object(movie_key(1234)), json!({ "id": 1234 }));
    }

    fn cast_member(actor_id: i64) -> CastRecord {
        match json!({ "movieId": 1234, "actorId": actor_id }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn truncated_cast_pages_return_what_was_read() {
        let page = QueryPage {
            items: vec![cast_member(1), cast_member(2)],
            has_more: true,
        };

        let cast = first_page(1234, page);

        assert_eq!(cast, vec![cast_member(1), cast_member(2)]);
    }

    #[test]
    fn complete_cast_pages_are_returned_unchanged() {
        let page = QueryPage {
            items: vec![cast_member(3)],
            has_more: false,
        };

        assert_eq!(first_page(1234, page), vec![cast_member(3)]);
    }

    #[test]
    fn cast_table_is_optional() {
        assert!(!repository(Some("Movies"), None).has_cast_table());
        assert!(repository(Some("Movies"), Some("MovieCast")).has_cast_table());
    }

    #[tokio::test]
    async fn missing_movie_table_fails_before_calling_dynamo() {
        let error = repository(None, None).get_movie(1234).await.unwrap_err();

        assert!(matches!(error, RepositoryError::MissingTable("TABLE_NAME")));
    }

    #[tokio::test]
    async fn missing_cast_table_fails_before_calling_dynamo() {
        let error = repository(Some("Movies"), None)
            .get_cast(1234)
            .await
            .unwrap_err();

        assert!(matches!(error, RepositoryError::MissingTable("CAST_TABLE_NAME")));
    }
}
