use crate::item::Item;
use serde::Serialize;

/// A row of the movies table, keyed by the numeric `id` attribute.
pub type MovieRecord = Item;

/// A row of the cast table, partitioned by `movieId`.
pub type CastRecord = Item;

pub const MOVIE_KEY: &str = "id";
pub const CAST_PARTITION_KEY: &str = "movieId";

#[derive(Serialize, Debug)]
pub struct MovieResponse {
    pub data: MovieRecord,
    // `None` leaves the field out entirely, `Some(vec![])` renders `"cast": []`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<CastRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn jaws() -> MovieRecord {
        match json!({ "id": 1234, "title": "Jaws" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn cast_is_omitted_when_not_requested() {
        let response = MovieResponse {
            data: jaws(),
            cast: None,
        };

        assert_eq!(json!(response), json!({ "data": { "id": 1234, "title": "Jaws" } }));
    }

    #[test]
    fn empty_cast_is_rendered_as_an_empty_list() {
        let response = MovieResponse {
            data: jaws(),
            cast: Some(Vec::new()),
        };

        assert_eq!(
            json!(response),
            json!({ "data": { "id": 1234, "title": "Jaws" }, "cast": [] })
        );
    }
}
