use crate::error::MovieGetError;
use lambda_http::{Body, Request, RequestExt, Response};
use model::movie::MovieResponse;
use repository::error::RepositoryError;
use repository::movie::MovieStore;
use response::ok;

pub async fn get_movie<S>(store: &S, event: &Request) -> Response<Body>
where
    S: MovieStore,
{
    tracing::info!(
        method = %event.method(),
        path = %event.uri().path(),
        path_parameters = ?event.path_parameters(),
        query_string_parameters = ?event.query_string_parameters(),
        "received request"
    );

    match lookup(store, event).await {
        Ok(response) => response,
        Err(error) => error.into_response(),
    }
}

async fn lookup<S>(store: &S, event: &Request) -> Result<Response<Body>, MovieGetError>
where
    S: MovieStore,
{
    let movie_id = event
        .path_parameters()
        .first("movieId")
        .and_then(parse_movie_id)
        .ok_or(MovieGetError::MissingMovieId)?;

    let include_cast = event.query_string_parameters().first("cast") == Some("true");

    if include_cast && !store.has_cast_table() {
        return Err(MovieGetError::Configuration(RepositoryError::MissingTable(
            "CAST_TABLE_NAME",
        )));
    }

    let data = store
        .get_movie(movie_id)
        .await?
        .ok_or(MovieGetError::InvalidMovieId(movie_id))?;
    tracing::info!(movie_id, "movie found");

    let cast = if include_cast {
        let cast = store.get_cast(movie_id).await?;
        tracing::info!(movie_id, count = cast.len(), "cast loaded");
        Some(cast)
    } else {
        None
    };

    Ok(ok(&MovieResponse { data, cast })?)
}

/// Reads the leading integer of `raw`: leading whitespace and a sign are
/// accepted, anything after the digits is ignored. `0` counts as missing,
/// movie ids start at 1. Digit runs too large for an `i64` also count as
/// missing rather than being looked up.
pub fn parse_movie_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    let magnitude: i64 = unsigned[..digits].parse().ok()?;

    Some(sign * magnitude).filter(|id| *id != 0)
}
