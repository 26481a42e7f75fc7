mod config;
mod error;
mod handler;

use config::Config;
use lambda_http::{run, service_fn, Error, Request};
use repository::client::DocumentClient;
use repository::movie::MovieRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        // remove the name of the function from every log entry
        .with_target(false)
        .init();

    let config = Config::from_env();
    tracing::info!(
        table_name = ?config.table_name,
        cast_table_name = ?config.cast_table_name,
        region = ?config.region,
        "cold start"
    );

    let client = DocumentClient::connect(config.region).await;
    let repository_ref = &MovieRepository::new(client, config.table_name, config.cast_table_name);

    run(service_fn(move |event: Request| async move {
        Ok::<_, Error>(handler::get_movie(repository_ref, &event).await)
    }))
    .await
}
