use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{run, service_fn, tracing, Error, Request};
use notes_shared::{config::Config, ids::UuidV7Generator, store::DynamoNoteStore, AppState};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env();
    if config.allow_user_header {
        tracing::warn!("ALLOW_USER_HEADER is set; X-User-Id will be trusted as identity");
    }

    // Initialize AWS clients once at startup
    let aws_config = aws_config::load_from_env().await;
    let store = DynamoNoteStore::new(DynamoClient::new(&aws_config), config.table_name.clone());
    tracing::info!("Notes table: {}", store.table_name());

    let state = AppState::new(Arc::new(store), Arc::new(UuidV7Generator), config);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
