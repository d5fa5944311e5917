use lambda_http::{http::Method, Body, Error, Request, RequestExt, Response};
use notes_shared::{error::NoteError, identity, notes, responses, AppState};
use std::sync::Arc;

/// Main Lambda handler - routes requests to the notes endpoint
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    // API Gateway REST stages prefix the URI path (`/prod/notes`); the raw path has no stage
    let path = match event.raw_http_path() {
        "" => event.uri().path(),
        raw => raw,
    };
    tracing::info!("Notes API invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if *method == Method::OPTIONS {
        return responses::preflight();
    }

    if path.trim_end_matches('/') != "/notes" {
        tracing::warn!("No route matched - Method: {} Path: {}", method, path);
        return responses::not_found();
    }

    match method {
        &Method::POST => {
            let user_id =
                match identity::authenticated_user_id(&event, state.config.allow_user_header) {
                    Some(id) => id,
                    None => return notes::error_response(&NoteError::Unauthenticated),
                };
            tracing::debug!("User ID: {}", user_id);

            notes::create_note(
                state.store.as_ref(),
                state.ids.as_ref(),
                &user_id,
                event.body(),
            )
            .await
        }
        _ => responses::method_not_allowed(),
    }
}
