//! API Gateway entry point: gateway event in, gateway response out.

use http::header::CONTENT_TYPE;
use lambda_http::{Body, Error, Request, RequestExt, Response, service_fn};

use crate::dispatcher;
use crate::response::{ItemResponse, ResponseBody};
use crate::state::AppState;

/// Path parameter carrying the item id
pub const ID_PARAM: &str = "id";

/// Handle one gateway event
///
/// Every outcome, including 4xx/5xx, is a successful invocation; the
/// status lives in the response envelope.
pub async fn function_handler(state: &AppState, event: Request) -> Result<Response<Body>, Error> {
    let id = event
        .path_parameters_ref()
        .and_then(|params| params.first(ID_PARAM));
    let body: &[u8] = event.body();

    tracing::debug!("Dispatching {} {}", event.method(), event.uri().path());

    let reply = dispatcher::dispatch(state.store.as_ref(), event.method(), id, body).await;
    into_gateway_response(reply)
}

fn into_gateway_response(reply: ItemResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(reply.status.as_u16());
    if let Some(content_type) = reply.body.content_type() {
        builder = builder.header(CONTENT_TYPE, content_type);
    }

    let body = match reply.body {
        ResponseBody::Empty => Body::Empty,
        other => Body::Text(other.into_string()),
    };

    Ok(builder.body(body)?)
}

/// Serve gateway events until the runtime shuts the function down
pub async fn run(state: AppState) -> anyhow::Result<()> {
    tracing::info!("Starting Lambda runtime loop");
    lambda_http::run(service_fn(|event: Request| function_handler(&state, event)))
        .await
        .map_err(|err| anyhow::anyhow!("Lambda runtime failed: {}", err))
}
