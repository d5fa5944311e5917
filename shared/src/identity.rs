use lambda_http::{request::RequestContext, Request, RequestExt};

/// Resolve the authenticated subject for a request.
///
/// The identity comes from API Gateway, never from the handler itself:
/// 1. the `sub` claim of a JWT authorizer
/// 2. the Cognito federated identity of an IAM-authorized API (REST `identity`, HTTP API `authorizer.iam`)
/// 3. the `X-User-Id` header, only when `allow_user_header` is set for local development
pub fn authenticated_user_id(event: &Request, allow_user_header: bool) -> Option<String> {
    let context = event.request_context_ref();
    let authorizer = context.and_then(|ctx| ctx.authorizer());

    let from_jwt = authorizer
        .and_then(|auth| auth.jwt.as_ref())
        .and_then(|jwt| jwt.claims.get("sub"))
        .map(|s| s.to_string());

    let from_identity_pool = || match context {
        Some(RequestContext::ApiGatewayV1(ctx)) => ctx
            .identity
            .cognito_identity_id
            .clone()
            .filter(|id| !id.is_empty()),
        _ => None,
    };

    let from_iam_authorizer = || {
        authorizer
            .and_then(|auth| auth.iam.as_ref())
            .and_then(|iam| iam.cognito_identity.as_ref())
            .and_then(|cognito| cognito.identity_id.clone())
    };

    let from_header = || {
        if !allow_user_header {
            return None;
        }
        event
            .headers()
            .get("X-User-Id")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };

    from_jwt
        .or_else(from_identity_pool)
        .or_else(from_iam_authorizer)
        .or_else(from_header)
        .filter(|id| !id.is_empty())
}
