use crate::models::Principal;
use axum::{extract::Request, middleware::Next, response::Response};

/// Header the fronting platform sets after it has authenticated the
/// caller. This service trusts the header because only the platform can
/// reach it; the header name is part of the deployment contract.
pub const PRINCIPAL_HEADER: &str = "x-authenticated-principal";

/// Identity middleware: lifts the platform's principal header into a
/// typed [`Principal`] request extension.
///
/// When the header is absent, empty, or not valid UTF-8, no extension is
/// inserted — downstream handlers see the request as unauthenticated.
/// Rejection happens there, not here, so the error response carries the
/// handler's classification.
pub async fn attach_identity(mut req: Request, next: Next) -> Response {
    let principal = req
        .headers()
        .get(PRINCIPAL_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(Principal::new);

    if let Some(principal) = principal {
        req.extensions_mut().insert(principal);
    }

    next.run(req).await
}
