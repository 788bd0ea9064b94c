//! Role guard middleware.

use axum::{
    extract::{FromRequestParts, Request},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{
    api::extract::Identity,
    api::policy::RouteGroup,
    error::AppError,
};

/// Guards a router with the access policy of one [`RouteGroup`].
///
/// # Errors
///
/// Returns `401 Unauthorized` when the caller carries no identity and
/// `403 Forbidden` when the role is not in the group's allow list.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::api::{middleware::guard, policy::RouteGroup};
///
/// let admin = Router::new()
///     .route("/api/admin/exams", post(create_exam))
///     .layer(middleware::from_fn(guard::require(RouteGroup::Admin)));
/// ```
pub fn require(
    group: RouteGroup,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req, next| Box::pin(check(group, req, next))
}

async fn check(group: RouteGroup, req: Request, next: Next) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let identity = Identity::from_request_parts(&mut parts, &()).await?;

    if !group.is_allowed(identity.role) {
        return Err(AppError::forbidden(
            "Insufficient role",
            json!({ "role": identity.role }),
        ));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
