//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{parse_id, ValidationError};

/// Extract a numeric record id from the path
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::InvalidId {
                value: rejection.body_text(),
            })?;

        Ok(Self(parse_id(&raw)?))
    }
}

/// JSON body whose rejections all map to a 400 `Cannot decode JSON`.
///
/// axum's own `Json` answers some failures with 415 or 422.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::InvalidBody {
                reason: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use axum::routing::{get, post};
    use axum::Router;
    use tower::ServiceExt;

    use crate::models::NewName;

    fn app() -> Router {
        Router::new()
            .route("/ids/{id}", get(|ValidId(id): ValidId| async move { id.to_string() }))
            .route(
                "/names",
                post(|JsonBody(body): JsonBody<NewName>| async move { body.name }),
            )
    }

    async fn send(req: axum::http::Request<Body>) -> StatusCode {
        app().oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn numeric_id_is_accepted() {
        let req = axum::http::Request::builder()
            .uri("/ids/12")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(req).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn non_numeric_id_is_400() {
        let req = axum::http::Request::builder()
            .uri("/ids/twelve")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(req).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn undecodable_path_segment_is_400() {
        let app = Router::new().route(
            "/ids/{id}",
            get(|ValidId(id): ValidId| async move { id.to_string() }),
        );
        let req = axum::http::Request::builder()
            .uri("/ids/%FF")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn path_rejection_detail_is_preserved() {
        let err = ValidationError::InvalidId {
            value: "Invalid URL: bad utf-8".into(),
        };
        assert_eq!(err.detail(), "Invalid URL: bad utf-8");
        assert_eq!(err.to_string(), "Invalid ID");
    }

    #[tokio::test]
    async fn missing_field_is_400_not_422() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/names")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Ada"}"#))
            .unwrap();
        assert_eq!(send(req).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_400_not_415() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/names")
            .body(Body::from(r#"{"name":"Ada","meaning":"noble","language":"German"}"#))
            .unwrap();
        assert_eq!(send(req).await, StatusCode::BAD_REQUEST);
    }
}
