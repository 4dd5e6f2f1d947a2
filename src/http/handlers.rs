//! HTTP handlers for the family endpoints.
//!
//! Each handler forwards to one [`PersonClient`] operation and maps its
//! [`PersonError`] onto a status code.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::clients::PersonClient;
use crate::model::{Person, PersonCreate, PersonError, PersonUpdate};
use actor_framework::ActorClient;

use super::dto::{ErrorResponse, SearchRequest};

pub const GREETING: &str = "Greetings from Anna's REST API family!";

/// Error wrapper turning a [`PersonError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub PersonError);

impl From<PersonError> for ApiError {
    fn from(err: PersonError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, kind) = match &self.0 {
            PersonError::InvalidValue { .. } => (StatusCode::BAD_REQUEST, "INVALID_VALUE"),
            PersonError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            PersonError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            PersonError::ActorCommunicationError(msg) => {
                tracing::error!("Registry unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
            }
        };

        (status, Json(ErrorResponse::new(kind, self.0.to_string()))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn greeting() -> &'static str {
    GREETING
}

pub async fn list_family(State(client): State<PersonClient>) -> ApiResult<Vec<Person>> {
    Ok(Json(client.list().await?))
}

pub async fn get_family_member(
    State(client): State<PersonClient>,
    Path(id): Path<i64>,
) -> ApiResult<Person> {
    Ok(Json(client.get_person(id).await?))
}

pub async fn search_by_first_name(
    State(client): State<PersonClient>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Vec<Person>> {
    Ok(Json(client.search_by_first_name(request.text).await?))
}

pub async fn search_by_city(
    State(client): State<PersonClient>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Vec<Person>> {
    Ok(Json(client.search_by_city(request.text).await?))
}

pub async fn search_by_likes(
    State(client): State<PersonClient>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Vec<Person>> {
    Ok(Json(client.search_by_likes(request.text).await?))
}

pub async fn search_by_company(
    State(client): State<PersonClient>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Vec<Person>> {
    Ok(Json(client.search_by_company(request.text).await?))
}

pub async fn create_family_member(
    State(client): State<PersonClient>,
    Json(params): Json<PersonCreate>,
) -> ApiResult<Person> {
    Ok(Json(client.create_person(params).await?))
}

pub async fn update_family_member(
    State(client): State<PersonClient>,
    Path(id): Path<i64>,
    Json(update): Json<PersonUpdate>,
) -> ApiResult<Person> {
    Ok(Json(client.update_person(id, update).await?))
}

pub async fn delete_family_member(
    State(client): State<PersonClient>,
    Path(id): Path<i64>,
) -> ApiResult<bool> {
    client.delete(id).await?;
    Ok(Json(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: PersonError) -> (StatusCode, ErrorResponse) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_error_status_mapping() {
        let (status, body) = body_of(PersonError::invalid("id", 0, "must be greater than zero")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "INVALID_VALUE");
        assert_eq!(body.message, "Invalid id '0': must be greater than zero");

        let (status, body) = body_of(PersonError::NotFound("id 42".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "NOT_FOUND");

        let (status, body) = body_of(PersonError::Conflict(1)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.error, "CONFLICT");

        let (status, body) = body_of(PersonError::ActorCommunicationError("Actor closed".into())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.error, "UNAVAILABLE");
    }
}
