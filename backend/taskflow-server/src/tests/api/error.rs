use crate::ApiError;

use taskflow_core::{CoreError, ProjectId};
use taskflow_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http_body_util::BodyExt;

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_code() {
    let (status, json) = body_json(ApiError::NotFound {
        message: "Project abc not found".to_string(),
        location: location(),
    })
    .await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"]["code"].as_str(), some(eq("NOT_FOUND")));
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let (status, json) = body_json(ApiError::Validation {
        message: "name must not be empty".to_string(),
        field: Some("name".to_string()),
        location: location(),
    })
    .await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(
        json["error"]["code"].as_str(),
        some(eq("VALIDATION_ERROR"))
    );
    assert_that!(json["error"]["field"].as_str(), some(eq("name")));
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500_with_message() {
    let (status, json) = body_json(ApiError::Internal {
        message: "Database operation failed: disk I/O error".to_string(),
        location: location(),
    })
    .await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("disk I/O error"),
        eq(true)
    );
}

#[test]
fn given_invalid_project_id_when_converted_then_validation_variant() {
    let source = ProjectId::parse("abc").unwrap_err();
    let error = ApiError::from(source);

    assert_that!(matches!(error, ApiError::Validation { .. }), eq(true));
}

#[test]
fn given_core_validation_when_converted_then_validation_variant() {
    let error = ApiError::from(CoreError::validation("name must not be empty"));

    assert_that!(matches!(error, ApiError::Validation { .. }), eq(true));
}

#[test]
fn given_row_not_found_when_converted_then_not_found_variant() {
    let error = ApiError::from(DbError::from(sqlx::Error::RowNotFound));

    assert_that!(matches!(error, ApiError::NotFound { .. }), eq(true));
}

#[test]
fn given_other_sqlx_error_when_converted_then_internal_variant() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolClosed));

    assert_that!(matches!(error, ApiError::Internal { .. }), eq(true));
}
