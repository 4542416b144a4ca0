//! # Board Service エラー定義
//!
//! Board Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 500 系のレスポンスには固定メッセージのみを載せ、原因はログに出力する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use taskboard_domain::DomainError;
use taskboard_shared::ErrorResponse;
use thiserror::Error;

/// Board Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] taskboard_infra::InfraError),
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => CoreError::BadRequest(msg),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let body = match &self {
            CoreError::NotFound(msg) => ErrorResponse::not_found(msg),
            CoreError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            CoreError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use taskboard_infra::InfraError;
    use taskboard_shared::error_response::INTERNAL_ERROR_DETAIL;

    use super::*;

    async fn into_parts(err: CoreError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_foundは404とメッセージを返す() {
        let (status, body) = into_parts(CoreError::NotFound("Board not found".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.status, 404);
        assert_eq!(body.detail, "Board not found");
    }

    #[tokio::test]
    async fn test_ドメインのバリデーションエラーは400になる() {
        let err: CoreError = DomainError::Validation("Board name is required".to_string()).into();

        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "Board name is required");
    }

    #[tokio::test]
    async fn test_データベースエラーは固定メッセージの500になる() {
        let err = CoreError::Database(InfraError::unexpected("connection refused"));

        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.detail, INTERNAL_ERROR_DETAIL);
        assert!(!body.detail.contains("connection refused"));
    }
}
