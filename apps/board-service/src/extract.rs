//! # リクエスト抽出
//!
//! axum の `Json` / `Path` を包み、解釈できないリクエストを
//! [`CoreError::BadRequest`] として problem details で返す。
//!
//! 不正な入力の中身（型違い、JSON 構文エラー、Content-Type 不一致）は区別せず、
//! 固定メッセージのみを返す。詳細はログに出力する。

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// リクエストボディを解釈できない場合のメッセージ
pub const INVALID_BODY: &str = "Invalid request body";

/// パスの ID を解釈できない場合のメッセージ
pub const INVALID_ID: &str = "Invalid id";

/// JSON ボディ抽出
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "リクエストボディを解釈できません");
                CoreError::BadRequest(INVALID_BODY.to_string())
            })?;
        Ok(Self(value))
    }
}

/// パスパラメータ抽出
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "パスパラメータを解釈できません");
                CoreError::BadRequest(INVALID_ID.to_string())
            })?;
        Ok(Self(value))
    }
}
