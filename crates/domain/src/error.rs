//! # ドメイン層エラー定義
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須項目の欠落 |
//!
//! 存在しない ID は `Option::None` で表現し、ユースケース層で 404 に変換する。
//! 外部キー違反はドメイン層では検出しない（DB 制約に委ねる）。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// メッセージはクライアントにそのまま返す固定文言。
    /// どの項目が欠けていたかは区別しない。
    #[error("{0}")]
    Validation(String),
}
