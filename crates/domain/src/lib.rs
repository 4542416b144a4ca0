//! # TaskBoard ドメイン層
//!
//! ボードとタスクのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype ID**: DB の `SERIAL` 主キーを `i32` の Newtype で包み、
//!   ボード ID とタスク ID の取り違えをコンパイル時に防ぐ
//! - **存在チェックのみ**: 作成時の必須項目チェックだけを行う。
//!   外部キーの妥当性は DB の参照整合性制約に委ねる
//! - **インフラ非依存**: SQL や接続の詳細は持たない
//!
//! ## 依存関係の方向
//!
//! ```text
//! board-service → infra → domain
//!        ↘                  ↑
//!          ──────────────────
//! ```
//!
//! ## モジュール構成
//!
//! - [`board`] - ボード
//! - [`task`] - タスクと結合済みの読み取りモデル
//! - [`status`] - 固定のステータス一覧
//! - [`user`] - タスクの担当者
//! - [`error`] - ドメインエラー
//!
//! ## 使用例
//!
//! ```rust
//! use taskboard_domain::{DomainError, board::NewBoard};
//!
//! let board = NewBoard::new(Some("Sprint 1".to_string()), None).unwrap();
//! assert_eq!(board.name(), "Sprint 1");
//!
//! let err = NewBoard::new(None, None).unwrap_err();
//! assert!(matches!(err, DomainError::Validation(_)));
//! ```

#[macro_use]
mod macros;

pub mod board;
pub mod error;
pub mod status;
pub mod task;
pub mod user;

pub use error::DomainError;
