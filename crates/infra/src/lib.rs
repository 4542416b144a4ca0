//! # TaskBoard インフラ層
//!
//! PostgreSQL との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトとその PostgreSQL 実装を提供する。
//! ユースケース層はトレイト経由でのみ永続化にアクセスするため、
//! テストではインメモリ実装（[`mock`]）に差し替えられる。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理
//! - **スキーマ初期化**: 埋め込みマイグレーションの適用
//! - **リポジトリ実装**: 1 操作 = 1 SQL 文
//!
//! ## 依存関係
//!
//! ```text
//! board-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - [`mock`] - インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use taskboard_infra::{db, repository::PostgresBoardRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/taskboard".parse()?).await?;
//!     let boards = PostgresBoardRepository::new(pool.clone());
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
