//! # ユースケース層
//!
//! Board Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、存在確認と NotFound 判定はユースケースに集約
//!
//! ## モジュール構成
//!
//! - `board`: ボードとボード配下タスク一覧のユースケース
//! - `task`: タスクのユースケース

pub mod board;
pub mod task;

pub use board::{BoardUseCaseImpl, CreateBoardInput};
pub use task::{CreateTaskInput, TaskUseCaseImpl};
