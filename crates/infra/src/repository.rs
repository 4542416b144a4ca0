//! # リポジトリ実装
//!
//! ボード・タスクの永続化トレイトと PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **1 操作 = 1 SQL 文**: トランザクションは使わない。
//!   カスケード削除などの複数行にまたがる整合性は DB に委ねる
//! - **見つからない場合**: 取得系は `Option`、削除は `bool` で返し、
//!   404 への変換はユースケース層が行う
//! - **テスタビリティ**: トレイト経由でインメモリ実装に差し替え可能

pub mod board_repository;
pub mod task_repository;

pub use board_repository::{BoardRepository, PostgresBoardRepository};
pub use task_repository::{PostgresTaskRepository, TaskRepository};
