//! # Board Service ライブラリ
//!
//! Board Service のユースケース・ハンドラ・ルーター構築を公開する。
//! バイナリ（`taskboard-service`, `init-db`）と統合テストから利用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;
