//! # Board Service 設定
//!
//! 環境変数から Board Service サーバーの設定を読み込む。
//!
//! `DATABASE_URL` が未設定の場合は `DB_USER` / `DB_PASSWORD` / `DB_HOST` /
//! `DB_PORT` / `DB_NAME` を個別に接続オプションへ設定する。
//! URL 文字列は組み立てないため、パスワードに `@` や `/` を含めてよい。

use std::{env, str::FromStr};

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が設定されていない
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// ポート番号として解釈できない
    #[error("ポート番号が不正です: {0}")]
    InvalidPort(String),

    /// `DATABASE_URL` を接続オプションとして解釈できない
    #[error("DATABASE_URL が不正です: {0}")]
    InvalidDatabaseUrl(String),
}

/// Board Service サーバーの設定
#[derive(Debug, Clone)]
pub struct BoardServiceConfig {
    /// バインドアドレス
    pub host:     String,
    /// ポート番号
    pub port:     u16,
    /// データベース接続オプション
    pub database: PgConnectOptions,
}

impl BoardServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("BOARD_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("BOARD_PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let database = match lookup("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url)
                .map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))?,
            None => database_from_parts(&lookup)?,
        };

        Ok(Self {
            host,
            port,
            database,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}

/// 個別の `DB_*` 変数から接続オプションを組み立てる
fn database_from_parts(
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<PgConnectOptions, ConfigError> {
    let user = lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
    let password = lookup("DB_PASSWORD").ok_or(ConfigError::Missing("DB_PASSWORD"))?;
    let name = lookup("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
    let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
    let port = match lookup("DB_PORT") {
        Some(raw) => parse_port(&raw)?,
        None => DEFAULT_DB_PORT,
    };

    Ok(PgConnectOptions::new()
        .host(&host)
        .port(port)
        .username(&user)
        .password(&password)
        .database(&name))
}
