//! # Board Service サーバー
//!
//! ボードとタスクの CRUD API を提供する HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BOARD_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BOARD_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `DATABASE_URL` | ※ | PostgreSQL 接続 URL |
//! | `DB_USER` / `DB_PASSWORD` / `DB_NAME` | ※ | `DATABASE_URL` 未設定時に使用 |
//! | `DB_HOST` / `DB_PORT` | No | 同上（デフォルト: `localhost` / `5432`） |
//! | `LOG_FORMAT` | No | `json` で JSON 出力（それ以外は pretty） |
//!
//! ※ `DATABASE_URL` と `DB_*` のどちらか一方が必要。
//!
//! ## 起動方法
//!
//! ```bash
//! # スキーマ初期化（初回のみ）
//! cargo run -p taskboard-service --bin init-db
//!
//! # サーバー起動
//! cargo run -p taskboard-service
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use taskboard_infra::db;
use taskboard_service::{
    app_builder::{AppDependencies, build_router},
    config::BoardServiceConfig,
};
use taskboard_shared::observability::init_tracing;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Board Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing("board-service");

    let config = BoardServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Board Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(config.database)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    let app = build_router(AppDependencies::postgres(pool)).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Board Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
