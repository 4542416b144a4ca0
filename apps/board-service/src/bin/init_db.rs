//! # スキーマ初期化
//!
//! テーブル作成と初期データ（ステータス 3 件、デモユーザー）の投入を行う。
//! サーバーとは別プロセスで一度だけ実行する。再実行しても状態は変わらない。
//!
//! ```bash
//! cargo run -p taskboard-service --bin init-db
//! ```

use anyhow::Context as _;
use taskboard_infra::db;
use taskboard_service::config::BoardServiceConfig;
use taskboard_shared::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing("init-db");

    let config = BoardServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    let pool = db::create_pool(config.database)
        .await
        .context("データベース接続に失敗しました")?;

    db::run_migrations(&pool)
        .await
        .context("マイグレーションの実行に失敗しました")?;
    tracing::info!("データベースを初期化しました");

    pool.close().await;
    Ok(())
}
