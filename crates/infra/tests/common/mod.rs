//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータ定数・
//! 入力生成ヘルパー。 Rust の統合テスト規約に従い `tests/common/mod.rs`
//! に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use sqlx::PgPool;
use taskboard_domain::{
    board::{Board, BoardId, NewBoard},
    status::Status,
    task::NewTask,
    user::UserId,
};
use taskboard_infra::repository::{BoardRepository, PostgresBoardRepository};

// =============================================================================
// シードデータ定数
// =============================================================================

/// マイグレーションで投入されるデモユーザーの ID
pub fn seed_user_id() -> UserId {
    UserId::new(1)
}

// =============================================================================
// 入力生成ヘルパー
// =============================================================================

/// 名前と説明を指定して NewBoard を作成
pub fn new_board(name: &str, description: Option<&str>) -> NewBoard {
    NewBoard::new(Some(name.to_string()), description.map(str::to_string)).unwrap()
}

/// デフォルト値（Todo・未割り当て）で NewTask を作成
pub fn new_task(board_id: BoardId, title: &str) -> NewTask {
    NewTask::new(
        Some(board_id.as_i32()),
        Some(title.to_string()),
        None,
        Some(Status::Todo.id().as_i32()),
        None,
    )
    .unwrap()
}

// =============================================================================
// DB セットアップヘルパー
// =============================================================================

/// テスト用ボードを DB に作成
pub async fn insert_board(pool: &PgPool, name: &str) -> Board {
    PostgresBoardRepository::new(pool.clone())
        .insert(&new_board(name, None))
        .await
        .expect("ボード作成に失敗")
}

/// タスク数を直接 SQL で数える
pub async fn count_tasks(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(pool)
        .await
        .expect("タスク数の取得に失敗");
    row.0
}
