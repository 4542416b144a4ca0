//! マイグレーションと疎通確認の統合テスト
//!
//! 実行方法:
//! ```bash
//! cargo test -p taskboard-infra --test db_test
//! ```

use pretty_assertions::assert_eq;
use sqlx::PgPool;
use taskboard_domain::{status::Status, user::DEMO_USER_NAME};
use taskboard_infra::db;

#[sqlx::test(migrations = "../../migrations")]
async fn test_pingが成功する(pool: PgPool) {
    db::ping(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_ステータスが宣言順のidで投入される(pool: PgPool) {
    let rows: Vec<(i32, String)> = sqlx::query_as("SELECT id, name FROM status ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();

    let expected: Vec<(i32, String)> = [Status::Todo, Status::InProgress, Status::Done]
        .into_iter()
        .map(|s| (s.id().as_i32(), s.name().to_string()))
        .collect();
    assert_eq!(rows, expected);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_マイグレーションを再実行しても初期データは重複しない(pool: PgPool) {
    // sqlx::test が適用済みのため、ここでは SQL を直接再実行する
    sqlx::raw_sql(include_str!("../../../migrations/20240101000000_init.sql"))
        .execute(&pool)
        .await
        .unwrap();

    let (statuses,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM status")
        .fetch_one(&pool)
        .await
        .unwrap();
    let users: Vec<(String,)> = sqlx::query_as("SELECT name FROM users")
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(statuses, 3);
    assert_eq!(users, vec![(DEMO_USER_NAME.to_string(),)]);
}
