//! BoardRepository 統合テスト
//!
//! データベースを使用したテスト。sqlx::test マクロを使用して、
//! テストごとに独立したデータベースを作成しマイグレーションを適用する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p taskboard-infra --test board_repository_test
//! ```

mod common;

use common::{count_tasks, insert_board, new_board, new_task};
use pretty_assertions::assert_eq;
use sqlx::PgPool;
use taskboard_domain::board::{BoardId, BoardUpdate};
use taskboard_infra::repository::{
    BoardRepository,
    PostgresBoardRepository,
    PostgresTaskRepository,
    TaskRepository,
};

#[sqlx::test(migrations = "../../migrations")]
async fn test_insert_採番されたidと入力値を返す(pool: PgPool) {
    let sut = PostgresBoardRepository::new(pool);

    let board = sut
        .insert(&new_board("Test Board", Some("Test Description")))
        .await
        .unwrap();

    assert!(board.id().as_i32() > 0);
    assert_eq!(board.name(), "Test Board");
    assert_eq!(board.description(), Some("Test Description"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_all_id順に返す(pool: PgPool) {
    let sut = PostgresBoardRepository::new(pool.clone());
    let first = insert_board(&pool, "first").await;
    let second = insert_board(&pool, "second").await;

    let boards = sut.find_all().await.unwrap();

    assert_eq!(boards, vec![first, second]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_by_id_存在しないidはnone(pool: PgPool) {
    let sut = PostgresBoardRepository::new(pool);

    let result = sut.find_by_id(BoardId::new(9999)).await.unwrap();

    assert_eq!(result, None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_全項目を置き換える(pool: PgPool) {
    let sut = PostgresBoardRepository::new(pool);
    let board = sut
        .insert(&new_board("before", Some("description")))
        .await
        .unwrap();

    let updated = sut
        .update(
            board.id(),
            &BoardUpdate {
                name:        Some("after".to_string()),
                description: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id(), board.id());
    assert_eq!(updated.name(), "after");
    assert_eq!(updated.description(), None);
    assert_eq!(sut.find_by_id(board.id()).await.unwrap(), Some(updated));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_存在しないidはnone(pool: PgPool) {
    let sut = PostgresBoardRepository::new(pool);

    let result = sut
        .update(
            BoardId::new(9999),
            &BoardUpdate {
                name:        Some("x".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_nameなしはnot_null違反(pool: PgPool) {
    let sut = PostgresBoardRepository::new(pool.clone());
    let board = insert_board(&pool, "b").await;

    let result = sut.update(board.id(), &BoardUpdate::default()).await;

    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_所属タスクもカスケード削除される(pool: PgPool) {
    let sut = PostgresBoardRepository::new(pool.clone());
    let tasks = PostgresTaskRepository::new(pool.clone());
    let keep = insert_board(&pool, "keep").await;
    let drop = insert_board(&pool, "drop").await;
    tasks.insert(&new_task(keep.id(), "k")).await.unwrap();
    tasks.insert(&new_task(drop.id(), "d1")).await.unwrap();
    tasks.insert(&new_task(drop.id(), "d2")).await.unwrap();

    assert!(sut.delete(drop.id()).await.unwrap());

    assert_eq!(count_tasks(&pool).await, 1);
    assert_eq!(sut.find_by_id(drop.id()).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_存在しないidはfalse(pool: PgPool) {
    let sut = PostgresBoardRepository::new(pool);

    assert!(!sut.delete(BoardId::new(9999)).await.unwrap());
}
