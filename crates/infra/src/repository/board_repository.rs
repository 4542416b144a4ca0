//! # BoardRepository
//!
//! `boards` テーブルの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **全項目置き換え**: 更新は名前・説明を無条件に上書きする
//! - **カスケード**: 削除時の所属タスク削除は `ON DELETE CASCADE` に任せる
//! - **実行時クエリ**: `query_as` + `FromRow` を使い、ビルド時に DB を必要としない

use async_trait::async_trait;
use sqlx::PgPool;
use taskboard_domain::board::{Board, BoardId, BoardUpdate, NewBoard};

use crate::error::InfraError;

/// ボードリポジトリトレイト
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// 全ボードを取得する
    async fn find_all(&self) -> Result<Vec<Board>, InfraError>;

    /// ID でボードを検索する
    async fn find_by_id(&self, id: BoardId) -> Result<Option<Board>, InfraError>;

    /// ボードを挿入し、採番された ID を含む行を返す
    async fn insert(&self, board: &NewBoard) -> Result<Board, InfraError>;

    /// ボードを更新する
    ///
    /// 該当行がない場合は `None`。
    async fn update(&self, id: BoardId, update: &BoardUpdate) -> Result<Option<Board>, InfraError>;

    /// ボードを削除する
    ///
    /// 削除した行があれば `true`。
    async fn delete(&self, id: BoardId) -> Result<bool, InfraError>;
}

/// `boards` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct BoardRow {
    id:          i32,
    name:        String,
    description: Option<String>,
}

impl From<BoardRow> for Board {
    fn from(row: BoardRow) -> Self {
        Board::from_db(BoardId::new(row.id), row.name, row.description)
    }
}

/// PostgreSQL 実装の BoardRepository
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: PgPool,
}

impl PostgresBoardRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Board>, InfraError> {
        let rows = sqlx::query_as::<_, BoardRow>(
            r#"
            SELECT id, name, description
            FROM boards
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Board::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: BoardId) -> Result<Option<Board>, InfraError> {
        let row = sqlx::query_as::<_, BoardRow>(
            r#"
            SELECT id, name, description
            FROM boards
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Board::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, board: &NewBoard) -> Result<Board, InfraError> {
        let row = sqlx::query_as::<_, BoardRow>(
            r#"
            INSERT INTO boards (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(board.name())
        .bind(board.description())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: BoardId, update: &BoardUpdate) -> Result<Option<Board>, InfraError> {
        let row = sqlx::query_as::<_, BoardRow>(
            r#"
            UPDATE boards
            SET name = $1, description = $2
            WHERE id = $3
            RETURNING id, name, description
            "#,
        )
        .bind(update.name.as_deref())
        .bind(update.description.as_deref())
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Board::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: BoardId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM boards
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresBoardRepository>();
        assert_send_sync::<Box<dyn BoardRepository>>();
    }
}
