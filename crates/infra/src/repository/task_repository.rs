//! # TaskRepository
//!
//! `tasks` テーブルの永続化と、ボード・ステータス・ユーザーとの結合読み取りを担当する。
//!
//! ## 設計方針
//!
//! - **結合の種類**: ボードとステータスは INNER JOIN、担当者は LEFT JOIN
//!   （未割り当てのタスクも返す）
//! - **参照整合性は DB 任せ**: `board_id` / `status_id` / `assigned_user_id`
//!   の存在確認は行わず、外部キー制約違反はそのまま [`InfraError`] になる
//! - **更新対象外**: `board_id` は更新しない

use async_trait::async_trait;
use sqlx::PgPool;
use taskboard_domain::{
    board::BoardId,
    status::StatusId,
    task::{BoardTask, NewTask, Task, TaskDetail, TaskId, TaskUpdate},
    user::UserId,
};

use crate::error::InfraError;

/// タスクリポジトリトレイト
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 全タスクをボード名・ステータス名・担当者名付きで取得する
    async fn find_all_with_refs(&self) -> Result<Vec<TaskDetail>, InfraError>;

    /// ID でタスクをボード名・ステータス名・担当者名付きで検索する
    async fn find_by_id_with_refs(&self, id: TaskId) -> Result<Option<TaskDetail>, InfraError>;

    /// ボードに属するタスクをステータス名・担当者名付きで取得する
    ///
    /// ボード自体の存在は確認しない（存在しなければ空）。
    async fn find_by_board(&self, board_id: BoardId) -> Result<Vec<BoardTask>, InfraError>;

    /// タスクを挿入し、結合前の行を返す
    async fn insert(&self, task: &NewTask) -> Result<Task, InfraError>;

    /// タスクを更新し、結合前の行を返す
    ///
    /// 該当行がない場合は `None`。
    async fn update(&self, id: TaskId, update: &TaskUpdate) -> Result<Option<Task>, InfraError>;

    /// タスクを削除する
    ///
    /// 削除した行があれば `true`。
    async fn delete(&self, id: TaskId) -> Result<bool, InfraError>;
}

/// `tasks` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id:               i32,
    board_id:         i32,
    title:            String,
    description:      Option<String>,
    status_id:        i32,
    assigned_user_id: Option<i32>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task::from_db(
            TaskId::new(row.id),
            BoardId::new(row.board_id),
            row.title,
            row.description,
            StatusId::new(row.status_id),
            row.assigned_user_id.map(UserId::new),
        )
    }
}

/// ボード名・ステータス名・担当者名を結合した行
#[derive(Debug, sqlx::FromRow)]
struct TaskDetailRow {
    #[sqlx(flatten)]
    task:          TaskRow,
    board_name:    String,
    status:        String,
    assigned_user: Option<String>,
}

impl From<TaskDetailRow> for TaskDetail {
    fn from(row: TaskDetailRow) -> Self {
        TaskDetail {
            task:          row.task.into(),
            board_name:    row.board_name,
            status:        row.status,
            assigned_user: row.assigned_user,
        }
    }
}

/// ステータス名・担当者名を結合した行
#[derive(Debug, sqlx::FromRow)]
struct BoardTaskRow {
    #[sqlx(flatten)]
    task:          TaskRow,
    status:        String,
    assigned_user: Option<String>,
}

impl From<BoardTaskRow> for BoardTask {
    fn from(row: BoardTaskRow) -> Self {
        BoardTask {
            task:          row.task.into(),
            status:        row.status,
            assigned_user: row.assigned_user,
        }
    }
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all_with_refs(&self) -> Result<Vec<TaskDetail>, InfraError> {
        let rows = sqlx::query_as::<_, TaskDetailRow>(
            r#"
            SELECT
                t.id,
                t.board_id,
                t.title,
                t.description,
                t.status_id,
                t.assigned_user_id,
                b.name AS board_name,
                s.name AS status,
                u.name AS assigned_user
            FROM tasks t
            JOIN boards b ON t.board_id = b.id
            JOIN status s ON t.status_id = s.id
            LEFT JOIN users u ON t.assigned_user_id = u.id
            ORDER BY t.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaskDetail::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id_with_refs(&self, id: TaskId) -> Result<Option<TaskDetail>, InfraError> {
        let row = sqlx::query_as::<_, TaskDetailRow>(
            r#"
            SELECT
                t.id,
                t.board_id,
                t.title,
                t.description,
                t.status_id,
                t.assigned_user_id,
                b.name AS board_name,
                s.name AS status,
                u.name AS assigned_user
            FROM tasks t
            JOIN boards b ON t.board_id = b.id
            JOIN status s ON t.status_id = s.id
            LEFT JOIN users u ON t.assigned_user_id = u.id
            WHERE t.id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskDetail::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%board_id))]
    async fn find_by_board(&self, board_id: BoardId) -> Result<Vec<BoardTask>, InfraError> {
        let rows = sqlx::query_as::<_, BoardTaskRow>(
            r#"
            SELECT
                t.id,
                t.board_id,
                t.title,
                t.description,
                t.status_id,
                t.assigned_user_id,
                s.name AS status,
                u.name AS assigned_user
            FROM tasks t
            JOIN status s ON t.status_id = s.id
            LEFT JOIN users u ON t.assigned_user_id = u.id
            WHERE t.board_id = $1
            ORDER BY t.id
            "#,
        )
        .bind(board_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BoardTask::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(board_id = %task.board_id()))]
    async fn insert(&self, task: &NewTask) -> Result<Task, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (board_id, title, description, status_id, assigned_user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, board_id, title, description, status_id, assigned_user_id
            "#,
        )
        .bind(task.board_id().as_i32())
        .bind(task.title())
        .bind(task.description())
        .bind(task.status_id().as_i32())
        .bind(task.assigned_user_id().map(|u| u.as_i32()))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: TaskId, update: &TaskUpdate) -> Result<Option<Task>, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET title = $1, description = $2, status_id = $3, assigned_user_id = $4
            WHERE id = $5
            RETURNING id, board_id, title, description, status_id, assigned_user_id
            "#,
        )
        .bind(update.title.as_deref())
        .bind(update.description.as_deref())
        .bind(update.status_id.map(|s| s.as_i32()))
        .bind(update.assigned_user_id.map(|u| u.as_i32()))
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Task::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TaskId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
