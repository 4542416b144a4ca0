//! # タスクハンドラ
//!
//! タスク CRUD を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/tasks` - タスク一覧（ボード名・ステータス名・担当者名付き）
//! - `GET /api/tasks/{id}` - タスク詳細（同上）
//! - `POST /api/tasks` - タスク作成
//! - `PUT /api/tasks/{id}` - タスク更新（全項目置き換え、`board_id` は対象外）
//! - `DELETE /api/tasks/{id}` - タスク削除
//!
//! 作成・更新のレスポンスは結合前の行で、名前は含まない。

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use taskboard_domain::{
    status::StatusId,
    task::{Task, TaskDetail, TaskId, TaskUpdate},
    user::UserId,
};

use crate::{
    error::CoreError,
    extract::{ApiJson, ApiPath},
    usecase::{CreateTaskInput, TaskUseCaseImpl},
};

/// タスク API の共有状態
pub struct TaskState {
    pub usecase: TaskUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// タスク DTO（`tasks` テーブルの行そのもの）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDto {
    pub id:               i32,
    pub board_id:         i32,
    pub title:            String,
    pub description:      Option<String>,
    pub status_id:        i32,
    pub assigned_user_id: Option<i32>,
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id:               task.id().as_i32(),
            board_id:         task.board_id().as_i32(),
            title:            task.title().to_string(),
            description:      task.description().map(str::to_string),
            status_id:        task.status_id().as_i32(),
            assigned_user_id: task.assigned_user_id().map(|u| u.as_i32()),
        }
    }
}

/// ボード名・ステータス名・担当者名を結合したタスク DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetailDto {
    #[serde(flatten)]
    pub task:          TaskDto,
    pub board_name:    String,
    pub status:        String,
    pub assigned_user: Option<String>,
}

impl From<TaskDetail> for TaskDetailDto {
    fn from(detail: TaskDetail) -> Self {
        Self {
            task:          detail.task.into(),
            board_name:    detail.board_name,
            status:        detail.status,
            assigned_user: detail.assigned_user,
        }
    }
}

/// タスク作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub board_id:         Option<i32>,
    pub title:            Option<String>,
    pub description:      Option<String>,
    pub status_id:        Option<i32>,
    pub assigned_user_id: Option<i32>,
}

/// タスク更新リクエスト
///
/// `board_id` を送っても無視される（未知のフィールドとして読み捨てる）。
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title:            Option<String>,
    pub description:      Option<String>,
    pub status_id:        Option<i32>,
    pub assigned_user_id: Option<i32>,
}

// --- ハンドラ ---

/// GET /api/tasks
#[tracing::instrument(skip_all)]
pub async fn list_tasks(
    State(state): State<Arc<TaskState>>,
) -> Result<impl IntoResponse, CoreError> {
    let tasks = state.usecase.list_tasks().await?;
    let items: Vec<TaskDetailDto> = tasks.into_iter().map(TaskDetailDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /api/tasks/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_task(
    State(state): State<Arc<TaskState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, CoreError> {
    let task = state.usecase.get_task(TaskId::new(id)).await?;
    Ok((StatusCode::OK, Json(TaskDetailDto::from(task))))
}

/// POST /api/tasks
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたタスク（結合前の行）
/// - `400 Bad Request`: `board_id` / `title` / `status_id` のいずれかが未指定
/// - `500 Internal Server Error`: 参照先が存在しない（外部キー違反）など
#[tracing::instrument(skip_all)]
pub async fn create_task(
    State(state): State<Arc<TaskState>>,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let input = CreateTaskInput {
        board_id:         req.board_id,
        title:            req.title,
        description:      req.description,
        status_id:        req.status_id,
        assigned_user_id: req.assigned_user_id,
    };

    let task = state.usecase.create_task(input).await?;
    tracing::info!(task_id = %task.id(), board_id = %task.board_id(), "タスクを作成しました");

    Ok((StatusCode::CREATED, Json(TaskDto::from(task))))
}

/// PUT /api/tasks/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のタスク（結合前の行）
/// - `404 Not Found`: タスクが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_task(
    State(state): State<Arc<TaskState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateTaskRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let update = TaskUpdate {
        title:            req.title,
        description:      req.description,
        status_id:        req.status_id.map(StatusId::new),
        assigned_user_id: req.assigned_user_id.map(UserId::new),
    };

    let task = state.usecase.update_task(TaskId::new(id), update).await?;

    Ok((StatusCode::OK, Json(TaskDto::from(task))))
}

/// DELETE /api/tasks/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_task(
    State(state): State<Arc<TaskState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, CoreError> {
    state.usecase.delete_task(TaskId::new(id)).await?;
    tracing::info!(task_id = id, "タスクを削除しました");
    Ok(StatusCode::NO_CONTENT)
}
