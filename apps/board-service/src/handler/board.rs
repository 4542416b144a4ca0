//! # ボードハンドラ
//!
//! ボード CRUD とボード配下のタスク一覧を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/boards` - ボード一覧
//! - `GET /api/boards/{id}` - ボード詳細
//! - `POST /api/boards` - ボード作成
//! - `PUT /api/boards/{id}` - ボード更新（全項目置き換え）
//! - `DELETE /api/boards/{id}` - ボード削除（所属タスクも削除）
//! - `GET /api/boards/{id}/tasks` - ボード配下のタスク一覧

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use taskboard_domain::{
    board::{Board, BoardId, BoardUpdate},
    task::BoardTask,
};

use super::task::TaskDto;
use crate::{
    error::CoreError,
    extract::{ApiJson, ApiPath},
    usecase::{BoardUseCaseImpl, CreateBoardInput},
};

/// ボード API の共有状態
pub struct BoardState {
    pub usecase: BoardUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ボード DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDto {
    pub id:          i32,
    pub name:        String,
    pub description: Option<String>,
}

impl From<Board> for BoardDto {
    fn from(board: Board) -> Self {
        Self {
            id:          board.id().as_i32(),
            name:        board.name().to_string(),
            description: board.description().map(str::to_string),
        }
    }
}

/// ボード配下のタスク DTO（ボード名は含まない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTaskDto {
    #[serde(flatten)]
    pub task:          TaskDto,
    pub status:        String,
    pub assigned_user: Option<String>,
}

impl From<BoardTask> for BoardTaskDto {
    fn from(row: BoardTask) -> Self {
        Self {
            task:          row.task.into(),
            status:        row.status,
            assigned_user: row.assigned_user,
        }
    }
}

/// ボード作成リクエスト
///
/// 欠けた項目は `None` として受け取り、存在確認はユースケースで行う。
#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    pub name:        Option<String>,
    pub description: Option<String>,
}

/// ボード更新リクエスト
///
/// 省略した項目は null で上書きされる。
#[derive(Debug, Deserialize)]
pub struct UpdateBoardRequest {
    pub name:        Option<String>,
    pub description: Option<String>,
}

// --- ハンドラ ---

/// GET /api/boards
#[tracing::instrument(skip_all)]
pub async fn list_boards(
    State(state): State<Arc<BoardState>>,
) -> Result<impl IntoResponse, CoreError> {
    let boards = state.usecase.list_boards().await?;
    let items: Vec<BoardDto> = boards.into_iter().map(BoardDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /api/boards/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_board(
    State(state): State<Arc<BoardState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, CoreError> {
    let board = state.usecase.get_board(BoardId::new(id)).await?;
    Ok((StatusCode::OK, Json(BoardDto::from(board))))
}

/// POST /api/boards
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたボード（採番された ID を含む）
/// - `400 Bad Request`: 名前が未指定または空
#[tracing::instrument(skip_all)]
pub async fn create_board(
    State(state): State<Arc<BoardState>>,
    ApiJson(req): ApiJson<CreateBoardRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let input = CreateBoardInput {
        name:        req.name,
        description: req.description,
    };

    let board = state.usecase.create_board(input).await?;
    tracing::info!(board_id = %board.id(), "ボードを作成しました");

    Ok((StatusCode::CREATED, Json(BoardDto::from(board))))
}

/// PUT /api/boards/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のボード
/// - `404 Not Found`: ボードが見つからない
/// - `500 Internal Server Error`: 名前の省略（NOT NULL 違反）など
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_board(
    State(state): State<Arc<BoardState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateBoardRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let update = BoardUpdate {
        name:        req.name,
        description: req.description,
    };

    let board = state.usecase.update_board(BoardId::new(id), update).await?;

    Ok((StatusCode::OK, Json(BoardDto::from(board))))
}

/// DELETE /api/boards/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: ボードが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_board(
    State(state): State<Arc<BoardState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, CoreError> {
    state.usecase.delete_board(BoardId::new(id)).await?;
    tracing::info!(board_id = id, "ボードを削除しました");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/boards/{id}/tasks
///
/// ボードが存在しなくても 404 にはせず、空配列を返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn list_board_tasks(
    State(state): State<Arc<BoardState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, CoreError> {
    let tasks = state.usecase.list_board_tasks(BoardId::new(id)).await?;
    let items: Vec<BoardTaskDto> = tasks.into_iter().map(BoardTaskDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}
