//! # Board Service アプリケーション構築
//!
//! DI（リポジトリ・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use sqlx::PgPool;
use taskboard_infra::repository::{
    BoardRepository,
    PostgresBoardRepository,
    PostgresTaskRepository,
    TaskRepository,
};

use crate::{
    handler::{
        BoardState,
        ReadinessState,
        TaskState,
        create_board,
        create_task,
        delete_board,
        delete_task,
        get_board,
        get_task,
        health_check,
        list_board_tasks,
        list_boards,
        list_tasks,
        readiness_check,
        update_board,
        update_task,
    },
    usecase::{BoardUseCaseImpl, TaskUseCaseImpl},
};

/// ルーター構築に必要な依存
///
/// リポジトリはトレイトオブジェクトで受け取り、テストではインメモリ実装に差し替える。
pub struct AppDependencies {
    pub board_repository: Arc<dyn BoardRepository>,
    pub task_repository:  Arc<dyn TaskRepository>,
    /// Readiness Check 用の接続プール
    pub pool:             PgPool,
}

impl AppDependencies {
    /// PostgreSQL 実装のリポジトリで依存を組み立てる
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            board_repository: Arc::new(PostgresBoardRepository::new(pool.clone())),
            task_repository: Arc::new(PostgresTaskRepository::new(pool.clone())),
            pool,
        }
    }
}

/// ルーターを構築する
///
/// トレースレイヤーは `main.rs` で付与する。
pub fn build_router(deps: AppDependencies) -> Router {
    let board_state = Arc::new(BoardState {
        usecase: BoardUseCaseImpl::new(
            deps.board_repository,
            Arc::clone(&deps.task_repository),
        ),
    });
    let task_state = Arc::new(TaskState {
        usecase: TaskUseCaseImpl::new(deps.task_repository),
    });
    let readiness_state = Arc::new(ReadinessState { pool: deps.pool });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        // ボード API
        .merge(
            Router::new()
                .route("/api/boards", get(list_boards).post(create_board))
                .route(
                    "/api/boards/{id}",
                    get(get_board).put(update_board).delete(delete_board),
                )
                .route("/api/boards/{id}/tasks", get(list_board_tasks))
                .with_state(board_state),
        )
        // タスク API
        .merge(
            Router::new()
                .route("/api/tasks", get(list_tasks).post(create_task))
                .route(
                    "/api/tasks/{id}",
                    get(get_task).put(update_task).delete(delete_task),
                )
                .with_state(task_state),
        )
}
