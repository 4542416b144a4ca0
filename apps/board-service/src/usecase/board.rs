//! ボード管理ユースケース

use std::sync::Arc;

use taskboard_domain::{
    board::{Board, BoardId, BoardUpdate, NewBoard},
    task::BoardTask,
};
use taskboard_infra::repository::{BoardRepository, TaskRepository};

use crate::error::CoreError;

/// ボードが見つからない場合のメッセージ
pub const BOARD_NOT_FOUND: &str = "Board not found";

fn not_found() -> CoreError {
    CoreError::NotFound(BOARD_NOT_FOUND.to_string())
}

/// ボード作成の入力
///
/// リクエストボディの値をそのまま受け取り、存在確認はユースケースで行う。
#[derive(Debug, Default)]
pub struct CreateBoardInput {
    pub name:        Option<String>,
    pub description: Option<String>,
}

/// ボード管理ユースケース
pub struct BoardUseCaseImpl {
    board_repository: Arc<dyn BoardRepository>,
    task_repository:  Arc<dyn TaskRepository>,
}

impl BoardUseCaseImpl {
    pub fn new(
        board_repository: Arc<dyn BoardRepository>,
        task_repository: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            board_repository,
            task_repository,
        }
    }

    pub async fn list_boards(&self) -> Result<Vec<Board>, CoreError> {
        Ok(self.board_repository.find_all().await?)
    }

    pub async fn get_board(&self, id: BoardId) -> Result<Board, CoreError> {
        self.board_repository
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// ボードを作成する
    ///
    /// 名前が未指定または空文字列の場合は `BadRequest`。
    pub async fn create_board(&self, input: CreateBoardInput) -> Result<Board, CoreError> {
        let board = NewBoard::new(input.name, input.description)?;
        Ok(self.board_repository.insert(&board).await?)
    }

    /// ボードを更新する（全項目置き換え）
    ///
    /// 存在確認は制約違反より先に行われるため、存在しない ID は
    /// 入力の内容にかかわらず `NotFound` になる。
    pub async fn update_board(&self, id: BoardId, update: BoardUpdate) -> Result<Board, CoreError> {
        self.board_repository
            .update(id, &update)
            .await?
            .ok_or_else(not_found)
    }

    /// ボードを削除する
    ///
    /// 所属タスクは DB のカスケードで削除される。
    pub async fn delete_board(&self, id: BoardId) -> Result<(), CoreError> {
        if self.board_repository.delete(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// ボード配下のタスク一覧を取得する
    ///
    /// ボードの存在は確認しない。存在しないボードは空の一覧になる。
    pub async fn list_board_tasks(&self, id: BoardId) -> Result<Vec<BoardTask>, CoreError> {
        Ok(self.task_repository.find_by_board(id).await?)
    }
}
