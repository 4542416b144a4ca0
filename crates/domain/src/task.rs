//! # タスク
//!
//! ボードに属する作業単位。ステータスと任意の担当者を持つ。
//!
//! ## 読み取りモデル
//!
//! 取得経路によって結合される参照先が異なる:
//!
//! | 型 | 用途 | 結合する名前 |
//! |---|------|-------------|
//! | [`Task`] | 作成・更新の戻り値 | なし（生の行） |
//! | [`TaskDetail`] | タスク一覧・詳細 | ボード名、ステータス名、担当者名 |
//! | [`BoardTask`] | ボード配下のタスク一覧 | ステータス名、担当者名 |
//!
//! 作成・更新が結合前の行を返すのは既存クライアントとの互換のため。

use crate::{DomainError, board::BoardId, status::StatusId, user::UserId};

define_serial_id! {
    /// タスクの一意識別子
    pub struct TaskId;
}

/// 必須項目が欠けている場合のエラーメッセージ
pub const TASK_FIELDS_REQUIRED: &str = "Board ID, title, and status_id are required";

/// タスクエンティティ（`tasks` テーブルの 1 行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id:               TaskId,
    board_id:         BoardId,
    title:            String,
    description:      Option<String>,
    status_id:        StatusId,
    assigned_user_id: Option<UserId>,
}

impl Task {
    /// データベースの行からタスクを復元する
    pub fn from_db(
        id: TaskId,
        board_id: BoardId,
        title: String,
        description: Option<String>,
        status_id: StatusId,
        assigned_user_id: Option<UserId>,
    ) -> Self {
        Self {
            id,
            board_id,
            title,
            description,
            status_id,
            assigned_user_id,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status_id(&self) -> StatusId {
        self.status_id
    }

    pub fn assigned_user_id(&self) -> Option<UserId> {
        self.assigned_user_id
    }
}

/// ボード名・ステータス名・担当者名を結合したタスク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetail {
    pub task:          Task,
    pub board_name:    String,
    pub status:        String,
    /// 未割り当ての場合は `None`（LEFT JOIN）
    pub assigned_user: Option<String>,
}

/// ステータス名・担当者名を結合したボード配下のタスク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTask {
    pub task:          Task,
    pub status:        String,
    pub assigned_user: Option<String>,
}

/// タスク作成の入力
///
/// # 不変条件
///
/// - `board_id` と `status_id` は指定済みかつ 0 ではない
/// - `title` は空文字列ではない
///
/// 参照先の存在は確認しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    board_id:         BoardId,
    title:            String,
    description:      Option<String>,
    status_id:        StatusId,
    assigned_user_id: Option<UserId>,
}

impl NewTask {
    /// 必須項目の存在を確認して作成入力を組み立てる
    ///
    /// どの項目が欠けていても同じメッセージの `Validation` エラーを返す。
    pub fn new(
        board_id: Option<i32>,
        title: Option<String>,
        description: Option<String>,
        status_id: Option<i32>,
        assigned_user_id: Option<i32>,
    ) -> Result<Self, DomainError> {
        let required = || DomainError::Validation(TASK_FIELDS_REQUIRED.to_string());

        // SERIAL は 1 から採番されるため 0 は未指定とみなす
        let board_id = board_id.filter(|id| *id != 0).ok_or_else(required)?;
        let title = title.filter(|t| !t.is_empty()).ok_or_else(required)?;
        let status_id = status_id.filter(|id| *id != 0).ok_or_else(required)?;

        Ok(Self {
            board_id: BoardId::new(board_id),
            title,
            description,
            status_id: StatusId::new(status_id),
            assigned_user_id: assigned_user_id.map(UserId::new),
        })
    }

    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status_id(&self) -> StatusId {
        self.status_id
    }

    pub fn assigned_user_id(&self) -> Option<UserId> {
        self.assigned_user_id
    }
}

/// タスク更新の入力（全項目置き換え）
///
/// `board_id` は更新対象外。`title` / `status_id` が `None` の場合は
/// DB の NOT NULL 制約違反となる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title:            Option<String>,
    pub description:      Option<String>,
    pub status_id:        Option<StatusId>,
    pub assigned_user_id: Option<UserId>,
}
