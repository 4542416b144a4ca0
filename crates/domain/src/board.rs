//! # ボード
//!
//! タスクをまとめる名前付きのコレクション。
//!
//! ## ライフサイクル
//!
//! - 作成: 名前（必須）と説明（任意）を指定して挿入
//! - 更新: 名前と説明を無条件に置き換える（省略した項目は null になる）
//! - 削除: ID 指定で削除。所属タスクは DB の `ON DELETE CASCADE` で削除される

use crate::DomainError;

define_serial_id! {
    /// ボードの一意識別子
    pub struct BoardId;
}

/// ボード名が欠けている場合のエラーメッセージ
pub const BOARD_NAME_REQUIRED: &str = "Board name is required";

/// ボードエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    id:          BoardId,
    name:        String,
    description: Option<String>,
}

impl Board {
    /// データベースの行からボードを復元する
    pub fn from_db(id: BoardId, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// ボード作成の入力
///
/// # 不変条件
///
/// - `name` は空文字列ではない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoard {
    name:        String,
    description: Option<String>,
}

impl NewBoard {
    /// 必須項目の存在を確認して作成入力を組み立てる
    ///
    /// 名前が `None` または空文字列の場合は `Validation` エラー。
    /// 空白のみの名前は受け付ける（トリムしない）。
    pub fn new(name: Option<String>, description: Option<String>) -> Result<Self, DomainError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::Validation(BOARD_NAME_REQUIRED.to_string()))?;

        Ok(Self { name, description })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// ボード更新の入力（全項目置き換え）
///
/// 存在チェックは行わない。`name` が `None` の場合は
/// DB の NOT NULL 制約違反となる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardUpdate {
    pub name:        Option<String>,
    pub description: Option<String>,
}
