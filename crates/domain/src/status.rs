//! # ステータス
//!
//! タスクのワークフローラベル。初期化スクリプトで一度だけ投入され、
//! API から作成・更新・削除されることはない。
//!
//! タスクの `status_id` は呼び出し側が自由に指定する参照であり、
//! 状態遷移の管理は行わない。存在しない ID は DB の外部キー制約で拒否される。

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

define_serial_id! {
    /// ステータスの一意識別子
    pub struct StatusId;
}

/// 初期投入されるステータス
///
/// 宣言順が投入順であり、ID は 1 から順に採番される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr, strum::Display)]
pub enum Status {
    #[strum(serialize = "Todo")]
    Todo,
    #[strum(serialize = "In Progress")]
    InProgress,
    #[strum(serialize = "Done")]
    Done,
}

impl Status {
    /// 初期投入時に採番される ID
    pub fn id(self) -> StatusId {
        match self {
            Self::Todo => StatusId::new(1),
            Self::InProgress => StatusId::new(2),
            Self::Done => StatusId::new(3),
        }
    }

    /// 表示名（`status.name` カラムの値）
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// ID からステータスを引く
    pub fn from_id(id: StatusId) -> Option<Self> {
        Self::iter().find(|s| s.id() == id)
    }
}
