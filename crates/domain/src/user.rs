//! # ユーザー
//!
//! タスクの担当者。ID と名前だけを持つ最小限のエンティティで、
//! この API には CRUD の窓口がない。タスクから ID で参照されるのみ。

define_serial_id! {
    /// ユーザーの一意識別子
    pub struct UserId;
}

/// 初期化スクリプトが投入するデモユーザーの名前
pub const DEMO_USER_NAME: &str = "Demo User";

/// ユーザーエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:   UserId,
    name: String,
}

impl User {
    pub fn from_db(id: UserId, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
