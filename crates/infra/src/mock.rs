//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! taskboard-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ## PostgreSQL との対応
//!
//! 2 つのリポジトリは [`MockDatabase`] を共有し、スキーマの制約を模倣する:
//!
//! - ID は 1 から採番し、削除しても再利用しない
//! - ボード削除で所属タスクも削除する（`ON DELETE CASCADE`）
//! - 外部キー違反・NOT NULL 違反は [`InfraError::unexpected`] を返す
//! - ステータス 3 件とデモユーザーを初期投入済み

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taskboard_domain::{
    board::{Board, BoardId, BoardUpdate, NewBoard},
    status::{Status, StatusId},
    task::{BoardTask, NewTask, Task, TaskDetail, TaskId, TaskUpdate},
    user::{DEMO_USER_NAME, User, UserId},
};

use crate::{
    error::InfraError,
    repository::{BoardRepository, TaskRepository},
};

#[derive(Debug)]
struct Tables {
    boards:        Vec<Board>,
    tasks:         Vec<Task>,
    users:         Vec<User>,
    next_board_id: i32,
    next_task_id:  i32,
    next_user_id:  i32,
}

impl Tables {
    fn status_name(&self, id: StatusId) -> Option<&'static str> {
        Status::from_id(id).map(Status::name)
    }

    fn user_name(&self, id: Option<UserId>) -> Option<String> {
        id.and_then(|id| self.users.iter().find(|u| u.id() == id))
            .map(|u| u.name().to_string())
    }

    fn check_status(&self, id: StatusId) -> Result<(), InfraError> {
        match self.status_name(id) {
            Some(_) => Ok(()),
            None => Err(InfraError::unexpected(format!(
                "foreign key violation: status_id={id}"
            ))),
        }
    }

    fn check_user(&self, id: Option<UserId>) -> Result<(), InfraError> {
        match id {
            Some(id) if !self.users.iter().any(|u| u.id() == id) => Err(InfraError::unexpected(
                format!("foreign key violation: assigned_user_id={id}"),
            )),
            _ => Ok(()),
        }
    }

    fn board_task(&self, task: &Task) -> Option<BoardTask> {
        Some(BoardTask {
            task:          task.clone(),
            status:        self.status_name(task.status_id())?.to_string(),
            assigned_user: self.user_name(task.assigned_user_id()),
        })
    }

    fn task_detail(&self, task: &Task) -> Option<TaskDetail> {
        let board = self.boards.iter().find(|b| b.id() == task.board_id())?;
        let joined = self.board_task(task)?;
        Some(TaskDetail {
            task:          joined.task,
            board_name:    board.name().to_string(),
            status:        joined.status,
            assigned_user: joined.assigned_user,
        })
    }
}

/// リポジトリ間で共有するインメモリのテーブル群
#[derive(Debug, Clone)]
pub struct MockDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl Default for MockDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDatabase {
    /// ステータスとデモユーザーを投入済みのデータベースを作成する
    pub fn new() -> Self {
        let db = Self {
            tables: Arc::new(Mutex::new(Tables {
                boards:        Vec::new(),
                tasks:         Vec::new(),
                users:         Vec::new(),
                next_board_id: 1,
                next_task_id:  1,
                next_user_id:  1,
            })),
        };
        db.add_user(DEMO_USER_NAME);
        db
    }

    /// ユーザーを追加し、採番された ID を返す
    pub fn add_user(&self, name: &str) -> UserId {
        let mut tables = self.tables.lock().unwrap();
        let id = UserId::new(tables.next_user_id);
        tables.next_user_id += 1;
        tables.users.push(User::from_db(id, name.to_string()));
        id
    }

    /// 保存されているタスク数
    pub fn task_count(&self) -> usize {
        self.tables.lock().unwrap().tasks.len()
    }

    pub fn board_repository(&self) -> MockBoardRepository {
        MockBoardRepository { db: self.clone() }
    }

    pub fn task_repository(&self) -> MockTaskRepository {
        MockTaskRepository { db: self.clone() }
    }
}

// ===== MockBoardRepository =====

#[derive(Debug, Clone, Default)]
pub struct MockBoardRepository {
    db: MockDatabase,
}

#[async_trait]
impl BoardRepository for MockBoardRepository {
    async fn find_all(&self) -> Result<Vec<Board>, InfraError> {
        Ok(self.db.tables.lock().unwrap().boards.clone())
    }

    async fn find_by_id(&self, id: BoardId) -> Result<Option<Board>, InfraError> {
        Ok(self
            .db
            .tables
            .lock()
            .unwrap()
            .boards
            .iter()
            .find(|b| b.id() == id)
            .cloned())
    }

    async fn insert(&self, board: &NewBoard) -> Result<Board, InfraError> {
        let mut tables = self.db.tables.lock().unwrap();
        let id = BoardId::new(tables.next_board_id);
        tables.next_board_id += 1;
        let board = Board::from_db(
            id,
            board.name().to_string(),
            board.description().map(str::to_string),
        );
        tables.boards.push(board.clone());
        Ok(board)
    }

    async fn update(&self, id: BoardId, update: &BoardUpdate) -> Result<Option<Board>, InfraError> {
        let mut tables = self.db.tables.lock().unwrap();
        let Some(pos) = tables.boards.iter().position(|b| b.id() == id) else {
            return Ok(None);
        };
        let name = update
            .name
            .clone()
            .ok_or_else(|| InfraError::unexpected("not null violation: boards.name"))?;
        let board = Board::from_db(id, name, update.description.clone());
        tables.boards[pos] = board.clone();
        Ok(Some(board))
    }

    async fn delete(&self, id: BoardId) -> Result<bool, InfraError> {
        let mut tables = self.db.tables.lock().unwrap();
        let before = tables.boards.len();
        tables.boards.retain(|b| b.id() != id);
        if tables.boards.len() == before {
            return Ok(false);
        }
        tables.tasks.retain(|t| t.board_id() != id);
        Ok(true)
    }
}

// ===== MockTaskRepository =====

#[derive(Debug, Clone, Default)]
pub struct MockTaskRepository {
    db: MockDatabase,
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn find_all_with_refs(&self) -> Result<Vec<TaskDetail>, InfraError> {
        let tables = self.db.tables.lock().unwrap();
        Ok(tables
            .tasks
            .iter()
            .filter_map(|t| tables.task_detail(t))
            .collect())
    }

    async fn find_by_id_with_refs(&self, id: TaskId) -> Result<Option<TaskDetail>, InfraError> {
        let tables = self.db.tables.lock().unwrap();
        Ok(tables
            .tasks
            .iter()
            .find(|t| t.id() == id)
            .and_then(|t| tables.task_detail(t)))
    }

    async fn find_by_board(&self, board_id: BoardId) -> Result<Vec<BoardTask>, InfraError> {
        let tables = self.db.tables.lock().unwrap();
        Ok(tables
            .tasks
            .iter()
            .filter(|t| t.board_id() == board_id)
            .filter_map(|t| tables.board_task(t))
            .collect())
    }

    async fn insert(&self, task: &NewTask) -> Result<Task, InfraError> {
        let mut tables = self.db.tables.lock().unwrap();
        if !tables.boards.iter().any(|b| b.id() == task.board_id()) {
            return Err(InfraError::unexpected(format!(
                "foreign key violation: board_id={}",
                task.board_id()
            )));
        }
        tables.check_status(task.status_id())?;
        tables.check_user(task.assigned_user_id())?;

        let id = TaskId::new(tables.next_task_id);
        tables.next_task_id += 1;
        let task = Task::from_db(
            id,
            task.board_id(),
            task.title().to_string(),
            task.description().map(str::to_string),
            task.status_id(),
            task.assigned_user_id(),
        );
        tables.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, update: &TaskUpdate) -> Result<Option<Task>, InfraError> {
        let mut tables = self.db.tables.lock().unwrap();
        let Some(pos) = tables.tasks.iter().position(|t| t.id() == id) else {
            return Ok(None);
        };
        let title = update
            .title
            .clone()
            .ok_or_else(|| InfraError::unexpected("not null violation: tasks.title"))?;
        let status_id = update
            .status_id
            .ok_or_else(|| InfraError::unexpected("not null violation: tasks.status_id"))?;
        tables.check_status(status_id)?;
        tables.check_user(update.assigned_user_id)?;

        let task = Task::from_db(
            id,
            tables.tasks[pos].board_id(),
            title,
            update.description.clone(),
            status_id,
            update.assigned_user_id,
        );
        tables.tasks[pos] = task.clone();
        Ok(Some(task))
    }

    async fn delete(&self, id: TaskId) -> Result<bool, InfraError> {
        let mut tables = self.db.tables.lock().unwrap();
        let before = tables.tasks.len();
        tables.tasks.retain(|t| t.id() != id);
        Ok(tables.tasks.len() < before)
    }
}
