//! タスク管理ユースケース

use std::sync::Arc;

use taskboard_domain::task::{NewTask, Task, TaskDetail, TaskId, TaskUpdate};
use taskboard_infra::repository::TaskRepository;

use crate::error::CoreError;

/// タスクが見つからない場合のメッセージ
pub const TASK_NOT_FOUND: &str = "Task not found";

fn not_found() -> CoreError {
    CoreError::NotFound(TASK_NOT_FOUND.to_string())
}

/// タスク作成の入力
///
/// ID は 0 を含めてそのまま受け取る。未指定判定は [`NewTask::new`] が行う。
#[derive(Debug, Default)]
pub struct CreateTaskInput {
    pub board_id:         Option<i32>,
    pub title:            Option<String>,
    pub description:      Option<String>,
    pub status_id:        Option<i32>,
    pub assigned_user_id: Option<i32>,
}

/// タスク管理ユースケース
pub struct TaskUseCaseImpl {
    task_repository: Arc<dyn TaskRepository>,
}

impl TaskUseCaseImpl {
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }

    pub async fn list_tasks(&self) -> Result<Vec<TaskDetail>, CoreError> {
        Ok(self.task_repository.find_all_with_refs().await?)
    }

    pub async fn get_task(&self, id: TaskId) -> Result<TaskDetail, CoreError> {
        self.task_repository
            .find_by_id_with_refs(id)
            .await?
            .ok_or_else(not_found)
    }

    /// タスクを作成する
    ///
    /// 1. `board_id` / `title` / `status_id` の存在を確認
    /// 2. 挿入し、結合前の行を返す
    ///
    /// 参照先の存在確認は行わない（外部キー違反は `Database`）。
    pub async fn create_task(&self, input: CreateTaskInput) -> Result<Task, CoreError> {
        let task = NewTask::new(
            input.board_id,
            input.title,
            input.description,
            input.status_id,
            input.assigned_user_id,
        )?;
        Ok(self.task_repository.insert(&task).await?)
    }

    /// タスクを更新する（全項目置き換え）
    pub async fn update_task(&self, id: TaskId, update: TaskUpdate) -> Result<Task, CoreError> {
        self.task_repository
            .update(id, &update)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete_task(&self, id: TaskId) -> Result<(), CoreError> {
        if self.task_repository.delete(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use taskboard_domain::{
        board::{BoardId, NewBoard},
        status::Status,
        task::TASK_FIELDS_REQUIRED,
        user::DEMO_USER_NAME,
    };
    use taskboard_infra::{mock::MockDatabase, repository::BoardRepository};

    use super::*;

    async fn setup() -> (MockDatabase, TaskUseCaseImpl, BoardId) {
        let db = MockDatabase::new();
        let board = db
            .board_repository()
            .insert(&NewBoard::new(Some("Test Board".to_string()), None).unwrap())
            .await
            .unwrap();
        let sut = TaskUseCaseImpl::new(Arc::new(db.task_repository()));
        (db, sut, board.id())
    }

    fn input(board_id: BoardId, title: &str) -> CreateTaskInput {
        CreateTaskInput {
            board_id: Some(board_id.as_i32()),
            title: Some(title.to_string()),
            status_id: Some(Status::Todo.id().as_i32()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_task_結合前の行を返し詳細で名前を結合する() {
        // Arrange
        let (_db, sut, board_id) = setup().await;

        // Act
        let task = sut
            .create_task(CreateTaskInput {
                description: Some("Test Description".to_string()),
                assigned_user_id: Some(1),
                ..input(board_id, "Test Task")
            })
            .await
            .unwrap();

        // Assert
        assert_eq!(task.title(), "Test Task");
        let detail = sut.get_task(task.id()).await.unwrap();
        assert_eq!(detail.task, task);
        assert_eq!(detail.board_name, "Test Board");
        assert_eq!(detail.status, "Todo");
        assert_eq!(detail.assigned_user.as_deref(), Some(DEMO_USER_NAME));
    }

    #[rstest]
    #[case::ボードなし(false, true, true)]
    #[case::タイトルなし(true, false, true)]
    #[case::ステータスなし(true, true, false)]
    #[case::タイトルのみ(false, true, false)]
    #[case::すべてなし(false, false, false)]
    #[tokio::test]
    async fn test_create_task_必須項目が欠けるとbad_request(
        #[case] has_board: bool,
        #[case] has_title: bool,
        #[case] has_status: bool,
    ) {
        let (db, sut, board_id) = setup().await;
        let base = input(board_id, "t");
        let request = CreateTaskInput {
            board_id: base.board_id.filter(|_| has_board),
            title: base.title.filter(|_| has_title),
            status_id: base.status_id.filter(|_| has_status),
            ..Default::default()
        };

        let result = sut.create_task(request).await;

        assert!(
            matches!(result, Err(CoreError::BadRequest(ref msg)) if msg == TASK_FIELDS_REQUIRED)
        );
        assert_eq!(db.task_count(), 0);
    }

    #[tokio::test]
    async fn test_create_task_存在しないボードはデータベースエラー() {
        let (_db, sut, _board_id) = setup().await;

        let result = sut.create_task(input(BoardId::new(9999), "t")).await;

        assert!(matches!(result, Err(CoreError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_task_存在しないidはnot_found() {
        let (_db, sut, _board_id) = setup().await;

        let result = sut.get_task(TaskId::new(9999)).await;

        assert!(matches!(result, Err(CoreError::NotFound(ref msg)) if msg == TASK_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_task_board_idは変わらず全項目を置き換える() {
        // Arrange
        let (_db, sut, board_id) = setup().await;
        let task = sut
            .create_task(CreateTaskInput {
                description: Some("before".to_string()),
                assigned_user_id: Some(1),
                ..input(board_id, "before")
            })
            .await
            .unwrap();

        // Act
        let updated = sut
            .update_task(
                task.id(),
                TaskUpdate {
                    title: Some("after".to_string()),
                    status_id: Some(Status::Done.id()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(updated.board_id(), board_id);
        assert_eq!(updated.title(), "after");
        assert_eq!(updated.description(), None);
        assert_eq!(updated.status_id(), Status::Done.id());
        assert_eq!(updated.assigned_user_id(), None);
    }

    #[tokio::test]
    async fn test_update_task_存在しないidは入力に関係なくnot_found() {
        let (_db, sut, _board_id) = setup().await;

        let result = sut
            .update_task(TaskId::new(9999), TaskUpdate::default())
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_task_二度目はnot_found() {
        let (_db, sut, board_id) = setup().await;
        let task = sut.create_task(input(board_id, "t")).await.unwrap();

        sut.delete_task(task.id()).await.unwrap();
        let result = sut.delete_task(task.id()).await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
        assert!(sut.list_tasks().await.unwrap().is_empty());
    }
}
