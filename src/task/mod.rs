use crate::entities::*;
use sea_orm::*;

pub mod web;

#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct Task {
    id: u32,
    content: String,
    complete: bool,
    created: chrono::NaiveDateTime,
}

impl Task {
    pub fn new(id: u32, content: String, complete: bool, created: chrono::NaiveDateTime) -> Self {
        Self {
            id,
            content,
            complete,
            created,
        }
    }

    /// Returns the ID of the task.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the task's text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether the task is marked complete.
    pub fn complete(&self) -> bool {
        self.complete
    }

    /// Returns the creation timestamp of the task.
    pub fn created(&self) -> chrono::NaiveDateTime {
        self.created
    }
}

impl From<task::Model> for Task {
    fn from(model: task::Model) -> Self {
        Task::new(
            model.id as u32,
            model.content,
            model.complete,
            model.created,
        )
    }
}

/// Error type for TaskService operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// Represents a task not found error.
    #[error("Task with ID {0} not found")]
    TaskNotFound(u32),
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub struct TaskService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl TaskService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> TaskService {
        TaskService { db }
    }

    /// Creates a new task with the given content.
    ///
    /// The ID and creation timestamp are assigned by the store; `complete`
    /// defaults to false.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn create_task(&self, content: String) -> Result<Task, TaskServiceError> {
        let active_model = task::ActiveModel {
            content: ActiveValue::Set(content),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        Ok(Task::from(created_model))
    }

    /// Retrieves all tasks ordered by creation time, ascending.
    ///
    /// # Returns
    ///
    /// A `Result` containing a vector of `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, TaskServiceError> {
        let tasks = task::Entity::find()
            .order_by_asc(task::Column::Created)
            .all(self.db)
            .await?
            .into_iter()
            .map(Task::from)
            .collect();
        Ok(tasks)
    }

    /// Retrieves a task by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the task to retrieve.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn get_task_by_id(&self, id: u32) -> Result<Task, TaskServiceError> {
        let task_model = task::Entity::find_by_id(id as i32)
            .one(self.db)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))?;
        Ok(Task::from(task_model))
    }

    /// Overwrites the content of a task by its ID.
    ///
    /// The ID and creation timestamp are left untouched.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the task to edit.
    /// * `new_content` - The new content for the task.
    ///
    /// # Returns
    ///
    /// A `Result` containing the updated `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn edit_task_by_id(
        &self,
        id: u32,
        new_content: String,
    ) -> Result<Task, TaskServiceError> {
        let task_to_update = task::Entity::find_by_id(id as i32)
            .one(self.db)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))?;

        let mut active_model: task::ActiveModel = task_to_update.into();
        active_model.content = ActiveValue::Set(new_content);
        let updated_model = active_model.update(self.db).await?;

        Ok(Task::from(updated_model))
    }

    /// Deletes a task by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the task to delete.
    ///
    /// # Returns
    ///
    /// A `Result` containing the deleted `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn delete_task_by_id(&self, id: u32) -> Result<Task, TaskServiceError> {
        let task_to_delete = task::Entity::find_by_id(id as i32)
            .one(self.db)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))?;

        let task_copy = Task::from(task_to_delete.clone());
        task::Entity::delete_by_id(id as i32).exec(self.db).await?;
        Ok(task_copy)
    }
}
