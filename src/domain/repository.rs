use super::classify::classify_with;
use super::date::CalendarDate;
use super::enums::{DeadlineFilter, WeekRule};
use super::item::{Task, TaskDraft, TaskId};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("task {0} not found")]
    NotFound(TaskId),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Owner of the task collection and the ID counter
///
/// Tasks keep insertion order. IDs start at 1 and are never reused, even
/// after removal.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// The ID the next added task will receive
    pub fn next_id(&self) -> TaskId {
        TaskId(self.next_id)
    }

    pub fn add_task(&mut self, draft: TaskDraft) -> TaskId {
        let id = self.next_id();
        self.next_id += 1;
        debug!(task_id = %id, date = %draft.date, "task added");
        self.tasks.push(Task::new(id, draft));
        id
    }

    /// Overwrite a task's title, date and time in place
    pub fn update_task(&mut self, id: TaskId, draft: TaskDraft) -> RepoResult<()> {
        let task = self.get_mut(id).ok_or(RepoError::NotFound(id))?;
        debug!(task_id = %id, date = %draft.date, "task updated");
        task.apply(draft);
        Ok(())
    }

    pub fn remove_task(&mut self, id: TaskId) -> RepoResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(RepoError::NotFound(id))?;
        debug!(task_id = %id, "task removed");
        Ok(self.tasks.remove(index))
    }

    /// Flip a task's completed flag, returning the new value
    pub fn toggle_completed(&mut self, id: TaskId) -> RepoResult<bool> {
        let task = self.get_mut(id).ok_or(RepoError::NotFound(id))?;
        let completed = task.toggle_completed();
        debug!(task_id = %id, completed, "task completion toggled");
        Ok(completed)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks visible under `filter`, in insertion order
    pub fn visible(&self, filter: DeadlineFilter, today: CalendarDate, rule: WeekRule) -> Vec<&Task> {
        let ids = classify_with(rule, filter, today, &self.tasks);
        self.tasks.iter().filter(|task| ids.contains(&task.id)).collect()
    }
}
