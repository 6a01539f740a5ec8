use crate::task::Task;

/// Result of applying the pending -> done transition to one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Marked,
    AlreadyDone,
    NotFound,
}

/// Ordered collection of tasks. Insertion order is display order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next added task receives: one past the current length.
    ///
    /// Only unique while tasks are never removed; reloading a file whose ids
    /// were edited by hand can still produce a collision.
    pub fn next_id(&self) -> u32 {
        u32::try_from(self.tasks.len()).map_or(u32::MAX, |len| len.saturating_add(1))
    }

    /// Appends a pending task. The title is expected to be validated already.
    pub fn add_task(&mut self, title: String, description: String, created_at: String) -> &Task {
        let task = Task::new(self.next_id(), title, description, created_at);
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Index of the first task with the given id, scanning in order.
    fn position(&self, id: u32) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn find(&self, id: u32) -> Option<&Task> {
        self.position(id).map(|index| &self.tasks[index])
    }

    pub fn mark_done(&mut self, id: u32, completed_at: String) -> Transition {
        let Some(index) = self.position(id) else {
            return Transition::NotFound;
        };
        let task = &mut self.tasks[index];
        if task.done {
            return Transition::AlreadyDone;
        }
        task.done = true;
        task.completed_at = Some(completed_at);
        Transition::Marked
    }
}
