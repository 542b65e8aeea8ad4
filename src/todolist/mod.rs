use crate::task::{Priority, Status, Todo};

/// Ordered collection of todos; insertion order is display order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub items: Vec<Todo>,
}

/// Criteria applied by `view`. Unset fields match everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TodoFilter {
    pub status: Option<Status>,
    /// `Some(true)` keeps only done todos, `Some(false)` only unfinished ones.
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

impl TodoFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        if self.priority.is_some_and(|p| p != todo.priority) {
            return false;
        }
        if self.status.is_some_and(|s| s != todo.status) {
            return false;
        }
        if self.completed.is_some_and(|c| c != todo.is_done()) {
            return false;
        }
        true
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(items: Vec<Todo>) -> Self {
        Self { items }
    }
}

impl TodoList {
    pub fn push(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    pub fn extend(&mut self, todos: impl IntoIterator<Item = Todo>) {
        self.items.extend(todos);
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    /// Index of the first todo whose title equals `title` exactly.
    pub fn find_index_by_title(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|t| t.title == title)
    }

    /// Replaces the entry sharing `todo.id`. Returns false if there is none.
    pub fn replace(&mut self, todo: Todo) -> bool {
        match self.find_index_by_id(&todo.id) {
            Some(idx) => {
                self.items[idx] = todo;
                true
            }
            None => false,
        }
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<Todo> {
        let idx = self.find_index_by_id(id)?;
        Some(self.items.remove(idx))
    }

    pub fn titles(&self) -> Vec<String> {
        self.items.iter().map(|t| t.title.clone()).collect()
    }

    pub fn filtered(&self, filter: &TodoFilter) -> Vec<&Todo> {
        self.items.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
