use crate::models::{NewTask, Task};

/// A single day's task list. Purely local: tasks never leave the store
/// and ids are assigned by insertion order, never reused.
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    tasks: Vec<Task>,
    next_id: i64,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Flip completion for the matching task. Unknown ids are a silent
    /// no-op; a stale toggle from the UI is harmless.
    pub fn toggle_task(&mut self, task_id: i64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            task.completed = !task.completed;
        }
    }

    /// Append entries in input order, skipping any with a blank label or
    /// time. Ids continue the existing sequence. Returns how many were
    /// actually added.
    pub fn add_tasks(&mut self, entries: &[NewTask]) -> usize {
        let mut added = 0;
        for entry in entries {
            let label = entry.label.trim();
            let time = entry.time.trim();
            if label.is_empty() || time.is_empty() {
                continue;
            }
            self.next_id += 1;
            self.tasks.push(Task {
                id: self.next_id,
                label: label.to_string(),
                time: time.to_string(),
                completed: false,
            });
            added += 1;
        }
        added
    }

    /// Discard the current plan and start a new one; ids restart at 1.
    pub fn replace_plan(&mut self, entries: &[NewTask]) {
        self.tasks.clear();
        self.next_id = 0;
        self.add_tasks(entries);
    }

    /// Remove a task while authoring. Unknown ids are a no-op.
    pub fn remove_task(&mut self, task_id: i64) {
        self.tasks.retain(|t| t.id != task_id);
    }

    /// `(completed, total)` for the current plan.
    pub fn completion_summary(&self) -> (usize, usize) {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        (completed, self.tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tasks_with_empty_input_changes_nothing() {
        let mut store = PlanStore::new();
        assert_eq!(store.add_tasks(&[]), 0);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn blank_label_or_time_is_filtered_out() {
        let mut store = PlanStore::new();
        let added = store.add_tasks(&[
            NewTask::new("", "8:00"),
            NewTask::new("Drink water", "   "),
            NewTask::new("Morning meditation", "7:00"),
        ]);
        assert_eq!(added, 1);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].label, "Morning meditation");
    }

    #[test]
    fn ids_continue_across_additions_and_are_never_reused() {
        let mut store = PlanStore::new();
        store.add_tasks(&[NewTask::new("Walk", "7:00"), NewTask::new("Stretch", "18:00")]);
        store.remove_task(2);
        store.add_tasks(&[NewTask::new("Journal", "21:00")]);

        let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn completion_summary_counts_toggled_tasks() {
        let mut store = PlanStore::new();
        store.replace_plan(&[NewTask::new("Walk", "7:00"), NewTask::new("Stretch", "18:00")]);

        let walk_id = store.tasks()[0].id;
        store.toggle_task(walk_id);

        assert_eq!(store.completion_summary(), (1, 2));
    }

    #[test]
    fn toggle_of_unknown_id_is_a_no_op() {
        let mut store = PlanStore::new();
        store.add_tasks(&[NewTask::new("Walk", "7:00")]);
        store.toggle_task(42);
        assert_eq!(store.completion_summary(), (0, 1));
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut store = PlanStore::new();
        store.add_tasks(&[NewTask::new("Walk", "7:00")]);
        let id = store.tasks()[0].id;
        store.toggle_task(id);
        store.toggle_task(id);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn replace_plan_restarts_ids_at_one() {
        let mut store = PlanStore::new();
        store.add_tasks(&[
            NewTask::new("Walk", "7:00"),
            NewTask::new("Stretch", "18:00"),
            NewTask::new("Journal", "21:00"),
        ]);
        store.replace_plan(&[NewTask::new("Swim", "6:30")]);

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, 1);
    }
}
