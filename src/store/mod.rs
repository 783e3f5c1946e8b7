// store/mod.rs — In-memory task store.
//
// Sole source of truth for task records. All structural validation lives
// in the REST layer; the store trusts its caller and never rejects input.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

// ─── Task model ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A single task record as stored and as serialized on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Set once at creation, never touched by updates.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update, including validated no-ops.
    pub updated_at: DateTime<Utc>,
}

/// Creation input. The title must already be validated (non-blank, trimmed)
/// by the caller; the remaining fields fall back to their defaults.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

/// Partial update. `None` means "leave the stored value unchanged" — the
/// REST layer only sets fields the client explicitly supplied, so an
/// omitted field can never overwrite a stored value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// In-memory task collection keyed by id, insertion-ordered.
///
/// Every operation takes the lock for its full duration, so a concurrent
/// reader sees either the pre-update or the fully merged record, never an
/// intermediate state. Conflicting updates to the same id are last-write-wins.
pub struct TaskStore {
    tasks: RwLock<IndexMap<String, Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(IndexMap::new()),
        }
    }

    /// All current tasks, in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<Task> {
        self.tasks.read().await.get(id).cloned()
    }

    /// Insert a new record with a fresh id and identical created/updated
    /// timestamps. Always succeeds.
    pub async fn create(&self, new: NewTask) -> Task {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description.unwrap_or_default(),
            status: new.status.unwrap_or_default(),
            priority: new.priority.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.tasks
            .write()
            .await
            .insert(task.id.clone(), task.clone());
        task
    }

    /// Merge `patch` over the existing record. `id` and `created_at` are
    /// re-asserted from the stored record; `updated_at` is stamped to now.
    /// Returns `None` without side effect when the id is unknown.
    pub async fn update(&self, id: &str, patch: TaskPatch) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let existing = tasks.get_mut(id)?;
        if let Some(title) = patch.title {
            existing.title = title;
        }
        if let Some(description) = patch.description {
            existing.description = description;
        }
        if let Some(status) = patch.status {
            existing.status = status;
        }
        if let Some(priority) = patch.priority {
            existing.priority = priority;
        }
        existing.updated_at = Utc::now();
        Some(existing.clone())
    }

    /// Remove the record if present. Idempotent — `false` when absent.
    pub async fn delete(&self, id: &str) -> bool {
        // shift_remove keeps the remaining entries in insertion order.
        self.tasks.write().await.shift_remove(id).is_some()
    }

    /// Full-state reset. Test support only; not reachable from the API.
    pub async fn clear(&self) {
        self.tasks.write().await.clear();
    }

    pub async fn count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
