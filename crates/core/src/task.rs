// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The task data model: identifiers, the kernel-kind/status enumerations and
//! the central `TaskState` record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

crate::define_id! {
    /// Opaque, globally unique task identifier.
    #[derive(Default)]
    pub struct TaskId;
}

crate::define_id! {
    /// Opaque user identifier, supplied by the caller on `/create`.
    #[derive(Default)]
    pub struct UserId;
}

/// Kernel kind a task runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Delays,
    Location,
    Fault,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Delays => "delays",
            TaskType::Location => "location",
            TaskType::Fault => "fault",
        }
    }
}

impl std::str::FromStr for TaskType {
    type Err = InvalidTaskType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delays" => Ok(TaskType::Delays),
            "location" => Ok(TaskType::Location),
            "fault" => Ok(TaskType::Fault),
            other => Err(InvalidTaskType(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid task type: {0}")]
pub struct InvalidTaskType(pub String);

/// Task lifecycle status. See spec §3 for the transition diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    New,
    Ready,
    Running,
    Failed,
    Finished,
    Killed,
}

impl TaskStatus {
    /// Terminal statuses are the ones from which no further worker or pull
    /// transition fires except acceptance-driven removal.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Failed | TaskStatus::Finished | TaskStatus::Killed
        )
    }
}

/// Sentinel pid for tasks that are not currently running.
pub const NO_PID: i64 = -1;

/// The central task record. Mirrors `gstream.models.TaskState`.
///
/// `user_id` and `task_id` are not part of the JSON embedded under a task's
/// `:State` key (the store recovers them from the key itself); they are
/// skipped on (de)serialization and must be filled in by the caller after a
/// read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskState {
    #[serde(skip)]
    pub user_id: UserId,
    #[serde(skip)]
    pub task_id: TaskId,
    #[serde(rename = "type")]
    pub type_: TaskType,
    pub status: TaskStatus,
    pub is_accepted: bool,
    pub pid: i64,
    pub is_need_kill: bool,
    pub modified_at: u64,
    pub init_script_filename: String,
    pub input_args_filename: String,
    pub output_args_filename: String,
    pub script_filename: String,
}

impl TaskState {
    /// Build a brand-new task record in status `new`, with freshly generated
    /// artifact filenames and task id.
    pub fn new(user_id: UserId, type_: TaskType, modified_at: u64) -> Self {
        Self {
            user_id,
            task_id: TaskId::new(Uuid::new_v4().simple().to_string()),
            type_,
            status: TaskStatus::New,
            is_accepted: false,
            pid: NO_PID,
            is_need_kill: false,
            modified_at,
            init_script_filename: format!("{}.py", Uuid::new_v4().simple()),
            input_args_filename: Uuid::new_v4().simple().to_string(),
            output_args_filename: Uuid::new_v4().simple().to_string(),
            script_filename: format!("{}.py", Uuid::new_v4().simple()),
        }
    }

    /// The full set of filesystem artifacts owned by this task. No task ever
    /// writes a file outside this set (spec §3 invariant).
    pub fn all_filenames(&self) -> [&str; 4] {
        [
            self.input_args_filename.as_str(),
            self.script_filename.as_str(),
            self.output_args_filename.as_str(),
            self.init_script_filename.as_str(),
        ]
    }

    /// Worker-initiated rollback on retryable resource exhaustion: return to
    /// `ready` and clear the pid.
    pub fn rollback(&mut self) {
        self.status = TaskStatus::Ready;
        self.pid = NO_PID;
    }

    /// True once both input and script artifacts exist is a file-store
    /// question; this only checks the status precondition for `/run`.
    pub fn is_new(&self) -> bool {
        self.status == TaskStatus::New
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
