// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Redis-backed task store (C2, spec §4.2): task state, per-user
//! indexing and logs, all TTL-bounded. Key layout:
//!
//! ```text
//! User:{user_id}:Task:{task_id}:State                   -> JSON(TaskState, less user_id/task_id)
//! User:{user_id}:Task:{task_id}:InputArgumentsFilename
//! User:{user_id}:Task:{task_id}:ScriptFilename
//! User:{user_id}:Task:{task_id}:OutputArgumentsFilename
//! User:{user_id}:Task:{task_id}:InitScriptFilename
//! Log:{task_id}                                          -> append-only text
//! ```

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use gst_core::{Clock, SystemClock, TaskId, TaskState, TaskStatus, UserId};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::error::StoreError;

const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NOT_FOUND_LOG: &str = "Log not found";
pub const DEFAULT_TTL: Duration = Duration::from_secs(3 * 3600);

fn format_log_line(message: &str) -> String {
    format!("[{}] {}\n", Local::now().format(LOG_TIMESTAMP_FORMAT), message)
}

/// Connection parameters recovered from the environment (spec §6).
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub db_index: i64,
}

impl RedisConfig {
    pub fn to_url(&self) -> String {
        match &self.password {
            Some(pw) if !pw.is_empty() => {
                format!("redis://:{}@{}:{}/{}", pw, self.host, self.port, self.db_index)
            }
            _ => format!("redis://{}:{}/{}", self.host, self.port, self.db_index),
        }
    }
}

/// Task store over Redis. Cheaply clonable — `ConnectionManager` multiplexes
/// internally and reconnects on failure.
#[derive(Clone)]
pub struct TaskStore {
    conn: ConnectionManager,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TaskStore {
    pub async fn connect(config: &RedisConfig, ttl: Duration) -> Result<Self, StoreError> {
        Self::connect_with_clock(config, ttl, Arc::new(SystemClock)).await
    }

    /// Same as [`Self::connect`] but with an injectable clock, so
    /// `modified_at` bumps can be driven by a `FakeClock` in tests.
    pub async fn connect_with_clock(
        config: &RedisConfig,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StoreError> {
        let client = redis::Client::open(config.to_url())?;
        let conn = client.get_connection_manager().await?;
        Ok(Self { conn, ttl, clock })
    }

    fn state_pattern(task_id: &TaskId) -> String {
        format!("*Task:{}:State", task_id.as_str())
    }

    fn task_pattern(task_id: &TaskId) -> String {
        format!("*Task:{}*", task_id.as_str())
    }

    fn log_key(task_id: &TaskId) -> String {
        format!("Log:{}", task_id.as_str())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.keys(pattern).await?)
    }

    async fn strip_key(&self, pattern: &str) -> Result<Option<String>, StoreError> {
        let mut keys = self.keys(pattern).await?;
        Ok(if keys.is_empty() { None } else { Some(keys.remove(0)) })
    }

    async fn set_expiration(&self, pattern: &str) -> Result<(), StoreError> {
        let keys = self.keys(pattern).await?;
        let mut conn = self.conn.clone();
        for key in keys {
            let _: () = conn.expire(&key, self.ttl.as_secs() as i64).await?;
        }
        Ok(())
    }

    pub async fn is_task_exist(&self, task_id: &TaskId) -> Result<bool, StoreError> {
        Ok(!self.keys(&Self::task_pattern(task_id)).await?.is_empty())
    }

    /// Fails if a record already exists for `task_id`; writes all keys;
    /// refreshes TTL; appends log "Task was created".
    pub async fn add_task(&self, state: &TaskState) -> Result<(), StoreError> {
        if self.is_task_exist(&state.task_id).await? {
            return Err(StoreError::TaskConflict);
        }

        let mut state = state.clone();
        state.modified_at = self.clock.now_unix();

        let prefix = format!("User:{}:Task:{}", state.user_id.as_str(), state.task_id.as_str());
        let state_json = serde_json::to_string(&state)?;

        let mapping: Vec<(String, String)> = vec![
            (format!("{prefix}:State"), state_json),
            (format!("{prefix}:InputArgumentsFilename"), state.input_args_filename.clone()),
            (format!("{prefix}:ScriptFilename"), state.script_filename.clone()),
            (format!("{prefix}:OutputArgumentsFilename"), state.output_args_filename.clone()),
            (format!("{prefix}:InitScriptFilename"), state.init_script_filename.clone()),
        ];

        let mut conn = self.conn.clone();
        let _: () = conn.mset(&mapping).await?;
        self.set_expiration(&format!("{prefix}*")).await?;
        self.add_log_message(&state.task_id, "Task was created").await?;
        Ok(())
    }

    /// Writes `:State`; appends log "Task state was updated". `modified_at`
    /// is refreshed on the model itself, to the store's clock, prior to
    /// serialization (spec §3, §4.2) — callers never need to stamp it.
    pub async fn update_task_state(&self, task_id: &TaskId, state: &TaskState) -> Result<(), StoreError> {
        let key = self
            .strip_key(&Self::state_pattern(task_id))
            .await?
            .ok_or(StoreError::TaskNotFound)?;

        let mut state = state.clone();
        state.modified_at = self.clock.now_unix();

        let mut conn = self.conn.clone();
        let json = serde_json::to_string(&state)?;
        let _: () = conn.set(&key, json).await?;
        self.add_log_message(task_id, "Task state was updated").await?;
        Ok(())
    }

    /// Reconstructs the full record, recovering `user_id`/`task_id` from the
    /// matched key.
    pub async fn get_task_state(&self, task_id: &TaskId) -> Result<TaskState, StoreError> {
        if !self.is_task_exist(task_id).await? {
            return Err(StoreError::TaskNotFound);
        }

        let key = self
            .strip_key(&Self::state_pattern(task_id))
            .await?
            .ok_or(StoreError::TaskNotFound)?;

        let mut conn = self.conn.clone();
        let raw: String = conn.get(&key).await?;
        let mut state: TaskState = serde_json::from_str(&raw)?;

        let user_id = self.get_user_id(task_id).await?;
        state.user_id = user_id;
        state.task_id = task_id.clone();
        Ok(state)
    }

    pub async fn get_user_id(&self, task_id: &TaskId) -> Result<UserId, StoreError> {
        for key in self.keys(&Self::task_pattern(task_id)).await? {
            let parts: Vec<&str> = key.split(':').collect();
            if parts.len() >= 4 && parts[3] == task_id.as_str() {
                return Ok(UserId::new(parts[1]));
            }
        }
        Err(StoreError::TaskNotFound)
    }

    pub async fn get_user_task_ids(&self, user_id: &UserId) -> Result<HashSet<TaskId>, StoreError> {
        let pattern = format!("User:{}:Task:*", user_id.as_str());
        let mut ids = HashSet::new();
        for key in self.keys(&pattern).await? {
            if let Some(task_id) = key.split(':').nth(3) {
                ids.insert(TaskId::new(task_id));
            }
        }
        Ok(ids)
    }

    pub async fn active_users(&self) -> Result<HashSet<UserId>, StoreError> {
        let mut users = HashSet::new();
        for key in self.keys("User:*").await? {
            if let Some(user_id) = key.split(':').nth(1) {
                users.insert(UserId::new(user_id));
            }
        }
        Ok(users)
    }

    pub async fn all_task_ids(&self) -> Result<Vec<TaskId>, StoreError> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for key in self.keys("*Task:*").await? {
            if let Some(task_id) = key.split(':').nth(3) {
                if seen.insert(task_id.to_string()) {
                    ids.push(TaskId::new(task_id));
                }
            }
        }
        Ok(ids)
    }

    pub async fn active_task_ids(&self) -> Result<Vec<TaskId>, StoreError> {
        let mut active = Vec::new();
        for task_id in self.all_task_ids().await? {
            match self.get_task_state(&task_id).await {
                Ok(state) if state.status == TaskStatus::Running => active.push(task_id),
                _ => continue,
            }
        }
        Ok(active)
    }

    /// Union of artifact filenames across all tasks (used by the
    /// reconciliation loop, L1).
    pub async fn all_filenames(&self) -> Result<HashSet<String>, StoreError> {
        let mut filenames = HashSet::new();
        for task_id in self.all_task_ids().await? {
            let state = self.get_task_state(&task_id).await?;
            filenames.extend(state.all_filenames().iter().map(|s| s.to_string()));
        }
        Ok(filenames)
    }

    pub async fn add_log_message(&self, task_id: &TaskId, text: &str) -> Result<(), StoreError> {
        let key = Self::log_key(task_id);
        let existing = self.strip_key(&key).await?;
        let mut conn = self.conn.clone();
        let line = format_log_line(text);

        if existing.is_none() {
            let _: () = conn.set(&key, line).await?;
            self.set_expiration(&key).await?;
        } else {
            let _: () = conn.append(&key, line).await?;
        }
        Ok(())
    }

    pub async fn get_log(&self, task_id: &TaskId) -> Result<String, StoreError> {
        let key = Self::log_key(task_id);
        match self.strip_key(&key).await? {
            None => Ok(NOT_FOUND_LOG.to_string()),
            Some(key) => {
                let mut conn = self.conn.clone();
                Ok(conn.get(&key).await?)
            }
        }
    }

    /// Deletes `:State` and `Log:{task_id}`. Other per-task keys are left to
    /// expire under TTL (spec §4.2).
    pub async fn remove_task(&self, task_id: &TaskId) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        if let Some(key) = self.strip_key(&Self::state_pattern(task_id)).await? {
            let _: () = conn.del(&key).await?;
        }
        let _: () = conn.del(Self::log_key(task_id)).await?;
        Ok(())
    }

    /// Releases the underlying connection (spec §4.2). `ConnectionManager`
    /// holds no resources beyond the connection itself, so this is just a
    /// consuming drop — kept as an explicit method so callers have the
    /// contracted shutdown hook rather than relying on `Drop` timing.
    pub fn close(self) {
        drop(self);
    }
}

#[cfg(test)]
#[path = "redis_store_tests.rs"]
mod tests;
