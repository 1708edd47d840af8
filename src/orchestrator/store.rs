use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;

use crate::contracts::{Artifact, ComposeRequest, JobRecord, JobStatus};

struct JobEntry {
    seq: u64,
    record: JobRecord,
    status: watch::Sender<JobStatus>,
}

#[derive(Default)]
struct JobTable {
    next_seq: u64,
    entries: HashMap<String, JobEntry>,
}

/// In-memory job records keyed by id.
///
/// Every write goes through one lock and bumps `updatedAt`. Status changes are
/// also published on a per-job watch channel so callers can await completion.
#[derive(Default)]
pub struct JobStore {
    table: Mutex<JobTable>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh `queued` record and return a snapshot of it.
    pub fn create(&self, id: &str, request: ComposeRequest) -> JobRecord {
        let now = Utc::now().to_rfc3339();
        let record = JobRecord {
            id: id.to_string(),
            status: JobStatus::Queued,
            request,
            artifacts: Vec::new(),
            error: None,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        let seq = table.next_seq;
        table.next_seq += 1;
        let (status, _) = watch::channel(JobStatus::Queued);
        table.entries.insert(
            id.to_string(),
            JobEntry {
                seq,
                record: record.clone(),
                status,
            },
        );
        record
    }

    pub fn get(&self, id: &str) -> Option<JobRecord> {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.entries.get(id).map(|entry| entry.record.clone())
    }

    /// All records, most recently created first.
    pub fn list(&self) -> Vec<JobRecord> {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<&JobEntry> = table.entries.values().collect();
        entries.sort_by(|a, b| b.seq.cmp(&a.seq));
        entries.into_iter().map(|entry| entry.record.clone()).collect()
    }

    pub fn subscribe(&self, id: &str) -> Option<watch::Receiver<JobStatus>> {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.entries.get(id).map(|entry| entry.status.subscribe())
    }

    pub fn len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn mark_running(&self, id: &str) {
        self.update(id, |record| record.status = JobStatus::Running);
    }

    pub(crate) fn mark_succeeded(&self, id: &str, artifacts: Vec<Artifact>) {
        self.update(id, |record| {
            record.status = JobStatus::Succeeded;
            record.artifacts = artifacts;
            record.error = None;
        });
    }

    pub(crate) fn mark_failed(&self, id: &str, error: String) {
        self.update(id, |record| {
            record.status = JobStatus::Failed;
            record.error = Some(error);
        });
    }

    fn update(&self, id: &str, apply: impl FnOnce(&mut JobRecord)) {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(entry) = table.entries.get_mut(id) else {
            tracing::warn!(job_id = %id, "update for unknown job dropped");
            return;
        };
        // Terminal records are final.
        if entry.record.status.is_terminal() {
            return;
        }
        apply(&mut entry.record);
        entry.record.updated_at = Utc::now().to_rfc3339();
        entry.status.send_replace(entry.record.status);
    }
}
