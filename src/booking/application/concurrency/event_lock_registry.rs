use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::booking::domain::model::value_objects::{event_id::EventId, tenant_id::TenantId};

/// Hands out one async mutex per (tenant, event) pair. Holding it across
/// the read-count/decide/write sequence is what keeps two concurrent
/// admissions from both seeing the last free seat; different events and
/// different tenants never contend.
pub struct EventLockRegistry {
    locks: Mutex<HashMap<(Uuid, Uuid), Arc<Mutex<()>>>>,
}

impl EventLockRegistry {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub async fn lock_for(&self, tenant_id: &TenantId, event_id: &EventId) -> Arc<Mutex<()>> {
        let mut guard = self.locks.lock().await;
        guard
            .entry((tenant_id.value(), event_id.value()))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl Default for EventLockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
