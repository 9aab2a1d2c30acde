//! Mock repository implementations for testing
//!
//! In-memory stores for the core ports plus a backend wrapper that counts
//! calls and injects failures, so editor tests can assert on exactly how
//! many refetches happened.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use servdesk_core::{HolidayStore, PolicyStore, SlaBackend, SlaConfigService};
use servdesk_domain::{Holiday, NewHoliday, Result as DomainResult, ServdeskError, SlaPolicy};

/// In-memory mock for `PolicyStore`.
///
/// Can be seeded with a raw (possibly partial) document.
#[derive(Default)]
pub struct MockPolicyStore {
    document: Mutex<Option<Value>>,
    saves: AtomicUsize,
}

impl MockPolicyStore {
    pub fn with_document(document: Value) -> Self {
        Self { document: Mutex::new(Some(document)), saves: AtomicUsize::new(0) }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn document(&self) -> Option<Value> {
        self.document.lock().unwrap().clone()
    }
}

#[async_trait]
impl PolicyStore for MockPolicyStore {
    async fn load(&self) -> DomainResult<Option<Value>> {
        Ok(self.document.lock().unwrap().clone())
    }

    async fn save(&self, policy: &SlaPolicy) -> DomainResult<()> {
        let value = serde_json::to_value(policy)
            .map_err(|e| ServdeskError::Internal(e.to_string()))?;
        *self.document.lock().unwrap() = Some(value);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory mock for `HolidayStore`, kept sorted by date.
#[derive(Default)]
pub struct MockHolidayStore {
    holidays: Mutex<Vec<Holiday>>,
}

impl MockHolidayStore {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays: Mutex::new(holidays) }
    }
}

#[async_trait]
impl HolidayStore for MockHolidayStore {
    async fn list(&self) -> DomainResult<Vec<Holiday>> {
        let mut holidays = self.holidays.lock().unwrap().clone();
        holidays.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        Ok(holidays)
    }

    async fn insert(&self, holiday: &Holiday) -> DomainResult<()> {
        self.holidays.lock().unwrap().push(holiday.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let mut holidays = self.holidays.lock().unwrap();
        let before = holidays.len();
        holidays.retain(|h| h.id != id);
        Ok(holidays.len() != before)
    }
}

/// Wraps an in-process `SlaConfigService`, counting calls and optionally
/// failing them with a network error.
pub struct CountingBackend {
    inner: SlaConfigService,
    pub fetch_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub fail_fetch: AtomicBool,
    pub fail_save: AtomicBool,
    pub fail_mutations: AtomicBool,
}

impl CountingBackend {
    pub fn new(policies: Arc<dyn PolicyStore>, holidays: Arc<dyn HolidayStore>) -> Self {
        Self {
            inner: SlaConfigService::new(policies, holidays),
            fetch_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            fail_fetch: AtomicBool::new(false),
            fail_save: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
        }
    }

    pub fn empty() -> Self {
        Self::new(Arc::new(MockPolicyStore::default()), Arc::new(MockHolidayStore::default()))
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    fn unavailable() -> ServdeskError {
        ServdeskError::Network("connection refused".into())
    }
}

#[async_trait]
impl SlaBackend for CountingBackend {
    async fn fetch_configuration(&self) -> DomainResult<Value> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.get_configuration().await
    }

    async fn save_configuration(&self, policy: &SlaPolicy) -> DomainResult<SlaPolicy> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.save_configuration(policy.clone()).await
    }

    async fn list_holidays(&self) -> DomainResult<Vec<Holiday>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_holidays().await
    }

    async fn create_holiday(&self, holiday: &NewHoliday) -> DomainResult<Holiday> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.create_holiday(holiday.clone()).await
    }

    async fn delete_holiday(&self, id: &str) -> DomainResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.delete_holiday(id).await
    }
}
