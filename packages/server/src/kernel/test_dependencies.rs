// TestDependencies - mock implementations for testing
//
// Provides in-memory stores that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::{BaseSnipeStore, BaseVerseStore, ServerDeps};
use crate::domains::snipes::Snipe;
use crate::domains::verses::Verse;

// =============================================================================
// Mock Verse Store
// =============================================================================

/// A single call made against the mock verse store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseStoreCall {
    FindMany,
    FindUnique(i32),
    Create(i32),
    Update(i32),
    Upsert(i32),
    Delete(i32),
}

pub struct MockVerseStore {
    verses: Arc<Mutex<BTreeMap<i32, Verse>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<VerseStoreCall>>>,
}

impl MockVerseStore {
    pub fn new() -> Self {
        Self {
            verses: Arc::new(Mutex::new(BTreeMap::new())),
            failure: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seed the store with verses
    pub fn with_verses(self, verses: Vec<Verse>) -> Self {
        {
            let mut stored = self.verses.lock().unwrap();
            for verse in verses {
                stored.insert(verse.id, verse);
            }
        }
        self
    }

    /// Make every subsequent call fail with this message
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Stop failing
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Get all calls made so far
    pub fn calls(&self) -> Vec<VerseStoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Check if the store was touched at all
    pub fn was_called(&self) -> bool {
        !self.calls.lock().unwrap().is_empty()
    }

    /// Current contents, ordered by id
    pub fn snapshot(&self) -> Vec<Verse> {
        self.verses.lock().unwrap().values().cloned().collect()
    }

    fn record(&self, call: VerseStoreCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

impl Default for MockVerseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseVerseStore for MockVerseStore {
    async fn find_many(&self) -> Result<Vec<Verse>> {
        self.record(VerseStoreCall::FindMany)?;
        Ok(self.snapshot())
    }

    async fn find_unique(&self, id: i32) -> Result<Option<Verse>> {
        self.record(VerseStoreCall::FindUnique(id))?;
        Ok(self.verses.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, verse: Verse) -> Result<Verse> {
        self.record(VerseStoreCall::Create(verse.id))?;
        let mut verses = self.verses.lock().unwrap();
        if verses.contains_key(&verse.id) {
            anyhow::bail!("Unique constraint failed on the fields: (`id`)");
        }
        verses.insert(verse.id, verse.clone());
        Ok(verse)
    }

    async fn update(&self, verse: Verse) -> Result<Verse> {
        self.record(VerseStoreCall::Update(verse.id))?;
        let mut verses = self.verses.lock().unwrap();
        match verses.get_mut(&verse.id) {
            Some(existing) => {
                *existing = verse.clone();
                Ok(verse)
            }
            None => anyhow::bail!("Record to update not found (id {})", verse.id),
        }
    }

    async fn upsert(&self, verse: Verse) -> Result<Verse> {
        self.record(VerseStoreCall::Upsert(verse.id))?;
        self.verses.lock().unwrap().insert(verse.id, verse.clone());
        Ok(verse)
    }

    async fn delete(&self, id: i32) -> Result<Verse> {
        self.record(VerseStoreCall::Delete(id))?;
        self.verses
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| anyhow::anyhow!("Record to delete does not exist (id {})", id))
    }
}

// =============================================================================
// Mock Snipe Store
// =============================================================================

pub struct MockSnipeStore {
    snipes: Arc<Mutex<Vec<Snipe>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockSnipeStore {
    pub fn new() -> Self {
        Self {
            snipes: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_snipes(self, snipes: Vec<Snipe>) -> Self {
        self.snipes.lock().unwrap().extend(snipes);
        self
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl Default for MockSnipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseSnipeStore for MockSnipeStore {
    async fn find_first(&self) -> Result<Option<Snipe>> {
        *self.calls.lock().unwrap() += 1;
        if let Some(message) = self.failure.lock().unwrap().as_ref() {
            anyhow::bail!("{}", message);
        }
        Ok(self
            .snipes
            .lock()
            .unwrap()
            .iter()
            .min_by_key(|s| s.id)
            .cloned())
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub verses: Arc<MockVerseStore>,
    pub snipes: Arc<MockSnipeStore>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            verses: Arc::new(MockVerseStore::new()),
            snipes: Arc::new(MockSnipeStore::new()),
        }
    }

    /// Set a mock verse store
    pub fn mock_verses(mut self, store: MockVerseStore) -> Self {
        self.verses = Arc::new(store);
        self
    }

    /// Set a mock snipe store
    pub fn mock_snipes(mut self, store: MockSnipeStore) -> Self {
        self.snipes = Arc::new(store);
        self
    }

    /// Build ServerDeps that share the mocks held here
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.verses.clone(), self.snipes.clone())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
