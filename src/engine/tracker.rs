use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

use crate::actors::{Snapshot, StoreError, TransactionStore};
use crate::models::{is_suggested_category, next_transaction_id, Theme, Transaction, TransactionDraft};
use crate::report::{export, ExportError, ReportFormat};
use crate::storage::{Storage, StorageError, ThemeRepository, TransactionRepository};
use crate::views::{DashboardView, ViewCache, ViewQuery};

const VIEW_CACHE_CAPACITY: u64 = 64;

/// Ties the transaction store, derived views, report export and theme
/// preference together over one storage backend.
pub struct Tracker<S: Storage> {
    store: TransactionStore,
    themes: ThemeRepository<S>,
    views: ViewCache
}

impl<S: Storage> Tracker<S> {
    /// Spawns the store over `storage` and waits for the initial load.
    pub async fn open(storage: Arc<S>) -> Result<Self, StoreError> {
        let store = TransactionStore::spawn(TransactionRepository::new(Arc::clone(&storage)));
        store.ready().await?;

        Ok(Self {
            store,
            themes: ThemeRepository::new(storage),
            views: ViewCache::new(VIEW_CACHE_CAPACITY)
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Validates `draft` into a new transaction and stores it.
    pub async fn record(&self, draft: TransactionDraft) -> Result<Transaction> {
        let snapshot = self.snapshot();
        let transaction = draft.validate(next_transaction_id(|id| snapshot.find(id).is_some()))?;

        if !is_suggested_category(transaction.transaction_type, &transaction.category) {
            debug!("Category [{}] is not a suggested {} category", transaction.category, transaction.transaction_type.as_str());
        }

        self.store.create(transaction.clone()).await?;

        Ok(transaction)
    }

    /// Edits the transaction `id` through a draft prefilled with its current fields.
    pub async fn amend<F>(&self, id: &str, edit: F) -> Result<Transaction>
    where
        F: FnOnce(&mut TransactionDraft)
    {
        let existing = self.snapshot().find(id).cloned()
            .ok_or_else(|| anyhow!("Transaction [{id}] was not found"))?;

        let mut draft = TransactionDraft::from_transaction(&existing);
        edit(&mut draft);

        let transaction = draft.validate(existing.id)?;
        self.store.update(transaction.clone()).await?;

        Ok(transaction)
    }

    /// Deletes `id`. Returns whether it was present; an unknown id leaves the list as is.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        let existed = self.snapshot().find(id).is_some();
        self.store.delete(id.to_string()).await?;

        Ok(existed)
    }

    pub async fn dashboard(&self, query: &ViewQuery) -> Arc<DashboardView> {
        self.dashboard_at(query, &Local::now()).await
    }

    pub async fn dashboard_at<Tz>(&self, query: &ViewQuery, now: &DateTime<Tz>) -> Arc<DashboardView>
    where
        Tz: TimeZone + Send + Sync,
        Tz::Offset: Display + Send + Sync
    {
        self.views.dashboard(&self.snapshot(), query, now).await
    }

    /// Exports the transactions selected by `query`, returning how many were written.
    pub async fn export(&self, query: &ViewQuery, format: ReportFormat, path: &Path) -> Result<usize, ExportError> {
        let view = self.dashboard(query).await;
        let theme = self.theme().await;

        export(&view.transactions, format, theme, &Local, path)?;

        Ok(view.transactions.len())
    }

    pub async fn theme(&self) -> Theme {
        self.themes.load().await
    }

    pub async fn toggle_theme(&self) -> Result<Theme, StorageError> {
        let current = self.theme().await;
        self.themes.toggle(current).await
    }

    /// Waits for every queued mutation to be applied and stops the store.
    pub async fn close(self) -> Result<()> {
        self.store.close().await?;
        Ok(())
    }
}
