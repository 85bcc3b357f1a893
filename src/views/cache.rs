use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Offset, TimeZone};
use moka::future::Cache;
use tracing::trace;

use crate::actors::Snapshot;
use crate::types::Revision;
use crate::views::{DashboardView, ViewQuery};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ViewKey {
    revision: Revision,
    today: NaiveDate,
    utc_offset_seconds: i32,
    query: ViewQuery
}

/// Memoizes dashboard views per snapshot revision, local calendar day, UTC
/// offset and query.
///
/// Purely an optimization: a miss recomputes from the snapshot.
pub struct ViewCache {
    cache: Cache<ViewKey, Arc<DashboardView>>
}

impl ViewCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_idle(Duration::from_secs(300))
                .build()
        }
    }

    pub async fn dashboard<Tz>(&self, snapshot: &Snapshot, query: &ViewQuery, now: &DateTime<Tz>) -> Arc<DashboardView>
    where
        Tz: TimeZone + Send + Sync,
        Tz::Offset: Display + Send + Sync
    {
        let key = ViewKey {
            revision: snapshot.revision,
            today: now.date_naive(),
            utc_offset_seconds: now.offset().fix().local_minus_utc(),
            query: query.clone()
        };

        self.cache.get_with(key, async {
            trace!("Computing dashboard view at revision [{}] for {query:?}", snapshot.revision);
            Arc::new(DashboardView::compute(&snapshot.transactions, query, now))
        }).await
    }
}
