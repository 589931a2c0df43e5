//! State of one list screen: fetched records, filters, and the current
//! notification.

use mejora_client::{ResourceFetcher, records_from_value};
use mejora_core::enums::ResourceKind;
use serde::de::DeserializeOwned;

use crate::filter_state::FilterState;
use crate::list::{ListRecord, filter_records, page_count, paginate};
use crate::notification::Notification;

pub struct ListScreen<T> {
    kind: ResourceKind,
    records: Vec<T>,
    pub filters: FilterState,
    notification: Option<Notification>,
}

impl<T> ListScreen<T>
where
    T: ListRecord + DeserializeOwned + Clone,
{
    #[must_use]
    pub const fn new(kind: ResourceKind, page_size: usize) -> Self {
        Self {
            kind,
            records: Vec::new(),
            filters: FilterState::new(page_size),
            notification: None,
        }
    }

    /// Fetch the resource with the current filters.
    ///
    /// On success the records are replaced. On failure an error notification
    /// carrying the server's message is set and the records stay as they were.
    /// Returns whether the fetch succeeded.
    pub async fn refresh<F: ResourceFetcher + ?Sized>(
        &mut self,
        fetcher: &F,
        token: Option<&str>,
    ) -> bool {
        let params = self.filters.to_query_params();
        match fetcher.fetch(self.kind, &params, token).await {
            Ok(value) => {
                self.records = records_from_value(value);
                self.notification = None;
                tracing::debug!(kind = %self.kind, count = self.records.len(), "list refreshed");
                true
            }
            Err(error) => {
                tracing::warn!(kind = %self.kind, %error, "list refresh failed");
                self.notification = Some(Notification::error(error.user_message()));
                false
            }
        }
    }

    /// Apply a filter change and re-fetch if anything actually changed.
    pub async fn update_filters<F: ResourceFetcher + ?Sized>(
        &mut self,
        fetcher: &F,
        token: Option<&str>,
        change: impl FnOnce(&mut FilterState),
    ) -> bool {
        let before = self.filters.clone();
        change(&mut self.filters);
        if before == self.filters {
            return false;
        }
        self.refresh(fetcher, token).await
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Records after the local predicates, before pagination.
    #[must_use]
    pub fn filtered(&self) -> Vec<T> {
        filter_records(&self.records, &self.filters.to_predicates())
    }

    /// The current page of filtered records.
    #[must_use]
    pub fn visible(&self) -> Vec<T> {
        paginate(&self.filtered(), self.filters.page, self.filters.page_size).to_vec()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len(), self.filters.page_size)
    }

    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn dismiss(&mut self) {
        self.notification = None;
    }
}
