//! Order board
//!
//! Keeps the current order list and the statistics derived from it. The
//! statistics are recomputed lazily, and only when the list identity
//! changed since the last computation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use shared::models::{Order, OrderStatus, TableNumber};
use shared::order::OrderStatistics;
use shared::response::DateRange;

use crate::ClientResult;
use crate::api::OrderApi;
use crate::client::HttpClient;

/// Order list filter used by the order table view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Case-insensitive substring of the guest name
    pub guest_name: Option<String>,
    pub table_number: Option<TableNumber>,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(table) = self.table_number
            && order.table_number != Some(table)
        {
            return false;
        }
        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }
        match &self.guest_name {
            Some(needle) if !needle.is_empty() => order
                .guest_name()
                .is_some_and(|name| name.to_lowercase().contains(&needle.to_lowercase())),
            _ => true,
        }
    }
}

type Cached = (Arc<[Order]>, Arc<OrderStatistics>);

#[derive(Debug)]
pub struct OrderBoard {
    orders: Arc<[Order]>,
    cache: Mutex<Option<Cached>>,
    recomputes: AtomicUsize,
}

impl Default for OrderBoard {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl OrderBoard {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: orders.into(),
            cache: Mutex::new(None),
            recomputes: AtomicUsize::new(0),
        }
    }

    /// Replace the order list; statistics are recomputed on next access
    pub fn replace(&mut self, orders: Vec<Order>) {
        self.orders = orders.into();
    }

    /// Install a shared list; the same `Arc` keeps the cached statistics
    pub fn set_shared(&mut self, orders: Arc<[Order]>) {
        self.orders = orders;
    }

    pub fn orders(&self) -> &Arc<[Order]> {
        &self.orders
    }

    /// Statistics for the current list
    pub fn statistics(&self) -> Arc<OrderStatistics> {
        let mut cache = self.cache.lock();
        if let Some((list, stats)) = cache.as_ref()
            && Arc::ptr_eq(list, &self.orders)
        {
            return Arc::clone(stats);
        }

        let stats = Arc::new(OrderStatistics::from_orders(&self.orders));
        self.recomputes.fetch_add(1, Ordering::Relaxed);
        *cache = Some((Arc::clone(&self.orders), Arc::clone(&stats)));
        stats
    }

    /// How many times the statistics were computed
    pub fn recompute_count(&self) -> usize {
        self.recomputes.load(Ordering::Relaxed)
    }

    /// Refetch orders for `range` and replace the list
    pub async fn refresh<C: HttpClient>(
        &mut self,
        api: &OrderApi<'_, C>,
        range: DateRange,
    ) -> ClientResult<Arc<OrderStatistics>> {
        let orders = api.list(range).await?;
        tracing::debug!(count = orders.len(), "Order board refreshed");
        self.replace(orders);
        Ok(self.statistics())
    }

    pub fn filter(&self, filter: &OrderFilter) -> Vec<&Order> {
        self.orders.iter().filter(|o| filter.matches(o)).collect()
    }
}
