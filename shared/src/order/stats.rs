//! Order statistics
//!
//! Folds the current order list into the counts shown by table and guest
//! summaries. The result is always a fresh fold over the full list; there is
//! no incremental update path.
//!
//! ```text
//! [Order] ──► status         Pending/Processing/... totals (every order)
//!         ├─► by_table       table ─► guest ─► status counts
//!         ├─► orders_by_guest guest ─► [Order]
//!         └─► serving        by_table / unseated, non-terminal guests only
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::{GuestId, Order, OrderStatus, TableNumber};

/// Per-status order counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub rejected: usize,
    pub delivered: usize,
    pub paid: usize,
}

impl StatusCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Processing => self.processing,
            OrderStatus::Rejected => self.rejected,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Paid => self.paid,
        }
    }

    fn slot(&mut self, status: OrderStatus) -> &mut usize {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Processing => &mut self.processing,
            OrderStatus::Rejected => &mut self.rejected,
            OrderStatus::Delivered => &mut self.delivered,
            OrderStatus::Paid => &mut self.paid,
        }
    }

    /// Count one more order with `status`
    pub fn increment(&mut self, status: OrderStatus) {
        *self.slot(status) += 1;
    }

    /// Sum over all statuses
    pub fn total(&self) -> usize {
        OrderStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }

    /// Orders still in a non-terminal status
    pub fn serving(&self) -> usize {
        OrderStatus::ALL
            .iter()
            .filter(|s| s.is_serving())
            .map(|s| self.get(*s))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero entries, in display order
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (OrderStatus, usize)> + '_ {
        OrderStatus::ALL
            .into_iter()
            .map(|s| (s, self.get(s)))
            .filter(|(_, n)| *n > 0)
    }
}

impl std::ops::AddAssign for StatusCounts {
    fn add_assign(&mut self, rhs: Self) {
        for status in OrderStatus::ALL {
            *self.slot(status) += rhs.get(status);
        }
    }
}

/// Guest -> status counts, for one table
pub type GuestStatusCounts = BTreeMap<GuestId, StatusCounts>;

/// Guests that still have at least one Pending/Processing/Delivered order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServingGuests {
    /// Table -> guest -> that guest's orders at the table, by id. A guest is
    /// listed at every table where they have a non-terminal order.
    pub by_table: BTreeMap<TableNumber, BTreeMap<GuestId, Vec<Order>>>,
    /// Serving guests whose only non-terminal orders carry no table number
    /// (table deleted); all their orders, by id
    pub unseated: BTreeMap<GuestId, Vec<Order>>,
}

impl ServingGuests {
    pub fn contains(&self, guest_id: GuestId) -> bool {
        self.unseated.contains_key(&guest_id)
            || self.by_table.values().any(|g| g.contains_key(&guest_id))
    }

    /// Number of distinct serving guests
    pub fn len(&self) -> usize {
        self.guest_ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All serving guest IDs
    pub fn guest_ids(&self) -> BTreeSet<GuestId> {
        self.by_table
            .values()
            .flat_map(|g| g.keys().copied())
            .chain(self.unseated.keys().copied())
            .collect()
    }
}

/// Derived order statistics (view-model only, never persisted)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderStatistics {
    /// Counts over every order, including those without table or guest
    pub status: StatusCounts,
    /// Table -> guest -> counts; orders missing table or guest are skipped
    pub by_table: BTreeMap<TableNumber, GuestStatusCounts>,
    /// Guest -> orders, in input order
    pub orders_by_guest: BTreeMap<GuestId, Vec<Order>>,
    pub serving: ServingGuests,
}

impl OrderStatistics {
    /// Fold `orders` into a fresh statistics value
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut status = StatusCounts::default();
        let mut by_table: BTreeMap<TableNumber, GuestStatusCounts> = BTreeMap::new();
        let mut orders_by_guest: BTreeMap<GuestId, Vec<Order>> = BTreeMap::new();

        for order in orders {
            status.increment(order.status);

            if let (Some(table), Some(guest)) = (order.table_number, order.guest_id) {
                by_table
                    .entry(table)
                    .or_default()
                    .entry(guest)
                    .or_default()
                    .increment(order.status);
            }

            if let Some(guest) = order.guest_id {
                orders_by_guest.entry(guest).or_default().push(order.clone());
            }
        }

        // Serving guests per table mirror `by_table`, keeping only guests with
        // a non-terminal order at that table
        let mut serving = ServingGuests::default();
        for (table, guests) in &by_table {
            for (guest_id, counts) in guests {
                if counts.serving() == 0 {
                    continue;
                }
                let at_table = sorted_orders(
                    orders_by_guest
                        .get(guest_id)
                        .into_iter()
                        .flatten()
                        .filter(|o| o.table_number == Some(*table)),
                );
                serving
                    .by_table
                    .entry(*table)
                    .or_default()
                    .insert(*guest_id, at_table);
            }
        }
        for (guest_id, guest_orders) in &orders_by_guest {
            let serving_without_table = guest_orders
                .iter()
                .any(|o| o.status.is_serving() && o.table_number.is_none());
            if serving_without_table && !serving.contains(*guest_id) {
                serving
                    .unseated
                    .insert(*guest_id, sorted_orders(guest_orders.iter()));
            }
        }

        tracing::trace!(
            orders = orders.len(),
            tables = by_table.len(),
            guests = orders_by_guest.len(),
            serving_guests = serving.len(),
            "Order statistics recomputed"
        );

        Self {
            status,
            by_table,
            orders_by_guest,
            serving,
        }
    }

    /// Counts of one table summed over its guests
    pub fn table_totals(&self, table: TableNumber) -> StatusCounts {
        let mut totals = StatusCounts::default();
        if let Some(guests) = self.by_table.get(&table) {
            for counts in guests.values() {
                totals += *counts;
            }
        }
        totals
    }

    /// Counts of one guest at one table
    pub fn guest_counts(&self, table: TableNumber, guest_id: GuestId) -> Option<&StatusCounts> {
        self.by_table.get(&table)?.get(&guest_id)
    }

    /// Tables with at least one serving guest
    pub fn serving_table_numbers(&self) -> Vec<TableNumber> {
        self.serving.by_table.keys().copied().collect()
    }

    pub fn is_serving(&self, guest_id: GuestId) -> bool {
        self.serving.contains(guest_id)
    }

    /// Orders of a guest, empty if unknown
    pub fn guest_orders(&self, guest_id: GuestId) -> &[Order] {
        self.orders_by_guest
            .get(&guest_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Clones of `orders`, sorted by id
fn sorted_orders<'a>(orders: impl Iterator<Item = &'a Order>) -> Vec<Order> {
    let mut list: Vec<Order> = orders.cloned().collect();
    list.sort_by_key(|o| o.id);
    list
}
