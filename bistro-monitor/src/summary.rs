//! Floor summary lines
//!
//! ```text
//! Orders: Pending 1 | Processing 1 | Rejected 1 | Delivered 1 | Paid 1
//! Serving: 3 guests at 1 tables, 1 without table
//! Table 1: Guest 10 (Pending 1, Paid 1); Guest 11 (Delivered 1)
//! No table: Guest 13 (Processing 1)
//! ```

use shared::models::{GuestId, Order, OrderStatus};
use shared::order::{OrderStatistics, StatusCounts};

/// All statuses with their counts, zeros included
pub fn status_line(counts: &StatusCounts) -> String {
    OrderStatus::ALL
        .iter()
        .map(|s| format!("{} {}", s, counts.get(*s)))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Non-zero statuses only
fn compact_counts(counts: &StatusCounts) -> String {
    let parts: Vec<String> = counts
        .iter_nonzero()
        .map(|(s, n)| format!("{} {}", s, n))
        .collect();
    if parts.is_empty() {
        "no orders".to_string()
    } else {
        parts.join(", ")
    }
}

/// Display name of a guest, falling back to its id
pub fn guest_label(stats: &OrderStatistics, guest_id: GuestId) -> String {
    stats
        .guest_orders(guest_id)
        .iter()
        .find_map(Order::guest_name)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", guest_id))
}

fn counts_of(orders: &[Order]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for order in orders {
        counts.increment(order.status);
    }
    counts
}

pub fn render(stats: &OrderStatistics) -> Vec<String> {
    let mut lines = vec![format!("Orders: {}", status_line(&stats.status))];

    let serving = &stats.serving;
    lines.push(format!(
        "Serving: {} guests at {} tables, {} without table",
        serving.len(),
        serving.by_table.len(),
        serving.unseated.len()
    ));

    for (table, guests) in &serving.by_table {
        let entries: Vec<String> = guests
            .keys()
            .map(|guest_id| {
                let counts = stats
                    .guest_counts(*table, *guest_id)
                    .copied()
                    .unwrap_or_default();
                format!("{} ({})", guest_label(stats, *guest_id), compact_counts(&counts))
            })
            .collect();
        lines.push(format!("Table {}: {}", table, entries.join("; ")));
    }

    if !serving.unseated.is_empty() {
        let entries: Vec<String> = serving
            .unseated
            .iter()
            .map(|(guest_id, orders)| {
                format!(
                    "{} ({})",
                    guest_label(stats, *guest_id),
                    compact_counts(&counts_of(orders))
                )
            })
            .collect();
        lines.push(format!("No table: {}", entries.join("; ")));
    }

    lines
}
