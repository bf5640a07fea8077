use crate::api::{BookingCounts, BookingStatus, DateRange, Service};
use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

/// First through last day of the month containing `today`.
pub fn month_range(today: NaiveDate) -> DateRange {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);
    DateRange::new(Some(first), Some(last))
}

pub fn current_month_range() -> DateRange {
    month_range(chrono::Local::now().date_naive())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCountRow {
    pub service_id: String,
    pub name: String,
    pub count: u64,
}

fn status_matches(raw: &str, filter: Option<BookingStatus>) -> bool {
    match filter {
        None => true,
        Some(status) => BookingStatus::parse(raw) == Some(status),
    }
}

/// Collapses `{ date: { status: { service_id: n } } }` into totals per service.
pub fn totals_by_service(
    counts: &BookingCounts,
    status: Option<BookingStatus>,
) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for by_status in counts.values() {
        for (raw_status, by_service) in by_status {
            if !status_matches(raw_status, status) {
                continue;
            }
            for (service_id, count) in by_service {
                let total = totals.entry(service_id.clone()).or_insert(0u64);
                *total = total.saturating_add(*count);
            }
        }
    }
    totals
}

/// One row per known service (zero when absent) plus any id the counts
/// mention that is not in `services`, sorted by count then name.
pub fn service_rows(
    services: &[Service],
    counts: &BookingCounts,
    status: Option<BookingStatus>,
) -> Vec<ServiceCountRow> {
    let mut totals = totals_by_service(counts, status);
    let mut rows: Vec<ServiceCountRow> = services
        .iter()
        .map(|service| ServiceCountRow {
            service_id: service.id.clone(),
            name: service.name.clone(),
            count: totals.remove(&service.id).unwrap_or(0),
        })
        .collect();
    rows.extend(totals.into_iter().map(|(service_id, count)| ServiceCountRow {
        name: service_id.clone(),
        service_id,
        count,
    }));
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// Totals per status in workflow order. Unrecognised keys are folded into `Unknown`,
/// which is only listed when non-zero.
pub fn totals_by_status(counts: &BookingCounts) -> Vec<(BookingStatus, u64)> {
    let mut totals: BTreeMap<BookingStatus, u64> =
        BookingStatus::KNOWN.into_iter().map(|s| (s, 0)).collect();
    for by_status in counts.values() {
        for (raw_status, by_service) in by_status {
            let status = BookingStatus::parse(raw_status).unwrap_or(BookingStatus::Unknown);
            let sum = by_service.values().copied().fold(0, u64::saturating_add);
            let total = totals.entry(status).or_insert(0);
            *total = total.saturating_add(sum);
        }
    }
    totals
        .into_iter()
        .filter(|(status, count)| *status != BookingStatus::Unknown || *count > 0)
        .collect()
}
