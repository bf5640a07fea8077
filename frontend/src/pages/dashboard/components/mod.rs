pub mod booking_counts;
pub mod range_filter;
pub mod summary;

pub use booking_counts::{ServiceCountsTable, StatusTotals};
pub use range_filter::RangeFilter;
pub use summary::{AmountCards, CountCards};
