use crate::{api::BookingStatus, pages::bookings::utils::status_badge_class};
use leptos::*;

#[component]
pub fn StatusBadge(status: BookingStatus) -> impl IntoView {
    let class = format!(
        "inline-flex rounded-full px-2 py-0.5 text-xs font-semibold {}",
        status_badge_class(status)
    );
    view! { <span class=class>{status.label()}</span> }
}
