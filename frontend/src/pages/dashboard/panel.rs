use crate::pages::dashboard::{
    components::{AmountCards, CountCards, RangeFilter, ServiceCountsTable, StatusTotals},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let on_apply = Callback::new(move |_| vm.apply_range());

    view! {
        <DashboardFrame>
            <CountCards counts=vm.counts_resource />
            <RangeFilter
                from_input=vm.from_input
                to_input=vm.to_input
                status_filter=vm.status_filter
                error=vm.range_error
                on_apply=on_apply
            />
            <AmountCards amounts=vm.amounts_resource />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ServiceCountsTable
                    counts=vm.booking_counts_resource
                    services=vm.services_resource
                    status=vm.status_filter
                />
                <StatusTotals counts=vm.booking_counts_resource />
            </div>
        </DashboardFrame>
    }
}
