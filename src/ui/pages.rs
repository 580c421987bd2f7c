//! Page bodies rendered inside the shell.

use leptos::{component, view, IntoView};

use crate::core::data::Summary;
use crate::core::format::{format_count, format_inr};
use crate::ui::components::{Button, Card};
use crate::ui::table::{DataTableView, TableModel};

/// Overview cards for the dashboard page.
#[component]
pub fn OverviewCards(summary: Summary) -> impl IntoView {
    let value = format_inr(summary.total_inventory_value);
    let units = format!("{} units in stock", format_count(summary.total_units));
    let low_stock = summary.low_stock_items.to_string();
    let expiring = format!("{} expiring soon", summary.near_expiry_items);
    let pending = summary.pending_orders.to_string();
    let active = summary.active_hospitals.to_string();

    view! {
        <div class="cards">
            <Card title="Total Inventory Value" value=value description=units/>
            <Card title="Low Stock Items" value=low_stock description=expiring/>
            <Card title="Pending Orders" value=pending description="Awaiting acceptance"/>
            <Card title="Active Hospitals" value=active description="Partner hospitals ordering"/>
        </div>
    }
}

/// A table with an optional row of page-level buttons above it.
#[component]
pub fn TablePage(buttons: &'static [&'static str], model: TableModel) -> impl IntoView {
    let toolbar = (!buttons.is_empty()).then(|| {
        view! {
            <div class="page-actions">
                {buttons.iter().copied().map(|label| view! { <Button label=label/> }).collect::<Vec<_>>()}
            </div>
        }
    });

    view! {
        {toolbar}
        <DataTableView model=model/>
    }
}
