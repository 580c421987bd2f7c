use crate::core::badge;
use crate::models::{Order, OrderStatus};
use crate::ui::components::{Cell, MenuItem};
use crate::ui::table::{Column, DataTable, TableModel, TableState};
use crate::ui::tables::{money_cell, RenderOptions};

/// Receiver for the accept/decline row actions. The table forwards the order
/// id and does nothing else; what the action means is up to the implementor.
pub trait OrderActions {
    fn accept_order(&self, id: &str);
    fn decline_order(&self, id: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Accept,
    Decline,
}

pub struct OrdersTable<'a> {
    data: &'a [Order],
    options: &'a RenderOptions,
    actions: &'a dyn OrderActions,
}

impl<'a> OrdersTable<'a> {
    pub fn new(data: &'a [Order], options: &'a RenderOptions, actions: &'a dyn OrderActions) -> Self {
        Self {
            data,
            options,
            actions,
        }
    }

    /// Hand a row action to the caller's callback.
    pub fn dispatch(&self, action: OrderAction, id: &str) {
        match action {
            OrderAction::Accept => self.actions.accept_order(id),
            OrderAction::Decline => self.actions.decline_order(id),
        }
    }

    pub fn columns(&self) -> Vec<Column<'a, Order>> {
        let options = self.options;
        vec![
            Column::text("id", "Order ID", |o: &Order| o.id.clone()),
            Column::text("hospitalName", "Hospital Name", |o: &Order| o.hospital_name.clone()),
            Column::text("itemName", "Item", |o: &Order| o.item_name.clone()),
            Column::new("quantity", "Quantity", |o: &Order| Cell::Text(o.quantity.to_string())),
            Column::new("totalPrice", "Total Price", |o: &Order| money_cell(o.total_price))
                .sortable(|o| o.total_price),
            Column::new("paymentStatus", "Payment Status", |o: &Order| {
                Cell::badge(badge::payment_status(o.payment_status), o.payment_status)
            }),
            Column::new("stockStatus", "Stock Status", |o: &Order| {
                Cell::badge(badge::stock_status(o.stock_status), o.stock_status)
            }),
            Column::new("orderStatus", "Order Status", |o: &Order| {
                Cell::badge(badge::order_status(o.order_status), o.order_status)
            })
            .filterable(|o| o.order_status.to_string()),
            Column::new("orderDate", "Order Date", move |o: &Order| options.date_cell(o.order_date)),
            Column::new("actions", "", |o: &Order| Cell::Actions(menu(o))),
        ]
    }

    pub fn model(&self, state: &TableState) -> TableModel {
        DataTable::new(self.columns(), self.data, |o: &Order| o.id.clone())
            .with_page_size(self.options.page_size)
            .at("/orders")
            .model(state)
    }
}

fn menu(order: &Order) -> Vec<MenuItem> {
    let mut items = vec![
        MenuItem::Copy {
            label: "Copy order ID",
            value: order.id.clone(),
        },
        MenuItem::Separator,
        MenuItem::Plain("View details"),
    ];
    if order.order_status == OrderStatus::Pending {
        items.push(MenuItem::Post {
            label: "Accept order",
            action: format!("/orders/{}/accept", order.id),
        });
        items.push(MenuItem::Post {
            label: "Decline order",
            action: format!("/orders/{}/decline", order.id),
        });
    }
    items
}
