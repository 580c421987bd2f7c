use crate::models::InventoryItem;
use crate::ui::components::{Cell, MenuItem};
use crate::ui::table::{Column, DataTable, TableModel, TableState};
use crate::ui::tables::{money_cell, RenderOptions};

pub struct InventoryTable<'a> {
    data: &'a [InventoryItem],
    options: &'a RenderOptions,
}

impl<'a> InventoryTable<'a> {
    pub fn new(data: &'a [InventoryItem], options: &'a RenderOptions) -> Self {
        Self { data, options }
    }

    pub fn columns(&self) -> Vec<Column<'a, InventoryItem>> {
        let options = self.options;
        vec![
            Column::text("name", "Item", |i: &InventoryItem| i.name.clone()),
            Column::text("category", "Category", |i: &InventoryItem| i.category.clone()),
            Column::text("department", "Department", |i: &InventoryItem| i.department.clone()),
            Column::new("quantity", "Quantity", move |i: &InventoryItem| {
                Cell::badge(options.rules.quantity(i.quantity), i.quantity)
            }),
            Column::text("batchNumber", "Batch Number", |i: &InventoryItem| i.batch_number.clone()),
            Column::new("unitPrice", "Unit Price", |i: &InventoryItem| money_cell(i.unit_price)),
            Column::new("expiryDate", "Expiry Date", move |i: &InventoryItem| {
                Cell::badge(
                    options.rules.expiry(i.expiry_date, options.now),
                    options.date(i.expiry_date),
                )
            }),
            Column::new("actions", "", |i: &InventoryItem| {
                Cell::Actions(vec![
                    MenuItem::Copy {
                        label: "Copy item ID",
                        value: i.id.clone(),
                    },
                    MenuItem::Separator,
                    MenuItem::Plain("View details"),
                    MenuItem::Plain("Edit item"),
                ])
            }),
        ]
    }

    pub fn model(&self, state: &TableState) -> TableModel {
        DataTable::new(self.columns(), self.data, |i: &InventoryItem| i.id.clone())
            .with_selection()
            .with_page_size(self.options.page_size)
            .at("/inventory")
            .model(state)
    }
}
