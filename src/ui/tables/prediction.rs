use crate::models::PredictionItem;
use crate::ui::components::{Cell, MenuItem};
use crate::ui::table::{Column, DataTable, TableModel, TableState};
use crate::ui::tables::RenderOptions;

pub struct PredictionTable<'a> {
    data: &'a [PredictionItem],
    options: &'a RenderOptions,
}

impl<'a> PredictionTable<'a> {
    pub fn new(data: &'a [PredictionItem], options: &'a RenderOptions) -> Self {
        Self { data, options }
    }

    pub fn columns(&self) -> Vec<Column<'a, PredictionItem>> {
        let options = self.options;
        vec![
            Column::text("name", "Item Name", |p: &PredictionItem| p.name.clone()),
            Column::new("currentStock", "Current Stock", |p: &PredictionItem| {
                Cell::Text(p.current_stock.to_string())
            }),
            Column::new("predictedDemand", "Predicted Demand", |p: &PredictionItem| {
                Cell::Text(p.predicted_demand.to_string())
            })
            .sortable(|p| f64::from(p.predicted_demand)),
            Column::new("recommendedOrder", "Recommended Order", |p: &PredictionItem| {
                Cell::Text(p.recommended_order.to_string())
            }),
            Column::new("recommendedOrderDate", "Recommended Order Date", move |p: &PredictionItem| {
                options.date_cell(p.recommended_order_date)
            }),
            Column::new("actions", "", |p: &PredictionItem| {
                Cell::Actions(vec![
                    MenuItem::Copy {
                        label: "Copy item ID",
                        value: p.id.clone(),
                    },
                    MenuItem::Separator,
                    MenuItem::Plain("View details"),
                    MenuItem::Plain("Place order"),
                ])
            }),
        ]
    }

    pub fn model(&self, state: &TableState) -> TableModel {
        DataTable::new(self.columns(), self.data, |p: &PredictionItem| p.id.clone())
            .with_page_size(self.options.page_size)
            .at("/predictions")
            .model(state)
    }
}
