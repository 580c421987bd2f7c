use crate::core::badge::hospital_status;
use crate::models::Hospital;
use crate::ui::components::{Cell, MenuItem};
use crate::ui::table::{Column, DataTable, TableModel, TableState};
use crate::ui::tables::RenderOptions;

pub struct HospitalsTable<'a> {
    data: &'a [Hospital],
    options: &'a RenderOptions,
}

impl<'a> HospitalsTable<'a> {
    pub fn new(data: &'a [Hospital], options: &'a RenderOptions) -> Self {
        Self { data, options }
    }

    pub fn columns(&self) -> Vec<Column<'a, Hospital>> {
        let options = self.options;
        vec![
            Column::text("name", "Hospital Name", |h: &Hospital| h.name.clone()),
            Column::text("location", "Location", |h: &Hospital| h.location.clone()),
            Column::text("contactPerson", "Contact Person", |h: &Hospital| h.contact_person.clone()),
            Column::text("contactEmail", "Email", |h: &Hospital| h.contact_email.clone()),
            Column::text("contactPhone", "Phone", |h: &Hospital| h.contact_phone.clone()),
            Column::new("status", "Status", |h: &Hospital| {
                Cell::badge(hospital_status(h.status), h.status)
            }),
            Column::new("lastOrderDate", "Last Order", move |h: &Hospital| {
                options.date_cell(h.last_order_date)
            }),
            Column::new("actions", "", |h: &Hospital| {
                Cell::Actions(vec![
                    MenuItem::Copy {
                        label: "Copy hospital ID",
                        value: h.id.clone(),
                    },
                    MenuItem::Separator,
                    MenuItem::Plain("View details"),
                    MenuItem::Plain("Edit hospital"),
                    MenuItem::Plain("View order history"),
                ])
            }),
        ]
    }

    pub fn model(&self, state: &TableState) -> TableModel {
        DataTable::new(self.columns(), self.data, |h: &Hospital| h.id.clone())
            .with_page_size(self.options.page_size)
            .at("/hospitals")
            .model(state)
    }
}
