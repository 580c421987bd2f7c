//! Generic data table.
//!
//! A table is a list of [`Column`] definitions over borrowed rows. Sorting,
//! filtering, row selection and paging are driven by a [`TableState`] that
//! round-trips through the page's query string, so every interaction is a
//! plain link or GET form. [`DataTable::model`] resolves a state into an owned
//! [`TableModel`], which [`DataTableView`] renders.

use std::collections::BTreeSet;

use leptos::{component, view, IntoView};
use serde::Deserialize;
use url::form_urlencoded;

use crate::ui::components::{Cell, CellView};

pub const DEFAULT_PAGE_SIZE: usize = 10;

type CellFn<'a, T> = Box<dyn Fn(&T) -> Cell + 'a>;
type SortFn<'a, T> = Box<dyn Fn(&T) -> f64 + 'a>;
type FilterFn<'a, T> = Box<dyn Fn(&T) -> String + 'a>;

pub struct Column<'a, T> {
    pub id: &'static str,
    pub header: &'static str,
    cell: CellFn<'a, T>,
    sort_key: Option<SortFn<'a, T>>,
    filter_text: Option<FilterFn<'a, T>>,
}

impl<'a, T> Column<'a, T> {
    pub fn new(id: &'static str, header: &'static str, cell: impl Fn(&T) -> Cell + 'a) -> Self {
        Self {
            id,
            header,
            cell: Box::new(cell),
            sort_key: None,
            filter_text: None,
        }
    }

    /// A column that shows a text field as-is and takes part in filtering.
    pub fn text(id: &'static str, header: &'static str, field: impl Fn(&T) -> String + 'a) -> Self
    where
        T: 'a,
    {
        let field = std::rc::Rc::new(field);
        let cell_field = field.clone();
        Self {
            id,
            header,
            cell: Box::new(move |row: &T| Cell::Text(cell_field(row))),
            sort_key: None,
            filter_text: Some(Box::new(move |row: &T| field(row))),
        }
    }

    /// Render the header as a sort toggle ordering rows by `key`.
    pub fn sortable(mut self, key: impl Fn(&T) -> f64 + 'a) -> Self {
        self.sort_key = Some(Box::new(key));
        self
    }

    pub fn filterable(mut self, field: impl Fn(&T) -> String + 'a) -> Self {
        self.filter_text = Some(Box::new(field));
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }

    pub fn cell(&self, row: &T) -> Cell {
        (self.cell)(row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Query parameters as they arrive on the request.
///
/// Everything is taken as text so that a malformed value degrades to the
/// default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableQuery {
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub q: Option<String>,
    pub page: Option<String>,
    pub selected: Option<String>,
}

/// Zero-based page index; negatives and garbage mean the first page, values
/// past the end are clamped when the table is viewed.
fn parse_page(raw: &str) -> usize {
    match raw.trim().parse::<i128>() {
        Ok(page) if page > 0 => usize::try_from(page).unwrap_or(usize::MAX),
        _ => 0,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub sort: Option<(String, SortDirection)>,
    pub filter: String,
    pub page: usize,
    pub selected: BTreeSet<String>,
}

impl From<TableQuery> for TableState {
    fn from(query: TableQuery) -> Self {
        let direction = match query.dir.as_deref() {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        Self {
            sort: query
                .sort
                .filter(|column| !column.is_empty())
                .map(|column| (column, direction)),
            filter: query.q.unwrap_or_default().trim().to_string(),
            page: query.page.as_deref().map_or(0, parse_page),
            selected: query
                .selected
                .unwrap_or_default()
                .split(',')
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl TableState {
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        match &self.sort {
            Some((id, dir)) if id == column => Some(*dir),
            _ => None,
        }
    }

    /// Header-button toggle: ascending first, then flip between the two.
    pub fn toggle_sort(&self, column: &str) -> TableState {
        let next = match self.direction_of(column) {
            Some(SortDirection::Asc) => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        TableState {
            sort: Some((column.to_string(), next)),
            ..self.clone()
        }
    }

    pub fn toggle_row(&self, id: &str) -> TableState {
        let mut next = self.clone();
        if !next.selected.remove(id) {
            next.selected.insert(id.to_string());
        }
        next
    }

    /// Select every id in `ids`, or clear them all when they already are.
    pub fn toggle_all(&self, ids: &[String]) -> TableState {
        let mut next = self.clone();
        if !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id)) {
            for id in ids {
                next.selected.remove(id);
            }
        } else {
            next.selected.extend(ids.iter().cloned());
        }
        next
    }

    pub fn with_page(&self, page: usize) -> TableState {
        TableState {
            page,
            ..self.clone()
        }
    }

    fn selected_param(&self) -> String {
        let ids: Vec<&str> = self.selected.iter().map(String::as_str).collect();
        ids.join(",")
    }

    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some((column, dir)) = &self.sort {
            query.append_pair("sort", column);
            query.append_pair("dir", dir.as_str());
        }
        if !self.filter.is_empty() {
            query.append_pair("q", &self.filter);
        }
        if self.page > 0 {
            query.append_pair("page", &self.page.to_string());
        }
        if !self.selected.is_empty() {
            query.append_pair("selected", &self.selected_param());
        }
        query.finish()
    }
}

/// The rows a table shows for a given state.
pub struct TableView<'r, T> {
    pub rows: Vec<&'r T>,
    pub filtered_ids: Vec<String>,
    pub page: usize,
    pub page_count: usize,
}

impl<T> TableView<'_, T> {
    pub fn filtered_count(&self) -> usize {
        self.filtered_ids.len()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

/// A fully resolved table, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub filter: Option<FilterForm>,
    pub select_all: Option<SelectLink>,
    pub headers: Vec<Header>,
    pub rows: Vec<RowModel>,
    pub summary: String,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterForm {
    pub action: String,
    pub value: String,
    /// State submitted along with the filter text.
    pub hidden: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectLink {
    pub href: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub label: &'static str,
    pub sort: Option<SortLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortLink {
    pub href: String,
    pub aria: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub id: String,
    pub selected: bool,
    pub select: Option<SelectLink>,
    pub cells: Vec<Cell>,
}

pub struct DataTable<'a, T> {
    columns: Vec<Column<'a, T>>,
    rows: &'a [T],
    row_id: Box<dyn Fn(&T) -> String + 'a>,
    selectable: bool,
    page_size: usize,
    path: String,
}

impl<'a, T> DataTable<'a, T> {
    pub fn new(
        columns: Vec<Column<'a, T>>,
        rows: &'a [T],
        row_id: impl Fn(&T) -> String + 'a,
    ) -> Self {
        Self {
            columns,
            rows,
            row_id: Box::new(row_id),
            selectable: false,
            page_size: DEFAULT_PAGE_SIZE,
            path: String::new(),
        }
    }

    pub fn with_selection(mut self) -> Self {
        self.selectable = true;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Path the table's links point back to.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn view(&self, state: &TableState) -> TableView<'a, T> {
        let needle = state.filter.to_lowercase();
        let filters: Vec<&FilterFn<'a, T>> =
            self.columns.iter().filter_map(|c| c.filter_text.as_ref()).collect();

        let mut rows: Vec<&'a T> = self
            .rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || filters
                        .iter()
                        .any(|field| field(*row).to_lowercase().contains(&needle))
            })
            .collect();

        if let Some((column, dir)) = &state.sort {
            let key = self
                .columns
                .iter()
                .find(|c| c.id == column)
                .and_then(|c| c.sort_key.as_ref());
            if let Some(key) = key {
                let mut keyed: Vec<(f64, &'a T)> = rows.iter().map(|row| (key(*row), *row)).collect();
                keyed.sort_by(|(a, _), (b, _)| match dir {
                    SortDirection::Asc => a.total_cmp(b),
                    SortDirection::Desc => b.total_cmp(a),
                });
                rows = keyed.into_iter().map(|(_, row)| row).collect();
            }
        }

        let filtered_ids = rows.iter().map(|row| (self.row_id)(*row)).collect();
        let page_count = rows.len().div_ceil(self.page_size).max(1);
        let page = state.page.min(page_count - 1);
        let rows = rows
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect();

        TableView {
            rows,
            filtered_ids,
            page,
            page_count,
        }
    }

    fn link(&self, state: &TableState) -> String {
        let query = state.to_query();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }

    pub fn model(&self, state: &TableState) -> TableModel {
        let view = self.view(state);
        let page_ids: Vec<String> = view.rows.iter().map(|row| (self.row_id)(*row)).collect();

        let filter = self
            .columns
            .iter()
            .any(|c| c.filter_text.is_some())
            .then(|| self.filter_form(state));

        let select_all = self.selectable.then(|| SelectLink {
            href: self.link(&state.toggle_all(&page_ids)),
            checked: !page_ids.is_empty() && page_ids.iter().all(|id| state.selected.contains(id)),
        });

        let headers = self
            .columns
            .iter()
            .map(|column| Header {
                label: column.header,
                sort: column.is_sortable().then(|| SortLink {
                    href: self.link(&state.toggle_sort(column.id)),
                    aria: match state.direction_of(column.id) {
                        Some(SortDirection::Asc) => "ascending",
                        Some(SortDirection::Desc) => "descending",
                        None => "none",
                    },
                }),
            })
            .collect();

        let rows = view
            .rows
            .iter()
            .zip(page_ids)
            .map(|(row, id)| {
                let selected = state.selected.contains(&id);
                RowModel {
                    selected,
                    select: self.selectable.then(|| SelectLink {
                        href: self.link(&state.toggle_row(&id)),
                        checked: selected,
                    }),
                    cells: self.columns.iter().map(|c| c.cell(*row)).collect(),
                    id,
                }
            })
            .collect();

        let summary = if self.selectable {
            let selected = view
                .filtered_ids
                .iter()
                .filter(|id| state.selected.contains(*id))
                .count();
            format!("{} of {} row(s) selected.", selected, view.filtered_count())
        } else {
            format!("Page {} of {}", view.page + 1, view.page_count)
        };

        TableModel {
            filter,
            select_all,
            headers,
            rows,
            summary,
            previous: view.has_previous().then(|| self.link(&state.with_page(view.page - 1))),
            next: view.has_next().then(|| self.link(&state.with_page(view.page + 1))),
        }
    }

    /// Sort and selection ride along with the filter text; the page does not,
    /// a new filter starts from the first page.
    fn filter_form(&self, state: &TableState) -> FilterForm {
        let mut hidden = Vec::new();
        if let Some((column, dir)) = &state.sort {
            hidden.push(("sort", column.clone()));
            hidden.push(("dir", dir.as_str().to_string()));
        }
        if !state.selected.is_empty() {
            hidden.push(("selected", state.selected_param()));
        }
        FilterForm {
            action: self.path.clone(),
            value: state.filter.clone(),
            hidden,
        }
    }
}

#[component]
pub fn DataTableView(model: TableModel) -> impl IntoView {
    let TableModel {
        filter,
        select_all,
        headers,
        rows,
        summary,
        previous,
        next,
    } = model;
    let span = (headers.len() + usize::from(select_all.is_some())).to_string();
    let empty = rows.is_empty().then(|| {
        view! {
            <tr>
                <td class="empty" colspan=span>"No results."</td>
            </tr>
        }
    });

    view! {
        {filter.map(|form| view! { <FilterBar form=form/> })}
        <div class="table-card">
            <table class="data-table">
                <thead>
                    <tr>
                        {select_all.map(|link| view! {
                            <th class="select"><Checkbox link=link label="Select all"/></th>
                        })}
                        {headers.into_iter().map(|header| view! { <HeaderCell header=header/> }).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {empty}
                    {rows.into_iter().map(|row| view! { <TableRow row=row/> }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
        <div class="table-footer">
            <div class="muted">{summary}</div>
            <div class="pager">
                <PagerLink label="Previous" href=previous/>
                <PagerLink label="Next" href=next/>
            </div>
        </div>
    }
}

#[component]
fn FilterBar(form: FilterForm) -> impl IntoView {
    let FilterForm { action, value, hidden } = form;
    view! {
        <form class="table-toolbar" method="get" action=action>
            {hidden
                .into_iter()
                .map(|(name, kept)| view! { <input type="hidden" name=name value=kept/> })
                .collect::<Vec<_>>()}
            <input class="input" type="search" name="q" placeholder="Filter..." value=value/>
        </form>
    }
}

#[component]
fn HeaderCell(header: Header) -> impl IntoView {
    let Header { label, sort } = header;
    match sort {
        None => view! { <th>{label}</th> }.into_view(),
        Some(SortLink { href, aria }) => view! {
            <th aria-sort=aria>
                <a class="button ghost sort" href=href>
                    {label}
                    <span class="sort-icon" aria-hidden="true">"↕"</span>
                </a>
            </th>
        }
        .into_view(),
    }
}

#[component]
fn TableRow(row: RowModel) -> impl IntoView {
    let RowModel {
        selected,
        select,
        cells,
        ..
    } = row;
    let data_state = selected.then_some("selected");
    view! {
        <tr data-state=data_state>
            {select.map(|link| view! {
                <td class="select"><Checkbox link=link label="Select row"/></td>
            })}
            {cells.into_iter().map(|cell| view! { <td><CellView cell=cell/></td> }).collect::<Vec<_>>()}
        </tr>
    }
}

#[component]
fn Checkbox(link: SelectLink, label: &'static str) -> impl IntoView {
    let SelectLink { href, checked } = link;
    let checked = if checked { "true" } else { "false" };
    view! {
        <a class="checkbox" role="checkbox" aria-checked=checked aria-label=label href=href></a>
    }
}

#[component]
fn PagerLink(label: &'static str, href: Option<String>) -> impl IntoView {
    match href {
        Some(href) => view! { <a class="button outline" href=href>{label}</a> }.into_view(),
        None => view! { <span class="button outline disabled">{label}</span> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    fn render<T>(table: &DataTable<'_, T>, state: &TableState) -> String {
        let model = table.model(state);
        render_html(move || view! { <DataTableView model=model/> })
    }

    struct Row {
        id: &'static str,
        name: &'static str,
        amount: f64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a", name: "Gauze", amount: 30.0 },
            Row { id: "b", name: "Saline", amount: 10.0 },
            Row { id: "c", name: "Gloves", amount: 20.0 },
            Row { id: "d", name: "Syringe", amount: 10.0 },
        ]
    }

    fn table(rows: &[Row]) -> DataTable<'_, Row> {
        DataTable::new(
            vec![
                Column::text("name", "Name", |r: &Row| r.name.to_string()),
                Column::new("amount", "Amount", |r: &Row| Cell::Text(r.amount.to_string()))
                    .sortable(|r| r.amount),
            ],
            rows,
            |r| r.id.to_string(),
        )
        .at("/things")
    }

    fn ids<T>(view: &TableView<'_, T>) -> Vec<String> {
        view.filtered_ids.clone()
    }

    #[test]
    fn sort_toggle_cycles_between_directions() {
        let state = TableState::default();
        let asc = state.toggle_sort("amount");
        assert_eq!(asc.direction_of("amount"), Some(SortDirection::Asc));
        let desc = asc.toggle_sort("amount");
        assert_eq!(desc.direction_of("amount"), Some(SortDirection::Desc));
        let again = desc.toggle_sort("amount");
        assert_eq!(again.direction_of("amount"), Some(SortDirection::Asc));
    }

    #[test]
    fn sorting_switching_column_starts_ascending() {
        let state = TableState::default().toggle_sort("amount").toggle_sort("amount");
        let other = state.toggle_sort("name");
        assert_eq!(other.direction_of("name"), Some(SortDirection::Asc));
        assert_eq!(other.direction_of("amount"), None);
    }

    #[test]
    fn sorts_stably_in_both_directions() {
        let data = rows();
        let table = table(&data);
        let asc = table.view(&TableState::default().toggle_sort("amount"));
        assert_eq!(ids(&asc), ["b", "d", "c", "a"]);
        let desc = table.view(&TableState::default().toggle_sort("amount").toggle_sort("amount"));
        assert_eq!(ids(&desc), ["a", "c", "b", "d"]);
    }

    #[test]
    fn sorting_by_unsortable_column_keeps_order() {
        let data = rows();
        let view = table(&data).view(&TableState::default().toggle_sort("name"));
        assert_eq!(ids(&view), ["a", "b", "c", "d"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let data = rows();
        let state = TableState {
            filter: "g".into(),
            ..Default::default()
        };
        let view = table(&data).view(&state);
        assert_eq!(ids(&view), ["a", "c", "d"]);
    }

    #[test]
    fn pages_are_clamped() {
        let data = rows();
        let table = table(&data).with_page_size(3);
        let first = table.view(&TableState::default());
        assert_eq!(first.rows.len(), 3);
        assert_eq!(first.page_count, 2);
        assert!(first.has_next());
        let beyond = table.view(&TableState::default().with_page(9));
        assert_eq!(beyond.page, 1);
        assert_eq!(beyond.rows.len(), 1);
        assert!(!beyond.has_next());
        assert!(beyond.has_previous());
    }

    #[test]
    fn empty_table_has_one_page() {
        let data: Vec<Row> = Vec::new();
        let view = table(&data).view(&TableState::default());
        assert_eq!(view.page_count, 1);
        assert!(view.rows.is_empty());
        assert!(render(&table(&data), &TableState::default()).contains("No results."));
    }

    #[test]
    fn selection_toggles() {
        let state = TableState::default().toggle_row("a").toggle_row("b");
        assert_eq!(state.selected.len(), 2);
        let state = state.toggle_row("a");
        assert!(!state.selected.contains("a"));

        let page = vec!["a".to_string(), "b".to_string()];
        let all = state.toggle_all(&page);
        assert_eq!(all.selected.len(), 2);
        let none = all.toggle_all(&page);
        assert!(none.selected.is_empty());
    }

    #[test]
    fn selection_footer_counts_filtered_rows() {
        let data = rows();
        let table = table(&data).with_selection();
        let state = TableState::default().toggle_row("a").toggle_row("b");
        assert_eq!(table.model(&state).summary, "2 of 4 row(s) selected.");
        assert!(render(&table, &state).contains("2 of 4 row(s) selected."));
        let filtered = TableState {
            filter: "gauze".into(),
            ..state
        };
        assert_eq!(table.model(&filtered).summary, "1 of 1 row(s) selected.");
    }

    #[test]
    fn filter_form_keeps_sort_and_selection() {
        let data = rows();
        let state = TableState::default()
            .toggle_sort("amount")
            .toggle_row("a")
            .toggle_row("c")
            .with_page(1);
        let form = table(&data).with_selection().model(&state).filter.unwrap();
        assert_eq!(form.action, "/things");
        assert_eq!(
            form.hidden,
            vec![
                ("sort", "amount".to_string()),
                ("dir", "asc".to_string()),
                ("selected", "a,c".to_string()),
            ]
        );
    }

    #[test]
    fn filtered_selection_survives_the_filter_form() {
        let data = rows();
        let table = table(&data).with_selection();
        let before = TableState::default().toggle_row("a").toggle_row("b");
        let form = table.model(&before).filter.unwrap();

        // what the browser submits: the hidden fields plus the new filter text
        let mut submitted = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &form.hidden {
            submitted.append_pair(name, value);
        }
        submitted.append_pair("q", "gauze");
        let query: TableQuery = parse_query(&submitted.finish());

        let after = TableState::from(query);
        assert_eq!(after.selected, before.selected);
        assert_eq!(table.model(&after).summary, "1 of 1 row(s) selected.");
    }

    fn parse_query(query: &str) -> TableQuery {
        let mut raw = TableQuery::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()).into_owned() {
            match key.as_str() {
                "sort" => raw.sort = Some(value),
                "dir" => raw.dir = Some(value),
                "q" => raw.q = Some(value),
                "page" => raw.page = Some(value),
                "selected" => raw.selected = Some(value),
                _ => {}
            }
        }
        raw
    }

    #[test]
    fn query_round_trip() {
        let state = TableState {
            sort: Some(("amount".into(), SortDirection::Desc)),
            filter: "salt & pepper".into(),
            page: 2,
            selected: ["x".to_string(), "y".to_string()].into_iter().collect(),
        };
        let query = state.to_query();
        assert_eq!(query, "sort=amount&dir=desc&q=salt+%26+pepper&page=2&selected=x%2Cy");
        assert_eq!(TableState::from(parse_query(&query)), state);
    }

    #[test]
    fn malformed_page_falls_back_to_first() {
        for raw in ["-1", "abc", "", " 0 "] {
            let query = TableQuery {
                page: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(TableState::from(query).page, 0, "{:?}", raw);
        }
        let huge = TableQuery {
            page: Some("99999999999999999999999".into()),
            ..Default::default()
        };
        let data = rows();
        let view = table(&data).view(&TableState::from(huge));
        assert_eq!(view.page, 0);
        assert_eq!(view.rows.len(), 4);
    }

    #[test]
    fn sortable_header_links_to_next_direction() {
        let data = rows();
        let model = table(&data).model(&TableState::default());
        assert_eq!(model.headers[0], Header { label: "Name", sort: None });
        assert_eq!(
            model.headers[1].sort,
            Some(SortLink {
                href: "/things?sort=amount&dir=asc".into(),
                aria: "none",
            })
        );
    }

    #[test]
    fn pager_links_only_where_pages_exist() {
        let data = rows();
        let model = table(&data).with_page_size(3).model(&TableState::default());
        assert_eq!(model.previous, None);
        assert_eq!(model.next.as_deref(), Some("/things?page=1"));
        assert_eq!(model.summary, "Page 1 of 2");
    }
}
