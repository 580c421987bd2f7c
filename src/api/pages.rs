//! HTML page handlers.

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpRequest, HttpResponse};
use leptos::{view, IntoView, View};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::state::AppState;
use crate::ui::layout::{self, Page, ShellState};
use crate::ui::pages::{OverviewCards, TablePage};
use crate::ui::table::{TableModel, TableQuery, TableState};
use crate::ui::tables::{
    HospitalsTable, InventoryTable, OrderAction, OrdersTable, PredictionTable, RenderOptions,
};

const INVENTORY_BUTTONS: &[&str] = &["Add Item"];
const HOSPITAL_BUTTONS: &[&str] = &["Add Hospital"];
const NO_BUTTONS: &[&str] = &[];

fn html_page(
    req: &HttpRequest,
    state: &AppState,
    options: &RenderOptions,
    title: &'static str,
    path: &'static str,
    body: impl FnOnce() -> View + 'static,
) -> HttpResponse {
    let page = Page {
        title,
        path,
        alerts: state.alerts(options),
    };
    let html = layout::render(page, &ShellState::from_request(req), body);
    HttpResponse::Ok().content_type(ContentType::html()).body(html)
}

fn table_body(buttons: &'static [&'static str], model: TableModel) -> impl FnOnce() -> View + 'static {
    move || view! { <TablePage buttons=buttons model=model/> }.into_view()
}

#[instrument(skip_all)]
pub async fn dashboard(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let options = state.render_options();
    let summary = state.summary(&options);
    let body = move || view! { <OverviewCards summary=summary/> }.into_view();
    html_page(&req, &state, &options, "Dashboard", "/", body)
}

#[instrument(skip_all)]
pub async fn inventory(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<TableQuery>,
) -> HttpResponse {
    let options = state.render_options();
    let table_state = TableState::from(query.into_inner());
    let model = InventoryTable::new(state.db.inventory(), &options).model(&table_state);
    let body = table_body(INVENTORY_BUTTONS, model);
    html_page(&req, &state, &options, "Inventory", "/inventory", body)
}

#[instrument(skip_all)]
pub async fn orders(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<TableQuery>,
) -> HttpResponse {
    let options = state.render_options();
    let table_state = TableState::from(query.into_inner());
    let orders = state.db.orders().snapshot();
    let model = OrdersTable::new(&orders, &options, state.db.orders()).model(&table_state);
    let body = table_body(NO_BUTTONS, model);
    html_page(&req, &state, &options, "Orders", "/orders", body)
}

#[instrument(skip_all)]
pub async fn predictions(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<TableQuery>,
) -> HttpResponse {
    let options = state.render_options();
    let table_state = TableState::from(query.into_inner());
    let model = PredictionTable::new(state.db.predictions(), &options).model(&table_state);
    let body = table_body(NO_BUTTONS, model);
    html_page(&req, &state, &options, "Predictions", "/predictions", body)
}

#[instrument(skip_all)]
pub async fn hospitals(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<TableQuery>,
) -> HttpResponse {
    let options = state.render_options();
    let table_state = TableState::from(query.into_inner());
    let model = HospitalsTable::new(state.db.hospitals(), &options).model(&table_state);
    let body = table_body(HOSPITAL_BUTTONS, model);
    html_page(&req, &state, &options, "Hospitals", "/hospitals", body)
}

#[instrument(skip_all, fields(order_id = %path))]
pub async fn accept_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    order_action(&state, &path, OrderAction::Accept)
}

#[instrument(skip_all, fields(order_id = %path))]
pub async fn decline_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    order_action(&state, &path, OrderAction::Decline)
}

fn order_action(state: &AppState, id: &str, action: OrderAction) -> Result<HttpResponse, AppError> {
    let orders = state.db.orders().snapshot();
    if !orders.iter().any(|order| order.id == id) {
        return Err(AppError::NotFound(format!("Order {}", id)));
    }

    let options = state.render_options();
    OrdersTable::new(&orders, &options, state.db.orders()).dispatch(action, id);
    info!(order_id = %id, ?action, "Order action dispatched");

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/orders"))
        .finish())
}
