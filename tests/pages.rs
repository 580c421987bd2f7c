use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};

use medinventory::api;
use medinventory::config::Config;
use medinventory::db::Database;
use medinventory::state::AppState;

fn state() -> web::Data<AppState> {
    let db = Database::seeded().unwrap();
    let config = Config::embedded().unwrap();
    web::Data::new(AppState::new(db, config))
}

async fn get_body(state: &web::Data<AppState>, uri: &str) -> String {
    let app = test::init_service(App::new().app_data(state.clone()).configure(api::configure)).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).unwrap()
}

#[actix_web::test]
async fn every_page_renders_inside_the_shell() {
    let state = state();
    for (uri, title) in [
        ("/", "Dashboard"),
        ("/inventory", "Inventory"),
        ("/orders", "Orders"),
        ("/predictions", "Predictions"),
        ("/hospitals", "Hospitals"),
    ] {
        let body = get_body(&state, uri).await;
        assert!(body.contains(&format!("<title>MedInventory | {}</title>", title)), "{}", uri);
        assert!(body.contains(&format!(r#"class="nav-link active" href="{}""#, uri)), "{}", uri);
        assert!(body.contains("MedInventory"));
    }
}

#[actix_web::test]
async fn dashboard_shows_overview_cards() {
    let body = get_body(&state(), "/").await;
    assert!(body.contains("Total Inventory Value"));
    assert!(body.contains("₹74,45,250.00"));
    assert!(body.contains("Pending Orders"));
    assert!(body.contains("Active Hospitals"));
}

#[actix_web::test]
async fn inventory_page_shows_sample_rows() {
    let body = get_body(&state(), "/inventory").await;
    assert!(body.contains("Paracetamol"));
    assert!(body.contains("BF6969"));
    assert!(body.contains(r#"class="badge badge-destructive""#));
    assert!(body.contains("₹6,40,000.00"));
    assert!(body.contains("Add Item"));
}

#[actix_web::test]
async fn inventory_selection_and_filter_from_query() {
    let body = get_body(&state(), "/inventory?selected=1,3").await;
    assert!(body.contains("2 of 5 row(s) selected."));

    let body = get_body(&state(), "/inventory?q=scope").await;
    assert!(body.contains("Endoscope"));
    assert!(!body.contains("₹160.00"));
}

#[actix_web::test]
async fn filter_form_carries_the_selection() {
    let body = get_body(&state(), "/inventory?selected=1,3&sort=unitPrice&dir=desc").await;
    assert!(body.contains(r#"name="selected" value="1,3""#));
    assert!(body.contains(r#"name="sort" value="unitPrice""#));

    let body = get_body(&state(), "/inventory?selected=1,3&q=paracetamol").await;
    assert!(body.contains("1 of 1 row(s) selected."));
    assert!(body.contains(r#"name="selected" value="1,3""#));
}

#[actix_web::test]
async fn malformed_page_numbers_show_the_first_page() {
    let state = state();
    for uri in ["/inventory?page=-1", "/inventory?page=abc"] {
        let body = get_body(&state, uri).await;
        assert!(body.contains("0 of 5 row(s) selected."), "{}", uri);
        assert!(body.contains("Paracetamol"), "{}", uri);
    }
    let body = get_body(&state, "/orders?page=99999999999999999999999").await;
    assert!(body.contains("Page 1 of 1"));
}

#[actix_web::test]
async fn orders_page_sorts_by_total_price() {
    let body = get_body(&state(), "/orders?sort=totalPrice&dir=desc").await;
    let highest = body.find("ORD004").unwrap();
    let lowest = body.find("ORD001").unwrap();
    assert!(highest < lowest);
    assert!(body.contains(r#"aria-sort="descending""#));
}

#[actix_web::test]
async fn accepting_an_order_changes_its_status() {
    let state = state();
    let app = test::init_service(App::new().app_data(state.clone()).configure(api::configure)).await;

    let req = test::TestRequest::post().uri("/orders/ORD002/accept").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/orders");

    let order = state.db.orders().get("ORD002").unwrap();
    assert_eq!(order.order_status.as_str(), "Accepted");

    let body = get_body(&state, "/orders").await;
    assert!(!body.contains("/orders/ORD002/accept"));
}

#[actix_web::test]
async fn declining_an_order_changes_its_status() {
    let state = state();
    let app = test::init_service(App::new().app_data(state.clone()).configure(api::configure)).await;

    let req = test::TestRequest::post().uri("/orders/ORD005/decline").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(state.db.orders().get("ORD005").unwrap().order_status.as_str(), "Declined");
}

#[actix_web::test]
async fn unknown_order_is_not_found() {
    let state = state();
    let app = test::init_service(App::new().app_data(state.clone()).configure(api::configure)).await;

    let req = test::TestRequest::post().uri("/orders/NOPE/accept").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn theme_toggle_sets_cookie_and_redirects_back() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;

    let req = test::TestRequest::post()
        .uri("/preferences/theme")
        .set_form([("back", "/hospitals")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/hospitals");
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "theme")
        .unwrap();
    assert_eq!(cookie.value(), "dark");
}

#[actix_web::test]
async fn preference_redirects_stay_on_site() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;

    for back in ["/\\evil.example", "//evil.example", "https://evil.example"] {
        let req = test::TestRequest::post()
            .uri("/preferences/theme")
            .set_form([("back", back)])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/", "{}", back);
    }
}

#[actix_web::test]
async fn sidebar_cookie_opens_the_shell() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;

    let req = test::TestRequest::post()
        .uri("/preferences/sidebar")
        .cookie(Cookie::new("sidebar", "open"))
        .set_form([("back", "/")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "sidebar")
        .unwrap();
    assert_eq!(cookie.value(), "closed");

    let req = test::TestRequest::get()
        .uri("/")
        .cookie(Cookie::new("sidebar", "open"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains(r#"class="shell sidebar-open""#));
}
