//! Small shared widgets: badges, buttons, overview cards, row menus and the
//! cell contents tables are built from.

use leptos::{component, view, IntoView, View};

use crate::core::badge::BadgeVariant;

/// Content of one table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Preformatted amount, rendered in medium weight.
    Money(String),
    Date(String),
    Badge { variant: BadgeVariant, label: String },
    Actions(Vec<MenuItem>),
}

impl Cell {
    pub fn badge(variant: BadgeVariant, label: impl ToString) -> Self {
        Cell::Badge {
            variant,
            label: label.to_string(),
        }
    }
}

/// An entry in a row's actions drop-down.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    /// Copies the value to the clipboard (handled by `static/app.js`).
    Copy { label: &'static str, value: String },
    /// Submits a POST form to `action`.
    Post { label: &'static str, action: String },
    /// A menu entry with no behavior attached yet.
    Plain(&'static str),
    Separator,
}

#[component]
pub fn Badge(variant: BadgeVariant, #[prop(into)] label: String) -> impl IntoView {
    let class = variant.class();
    view! { <span class=class>{label}</span> }
}

#[component]
pub fn Button(label: &'static str) -> impl IntoView {
    view! { <button class="button" type="button">{label}</button> }
}

#[component]
pub fn Card(
    title: &'static str,
    #[prop(into)] value: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">{title}</div>
            <div class="card-value">{value}</div>
            <p class="muted">{description}</p>
        </div>
    }
}

#[component]
pub fn RowActions(items: Vec<MenuItem>) -> impl IntoView {
    view! {
        <details class="menu">
            <summary class="button ghost icon">
                <span class="sr-only">"Open menu"</span>
                "⋯"
            </summary>
            <div class="menu-content">
                <div class="menu-label">"Actions"</div>
                {items.into_iter().map(menu_item).collect::<Vec<_>>()}
            </div>
        </details>
    }
}

fn menu_item(item: MenuItem) -> View {
    match item {
        MenuItem::Copy { label, value } => view! {
            <button class="menu-item" type="button" data-copy=value>{label}</button>
        }
        .into_view(),
        MenuItem::Post { label, action } => view! {
            <form method="post" action=action>
                <button class="menu-item" type="submit">{label}</button>
            </form>
        }
        .into_view(),
        MenuItem::Plain(label) => view! {
            <button class="menu-item" type="button">{label}</button>
        }
        .into_view(),
        MenuItem::Separator => view! { <hr class="menu-separator"/> }.into_view(),
    }
}

#[component]
pub fn CellView(cell: Cell) -> impl IntoView {
    match cell {
        Cell::Text(text) => text.into_view(),
        Cell::Money(amount) => view! { <div class="font-medium">{amount}</div> }.into_view(),
        Cell::Date(date) => view! { <div>{date}</div> }.into_view(),
        Cell::Badge { variant, label } => view! { <Badge variant=variant label=label/> }.into_view(),
        Cell::Actions(items) => view! { <RowActions items=items/> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn badge_carries_variant_class() {
        let html = render_html(|| view! { <Badge variant=BadgeVariant::Destructive label="10"/> });
        assert!(html.contains(r#"class="badge badge-destructive""#));
        assert!(html.contains("10"));
    }

    #[test]
    fn menu_renders_each_kind() {
        let items = vec![
            MenuItem::Copy {
                label: "Copy order ID",
                value: "ORD\"1".into(),
            },
            MenuItem::Separator,
            MenuItem::Plain("View details"),
            MenuItem::Post {
                label: "Accept order",
                action: "/orders/ORD1/accept".into(),
            },
        ];
        let html = render_html(move || view! { <RowActions items=items/> });
        assert!(html.contains("data-copy="));
        assert!(!html.contains(r#"data-copy="ORD"1""#));
        assert!(html.contains("View details"));
        assert!(html.contains(r#"action="/orders/ORD1/accept""#));
        assert!(html.contains("menu-separator"));
    }

    #[test]
    fn cell_text_is_escaped() {
        let cell = Cell::Text("<script>".into());
        let html = render_html(move || view! { <CellView cell=cell/> });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
