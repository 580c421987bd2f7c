//! Page shell: sidebar navigation, header and the document around a page.

use actix_web::HttpRequest;
use leptos::{component, view, IntoView, View};

use crate::ui::render_html;

pub const SIDEBAR_COOKIE: &str = "sidebar";
pub const THEME_COOKIE: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Per-browser shell preferences, kept in cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub theme: Theme,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            sidebar_open: false,
            theme: Theme::Light,
        }
    }
}

impl ShellState {
    pub fn from_request(req: &HttpRequest) -> Self {
        let sidebar_open = req
            .cookie(SIDEBAR_COOKIE)
            .map(|c| c.value() == "open")
            .unwrap_or(false);
        let theme = match req.cookie(THEME_COOKIE) {
            Some(c) if c.value() == "dark" => Theme::Dark,
            _ => Theme::Light,
        };
        Self { sidebar_open, theme }
    }
}

pub struct NavItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { icon: "⌂", label: "Dashboard", href: "/" },
    NavItem { icon: "📦", label: "Inventory", href: "/inventory" },
    NavItem { icon: "🛒", label: "Orders", href: "/orders" },
    NavItem { icon: "📅", label: "Predictions", href: "/predictions" },
    NavItem { icon: "👥", label: "Hospitals", href: "/hospitals" },
];

/// Everything a page hands to the shell besides its body.
pub struct Page {
    pub title: &'static str,
    pub path: &'static str,
    pub alerts: Vec<String>,
}

#[component]
fn Sidebar(active: &'static str) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <a href="/" class="brand">
                    <span class="nav-icon" aria-hidden="true">"▣"</span>
                    <span>"MedInventory"</span>
                </a>
            </div>
            <nav>
                <ul class="sidebar-menu">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let class = if item.href == active { "nav-link active" } else { "nav-link" };
                            let (icon, label, href) = (item.icon, item.label, item.href);
                            view! {
                                <li>
                                    <a class=class href=href>
                                        <span class="nav-icon" aria-hidden="true">{icon}</span>
                                        <span>{label}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </aside>
    }
}

#[component]
fn Notifications(alerts: Vec<String>) -> impl IntoView {
    let count = (!alerts.is_empty()).then(|| {
        let count = alerts.len().to_string();
        view! { <span class="notification-count">{count}</span> }
    });
    let items = if alerts.is_empty() {
        view! { <p class="muted">"No notifications."</p> }.into_view()
    } else {
        alerts
            .into_iter()
            .map(|alert| view! { <div class="menu-item">{alert}</div> })
            .collect::<Vec<_>>()
            .into_view()
    };

    view! {
        <details class="menu notifications">
            <summary class="button ghost icon">
                <span class="sr-only">"Notifications"</span>
                "🔔"
                {count}
            </summary>
            <div class="menu-content">{items}</div>
        </details>
    }
}

#[component]
fn Topbar(path: &'static str, theme: Theme, alerts: Vec<String>) -> impl IntoView {
    let theme_icon = match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };
    view! {
        <header class="topbar">
            <form method="post" action="/preferences/sidebar" class="sidebar-toggle">
                <input type="hidden" name="back" value=path/>
                <button class="button ghost icon" type="submit">
                    <span class="sr-only">"Toggle Sidebar"</span>
                    "☰"
                </button>
            </form>
            <div class="topbar-actions">
                <form method="post" action="/preferences/theme">
                    <input type="hidden" name="back" value=path/>
                    <button class="button ghost icon" type="submit">
                        <span class="sr-only">"Toggle theme"</span>
                        {theme_icon}
                    </button>
                </form>
                <Notifications alerts=alerts/>
            </div>
        </header>
    }
}

/// Render `body` inside the shell as a complete HTML document.
pub fn render(page: Page, state: &ShellState, body: impl FnOnce() -> View + 'static) -> String {
    let Page { title, path, alerts } = page;
    let theme = state.theme;
    let content = render_html(move || {
        let body = body();
        view! {
            <Sidebar active=path/>
            <div class="content">
                <Topbar path=path theme=theme alerts=alerts/>
                <main class="main">
                    <div class="page-header">
                        <h2>{title}</h2>
                    </div>
                    {body}
                </main>
            </div>
        }
    });

    let shell_class = if state.sidebar_open { "shell sidebar-open" } else { "shell" };
    format!(
        r#"<!doctype html>
<html lang="en" class="{theme}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <title>MedInventory | {title}</title>
  <link rel="stylesheet" href="/static/app.css">
  <script src="/static/app.js" defer></script>
</head>
<body>
<div class="{shell_class}">
{content}
</div>
</body>
</html>"#,
        theme = theme.as_str(),
    )
}
