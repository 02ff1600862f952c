use clap::crate_version;
use maud::{html, Markup, DOCTYPE};

pub use self::float::Float;

mod float;

pub const SUPPORT_EMAIL: &str = "support@example.com";

/// Active entry of the sidebar navigation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Predict,
}

/// Wraps page content into the common document skeleton:
/// head, sidebar navigation column, content column and footer.
pub fn document(title: &str, active: Page, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-CN" {
            head {
                (headers())
                title { (title) }
            }
            body {
                section.section {
                    div.container {
                        div.columns {
                            div.column."is-3" { (sidebar(active)) }
                            div.column."is-9" { (content) }
                        }
                    }
                }
                (footer())
            }
        }
    }
}

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.3/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="/theme.css";
    }
}

pub fn sidebar(active: Page) -> Markup {
    html! {
        aside.menu {
            p.menu-label { "导航" }
            ul.menu-list {
                li { a.is-active[active == Page::Home] href="/" { "简介" } }
                li { a.is-active[active == Page::Predict] href="/predict" { "预测医疗费用" } }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer.footer {
            div.container {
                div.columns {
                    div.column."is-4" {
                        p.title."is-6" { "关于" }
                        p."mt-1" { "医疗费用预测 " (crate_version!()) }
                        p."mt-1" { "预测结果仅作为保险定价的参考。" }
                    }
                    div.column."is-4" {
                        p.title."is-6" { "支持" }
                        p."mt-1" {
                            "技术支持✉："
                            a href=(format!("mailto:{}", SUPPORT_EMAIL)) { (SUPPORT_EMAIL) }
                        }
                    }
                }
            }
        }
    }
}
