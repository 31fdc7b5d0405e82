//! Shared page chrome: head, navigation, theme toggle and footer

use maud::{html, Markup, DOCTYPE};

/// Top-level navigation entries as (page name, label)
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("index", "Home"),
    ("bookshelf", "Bookshelf"),
    ("collections", "Collections"),
    ("quotes", "Quotes"),
    ("wishlist", "Wishlist"),
];

/// Wraps page content in the site layout
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_title: String,
    /// Shown in the footer as `YYYY-MM-DD`
    pub last_updated: String,
}

impl Layout {
    pub fn new(site_title: impl Into<String>, last_updated: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            last_updated: last_updated.into(),
        }
    }

    /// Renders a complete HTML document
    ///
    /// `active` is the page name of the highlighted navigation entry, if any.
    pub fn render(&self, page_title: &str, active: Option<&str>, content: Markup) -> Markup {
        let full_title = if page_title.is_empty() {
            self.site_title.clone()
        } else {
            format!("{} | {}", page_title, self.site_title)
        };

        html! {
            (DOCTYPE)
            html lang="en" data-theme="dark" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (full_title) }
                    link rel="stylesheet" href="css/style.css";
                    script src="js/theme-toggle.js" defer {}
                }
                body {
                    header {
                        a.site-title href="index.html" { (self.site_title) }
                        nav {
                            ul {
                                @for (name, label) in NAV_ITEMS {
                                    li {
                                        @if active == Some(name) {
                                            a.active href={ (name) ".html" } aria-current="page" { (label) }
                                        } @else {
                                            a href={ (name) ".html" } { (label) }
                                        }
                                    }
                                }
                            }
                        }
                        label.theme-switch for="theme-toggle" {
                            input #theme-toggle type="checkbox";
                            span { "Light mode" }
                        }
                    }
                    main { (content) }
                    footer {
                        p { "Last updated " time datetime=(self.last_updated) { (self.last_updated) } }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_contains_chrome() {
        let layout = Layout::new("My Shelf", "2025-03-01");
        let html = layout
            .render("Quotes", Some("quotes"), html! { p { "body" } })
            .into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Quotes | My Shelf</title>"));
        assert!(html.contains("js/theme-toggle.js"));
        assert!(html.contains("id=\"theme-toggle\""));
        assert!(html.contains("2025-03-01"));
        assert!(html.contains("<p>body</p>"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    }

    #[test]
    fn test_site_title_is_escaped() {
        let layout = Layout::new("<b>Books</b>", "2025-03-01");
        let html = layout.render("", None, html! {}).into_string();

        assert!(html.contains("&lt;b&gt;Books&lt;/b&gt;"));
        assert!(!html.contains("<b>Books</b>"));
    }
}
