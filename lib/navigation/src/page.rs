//! Pages and the content they render.
//!
//! Every page is static: a heading and one link to the next stop in the
//! tour (Login, Shop, Machines, Maintenance). Captured path parameters are
//! carried alongside the rendered page but never change its content.

use crate::pattern::RouteParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A page the router can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    Shop,
    Machines,
    Maintenance,
    /// Shown when no route matches.
    NotFound,
}

/// A navigation link rendered on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// What a page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub heading: &'static str,
    pub link: PageLink,
}

impl Page {
    /// Every page, in tour order, followed by the not-found page.
    pub const ALL: [Page; 5] = [
        Page::Login,
        Page::Shop,
        Page::Machines,
        Page::Maintenance,
        Page::NotFound,
    ];

    /// Returns the page's stable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Shop => "shop",
            Self::Machines => "machines",
            Self::Maintenance => "maintenance",
            Self::NotFound => "not_found",
        }
    }

    /// Returns the heading and link the page renders.
    #[must_use]
    pub const fn content(&self) -> PageContent {
        match self {
            Self::Login => PageContent {
                heading: "Login Page",
                link: PageLink {
                    label: "Go to Shop",
                    href: "/shop",
                },
            },
            Self::Shop => PageContent {
                heading: "Shop Page",
                link: PageLink {
                    label: "View Machines",
                    href: "/machines",
                },
            },
            Self::Machines => PageContent {
                heading: "Machines Page",
                link: PageLink {
                    label: "Go to Maintenance",
                    href: "/maintenance",
                },
            },
            Self::Maintenance => PageContent {
                heading: "Maintenance Page",
                link: PageLink {
                    label: "Back to Login",
                    href: "/",
                },
            },
            Self::NotFound => PageContent {
                heading: "Page Not Found",
                link: PageLink {
                    label: "Back to Login",
                    href: "/",
                },
            },
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The output of rendering one path: the page shown and where it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    /// The page selected by the route table.
    pub page: Page,
    /// The normalized path that was rendered.
    pub path: String,
    /// Parameters captured from the path. Pages do not read them.
    pub params: RouteParams,
    /// What the page displays.
    pub content: PageContent,
}

impl RenderedPage {
    /// Returns the heading text.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        self.content.heading
    }

    /// Returns the page's single navigation link.
    #[must_use]
    pub fn link(&self) -> PageLink {
        self.content.link
    }

    /// Renders the page as an HTML fragment.
    ///
    /// Page content is static text with no markup characters, so it is
    /// emitted without escaping.
    #[must_use]
    pub fn to_html(&self) -> String {
        let PageContent { heading, link } = self.content;
        format!(
            r#"<div class="page"><h1>{heading}</h1><a href="{}">{}</a></div>"#,
            link.href, link.label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_links_chain_pages() {
        assert_eq!(Page::Login.content().link.href, "/shop");
        assert_eq!(Page::Shop.content().link.href, "/machines");
        assert_eq!(Page::Machines.content().link.href, "/maintenance");
        assert_eq!(Page::Maintenance.content().link.href, "/");
    }

    #[test]
    fn headings_match_page_names() {
        assert_eq!(Page::Login.content().heading, "Login Page");
        assert_eq!(Page::Shop.content().heading, "Shop Page");
        assert_eq!(Page::Machines.content().heading, "Machines Page");
        assert_eq!(Page::Maintenance.content().heading, "Maintenance Page");
        assert_eq!(Page::NotFound.content().heading, "Page Not Found");
    }

    #[test]
    fn content_has_no_markup_characters() {
        for page in Page::ALL {
            let PageContent { heading, link } = page.content();
            for text in [heading, link.label, link.href] {
                assert!(!text.contains(['<', '>', '&', '"']), "{page}: {text}");
            }
        }
    }

    #[test]
    fn renders_html_fragment() {
        let rendered = RenderedPage {
            page: Page::Login,
            path: "/".to_string(),
            params: RouteParams::default(),
            content: Page::Login.content(),
        };
        assert_eq!(
            rendered.to_html(),
            r#"<div class="page"><h1>Login Page</h1><a href="/shop">Go to Shop</a></div>"#
        );
    }
}
