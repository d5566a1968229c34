use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::shell::partials::Partials;
use crate::shell::theme::ThemeState;

/// Identifies the page in `body[data-page]` and in the document title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Contact,
    Projects,
    Tools,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Contact => "contact",
            Page::Projects => "projects",
            Page::Tools => "tools",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Contact => "Contact",
            Page::Projects => "Projects",
            Page::Tools => "Tools",
        }
    }
}

/// Per-request state shared by every page: theme, partials, animation capability.
#[derive(Debug, Clone, Default)]
pub struct PageChrome {
    pub theme: ThemeState,
    pub partials: Partials,
    pub animations: bool,
}

/// Wraps page content in the document shell.
pub fn page(chrome: &PageChrome, page: Page, content: Markup) -> Markup {
    let theme = chrome.theme;
    html! {
        (DOCTYPE)
        html lang="en" data-theme=(theme.as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title()) " · Portfolio" }
                link rel="stylesheet" href="/static/style.css";
            }
            body data-page=(page.as_str()) data-animations=(if chrome.animations { "on" } else { "off" }) {
                header class="site-header" {
                    div id="nav-slot" {
                        @if let Some(nav) = &chrome.partials.nav {
                            (PreEscaped(nav))
                        }
                    }
                    (theme_toggle(theme))
                }
                main id="content" {
                    (content)
                }
                div id="footer-slot" {
                    @if let Some(footer) = &chrome.partials.footer {
                        (PreEscaped(footer))
                    }
                }
            }
        }
    }
}

fn theme_toggle(theme: ThemeState) -> Markup {
    let checked = if theme.is_dark() { "true" } else { "false" };
    html! {
        form class="theme-form" method="post" action="/theme" {
            button id="theme-toggle" type="submit" role="switch"
                aria-checked=(checked) aria-label="Toggle dark mode" {
                @if theme.is_dark() { "☀" } @else { "☾" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_applies_theme_and_page_id() {
        let chrome = PageChrome {
            theme: ThemeState::Dark,
            ..Default::default()
        };
        let out = page(&chrome, Page::Tools, html! { p { "hi" } }).into_string();
        assert!(out.contains(r#"data-theme="dark""#));
        assert!(out.contains(r#"data-page="tools""#));
        assert!(out.contains(r#"aria-checked="true""#));
    }

    #[test]
    fn test_partials_injected_verbatim() {
        let chrome = PageChrome {
            partials: Partials {
                nav: Some("<nav><a href=\"/\">Home</a></nav>".into()),
                footer: None,
            },
            ..Default::default()
        };
        let out = page(&chrome, Page::Home, html! {}).into_string();
        assert!(out.contains("<nav><a href=\"/\">Home</a></nav>"));
        assert!(out.contains(r#"<div id="footer-slot"></div>"#));
    }
}
