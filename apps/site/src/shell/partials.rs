use std::path::Path;

use tracing::warn;

const FOOTER_YEAR_SLOT: &str = r#"<span id="footer-year"></span>"#;

/// Nav and footer markup, injected verbatim. `None` leaves the slot empty.
#[derive(Debug, Clone, Default)]
pub struct Partials {
    pub nav: Option<String>,
    pub footer: Option<String>,
}

/// Reads both partials from `site_root/partials/`. Failures are logged and
/// never shown to the visitor.
pub async fn load_partials(site_root: &Path, year: i32) -> Partials {
    let nav = read_partial(site_root, "nav.html").await;
    let footer = read_partial(site_root, "footer.html")
        .await
        .map(|html| stamp_footer_year(&html, year));
    Partials { nav, footer }
}

async fn read_partial(site_root: &Path, name: &str) -> Option<String> {
    let path = site_root.join("partials").join(name);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Some(html),
        Err(e) => {
            warn!("Partial load failed ({}): {e}", path.display());
            None
        }
    }
}

/// Fills the `footer-year` span with `year`.
pub fn stamp_footer_year(html: &str, year: i32) -> String {
    html.replace(
        FOOTER_YEAR_SLOT,
        &format!(r#"<span id="footer-year">{year}</span>"#),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_footer_year() {
        let html = r#"<footer>© <span id="footer-year"></span> Ari</footer>"#;
        assert_eq!(
            stamp_footer_year(html, 2026),
            r#"<footer>© <span id="footer-year">2026</span> Ari</footer>"#
        );
    }

    #[test]
    fn test_stamp_footer_year_without_slot_is_untouched() {
        assert_eq!(stamp_footer_year("<footer></footer>", 2026), "<footer></footer>");
    }

    #[tokio::test]
    async fn test_missing_partials_leave_empty_slots() {
        let dir = tempfile::tempdir().unwrap();
        let partials = load_partials(dir.path(), 2026).await;
        assert!(partials.nav.is_none());
        assert!(partials.footer.is_none());
    }

    #[tokio::test]
    async fn test_partials_are_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("partials");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("nav.html"), "<nav>links</nav>").unwrap();
        std::fs::write(root.join("footer.html"), FOOTER_YEAR_SLOT).unwrap();

        let partials = load_partials(dir.path(), 1999).await;
        assert_eq!(partials.nav.as_deref(), Some("<nav>links</nav>"));
        assert_eq!(
            partials.footer.as_deref(),
            Some(r#"<span id="footer-year">1999</span>"#)
        );
    }
}
