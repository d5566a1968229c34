use crate::projects::models::{ProjectItem, ProjectKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Kind(ProjectKind),
    Domain(String),
}

impl Filter {
    /// `all`, `work` and `project` are reserved; anything else is a domain tag.
    /// A blank value means `all`.
    pub fn parse(raw: &str) -> Filter {
        match raw.trim() {
            "" | "all" => Filter::All,
            "work" => Filter::Kind(ProjectKind::Work),
            "project" => Filter::Kind(ProjectKind::Project),
            domain => Filter::Domain(domain.to_string()),
        }
    }

    /// The value sent back as `?filter=`.
    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Kind(kind) => kind.as_str(),
            Filter::Domain(domain) => domain,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Filter::All => "All",
            Filter::Kind(ProjectKind::Work) => "Work",
            Filter::Kind(ProjectKind::Project) => "Projects",
            Filter::Kind(ProjectKind::Other) => "Other",
            Filter::Domain(domain) => domain,
        }
    }

    pub fn matches(&self, item: &ProjectItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Kind(kind) => item.kind == Some(*kind),
            Filter::Domain(domain) => item.has_domain(domain),
        }
    }
}

/// Items passing `filter`, in their original order.
pub fn apply_filter<'a>(items: &'a [ProjectItem], filter: &Filter) -> Vec<&'a ProjectItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, kind: ProjectKind, domains: &[&str]) -> ProjectItem {
        ProjectItem {
            title: Some(title.to_string()),
            kind: Some(kind),
            domains: domains.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<ProjectItem> {
        vec![
            item("one", ProjectKind::Work, &["AI", "Data"]),
            item("two", ProjectKind::Project, &["Web"]),
            item("three", ProjectKind::Work, &["Web", "AI"]),
            item("four", ProjectKind::Project, &[]),
        ]
    }

    fn titles(items: &[&ProjectItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone().unwrap()).collect()
    }

    #[test]
    fn test_parse_reserved_values() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse(""), Filter::All);
        assert_eq!(Filter::parse("work"), Filter::Kind(ProjectKind::Work));
        assert_eq!(Filter::parse("project"), Filter::Kind(ProjectKind::Project));
        assert_eq!(Filter::parse("AI"), Filter::Domain("AI".into()));
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let items = sample();
        let out = apply_filter(&items, &Filter::All);
        assert_eq!(titles(&out), ["one", "two", "three", "four"]);
    }

    #[test]
    fn test_kind_filter() {
        let items = sample();
        let out = apply_filter(&items, &Filter::parse("work"));
        assert_eq!(titles(&out), ["one", "three"]);
        assert!(out.iter().all(|i| i.kind == Some(ProjectKind::Work)));
    }

    #[test]
    fn test_domain_filter() {
        let items = sample();
        let out = apply_filter(&items, &Filter::parse("AI"));
        assert_eq!(titles(&out), ["one", "three"]);
    }

    #[test]
    fn test_domain_filter_is_case_sensitive() {
        let items = sample();
        assert!(apply_filter(&items, &Filter::parse("ai")).is_empty());
    }
}
