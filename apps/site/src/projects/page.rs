use crate::projects::cards::CardView;
use crate::projects::filter::{apply_filter, Filter};
use crate::projects::models::{ProjectItem, ProjectKind};

/// Owns the loaded collection and the active filter for one page view.
#[derive(Debug, Clone)]
pub struct ProjectsPage {
    all_items: Vec<ProjectItem>,
    active_filter: Filter,
}

impl ProjectsPage {
    pub fn new(all_items: Vec<ProjectItem>, active_filter: Filter) -> Self {
        Self {
            all_items,
            active_filter,
        }
    }

    pub fn active_filter(&self) -> &Filter {
        &self.active_filter
    }

    /// Card data for the items passing the active filter, in data order.
    pub fn cards(&self) -> Vec<CardView> {
        apply_filter(&self.all_items, &self.active_filter)
            .into_iter()
            .map(|item| CardView::from_item(item, &self.active_filter))
            .collect()
    }

    /// `all`, `work`, `project`, then each domain tag in first-appearance order.
    pub fn filter_options(&self) -> Vec<Filter> {
        let mut options = vec![
            Filter::All,
            Filter::Kind(ProjectKind::Work),
            Filter::Kind(ProjectKind::Project),
        ];
        for domain in self.all_items.iter().flat_map(|item| &item.domains) {
            let candidate = Filter::parse(domain);
            if matches!(candidate, Filter::Domain(_)) && !options.contains(&candidate) {
                options.push(candidate);
            }
        }
        options
    }
}
