use super::template::ProjectTemplate;
use itertools::Itertools;

/// Which category the gallery is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Selects one category. The name is taken literally, so a backend category
    /// called `All` is still a real category; use [`CategoryFilter::All`] for no filter.
    pub fn only(category: impl Into<String>) -> Self {
        CategoryFilter::Only(category.into())
    }

    /// Both sides are trimmed, the same normalisation [`categories`] applies.
    fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted.trim() == category.trim(),
        }
    }
}

/// Local gallery state: the search box text and the selected category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateQuery {
    pub search: String,
    pub category: CategoryFilter,
}

impl TemplateQuery {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Inactive templates never match. The search is a case-insensitive substring
    /// match on title, description or category.
    pub fn matches(&self, template: &ProjectTemplate) -> bool {
        if !template.is_active || !self.category.accepts(&template.category) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&template.title, &template.description, &template.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, templates: &'a [ProjectTemplate]) -> Vec<&'a ProjectTemplate> {
        templates.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Distinct, sorted categories of the active templates, for the category picker.
pub fn categories(templates: &[ProjectTemplate]) -> Vec<String> {
    templates
        .iter()
        .filter(|t| t.is_active)
        .map(|t| t.category.trim())
        .filter(|c| !c.is_empty())
        .unique()
        .sorted()
        .map(str::to_string)
        .collect()
}
