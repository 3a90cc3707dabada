//! Category, search and featured filtering shared by the listing pages.

use crate::content::{BlogPost, Project, SkillCategory};

pub const ALL_CATEGORIES: &str = "All";

/// Fields a listing exposes to the filter.
pub trait Filterable {
    fn category(&self) -> &str;
    fn title(&self) -> &str;
    /// Excerpt or description.
    fn summary(&self) -> &str;
    fn tags(&self) -> impl Iterator<Item = &str> + '_;

    fn featured(&self) -> bool {
        false
    }
}

impl Filterable for BlogPost {
    fn category(&self) -> &str {
        self.category
    }

    fn title(&self) -> &str {
        self.title
    }

    fn summary(&self) -> &str {
        self.excerpt
    }

    fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.iter().copied()
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

impl Filterable for Project {
    fn category(&self) -> &str {
        self.category
    }

    fn title(&self) -> &str {
        self.title
    }

    fn summary(&self) -> &str {
        self.description
    }

    fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.tech.iter().copied()
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

impl Filterable for SkillCategory {
    fn category(&self) -> &str {
        self.title
    }

    fn title(&self) -> &str {
        self.title
    }

    fn summary(&self) -> &str {
        self.description
    }

    fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.skills.iter().map(|skill| skill.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub category: String,
    pub search: String,
    pub featured_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            featured_only: false,
        }
    }
}

impl FilterState {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_featured_only(mut self, featured_only: bool) -> Self {
        self.featured_only = featured_only;
        self
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.category == category
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        let category_match = self.category == ALL_CATEGORIES || item.category() == self.category;
        if !category_match || (self.featured_only && !item.featured()) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        contains(item.title()) || contains(item.summary()) || item.tags().any(contains)
    }

    /// Matching items in their original order.
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

/// Splits a filtered listing into `(featured, regular)`, preserving order.
pub fn partition_featured<'a, T: Filterable>(items: Vec<&'a T>) -> (Vec<&'a T>, Vec<&'a T>) {
    items.into_iter().partition(|item| item.featured())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BLOG_POSTS, PROJECTS, SKILL_CATEGORIES};
    use proptest::prelude::*;

    fn titles<T: Filterable>(items: &[&T]) -> Vec<String> {
        items.iter().map(|item| item.title().to_string()).collect()
    }

    #[test]
    fn default_state_keeps_everything() {
        let state = FilterState::default();
        assert_eq!(state.apply(BLOG_POSTS).len(), BLOG_POSTS.len());
        assert_eq!(state.apply(PROJECTS).len(), PROJECTS.len());
    }

    #[test]
    fn blog_search_is_case_insensitive_and_trimmed() {
        let state = FilterState::default().with_search("  three.js ");
        let posts = state.apply(BLOG_POSTS);
        assert_eq!(
            titles(&posts),
            ["Building Immersive 3D Web Experiences with Three.js"]
        );
    }

    #[test]
    fn search_reaches_tags() {
        let state = FilterState::default().with_search("es2024");
        let posts = state.apply(BLOG_POSTS);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 6);
    }

    #[test]
    fn category_and_search_combine() {
        let state = FilterState::default()
            .with_category("E-commerce")
            .with_search("Manglanam");
        let projects = state.apply(PROJECTS);
        assert_eq!(projects.len(), 1);
        assert!(projects[0].title.contains("Manglanam Naturals"));

        let whole_category = FilterState::default().with_category("E-commerce");
        assert!(whole_category.apply(PROJECTS).len() > 1);
    }

    #[test]
    fn featured_only_keeps_featured_items() {
        let state = FilterState::default().with_featured_only(true);
        let projects = state.apply(PROJECTS);
        assert!(!projects.is_empty());
        assert!(projects.iter().all(|project| project.featured));
        assert_eq!(
            projects.len(),
            PROJECTS.iter().filter(|project| project.featured).count()
        );
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let state = FilterState::default().with_category("Gardening");
        assert!(state.apply(BLOG_POSTS).is_empty());
    }

    #[test]
    fn skills_search_covers_skill_names() {
        let state = FilterState::default().with_search("docker");
        let categories = state.apply(SKILL_CATEGORIES);
        assert_eq!(titles(&categories), ["DevOps & Cloud"]);
    }

    #[test]
    fn blog_groups_split_on_featured() {
        let (featured, regular) = partition_featured(FilterState::default().apply(BLOG_POSTS));
        assert_eq!(featured.iter().map(|post| post.id).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(regular.iter().map(|post| post.id).collect::<Vec<_>>(), [2, 4, 5, 6]);
    }

    proptest! {
        #[test]
        fn filtering_is_an_ordered_subset(
            category_index in 0usize..7,
            search in "[a-zA-Z. ]{0,6}",
            featured_only in any::<bool>(),
        ) {
            let category = crate::content::BLOG_CATEGORIES[category_index];
            let state = FilterState::default()
                .with_category(category)
                .with_search(search)
                .with_featured_only(featured_only);
            let kept = state.apply(BLOG_POSTS);

            let ids: Vec<u32> = kept.iter().map(|post| post.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&ids, &sorted);

            for post in &kept {
                prop_assert!(category == ALL_CATEGORIES || post.category == category);
                prop_assert!(!featured_only || post.featured);
            }

            let (featured, regular) = partition_featured(kept.clone());
            prop_assert_eq!(featured.len() + regular.len(), kept.len());
            prop_assert!(featured.iter().all(|post| post.featured));
            prop_assert!(regular.iter().all(|post| !post.featured));
        }

        #[test]
        fn blank_search_matches_like_no_search(padding in " {0,4}") {
            let padded = FilterState::default().with_search(padding);
            prop_assert_eq!(padded.apply(PROJECTS).len(), PROJECTS.len());
        }
    }
}
