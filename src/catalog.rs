use std::collections::HashSet;

use crate::model::{ALL_CATEGORIES, Profile};

/// Search and category state applied to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub category: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CatalogQuery {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    fn matches(&self, profile: &Profile, needle: &str) -> bool {
        let category_matches = self.category == ALL_CATEGORIES || profile.category == self.category;
        category_matches
            && (profile.title.to_lowercase().contains(needle)
                || profile.emotional.to_lowercase().contains(needle)
                || profile.cold_read.to_lowercase().contains(needle))
    }
}

/// Normalized profiles for one session. Populated once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    profiles: Vec<Profile>,
}

impl Catalog {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The "all" sentinel followed by each distinct category, first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::from([ALL_CATEGORIES]);
        let mut categories = vec![ALL_CATEGORIES.to_string()];

        for profile in &self.profiles {
            if seen.insert(profile.category.as_str()) {
                categories.push(profile.category.clone());
            }
        }

        categories
    }

    pub fn filter(&self, query: &CatalogQuery) -> Vec<&Profile> {
        let needle = query.search.to_lowercase();
        self.profiles
            .iter()
            .filter(|profile| query.matches(profile, &needle))
            .collect()
    }

    pub fn get(&self, id: i64) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskPair;

    fn profile(id: i64, title: &str, category: &str, emotional: &str, cold_read: &str) -> Profile {
        Profile {
            id,
            title: title.to_string(),
            category: category.to_string(),
            emotional: emotional.to_string(),
            cognitive: String::new(),
            behavioral: String::new(),
            attachment: String::new(),
            background: String::new(),
            control: String::new(),
            submission: String::new(),
            defense: String::new(),
            interaction: String::new(),
            dialogue: String::new(),
            cold_read: cold_read.to_string(),
            case_study: String::new(),
            risk: RiskPair::default(),
        }
    }

    fn sample_profiles() -> Vec<Profile> {
        vec![
            profile(1, "控制型·Jealous Guard", "控制型", "容易嫉妒", "你總是在意他的去向"),
            profile(2, "迴避型（疏離者）", "迴避型", "情感麻木", "你習慣一個人扛"),
            profile(3, "控制型·冷暴力者", "控制型", "沉默施壓", "jealous 的時候你會消失"),
            profile(4, "其他", "其他", "", ""),
        ]
    }

    fn sample() -> Catalog {
        Catalog::new(sample_profiles())
    }

    fn ids(profiles: &[&Profile]) -> Vec<i64> {
        profiles.iter().map(|profile| profile.id).collect()
    }

    #[test]
    fn filter_with_defaults_returns_everything_in_order() {
        let catalog = sample();
        let all = catalog.filter(&CatalogQuery::default());
        assert_eq!(ids(&all), vec![1, 2, 3, 4]);
        assert_eq!(ids(&catalog.filter(&CatalogQuery::new("", ALL_CATEGORIES))), vec![1, 2, 3, 4]);
    }

    #[test]
    fn filter_by_category_only() {
        let catalog = sample();
        assert_eq!(ids(&catalog.filter(&CatalogQuery::new("", "控制型"))), vec![1, 3]);
        assert_eq!(ids(&catalog.filter(&CatalogQuery::new("", "不存在"))), Vec::<i64>::new());
    }

    #[test]
    fn filter_search_is_case_insensitive_across_title_and_cold_read() {
        let catalog = sample();
        let hits = catalog.filter(&CatalogQuery::new("JEALOUS", ALL_CATEGORIES));
        assert_eq!(ids(&hits), vec![1, 3]);
    }

    #[test]
    fn filter_search_reads_emotional_field() {
        let catalog = sample();
        assert_eq!(ids(&catalog.filter(&CatalogQuery::new("麻木", ALL_CATEGORIES))), vec![2]);
    }

    #[test]
    fn filter_combines_category_and_search() {
        let catalog = sample();
        assert_eq!(ids(&catalog.filter(&CatalogQuery::new("jealous", "迴避型"))), Vec::<i64>::new());
        assert_eq!(ids(&catalog.filter(&CatalogQuery::new("沉默", "控制型"))), vec![3]);
        assert_eq!(ids(&catalog.filter(&CatalogQuery::new("你", "迴避型"))), vec![2]);
    }

    #[test]
    fn filter_ignores_fields_outside_search_index() {
        let mut catalog_profiles = sample_profiles();
        catalog_profiles[3].cognitive = "needle".to_string();
        let catalog = Catalog::new(catalog_profiles);
        assert!(catalog.filter(&CatalogQuery::new("needle", ALL_CATEGORIES)).is_empty());
    }

    #[test]
    fn categories_are_unique_with_sentinel_first() {
        let categories = sample().categories();
        assert_eq!(categories, vec![ALL_CATEGORIES, "控制型", "迴避型", "其他"]);
    }

    #[test]
    fn categories_of_empty_catalog_is_sentinel_only() {
        assert_eq!(Catalog::default().categories(), vec![ALL_CATEGORIES]);
    }

    #[test]
    fn categories_keep_sentinel_once_when_data_reuses_it() {
        let catalog = Catalog::new(vec![profile(9, "全部·x", ALL_CATEGORIES, "", "")]);
        assert_eq!(catalog.categories(), vec![ALL_CATEGORIES]);
    }

    #[test]
    fn get_finds_profile_by_id() {
        let catalog = sample();
        assert_eq!(catalog.get(2).map(|profile| profile.title.as_str()), Some("迴避型（疏離者）"));
        assert!(catalog.get(99).is_none());
    }
}
