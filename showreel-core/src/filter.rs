//! Category filter for the static portfolio grid.

use crate::dom::{Dom, Target};

pub const FILTER_BUTTON: &str = ".filter-btn";
pub const PORTFOLIO_ITEM: &str = ".portfolio-item";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioFilter {
    All,
    Category(String),
}

impl PortfolioFilter {
    /// Parse a `data-filter` value; `"all"` (or nothing) shows everything.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => Self::All,
            other => Self::Category(other.to_string()),
        }
    }

    #[must_use]
    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

/// Highlight the button for `value` and hide grid items outside its category.
/// Returns how many items remain visible.
pub fn apply_filter(dom: &mut impl Dom, value: &str) -> usize {
    let filter = PortfolioFilter::parse(value);

    for index in 0..dom.count(FILTER_BUTTON) {
        let selected = dom
            .attribute(FILTER_BUTTON, index, "data-filter")
            .is_some_and(|f| PortfolioFilter::parse(&f) == filter);
        dom.toggle_class(&Target::nth(FILTER_BUTTON, index), "active", selected);
    }

    let mut shown = 0;
    for index in 0..dom.count(PORTFOLIO_ITEM) {
        let category = dom.attribute(PORTFOLIO_ITEM, index, "data-category");
        let visible = filter.shows(category.as_deref());
        let display = if visible { "block" } else { "none" };
        dom.set_style(&Target::nth(PORTFOLIO_ITEM, index), "display", display);
        shown += usize::from(visible);
    }
    log::debug!("portfolio filter {value:?}: {shown} shown");
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDom;

    fn grid() -> FakeDom {
        let mut dom = FakeDom::default();
        for filter in ["all", "wedding", "commercial"] {
            dom.add_with(FILTER_BUTTON, &[("data-filter", filter)]);
        }
        for category in ["wedding", "commercial", "wedding"] {
            dom.add_with(PORTFOLIO_ITEM, &[("data-category", category)]);
        }
        dom.add(PORTFOLIO_ITEM);
        dom
    }

    #[test]
    fn category_hides_other_items() {
        let mut dom = grid();
        assert_eq!(apply_filter(&mut dom, "wedding"), 2);
        assert_eq!(dom.style(PORTFOLIO_ITEM, 0, "display"), Some("block"));
        assert_eq!(dom.style(PORTFOLIO_ITEM, 1, "display"), Some("none"));
        assert_eq!(dom.style(PORTFOLIO_ITEM, 3, "display"), Some("none"));
        assert!(dom.has_class(FILTER_BUTTON, 1, "active"));
        assert!(!dom.has_class(FILTER_BUTTON, 0, "active"));
    }

    #[test]
    fn all_shows_everything_including_uncategorised() {
        let mut dom = grid();
        apply_filter(&mut dom, "commercial");
        assert_eq!(apply_filter(&mut dom, "all"), 4);
        assert!(dom.has_class(FILTER_BUTTON, 0, "active"));
        assert!(!dom.has_class(FILTER_BUTTON, 2, "active"));
    }

    #[test]
    fn parse_treats_blank_as_all() {
        assert_eq!(PortfolioFilter::parse(" "), PortfolioFilter::All);
        assert_eq!(
            PortfolioFilter::parse("drone"),
            PortfolioFilter::Category("drone".into())
        );
    }
}
