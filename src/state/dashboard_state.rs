// ============================================================================
// DASHBOARD STATE - Subject catalog, year/search filter, "show more" toggle
// ============================================================================

use crate::models::{card_color, Subject, YearFilter};
use crate::utils::VISIBLE_CARDS;

/// Year + search filter over the in-memory catalog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardFilter {
    pub year: YearFilter,
    pub search: String,
}

impl DashboardFilter {
    pub fn new(year: YearFilter, search: impl Into<String>) -> Self {
        Self {
            year,
            search: search.into(),
        }
    }

    /// Case-insensitive substring on title or code; blank term matches all
    pub fn matches(&self, subject: &Subject) -> bool {
        if !self.year.matches(subject) {
            return false;
        }
        let term = self.search.trim().to_lowercase();
        term.is_empty()
            || subject.title.to_lowercase().contains(&term)
            || subject.code.to_lowercase().contains(&term)
    }

    /// Keeps source order
    pub fn apply(&self, items: &[Subject]) -> Vec<Subject> {
        items.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubjectCard {
    pub subject: Subject,
    pub color: &'static str,
}

/// What the cards grid should show right now
#[derive(Clone, Debug, PartialEq)]
pub struct CardsView {
    pub cards: Vec<SubjectCard>,
    pub total: usize,
    /// `None` when everything fits without a toggle
    pub toggle_label: Option<String>,
}

impl CardsView {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub course_id: String,
    pub course_title: Option<String>,
    catalog: Vec<Subject>,
    filter: DashboardFilter,
    show_all: bool,
}

impl DashboardState {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Self::default()
        }
    }

    /// Inactive subjects never reach the grid
    pub fn set_catalog(&mut self, subjects: Vec<Subject>) {
        self.catalog = subjects.into_iter().filter(Subject::is_active).collect();
    }

    pub fn catalog(&self) -> &[Subject] {
        &self.catalog
    }

    pub fn filter(&self) -> &DashboardFilter {
        &self.filter
    }

    /// Picking a year collapses the grid again
    pub fn set_year_filter(&mut self, year: YearFilter) {
        self.filter.year = year;
        self.show_all = false;
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.search = term.to_string();
    }

    pub fn toggle_show_all(&mut self) -> bool {
        self.show_all = !self.show_all;
        self.show_all
    }

    pub fn is_showing_all(&self) -> bool {
        self.show_all
    }

    pub fn filtered(&self) -> Vec<Subject> {
        self.filter.apply(&self.catalog)
    }

    pub fn find_subject(&self, code: &str) -> Option<&Subject> {
        self.catalog.iter().find(|s| s.code == code)
    }

    pub fn cards_view(&self) -> CardsView {
        let filtered = self.filtered();
        let total = filtered.len();
        let hidden = total.saturating_sub(VISIBLE_CARDS);

        let toggle_label = if hidden == 0 {
            None
        } else if self.show_all {
            Some("Show Less ▲".to_string())
        } else {
            Some(format!("View More ({} hidden) ▼", hidden))
        };

        let take = if self.show_all { total } else { VISIBLE_CARDS };
        let cards = filtered
            .into_iter()
            .take(take)
            .enumerate()
            .map(|(index, subject)| SubjectCard {
                subject,
                color: card_color(index),
            })
            .collect();

        CardsView {
            cards,
            total,
            toggle_label,
        }
    }
}
