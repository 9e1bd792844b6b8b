use crate::core::matcher::{in_preferred_states, offers_course};
use crate::models::{PreferenceCriteria, UniversitiesQuery, University};

/// Catalog listing filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniversityFilter {
    /// Exact state name
    pub state: Option<String>,
    /// Case-insensitive substring of any offered course
    pub course: Option<String>,
    /// Upper bound on the maximum tuition fee
    pub max_fee: Option<i64>,
}

impl UniversityFilter {
    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.course.is_none() && self.max_fee.is_none()
    }

    /// Check whether a university passes every set constraint
    #[inline]
    pub fn matches(&self, university: &University) -> bool {
        if let Some(state) = &self.state {
            if university.state != *state {
                return false;
            }
        }

        if let Some(course) = &self.course {
            if !offers_course(university, course) {
                return false;
            }
        }

        if let Some(max_fee) = self.max_fee {
            if university.tuition_fee.max > max_fee {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, catalog: &[University]) -> Vec<University> {
        catalog
            .iter()
            .filter(|university| self.matches(university))
            .cloned()
            .collect()
    }
}

impl From<UniversitiesQuery> for UniversityFilter {
    fn from(query: UniversitiesQuery) -> Self {
        Self {
            state: query.state.filter(|state| !state.is_empty()),
            course: query.course.filter(|course| !course.is_empty()),
            max_fee: query.max_fee,
        }
    }
}

/// Check whether a university satisfies every expressed preference
///
/// Used to narrow the catalog before match scoring. Course, budget, state and
/// campus type are hard constraints when expressed; facilities never filter.
#[inline]
pub fn matches_preferences(university: &University, preferences: &PreferenceCriteria) -> bool {
    // Course
    if let Some(course) = preferences.preferred_course.as_deref() {
        if !offers_course(university, course) {
            return false;
        }
    }

    // Budget overlap
    if let Some(budget) = &preferences.budget_range {
        if !budget.overlaps(&university.tuition_fee) {
            return false;
        }
    }

    // State
    if !preferences.preferred_states.is_empty()
        && !in_preferred_states(university, &preferences.preferred_states)
    {
        return false;
    }

    // Campus type
    if let Some(campus_type) = preferences.campus_type {
        if university.campus_type != campus_type {
            return false;
        }
    }

    true
}
