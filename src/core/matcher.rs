use crate::core::scoring::{format_naira, percentage};
use crate::models::{
    BudgetRange, CampusType, FacilitiesImportance, Facility, MatchWeights, PreferenceCriteria,
    ScoredUniversity, University,
};

/// Library capacity above which a library counts as "large" for matching
pub const LARGE_LIBRARY_CAPACITY: u32 = 1000;

/// Reason emitted when no expressed preference was satisfied
pub const FALLBACK_MATCH_REASON: &str = "General match based on your preferences";

/// Scores universities against a student's stated preferences
///
/// Each criterion awards its full weight on a match, nothing on a mismatch,
/// and half its weight when the student expressed no preference. Facilities
/// award the matched fraction of the flagged facilities.
#[derive(Debug, Clone, Copy)]
pub struct MatchScorer {
    weights: MatchWeights,
}

impl MatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Score one university, returning the match percentage and its reasons
    pub fn score(
        &self,
        university: &University,
        preferences: &PreferenceCriteria,
    ) -> (f64, Vec<String>) {
        (
            self.match_score(university, preferences),
            match_reasons(university, preferences),
        )
    }

    /// Match percentage in `0..=100`
    pub fn match_score(&self, university: &University, preferences: &PreferenceCriteria) -> f64 {
        let w = &self.weights;
        let awarded = course_credit(university, preferences.preferred_course.as_deref(), w.course)
            + budget_credit(university, preferences.budget_range.as_ref(), w.budget)
            + state_credit(university, &preferences.preferred_states, w.state)
            + facilities_credit(university, &preferences.facilities, w.facilities)
            + campus_type_credit(university, preferences.campus_type, w.campus_type);

        percentage(awarded, w.total())
    }

    /// Score every candidate and sort by match score, descending
    ///
    /// The sort is stable, so equal scores keep catalog order.
    pub fn rank(
        &self,
        candidates: &[University],
        preferences: &PreferenceCriteria,
    ) -> Vec<ScoredUniversity> {
        let mut scored: Vec<ScoredUniversity> = candidates
            .iter()
            .map(|university| {
                let (match_score, match_reasons) = self.score(university, preferences);
                ScoredUniversity {
                    university: university.clone(),
                    match_score,
                    match_reasons,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        tracing::debug!("Ranked {} universities by match score", scored.len());

        scored
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Credit awarded when the student expressed no preference
#[inline]
fn no_preference(weight: f64) -> f64 {
    weight / 2.0
}

#[inline]
fn all_or_nothing(matched: bool, weight: f64) -> f64 {
    if matched {
        weight
    } else {
        0.0
    }
}

pub fn offers_course(university: &University, course: &str) -> bool {
    let needle = course.to_lowercase();
    university
        .courses
        .iter()
        .any(|offered| offered.to_lowercase().contains(&needle))
}

pub fn in_preferred_states(university: &University, states: &[String]) -> bool {
    states.iter().any(|state| *state == university.state)
}

pub fn course_credit(university: &University, course: Option<&str>, weight: f64) -> f64 {
    match course {
        Some(course) => all_or_nothing(offers_course(university, course), weight),
        None => no_preference(weight),
    }
}

pub fn budget_credit(university: &University, budget: Option<&BudgetRange>, weight: f64) -> f64 {
    match budget {
        Some(budget) => all_or_nothing(budget.overlaps(&university.tuition_fee), weight),
        None => no_preference(weight),
    }
}

pub fn state_credit(university: &University, states: &[String], weight: f64) -> f64 {
    if states.is_empty() {
        return no_preference(weight);
    }
    all_or_nothing(in_preferred_states(university, states), weight)
}

pub fn facilities_credit(
    university: &University,
    importance: &FacilitiesImportance,
    weight: f64,
) -> f64 {
    let flagged = importance.flagged().count();
    if flagged == 0 {
        return no_preference(weight);
    }

    let matched = importance
        .flagged()
        .filter(|facility| university.has_facility(*facility, LARGE_LIBRARY_CAPACITY))
        .count();

    matched as f64 / flagged as f64 * weight
}

pub fn campus_type_credit(
    university: &University,
    preference: Option<CampusType>,
    weight: f64,
) -> f64 {
    match preference {
        Some(campus_type) => all_or_nothing(campus_type == university.campus_type, weight),
        None => no_preference(weight),
    }
}

fn facility_reason(facility: Facility) -> &'static str {
    match facility {
        Facility::Library => "Has a large library",
        Facility::Hostel => "Has hostel facilities",
        Facility::Laboratory => "Has laboratory facilities",
        Facility::SportsComplex => "Has a sports complex",
        Facility::MedicalCenter => "Has a medical center",
    }
}

/// Reasons for every expressed preference the university satisfies
///
/// Order: course, budget, state, facilities, campus type. Falls back to a
/// single generic reason when nothing matched.
pub fn match_reasons(university: &University, preferences: &PreferenceCriteria) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(course) = preferences.preferred_course.as_deref() {
        if offers_course(university, course) {
            reasons.push(format!("Offers your preferred course: {}", course));
        }
    }

    if let Some(budget) = &preferences.budget_range {
        if budget.overlaps(&university.tuition_fee) {
            reasons.push(format!(
                "Tuition fee ({} - {}) is within your budget",
                format_naira(university.tuition_fee.min),
                format_naira(university.tuition_fee.max)
            ));
        }
    }

    if in_preferred_states(university, &preferences.preferred_states) {
        reasons.push(format!("Located in your preferred state: {}", university.state));
    }

    reasons.extend(
        preferences
            .facilities
            .flagged()
            .filter(|facility| university.has_facility(*facility, LARGE_LIBRARY_CAPACITY))
            .map(|facility| facility_reason(facility).to_string()),
    );

    if preferences.campus_type == Some(university.campus_type) {
        reasons.push(format!(
            "Campus type matches your preference: {}",
            university.campus_type
        ));
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_MATCH_REASON.to_string());
    }

    reasons
}
