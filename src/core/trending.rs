use chrono::Datelike;
use crate::core::scoring::{first_match, sum_matching, tier_at_least, tier_at_most, Tier};
use crate::models::{CampusType, TrendCategory, TrendingUniversity, University};

/// Maximum number of trend reasons reported per university
pub const MAX_TREND_REASONS: usize = 4;

/// Reason emitted when no trend signal qualified
pub const FALLBACK_TREND_REASON: &str = "Emerging as a popular choice among students";

// Reason thresholds
const RECENT_AGE: i32 = 10;
const YOUNG_AGE: i32 = 20;
const GROWTH_POPULATION_MIN: u32 = 10_000;
const GROWTH_POPULATION_MAX: u32 = 25_000;
const WIDE_COURSE_COUNT: usize = 40;
const MODERN_FACILITIES_MIN: usize = 3;
const ACCREDITATION_MIN: usize = 3;
const GOOD_STUDENT_RATIO: f64 = 20.0;
const TOP_NATIONAL_RANK: u32 = 30;
const DIVERSE_FACULTY_COUNT: usize = 8;

// Category thresholds
const RISING_STAR_MAX_AGE: i32 = 15;
const RISING_STAR_MIN_SCORE: f64 = 70.0;
const POPULAR_CHOICE_MIN_POPULATION: u32 = 15_000;
const POPULAR_CHOICE_MIN_SCORE: f64 = 65.0;
const GROWING_FAST_MAX_AGE: i32 = 25;
const GROWING_FAST_MIN_POPULATION: u32 = 5_000;
const GROWING_FAST_MIN_SCORE: f64 = 60.0;

/// Point table for the trend score
///
/// Points accumulate across all factors and the total is clamped to
/// `max_score`; nothing is normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoints {
    /// Age in years, first tier with `age <= limit` wins
    pub age_tiers: [Tier<i32>; 3],
    pub age_fallback: f64,
    pub population_sweet_spot_min: u32,
    pub population_sweet_spot_max: u32,
    pub population_sweet_spot: f64,
    /// Above the sweet spot
    pub population_large: f64,
    pub population_small_min: u32,
    pub population_small: f64,
    pub population_tiny: f64,
    /// Course count, first tier with `count >= limit` wins
    pub course_tiers: [Tier<usize>; 3],
    pub course_fallback: f64,
    pub hostel: f64,
    pub medical_center: f64,
    pub laboratories: f64,
    pub sports_complex: f64,
    pub large_library: f64,
    pub large_library_capacity: u32,
    pub per_accreditation: f64,
    pub accreditation_cap: f64,
    pub urban: f64,
    pub suburban: f64,
    pub rural: f64,
    pub scholarship: f64,
    /// Ranks at or below this earn `ranking_base - rank / ranking_divisor`
    pub ranking_cutoff: u32,
    pub ranking_base: f64,
    pub ranking_divisor: f64,
    pub max_score: f64,
}

impl Default for TrendPoints {
    fn default() -> Self {
        Self {
            age_tiers: [Tier::new(10, 40.0), Tier::new(20, 30.0), Tier::new(30, 20.0)],
            age_fallback: 10.0,
            population_sweet_spot_min: 5_000,
            population_sweet_spot_max: 20_000,
            population_sweet_spot: 25.0,
            population_large: 20.0,
            population_small_min: 1_000,
            population_small: 15.0,
            population_tiny: 5.0,
            course_tiers: [Tier::new(50, 20.0), Tier::new(30, 15.0), Tier::new(15, 10.0)],
            course_fallback: 5.0,
            hostel: 3.0,
            medical_center: 4.0,
            laboratories: 4.0,
            sports_complex: 3.0,
            large_library: 4.0,
            large_library_capacity: 2_000,
            per_accreditation: 2.0,
            accreditation_cap: 10.0,
            urban: 8.0,
            suburban: 6.0,
            rural: 4.0,
            scholarship: 5.0,
            ranking_cutoff: 50,
            ranking_base: 15.0,
            ranking_divisor: 10.0,
            max_score: 100.0,
        }
    }
}

/// Trend results after sorting, filtering and truncation
#[derive(Debug)]
pub struct TrendRanking {
    pub trending: Vec<TrendingUniversity>,
    /// Entries left after category filtering, before truncation
    pub total: usize,
}

/// Scores how "trending" a university is, independent of any student
#[derive(Debug, Clone, Copy)]
pub struct TrendScorer {
    points: TrendPoints,
    current_year: i32,
}

impl TrendScorer {
    pub fn new(points: TrendPoints, current_year: i32) -> Self {
        Self { points, current_year }
    }

    /// Scorer using the default point table and today's year
    pub fn for_current_year() -> Self {
        Self::new(TrendPoints::default(), chrono::Utc::now().year())
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn points(&self) -> &TrendPoints {
        &self.points
    }

    /// Score, reasons and category for one university
    pub fn score(&self, university: &University) -> (f64, Vec<String>, TrendCategory) {
        let score = self.trend_score(university);
        let reasons = self.trend_reasons(university);
        let category = self.category(university, score);
        (score, reasons, category)
    }

    pub fn evaluate(&self, university: &University) -> TrendingUniversity {
        let (trend_score, trend_reasons, trend_category) = self.score(university);
        TrendingUniversity {
            university: university.clone(),
            trend_score,
            trend_reasons,
            trend_category,
        }
    }

    /// Trend score clamped to `0..=max_score`
    pub fn trend_score(&self, university: &University) -> f64 {
        self.raw_points(university).min(self.points.max_score).max(0.0)
    }

    /// Unclamped point total; may exceed the maximum score
    pub fn raw_points(&self, university: &University) -> f64 {
        self.age_points(university)
            + self.population_points(university)
            + self.course_points(university)
            + self.facility_points(university)
            + self.accreditation_points(university)
            + self.campus_points(university)
            + self.scholarship_points(university)
            + self.ranking_points(university)
    }

    pub fn age_points(&self, university: &University) -> f64 {
        let p = &self.points;
        tier_at_most(university.age(self.current_year), &p.age_tiers, p.age_fallback)
    }

    pub fn population_points(&self, university: &University) -> f64 {
        let p = &self.points;
        let population = university.student_population;
        first_match(
            [
                (
                    (p.population_sweet_spot_min..=p.population_sweet_spot_max)
                        .contains(&population),
                    p.population_sweet_spot,
                ),
                (population > p.population_sweet_spot_max, p.population_large),
                (population >= p.population_small_min, p.population_small),
            ],
            p.population_tiny,
        )
    }

    pub fn course_points(&self, university: &University) -> f64 {
        let p = &self.points;
        tier_at_least(university.courses.len(), &p.course_tiers, p.course_fallback)
    }

    pub fn facility_points(&self, university: &University) -> f64 {
        let p = &self.points;
        sum_matching([
            (university.has_hostel, p.hostel),
            (university.has_medical_center, p.medical_center),
            (university.has_laboratories, p.laboratories),
            (university.has_sports_complex, p.sports_complex),
            (university.library_capacity > p.large_library_capacity, p.large_library),
        ])
    }

    pub fn accreditation_points(&self, university: &University) -> f64 {
        let p = &self.points;
        (university.accreditation.len() as f64 * p.per_accreditation).min(p.accreditation_cap)
    }

    pub fn campus_points(&self, university: &University) -> f64 {
        match university.campus_type {
            CampusType::Urban => self.points.urban,
            CampusType::Suburban => self.points.suburban,
            CampusType::Rural => self.points.rural,
        }
    }

    pub fn scholarship_points(&self, university: &University) -> f64 {
        if university.scholarship_available {
            self.points.scholarship
        } else {
            0.0
        }
    }

    /// Fractional bonus for nationally ranked universities; never rounded
    pub fn ranking_points(&self, university: &University) -> f64 {
        let p = &self.points;
        university
            .ranking
            .national_rank()
            .filter(|rank| *rank <= p.ranking_cutoff)
            .map_or(0.0, |rank| p.ranking_base - rank as f64 / p.ranking_divisor)
    }

    /// Up to four reasons, in fixed priority order
    pub fn trend_reasons(&self, university: &University) -> Vec<String> {
        let mut reasons: Vec<String> = Vec::new();
        let age = university.age(self.current_year);

        if age <= RECENT_AGE {
            reasons.push("Recently established with modern facilities".to_string());
        } else if age <= YOUNG_AGE {
            reasons.push("Young university with innovative programs".to_string());
        }

        let population = university.student_population;
        if (GROWTH_POPULATION_MIN..=GROWTH_POPULATION_MAX).contains(&population) {
            reasons.push("Rapidly growing student population".to_string());
        }

        if university.courses.len() >= WIDE_COURSE_COUNT {
            reasons.push("Wide variety of academic programs".to_string());
        }

        let modern: Vec<&str> = [
            (university.has_medical_center, "medical center"),
            (university.has_laboratories, "modern laboratories"),
            (university.has_sports_complex, "sports complex"),
            (university.library_capacity > self.points.large_library_capacity, "large library"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect();

        if modern.len() >= MODERN_FACILITIES_MIN {
            reasons.push(format!("Excellent facilities including {} and {}", modern[0], modern[1]));
        }

        match university.campus_type {
            CampusType::Urban => {
                reasons.push("Prime urban location with city opportunities".to_string());
            }
            CampusType::Suburban => {
                reasons.push(
                    "Strategic suburban location balancing city access and campus life".to_string(),
                );
            }
            CampusType::Rural => {}
        }

        if university.accreditation.len() >= ACCREDITATION_MIN {
            reasons.push("Multiple accreditations ensuring quality education".to_string());
        }

        if university.scholarship_available {
            reasons.push("Scholarship opportunities available".to_string());
        }

        if university
            .student_ratio()
            .value()
            .is_some_and(|ratio| ratio <= GOOD_STUDENT_RATIO)
        {
            reasons.push(
                "Excellent student-to-lecturer ratio for personalized attention".to_string(),
            );
        }

        if let Some(rank) = university
            .ranking
            .national_rank()
            .filter(|rank| *rank <= TOP_NATIONAL_RANK)
        {
            reasons.push(format!("High national ranking (#{})", rank));
        }

        if university.faculties.len() >= DIVERSE_FACULTY_COUNT {
            reasons.push("Diverse faculty offerings across multiple disciplines".to_string());
        }

        if reasons.is_empty() {
            reasons.push(FALLBACK_TREND_REASON.to_string());
        }

        reasons.truncate(MAX_TREND_REASONS);
        reasons
    }

    /// First matching category wins
    pub fn category(&self, university: &University, trend_score: f64) -> TrendCategory {
        let age = university.age(self.current_year);
        let population = university.student_population;

        if age <= RISING_STAR_MAX_AGE && trend_score >= RISING_STAR_MIN_SCORE {
            TrendCategory::RisingStar
        } else if population >= POPULAR_CHOICE_MIN_POPULATION
            && trend_score >= POPULAR_CHOICE_MIN_SCORE
        {
            TrendCategory::PopularChoice
        } else if age <= GROWING_FAST_MAX_AGE
            && population >= GROWING_FAST_MIN_POPULATION
            && trend_score >= GROWING_FAST_MIN_SCORE
        {
            TrendCategory::GrowingFast
        } else {
            TrendCategory::WellEstablished
        }
    }

    /// Score the catalog, sort by trend score (stable), filter, then truncate
    pub fn rank(
        &self,
        catalog: &[University],
        category: Option<TrendCategory>,
        limit: usize,
    ) -> TrendRanking {
        let mut trending: Vec<TrendingUniversity> =
            catalog.iter().map(|university| self.evaluate(university)).collect();

        trending.sort_by(|a, b| b.trend_score.total_cmp(&a.trend_score));

        if let Some(category) = category {
            trending.retain(|entry| entry.trend_category == category);
        }

        let total = trending.len();
        trending.truncate(limit);

        tracing::debug!(
            "Ranked {} trending universities ({} after filtering, returning {})",
            catalog.len(),
            total,
            trending.len()
        );

        TrendRanking { trending, total }
    }
}

impl Default for TrendScorer {
    fn default() -> Self {
        Self::for_current_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ranking, TuitionFee, RATIO_NOT_AVAILABLE};

    const YEAR: i32 = 2025;

    fn scorer() -> TrendScorer {
        TrendScorer::new(TrendPoints::default(), YEAR)
    }

    /// Old, tiny, rural university with nothing going for it
    fn create_plain_university(name: &str) -> University {
        University {
            id: None,
            name: name.to_string(),
            abbreviation: String::new(),
            state: "Kwara".to_string(),
            location: String::new(),
            year_established: 1960,
            accreditation: vec![],
            faculties: vec![],
            courses: vec!["History".to_string()],
            student_population: 500,
            student_to_lecturer_ratio: RATIO_NOT_AVAILABLE.to_string(),
            tuition_fee: TuitionFee { min: 300_000, max: 400_000 },
            scholarship_available: false,
            campus_type: CampusType::Rural,
            library_capacity: 200,
            has_hostel: false,
            has_medical_center: false,
            has_laboratories: false,
            has_sports_complex: false,
            ranking: Ranking::default(),
            website: None,
            address: None,
        }
    }

    fn courses(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Course {}", i)).collect()
    }

    #[test]
    fn test_plain_university_minimum_points() {
        let university = create_plain_university("Plain");
        let (score, reasons, category) = scorer().score(&university);

        // age 10 + population 5 + courses 5 + rural 4
        assert_eq!(score, 24.0);
        assert_eq!(reasons, vec![FALLBACK_TREND_REASON]);
        assert_eq!(category, TrendCategory::WellEstablished);
    }

    #[test]
    fn test_age_tiers() {
        let s = scorer();
        let mut university = create_plain_university("Age");

        let cases = [(2015, 40.0), (2014, 30.0), (2005, 30.0), (1995, 20.0), (1994, 10.0)];
        for (established, expected) in cases {
            university.year_established = established;
            assert_eq!(s.age_points(&university), expected, "established {}", established);
        }
    }

    #[test]
    fn test_population_tiers() {
        let s = scorer();
        let mut university = create_plain_university("Pop");

        for (population, expected) in [
            (999, 5.0),
            (1_000, 15.0),
            (4_999, 15.0),
            (5_000, 25.0),
            (20_000, 25.0),
            (20_001, 20.0),
        ] {
            university.student_population = population;
            assert_eq!(s.population_points(&university), expected, "population {}", population);
        }
    }

    #[test]
    fn test_course_tiers() {
        let s = scorer();
        let mut university = create_plain_university("Courses");

        for (count, expected) in [(14, 5.0), (15, 10.0), (30, 15.0), (49, 15.0), (50, 20.0)] {
            university.courses = courses(count);
            assert_eq!(s.course_points(&university), expected, "courses {}", count);
        }
    }

    #[test]
    fn test_facility_and_accreditation_points() {
        let s = scorer();
        let mut university = create_plain_university("Facilities");
        university.has_hostel = true;
        university.has_medical_center = true;
        university.has_laboratories = true;
        university.has_sports_complex = true;
        university.library_capacity = 2_001;
        university.accreditation = vec!["NUC".to_string(); 7];

        assert_eq!(s.facility_points(&university), 18.0);
        assert_eq!(s.accreditation_points(&university), 10.0);

        university.library_capacity = 2_000;
        university.accreditation = vec!["NUC".to_string(); 2];
        assert_eq!(s.facility_points(&university), 14.0);
        assert_eq!(s.accreditation_points(&university), 4.0);
    }

    #[test]
    fn test_ranking_bonus_is_fractional() {
        let s = scorer();
        let mut university = create_plain_university("Ranked");

        university.ranking.national = Some(1);
        assert!((s.ranking_points(&university) - 14.9).abs() < 1e-9);

        university.ranking.national = Some(50);
        assert_eq!(s.ranking_points(&university), 10.0);

        university.ranking.national = Some(51);
        assert_eq!(s.ranking_points(&university), 0.0);

        university.ranking.national = None;
        assert_eq!(s.ranking_points(&university), 0.0);
    }

    #[test]
    fn test_score_clamped_to_hundred() {
        let s = scorer();
        let mut university = create_plain_university("Max");
        university.year_established = 2020;
        university.student_population = 12_000;
        university.courses = courses(60);
        university.has_hostel = true;
        university.has_medical_center = true;
        university.has_laboratories = true;
        university.has_sports_complex = true;
        university.library_capacity = 5_000;
        university.accreditation = vec!["NUC".to_string(); 6];
        university.campus_type = CampusType::Urban;
        university.scholarship_available = true;
        university.ranking.national = Some(1);

        assert!(s.raw_points(&university) > 100.0);
        assert_eq!(s.trend_score(&university), 100.0);
        assert_eq!(s.category(&university, 100.0), TrendCategory::RisingStar);
    }

    #[test]
    fn test_reasons_capped_in_priority_order() {
        let mut university = create_plain_university("Reasons");
        university.year_established = 2018;
        university.student_population = 12_000;
        university.courses = courses(45);
        university.has_medical_center = true;
        university.has_laboratories = true;
        university.library_capacity = 3_000;
        university.campus_type = CampusType::Urban;
        university.scholarship_available = true;

        let reasons = scorer().trend_reasons(&university);

        assert_eq!(
            reasons,
            vec![
                "Recently established with modern facilities",
                "Rapidly growing student population",
                "Wide variety of academic programs",
                "Excellent facilities including medical center and modern laboratories",
            ]
        );
    }

    #[test]
    fn test_late_reasons_when_early_ones_absent() {
        let mut university = create_plain_university("Late");
        university.accreditation = vec!["NUC".to_string(), "COREN".to_string(), "ICAN".to_string()];
        university.student_to_lecturer_ratio = "18:1".to_string();
        university.ranking.national = Some(12);
        university.faculties = courses(8);

        let reasons = scorer().trend_reasons(&university);

        assert_eq!(
            reasons,
            vec![
                "Multiple accreditations ensuring quality education",
                "Excellent student-to-lecturer ratio for personalized attention",
                "High national ranking (#12)",
                "Diverse faculty offerings across multiple disciplines",
            ]
        );
    }

    #[test]
    fn test_middle_aged_university_has_no_age_reason() {
        let mut university = create_plain_university("Middle");
        university.year_established = 2000;
        university.campus_type = CampusType::Suburban;

        let reasons = scorer().trend_reasons(&university);

        assert_eq!(
            reasons,
            vec!["Strategic suburban location balancing city access and campus life"]
        );
    }

    #[test]
    fn test_category_priority() {
        let s = scorer();
        let mut university = create_plain_university("Category");

        university.year_established = 2015;
        university.student_population = 20_000;
        assert_eq!(s.category(&university, 70.0), TrendCategory::RisingStar);
        assert_eq!(s.category(&university, 69.0), TrendCategory::PopularChoice);

        university.student_population = 6_000;
        assert_eq!(s.category(&university, 64.0), TrendCategory::GrowingFast);
        assert_eq!(s.category(&university, 59.0), TrendCategory::WellEstablished);

        university.year_established = 1990;
        assert_eq!(s.category(&university, 64.0), TrendCategory::WellEstablished);
    }

    #[test]
    fn test_rank_sorts_filters_and_truncates() {
        let s = scorer();

        let mut rising = create_plain_university("Rising");
        rising.year_established = 2020;
        rising.student_population = 8_000;
        rising.courses = courses(50);
        rising.campus_type = CampusType::Urban;

        let plain_a = create_plain_university("Plain A");
        let plain_b = create_plain_university("Plain B");

        let catalog = vec![plain_a, rising, plain_b];

        let all = s.rank(&catalog, None, 10);
        let names: Vec<&str> = all.trending.iter().map(|t| t.university.name.as_str()).collect();
        assert_eq!(names, vec!["Rising", "Plain A", "Plain B"]);
        assert_eq!(all.total, 3);

        let established = s.rank(&catalog, Some(TrendCategory::WellEstablished), 1);
        assert_eq!(established.total, 2);
        assert_eq!(established.trending.len(), 1);
        assert_eq!(established.trending[0].university.name, "Plain A");

        let none = s.rank(&[], None, 10);
        assert!(none.trending.is_empty());
        assert_eq!(none.total, 0);
    }
}
