use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel the catalog uses when a university has not published its ratio
pub const RATIO_NOT_AVAILABLE: &str = "Data not available";

/// University record as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    #[serde(default, alias = "_id", alias = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    pub state: String,
    #[serde(default)]
    pub location: String,
    pub year_established: i32,
    #[serde(default)]
    pub accreditation: Vec<String>,
    #[serde(default)]
    pub faculties: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub student_population: u32,
    #[serde(default = "default_ratio")]
    pub student_to_lecturer_ratio: String,
    pub tuition_fee: TuitionFee,
    #[serde(default)]
    pub scholarship_available: bool,
    pub campus_type: CampusType,
    #[serde(default)]
    pub library_capacity: u32,
    #[serde(default)]
    pub has_hostel: bool,
    #[serde(default)]
    pub has_medical_center: bool,
    #[serde(default)]
    pub has_laboratories: bool,
    #[serde(default)]
    pub has_sports_complex: bool,
    #[serde(default)]
    pub ranking: Ranking,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

fn default_ratio() -> String {
    RATIO_NOT_AVAILABLE.to_string()
}

impl University {
    /// Years since establishment, relative to `current_year`
    ///
    /// May be negative for records with a future establishment year.
    /// Saturates instead of overflowing on out-of-range years.
    pub fn age(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.year_established)
    }

    /// Parsed student-to-lecturer ratio
    pub fn student_ratio(&self) -> StudentRatio {
        StudentRatio::parse(&self.student_to_lecturer_ratio)
    }

    /// Whether the university has the given facility
    ///
    /// `large_library_capacity` is the capacity a library must exceed to count.
    pub fn has_facility(&self, facility: Facility, large_library_capacity: u32) -> bool {
        match facility {
            Facility::Library => self.library_capacity > large_library_capacity,
            Facility::Hostel => self.has_hostel,
            Facility::Laboratory => self.has_laboratories,
            Facility::SportsComplex => self.has_sports_complex,
            Facility::MedicalCenter => self.has_medical_center,
        }
    }
}

/// Tuition range in naira
///
/// `min <= max` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuitionFee {
    pub min: i64,
    pub max: i64,
}

/// Published rankings, lower is better
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional: Option<u32>,
}

impl Ranking {
    /// National rank, treating a zero rank as absent
    pub fn national_rank(&self) -> Option<u32> {
        self.national.filter(|rank| *rank > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampusType {
    Urban,
    Suburban,
    Rural,
}

impl CampusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampusType::Urban => "Urban",
            CampusType::Suburban => "Suburban",
            CampusType::Rural => "Rural",
        }
    }
}

impl fmt::Display for CampusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Urban" => Ok(CampusType::Urban),
            "Suburban" => Ok(CampusType::Suburban),
            "Rural" => Ok(CampusType::Rural),
            other => Err(format!("unknown campus type: {}", other)),
        }
    }
}

/// Student-to-lecturer ratio parsed from strings such as `"15:1"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StudentRatio {
    /// Students per lecturer
    Parsed(f64),
    /// Sentinel or otherwise unreadable value
    Unparsed,
}

impl StudentRatio {
    /// Parse the longest leading number, ignoring whatever follows; never fails
    ///
    /// `"15:1"` and `"18 students:1"` both read as their first number.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let ends = trimmed
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect::<Vec<_>>();

        ends.into_iter()
            .rev()
            .filter_map(|end| trimmed[..end].parse::<f64>().ok())
            .find(|value| value.is_finite())
            .map_or(StudentRatio::Unparsed, StudentRatio::Parsed)
    }

    /// Students per lecturer, if known
    pub fn value(&self) -> Option<f64> {
        match self {
            StudentRatio::Parsed(value) => Some(*value),
            StudentRatio::Unparsed => None,
        }
    }
}

/// The five facilities a student can flag as important
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facility {
    Library,
    Hostel,
    Laboratory,
    SportsComplex,
    MedicalCenter,
}

impl Facility {
    /// Fixed evaluation order for scoring and reasons
    pub const ALL: [Facility; 5] = [
        Facility::Library,
        Facility::Hostel,
        Facility::Laboratory,
        Facility::SportsComplex,
        Facility::MedicalCenter,
    ];
}

/// Budget the student can afford, in naira
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: i64,
    pub max: i64,
}

impl BudgetRange {
    /// True when the tuition range intersects the budget at all
    pub fn overlaps(&self, tuition: &TuitionFee) -> bool {
        tuition.min <= self.max && tuition.max >= self.min
    }
}

/// Which facilities matter to the student
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitiesImportance {
    #[serde(default)]
    pub library: bool,
    #[serde(default)]
    pub hostel: bool,
    #[serde(default)]
    pub laboratory: bool,
    #[serde(default)]
    pub sports_complex: bool,
    #[serde(default)]
    pub medical_center: bool,
}

impl FacilitiesImportance {
    pub fn is_flagged(&self, facility: Facility) -> bool {
        match facility {
            Facility::Library => self.library,
            Facility::Hostel => self.hostel,
            Facility::Laboratory => self.laboratory,
            Facility::SportsComplex => self.sports_complex,
            Facility::MedicalCenter => self.medical_center,
        }
    }

    /// Flagged facilities in evaluation order
    pub fn flagged(&self) -> impl Iterator<Item = Facility> + '_ {
        Facility::ALL
            .into_iter()
            .filter(move |facility| self.is_flagged(*facility))
    }
}

/// A student's stated preferences
///
/// `None` and empty collections mean "no preference" for that criterion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceCriteria {
    pub preferred_course: Option<String>,
    pub budget_range: Option<BudgetRange>,
    pub preferred_states: Vec<String>,
    pub campus_type: Option<CampusType>,
    pub facilities: FacilitiesImportance,
}

/// Match weights per criterion; they need not sum to 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub course: f64,
    pub budget: f64,
    pub state: f64,
    pub facilities: f64,
    pub campus_type: f64,
}

impl MatchWeights {
    pub fn total(&self) -> f64 {
        self.course + self.budget + self.state + self.facilities + self.campus_type
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            course: 30.0,
            budget: 25.0,
            state: 15.0,
            facilities: 20.0,
            campus_type: 10.0,
        }
    }
}

/// University scored against a student's preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredUniversity {
    pub university: University,
    pub match_score: f64,
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendCategory {
    #[serde(rename = "Rising Star")]
    RisingStar,
    #[serde(rename = "Popular Choice")]
    PopularChoice,
    #[serde(rename = "Growing Fast")]
    GrowingFast,
    #[serde(rename = "Well Established")]
    WellEstablished,
}

impl TrendCategory {
    /// Full category vocabulary in classification priority order
    pub const ALL: [TrendCategory; 4] = [
        TrendCategory::RisingStar,
        TrendCategory::PopularChoice,
        TrendCategory::GrowingFast,
        TrendCategory::WellEstablished,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TrendCategory::RisingStar => "Rising Star",
            TrendCategory::PopularChoice => "Popular Choice",
            TrendCategory::GrowingFast => "Growing Fast",
            TrendCategory::WellEstablished => "Well Established",
        }
    }
}

impl fmt::Display for TrendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrendCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrendCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| format!("unknown trend category: {}", s))
    }
}

/// University scored for trendiness
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingUniversity {
    pub university: University,
    pub trend_score: f64,
    pub trend_reasons: Vec<String>,
    pub trend_category: TrendCategory,
}
