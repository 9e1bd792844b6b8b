// Criterion benchmarks for UniMatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unimatch::core::{matches_preferences, MatchScorer, TrendPoints, TrendScorer};
use unimatch::models::{
    BudgetRange, CampusType, FacilitiesImportance, PreferenceCriteria, Ranking, TuitionFee,
    University,
};

const STATES: [&str; 5] = ["Lagos", "Ogun", "Oyo", "Kano", "Abuja"];
const COURSES: [&str; 6] = [
    "Computer Science",
    "Medicine",
    "Law",
    "Accounting",
    "Mass Communication",
    "Electrical Engineering",
];

fn create_university(id: usize) -> University {
    let campus_type = match id % 3 {
        0 => CampusType::Urban,
        1 => CampusType::Suburban,
        _ => CampusType::Rural,
    };
    let fee_floor = 300_000 + (id % 20) as i64 * 100_000;

    University {
        id: Some(id.to_string()),
        name: format!("University {}", id),
        abbreviation: format!("U{}", id),
        state: STATES[id % STATES.len()].to_string(),
        location: String::new(),
        year_established: 1950 + (id % 75) as i32,
        accreditation: vec!["NUC".to_string(); 1 + id % 4],
        faculties: vec!["Science".to_string(); 2 + id % 8],
        courses: COURSES
            .iter()
            .cycle()
            .skip(id % COURSES.len())
            .take(1 + id % 4)
            .map(|c| c.to_string())
            .collect(),
        student_population: 1_000 + (id % 30) as u32 * 800,
        student_to_lecturer_ratio: format!("{}:1", 10 + id % 20),
        tuition_fee: TuitionFee { min: fee_floor, max: fee_floor + 500_000 },
        scholarship_available: id % 2 == 0,
        campus_type,
        library_capacity: 500 + (id % 10) as u32 * 300,
        has_hostel: id % 2 == 0,
        has_medical_center: id % 3 == 0,
        has_laboratories: true,
        has_sports_complex: id % 4 == 0,
        ranking: Ranking {
            national: (id % 5 != 0).then_some((id % 100) as u32 + 1),
            regional: None,
        },
        website: None,
        address: None,
    }
}

fn create_preferences() -> PreferenceCriteria {
    PreferenceCriteria {
        preferred_course: Some("Computer Science".to_string()),
        budget_range: Some(BudgetRange { min: 500_000, max: 1_500_000 }),
        preferred_states: vec!["Lagos".to_string(), "Ogun".to_string()],
        campus_type: Some(CampusType::Urban),
        facilities: FacilitiesImportance {
            library: true,
            hostel: true,
            laboratory: false,
            sports_complex: false,
            medical_center: true,
        },
    }
}

fn bench_match_score(c: &mut Criterion) {
    let scorer = MatchScorer::with_default_weights();
    let university = create_university(7);
    let preferences = create_preferences();

    c.bench_function("match_score_single", |b| {
        b.iter(|| scorer.score(black_box(&university), black_box(&preferences)));
    });
}

fn bench_match_rank(c: &mut Criterion) {
    let scorer = MatchScorer::with_default_weights();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("match_rank");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<University> = (0..*catalog_size).map(create_university).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| scorer.rank(black_box(&catalog), black_box(&preferences)));
            },
        );
    }

    group.finish();
}

fn bench_trend_rank(c: &mut Criterion) {
    let scorer = TrendScorer::new(TrendPoints::default(), 2025);

    let mut group = c.benchmark_group("trend_rank");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<University> = (0..*catalog_size).map(create_university).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| scorer.rank(black_box(&catalog), black_box(None), black_box(10)));
            },
        );
    }

    group.finish();
}

fn bench_prefilter_pipeline(c: &mut Criterion) {
    let scorer = MatchScorer::with_default_weights();
    let preferences = create_preferences();
    let catalog: Vec<University> = (0..500).map(create_university).collect();

    c.bench_function("prefilter_and_rank_500_universities", |b| {
        b.iter(|| {
            let candidates: Vec<University> = catalog
                .iter()
                .filter(|u| matches_preferences(u, &preferences))
                .cloned()
                .collect();

            black_box(scorer.rank(&candidates, &preferences))
        });
    });
}

criterion_group!(
    benches,
    bench_match_score,
    bench_match_rank,
    bench_trend_rank,
    bench_prefilter_pipeline
);

criterion_main!(benches);
