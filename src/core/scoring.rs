//! Numeric and formatting helpers shared by the match and trend scorers.

/// One step of a tiered point table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier<T> {
    pub limit: T,
    pub points: f64,
}

impl<T> Tier<T> {
    pub const fn new(limit: T, points: f64) -> Self {
        Self { limit, points }
    }
}

/// Points of the first rule whose predicate holds, or `fallback`
///
/// Rules are `(predicate, points)` pairs evaluated in order.
#[inline]
pub fn first_match<I>(rules: I, fallback: f64) -> f64
where
    I: IntoIterator<Item = (bool, f64)>,
{
    rules
        .into_iter()
        .find(|(matched, _)| *matched)
        .map_or(fallback, |(_, points)| points)
}

/// Points of the first tier with `value <= limit`, or `fallback`
#[inline]
pub fn tier_at_most<T: PartialOrd + Copy>(value: T, tiers: &[Tier<T>], fallback: f64) -> f64 {
    first_match(tiers.iter().map(|tier| (value <= tier.limit, tier.points)), fallback)
}

/// Points of the first tier with `value >= limit`, or `fallback`
#[inline]
pub fn tier_at_least<T: PartialOrd + Copy>(value: T, tiers: &[Tier<T>], fallback: f64) -> f64 {
    first_match(tiers.iter().map(|tier| (value >= tier.limit, tier.points)), fallback)
}

/// Sum of the points of every rule whose predicate holds
#[inline]
pub fn sum_matching<I>(rules: I) -> f64
where
    I: IntoIterator<Item = (bool, f64)>,
{
    rules
        .into_iter()
        .filter(|(matched, _)| *matched)
        .map(|(_, points)| points)
        .sum()
}

/// Express `awarded` as a percentage of `total`
///
/// A non-positive total yields 0 instead of NaN or infinity.
#[inline]
pub fn percentage(awarded: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    awarded / total * 100.0
}

/// Format a naira amount with thousands separators, e.g. `₦1,500,000`
pub fn format_naira(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-₦{}", grouped)
    } else {
        format!("₦{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_order() {
        assert_eq!(first_match([(false, 1.0), (true, 2.0), (true, 3.0)], 0.5), 2.0);
        assert_eq!(first_match([(false, 1.0)], 0.5), 0.5);
        assert_eq!(first_match(Vec::<(bool, f64)>::new(), 7.0), 7.0);
    }

    #[test]
    fn test_tiers() {
        let tiers = [Tier::new(10, 40.0), Tier::new(20, 30.0)];
        assert_eq!(tier_at_most(-3, &tiers, 10.0), 40.0);
        assert_eq!(tier_at_most(10, &tiers, 10.0), 40.0);
        assert_eq!(tier_at_most(11, &tiers, 10.0), 30.0);
        assert_eq!(tier_at_most(21, &tiers, 10.0), 10.0);

        let tiers = [Tier::new(50usize, 20.0), Tier::new(30, 15.0)];
        assert_eq!(tier_at_least(50, &tiers, 5.0), 20.0);
        assert_eq!(tier_at_least(49, &tiers, 5.0), 15.0);
        assert_eq!(tier_at_least(0, &tiers, 5.0), 5.0);
    }

    #[test]
    fn test_sum_matching() {
        assert_eq!(sum_matching([(true, 3.0), (false, 4.0), (true, 4.0)]), 7.0);
        assert_eq!(sum_matching(Vec::<(bool, f64)>::new()), 0.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(50.0, 100.0), 50.0);
        assert_eq!(percentage(25.0, 50.0), 50.0);
        assert_eq!(percentage(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_format_naira() {
        assert_eq!(format_naira(0), "₦0");
        assert_eq!(format_naira(999), "₦999");
        assert_eq!(format_naira(1000), "₦1,000");
        assert_eq!(format_naira(800_000), "₦800,000");
        assert_eq!(format_naira(1_500_000), "₦1,500,000");
        assert_eq!(format_naira(-25_000), "-₦25,000");
    }
}
