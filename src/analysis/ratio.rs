//! Expense-to-GDP ratio join.

use std::collections::HashMap;

use crate::domain::{CountryYear, IndicatorRecord};

/// Join expense records against GDP records by `(country, year)` and compute
/// ratio percentages.
///
/// An entry exists only when the GDP side is present and strictly positive;
/// a missing or zero denominator produces no entry (not a zero, not an
/// error). The result feeds the anomaly detector and the ranking engine.
pub fn expense_to_gdp_ratios(
    gdp: &[IndicatorRecord],
    expense: &[IndicatorRecord],
) -> HashMap<CountryYear, f64> {
    let denominators: HashMap<CountryYear, f64> = gdp
        .iter()
        .map(|r| (CountryYear::new(r.country_name.clone(), r.year), r.value))
        .collect();

    let mut ratios = HashMap::new();
    for r in expense {
        let key = CountryYear::new(r.country_name.clone(), r.year);
        match denominators.get(&key) {
            Some(&gdp_value) if gdp_value > 0.0 => {
                ratios.insert(key, r.value / gdp_value * 100.0);
            }
            _ => {}
        }
    }

    ratios
}
