use serde::{Deserialize, Serialize};

/// Salary range of a single listing, already stripped of source specifics
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalaryBounds {
    pub from: Option<u64>,
    pub to: Option<u64>,
}

impl SalaryBounds {
    pub fn new(from: Option<u64>, to: Option<u64>) -> Self {
        Self { from, to }
    }

    pub fn estimate(&self) -> Option<u64> {
        predict_salary(self.from, self.to)
    }
}

/// Reduce a salary range to a single expected value.
///
/// A closed range yields its midpoint, a range open at the top is lifted by 20%
/// and a range open at the bottom is lowered by 20%. Results are truncated.
pub fn predict_salary(from: Option<u64>, to: Option<u64>) -> Option<u64> {
    let estimate = match (from, to) {
        (Some(from), Some(to)) => (from as u128 + to as u128) / 2,
        (Some(from), None) => from as u128 * 6 / 5,
        (None, Some(to)) => to as u128 * 4 / 5,
        (None, None) => return None,
    };
    // only `from * 1.2` can leave the u64 range
    Some(u64::try_from(estimate).unwrap_or(u64::MAX))
}

/// A vacancy record that may carry a usable salary range
pub trait Listing {
    /// The range to estimate from, `None` if the listing must not contribute
    fn salary_bounds(&self) -> Option<SalaryBounds>;

    fn expected_salary(&self) -> Option<u64> {
        self.salary_bounds().and_then(|bounds| bounds.estimate())
    }
}

/// Both job boards use `0` and `null` interchangeably for "not specified"
pub(crate) fn non_zero(value: Option<u64>) -> Option<u64> {
    value.filter(|v| *v != 0)
}
