use serde::{Deserialize, Serialize};

use crate::salary::{non_zero, Listing, SalaryBounds};

/// SuperJob only publishes rouble salaries, so no currency is checked
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    payment_from: Option<u64>,
    payment_to: Option<u64>,
}

impl Listing for Vacancy {
    fn salary_bounds(&self) -> Option<SalaryBounds> {
        Some(SalaryBounds::new(
            non_zero(self.payment_from),
            non_zero(self.payment_to),
        ))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct SearchResponse {
    pub(crate) total: u64,
    #[serde(default)]
    pub(crate) objects: Vec<Vacancy>,
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchQuery<'a> {
    pub(crate) keyword: &'a str,
    pub(crate) town: u32,
    pub(crate) catalogues: u32,
    pub(crate) count: u64,
    pub(crate) page: u64,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn vacancy(payment_from: serde_json::Value, payment_to: serde_json::Value) -> Vacancy {
        serde_json::from_value(json!({
            "id": 1,
            "profession": "Rust developer",
            "currency": "rub",
            "payment_from": payment_from,
            "payment_to": payment_to,
        }))
        .expect("Invalid vacancy")
    }

    #[test]
    fn test_payment_range_is_estimated() {
        assert_eq!(vacancy(json!(50000), json!(0)).expected_salary(), Some(60_000));
        assert_eq!(vacancy(json!(0), json!(50000)).expected_salary(), Some(40_000));
        assert_eq!(
            vacancy(json!(80000), json!(120000)).expected_salary(),
            Some(100_000)
        );
    }

    #[test]
    fn test_unspecified_payment_is_skipped() {
        assert_eq!(vacancy(json!(0), json!(0)).expected_salary(), None);
        assert_eq!(vacancy(json!(null), json!(null)).expected_salary(), None);
        assert_eq!(vacancy(json!(null), json!(0)).expected_salary(), None);
    }
}
