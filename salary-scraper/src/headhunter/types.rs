use serde::{Deserialize, Serialize};

use crate::salary::{non_zero, Listing, SalaryBounds};

/// Estimates are only made for salaries quoted in roubles
pub const REFERENCE_CURRENCY: &str = "RUR";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Salary {
    currency: Option<String>,
    from: Option<u64>,
    to: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    salary: Option<Salary>,
}

impl Listing for Vacancy {
    fn salary_bounds(&self) -> Option<SalaryBounds> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(REFERENCE_CURRENCY) {
            return None;
        }
        Some(SalaryBounds::new(non_zero(salary.from), non_zero(salary.to)))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct SearchResponse {
    pub(crate) found: u64,
    pub(crate) pages: u32,
    #[serde(default)]
    pub(crate) items: Vec<Vacancy>,
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchQuery<'a> {
    text: &'a str,
    area: u32,
    only_with_salary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}

impl<'a> SearchQuery<'a> {
    /// The initial request, restricted to recently published vacancies
    pub(crate) fn summary(text: &'a str, area: u32, period: u32) -> Self {
        Self {
            text,
            area,
            only_with_salary: true,
            period: Some(period),
            page: None,
        }
    }

    pub(crate) fn page(text: &'a str, area: u32, page: u32) -> Self {
        Self {
            text,
            area,
            only_with_salary: true,
            period: None,
            page: Some(page),
        }
    }
}
