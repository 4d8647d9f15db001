use crate::error::{QualifierError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // Data source configuration
    pub rate_sheet: Option<String>,
    pub output_file: Option<String>,
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,
    #[serde(default = "default_ratio_precision")]
    pub ratio_precision: usize,
}

fn default_has_headers() -> bool {
    true
}

fn default_ratio_precision() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate_sheet: None,
            output_file: Some("output/qualifying_loans.csv".to_string()),
            has_headers: default_has_headers(),
            ratio_precision: default_ratio_precision(),
        }
    }
}

impl Config {
    pub fn load_from_file(file_path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, file_path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(file_path, content)?;
        Ok(())
    }
}

/// One bank offer from the rate sheet. Field order matches the CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub lender: String,
    pub max_loan_amount: f64,
    pub max_loan_to_value: f64,
    pub max_debt_to_income: f64,
    pub min_monthly_payment: f64,
    pub min_credit_score: u32,
}

impl LoanOffer {
    pub fn allows_loan_amount(&self, loan_amount: f64) -> bool {
        loan_amount <= self.max_loan_amount
    }

    pub fn allows_credit_score(&self, credit_score: u32) -> bool {
        credit_score >= self.min_credit_score
    }

    pub fn allows_debt_to_income(&self, debt_to_income: f64) -> bool {
        debt_to_income <= self.max_debt_to_income
    }

    pub fn allows_loan_to_value(&self, loan_to_value: f64) -> bool {
        loan_to_value <= self.max_loan_to_value
    }
}

/// The applicant's financial information for a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplicantProfile {
    pub credit_score: u32,
    pub monthly_debt: f64,
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub home_value: f64,
}

impl ApplicantProfile {
    /// Validates that every amount is a finite, non-negative number.
    ///
    /// Zero income or home value is accepted here; the ratio calculators
    /// reject it when the ratios are computed.
    pub fn new(
        credit_score: u32,
        monthly_debt: f64,
        monthly_income: f64,
        loan_amount: f64,
        home_value: f64,
    ) -> Result<Self> {
        let amounts = [
            ("monthly debt", monthly_debt),
            ("monthly income", monthly_income),
            ("loan amount", loan_amount),
            ("home value", home_value),
        ];

        for (name, value) in amounts {
            if !value.is_finite() {
                return Err(QualifierError::InvalidInput(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(QualifierError::InvalidInput(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        Ok(Self {
            credit_score,
            monthly_debt,
            monthly_income,
            loan_amount,
            home_value,
        })
    }
}

/// A loaded rate sheet. The header row is kept verbatim so it can be
/// written back in front of the qualifying loans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSheet {
    pub header: Option<Vec<String>>,
    pub offers: Vec<LoanOffer>,
}

impl RateSheet {
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
