use crate::calculators::{calculate_loan_to_value_ratio, calculate_monthly_debt_ratio};
use crate::error::Result;
use crate::filters::{
    filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
};
use crate::models::{ApplicantProfile, LoanOffer};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualifyingRatios {
    pub debt_to_income: f64,
    pub loan_to_value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Qualification {
    pub ratios: QualifyingRatios,
    pub loans: Vec<LoanOffer>, // survivors, in rate sheet order
}

pub struct LoanQualifier<'a> {
    pub applicant: &'a ApplicantProfile,
}

impl<'a> LoanQualifier<'a> {
    pub fn new(applicant: &'a ApplicantProfile) -> Self {
        Self { applicant }
    }

    pub fn calculate_ratios(&self) -> Result<QualifyingRatios> {
        let debt_to_income =
            calculate_monthly_debt_ratio(self.applicant.monthly_debt, self.applicant.monthly_income)?;
        let loan_to_value =
            calculate_loan_to_value_ratio(self.applicant.loan_amount, self.applicant.home_value)?;

        Ok(QualifyingRatios {
            debt_to_income,
            loan_to_value,
        })
    }

    /// Run the qualification pipeline over the rate sheet offers
    pub fn qualify(&self, offers: &[LoanOffer]) -> Result<Qualification> {
        // Step 1 and 2: derive the two ratios
        let ratios = self.calculate_ratios()?;
        info!(
            "monthly debt to income ratio {:.4}, loan to value ratio {:.4}",
            ratios.debt_to_income, ratios.loan_to_value
        );

        // Step 3: narrow the offers one criterion at a time
        let loans = filter_max_loan_size(self.applicant.loan_amount, offers);
        debug!("{} of {} offers pass max loan size", loans.len(), offers.len());

        let loans = filter_credit_score(self.applicant.credit_score, &loans);
        debug!("{} offers pass credit score", loans.len());

        let loans = filter_debt_to_income(ratios.debt_to_income, &loans);
        debug!("{} offers pass debt to income", loans.len());

        let loans = filter_loan_to_value(ratios.loan_to_value, &loans);
        debug!("{} offers pass loan to value", loans.len());

        // Step 4: whatever survived
        info!("found {} qualifying loans", loans.len());
        Ok(Qualification { ratios, loans })
    }
}

/// Determine which loans the applicant qualifies for.
pub fn find_qualifying_loans(
    offers: &[LoanOffer],
    credit_score: u32,
    monthly_debt: f64,
    monthly_income: f64,
    loan_amount: f64,
    home_value: f64,
) -> Result<Vec<LoanOffer>> {
    let applicant = ApplicantProfile::new(
        credit_score,
        monthly_debt,
        monthly_income,
        loan_amount,
        home_value,
    )?;
    let qualification = LoanQualifier::new(&applicant).qualify(offers)?;
    Ok(qualification.loans)
}
