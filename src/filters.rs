//! Qualification filters.
//!
//! Each filter keeps the offers that satisfy one criterion and returns them
//! as a new list in their original order.

use crate::models::LoanOffer;

fn retain_offers<F>(offers: &[LoanOffer], predicate: F) -> Vec<LoanOffer>
where
    F: Fn(&LoanOffer) -> bool,
{
    offers
        .iter()
        .filter(|offer| predicate(offer))
        .cloned()
        .collect()
}

/// Keep offers whose maximum loan size covers the desired amount.
pub fn filter_max_loan_size(loan_amount: f64, offers: &[LoanOffer]) -> Vec<LoanOffer> {
    retain_offers(offers, |offer| offer.allows_loan_amount(loan_amount))
}

/// Keep offers whose minimum credit score the applicant meets.
pub fn filter_credit_score(credit_score: u32, offers: &[LoanOffer]) -> Vec<LoanOffer> {
    retain_offers(offers, |offer| offer.allows_credit_score(credit_score))
}

/// Keep offers whose maximum debt-to-income ratio is not exceeded.
pub fn filter_debt_to_income(debt_to_income: f64, offers: &[LoanOffer]) -> Vec<LoanOffer> {
    retain_offers(offers, |offer| offer.allows_debt_to_income(debt_to_income))
}

/// Keep offers whose maximum loan-to-value ratio is not exceeded.
pub fn filter_loan_to_value(loan_to_value: f64, offers: &[LoanOffer]) -> Vec<LoanOffer> {
    retain_offers(offers, |offer| offer.allows_loan_to_value(loan_to_value))
}
