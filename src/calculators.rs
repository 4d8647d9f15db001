use crate::error::{QualifierError, Result};

/// Monthly debt-to-income ratio: `monthly_debt / monthly_income`.
pub fn calculate_monthly_debt_ratio(monthly_debt: f64, monthly_income: f64) -> Result<f64> {
    if monthly_income == 0.0 {
        return Err(QualifierError::DivisionByZero {
            ratio: "monthly debt to income",
            denominator: "monthly income",
        });
    }
    Ok(monthly_debt / monthly_income)
}

/// Loan-to-value ratio: `loan_amount / home_value`.
pub fn calculate_loan_to_value_ratio(loan_amount: f64, home_value: f64) -> Result<f64> {
    if home_value == 0.0 {
        return Err(QualifierError::DivisionByZero {
            ratio: "loan to value",
            denominator: "home value",
        });
    }
    Ok(loan_amount / home_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_debt_ratio() {
        assert_eq!(calculate_monthly_debt_ratio(2000.0, 8000.0).unwrap(), 0.25);
        assert_eq!(calculate_monthly_debt_ratio(0.0, 5000.0).unwrap(), 0.0);
        assert_eq!(calculate_monthly_debt_ratio(1500.0, 4000.0).unwrap(), 0.375);
    }

    #[test]
    fn test_loan_to_value_ratio() {
        assert_eq!(calculate_loan_to_value_ratio(210000.0, 250000.0).unwrap(), 0.84);
        let ratio = calculate_loan_to_value_ratio(400000.0, 450000.0).unwrap();
        assert!((ratio - 0.888_888).abs() < 1e-6);
    }

    #[test]
    fn test_zero_income_is_division_by_zero() {
        let err = calculate_monthly_debt_ratio(2000.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            QualifierError::DivisionByZero { denominator: "monthly income", .. }
        ));
    }

    #[test]
    fn test_zero_home_value_is_division_by_zero() {
        let err = calculate_loan_to_value_ratio(100000.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            QualifierError::DivisionByZero { denominator: "home value", .. }
        ));
        assert_eq!(
            err.to_string(),
            "cannot calculate the loan to value ratio: home value must not be zero"
        );
    }
}
