use crate::error::{QualifierError, Result};
use crate::models::{LoanOffer, RateSheet};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Columns in a rate sheet row: lender, max loan amount, max LTV, max DTI,
/// min monthly payment, min credit score.
pub const LOAN_OFFER_FIELDS: usize = 6;

/// Load a rate sheet from a CSV file.
///
/// Rows are read by position, so the header text (if any) does not need to
/// match the field names. The header is kept for [`save_csv`].
pub fn load_csv(path: &Path, has_headers: bool) -> Result<RateSheet> {
    if !path.exists() {
        return Err(QualifierError::NotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let header = if has_headers {
        let headers = reader.headers()?;
        if headers.is_empty() {
            None
        } else {
            Some(headers.iter().map(str::to_string).collect())
        }
    } else {
        None
    };

    let mut offers = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        offers.push(parse_offer(&record, i + 1)?);
    }

    info!("loaded {} loan offers from {}", offers.len(), path.display());
    Ok(RateSheet { header, offers })
}

fn parse_offer(record: &StringRecord, row: usize) -> Result<LoanOffer> {
    if record.len() != LOAN_OFFER_FIELDS {
        return Err(QualifierError::InvalidRow {
            row,
            message: format!(
                "expected {} fields but found {}",
                LOAN_OFFER_FIELDS,
                record.len()
            ),
        });
    }

    record
        .deserialize::<LoanOffer>(None)
        .map_err(|e| QualifierError::InvalidRow {
            row,
            message: e.to_string(),
        })
}

/// Write offers to a CSV file, header first when one is given.
pub fn save_csv(path: &Path, header: Option<&[String]>, offers: &[LoanOffer]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Header comes from the rate sheet, not from the struct field names
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

    if let Some(header) = header {
        writer.write_record(header)?;
    }
    for offer in offers {
        writer.serialize(offer)?;
    }

    writer.flush()?;
    debug!("saved {} loan offers to {}", offers.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "loan_qualifier_fileio_{}_{}",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_load_csv_with_header() {
        let path = temp_path("with_header.csv");
        fs::write(
            &path,
            "Lender,Max Loan Amount,Max LTV,Max DTI,Min Monthly Payment,Min Credit Score\n\
             Bank of Big - Premier Option,300000,0.85,0.47,1200,740\n\
             West Central Credit Union, 400000 ,0.9,0.35,1000,760\n",
        )
        .unwrap();

        let sheet = load_csv(&path, true).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(sheet.header.as_ref().map(|h| h.len()), Some(6));
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.offers[0].lender, "Bank of Big - Premier Option");
        assert_eq!(sheet.offers[0].min_credit_score, 740);
        assert_eq!(sheet.offers[1].max_loan_amount, 400000.0);
    }

    #[test]
    fn test_load_csv_without_header() {
        let path = temp_path("no_header.csv");
        fs::write(&path, "Prosper MAX,600000,0.8,0.52,900,700\n").unwrap();

        let sheet = load_csv(&path, false).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(sheet.header, None);
        assert_eq!(sheet.offers[0].max_debt_to_income, 0.52);
    }

    #[test]
    fn test_load_empty_file() {
        let path = temp_path("empty.csv");
        fs::write(&path, "").unwrap();

        let sheet = load_csv(&path, true).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(sheet.is_empty());
        assert_eq!(sheet.header, None);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = temp_path("does_not_exist.csv");
        assert!(matches!(
            load_csv(&path, true),
            Err(QualifierError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_short_row_is_invalid() {
        let path = temp_path("short_row.csv");
        fs::write(
            &path,
            "Lender,Max Loan Amount,Max LTV,Max DTI,Min Monthly Payment,Min Credit Score\n\
             Good Bank,300000,0.85,0.47,1200,740\n\
             Broken Bank,300000,0.85\n",
        )
        .unwrap();

        let result = load_csv(&path, true);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(QualifierError::InvalidRow { row: 2, .. })));
    }

    #[test]
    fn test_non_numeric_field_is_invalid() {
        let path = temp_path("non_numeric.csv");
        fs::write(&path, "Odd Bank,lots,0.85,0.47,1200,740\n").unwrap();

        let result = load_csv(&path, false);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(QualifierError::InvalidRow { row: 1, .. })));
    }

    #[test]
    fn test_save_csv_writes_header_and_rows() {
        let dir = temp_path("save_dir");
        let path = dir.join("nested").join("qualifying_loans.csv");
        let header: Vec<String> = ["Lender", "Max", "LTV", "DTI", "Payment", "Score"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let offers = vec![LoanOffer {
            lender: "Bank of Big".to_string(),
            max_loan_amount: 300000.5,
            max_loan_to_value: 0.85,
            max_debt_to_income: 0.47,
            min_monthly_payment: 1200.0,
            min_credit_score: 740,
        }];

        save_csv(&path, Some(header.as_slice()), &offers).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let reloaded = load_csv(&path, true).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert!(content.starts_with("Lender,Max,LTV,DTI,Payment,Score\n"));
        assert!(content.contains("Bank of Big,300000.5,0.85,0.47,"));
        assert_eq!(reloaded.header, Some(header));
        assert_eq!(reloaded.offers, offers);
    }
}
