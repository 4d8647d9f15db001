use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use loan_qualifier::fileio;
use loan_qualifier::prompt::{self, Prompter};
use loan_qualifier::{ApplicantProfile, Config, LoanOffer, LoanQualifier, QualifierError, RateSheet};
use log::info;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

fn cli() -> Command {
    Command::new("loan-qualifier")
        .version("1.0")
        .about("Matches applicants with qualifying loans from a bank rate sheet")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("loan_qualifier.toml"),
        )
        .arg(
            Arg::new("init-config")
                .long("init-config")
                .help("Write a default configuration file and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rate-sheet")
                .short('r')
                .long("rate-sheet")
                .value_name("FILE")
                .help("Rate sheet CSV with the bank loan offers"),
        )
        .arg(
            Arg::new("credit-score")
                .long("credit-score")
                .value_name("SCORE")
                .help("Applicant credit score")
                .value_parser(value_parser!(u32)),
        )
        .arg(amount_arg("debt", "Total monthly debt payments"))
        .arg(amount_arg("income", "Total monthly income"))
        .arg(amount_arg("loan-amount", "Desired loan amount"))
        .arg(amount_arg("home-value", "Estimated home value"))
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Save qualifying loans to this CSV without asking"),
        )
        .arg(
            Arg::new("no-headers")
                .long("no-headers")
                .help("The rate sheet has no header row")
                .action(ArgAction::SetTrue),
        )
}

fn amount_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("AMOUNT")
        .help(help)
        .value_parser(prompt::parse_amount)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();
    let config_file = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("loan_qualifier.toml");

    if matches.get_flag("init-config") {
        println!("📝 Creating default configuration file: {}", config_file);
        Config::default().save_to_file(config_file)?;
        return Ok(());
    }

    // Load configuration, falling back to defaults
    let mut config = if Path::new(config_file).exists() {
        println!("📋 Loading configuration from: {}", config_file);
        Config::load_from_file(config_file)
            .with_context(|| format!("Failed to load configuration: {}", config_file))?
    } else {
        info!("no configuration at {}, using defaults", config_file);
        Config::default()
    };
    if matches.get_flag("no-headers") {
        config.has_headers = false;
    }

    let mut prompter = Prompter::stdio();

    let rate_sheet = load_bank_data(&matches, &config, &mut prompter)?;
    println!("🏦 Loaded {} loan offers", rate_sheet.len());

    let applicant = get_applicant_info(&matches, &mut prompter)?;

    let qualification = LoanQualifier::new(&applicant).qualify(&rate_sheet.offers)?;
    let precision = config.ratio_precision;
    println!(
        "The monthly debt to income ratio is {:.*}",
        precision, qualification.ratios.debt_to_income
    );
    println!(
        "The loan to value ratio is {:.*}.",
        precision, qualification.ratios.loan_to_value
    );
    println!("Found {} qualifying loans", qualification.loans.len());

    if qualification.loans.is_empty() {
        println!("Can't find any qualified loans. Thank you for using the Loan Qualifier!");
        return Ok(());
    }

    for loan in &qualification.loans {
        println!("   ✅ {}", loan.lender);
    }

    save_qualifying_loans(&matches, &config, &mut prompter, &rate_sheet, &qualification.loans)
}

fn load_bank_data<R: BufRead, W: Write>(
    matches: &ArgMatches,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<RateSheet> {
    let csv_path = match matches
        .get_one::<String>("rate-sheet")
        .or(config.rate_sheet.as_ref())
    {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(prompter.text("Enter a file path to a rate-sheet (.csv):")?),
    };

    match fileio::load_csv(&csv_path, config.has_headers) {
        Err(QualifierError::NotFound(path)) => {
            bail!("Oops! Can't find this path: {}", path.display())
        }
        other => other.with_context(|| format!("Failed to load rate sheet: {}", csv_path.display())),
    }
}

fn get_applicant_info<R: BufRead, W: Write>(
    matches: &ArgMatches,
    prompter: &mut Prompter<R, W>,
) -> Result<ApplicantProfile> {
    let credit_score = match matches.get_one::<u32>("credit-score") {
        Some(score) => *score,
        None => prompter.credit_score("What's your credit score?")?,
    };

    let mut amount = |name: &str, question: &str| -> Result<f64> {
        match matches.get_one::<f64>(name) {
            Some(value) => Ok(*value),
            None => Ok(prompter.amount(question)?),
        }
    };
    let debt = amount("debt", "What's your current amount of monthly debt?")?;
    let income = amount("income", "What's your total monthly income?")?;
    let loan_amount = amount("loan-amount", "What's your desired loan amount?")?;
    let home_value = amount("home-value", "What's your home value?")?;

    Ok(ApplicantProfile::new(
        credit_score,
        debt,
        income,
        loan_amount,
        home_value,
    )?)
}

fn save_qualifying_loans<R: BufRead, W: Write>(
    matches: &ArgMatches,
    config: &Config,
    prompter: &mut Prompter<R, W>,
    rate_sheet: &RateSheet,
    loans: &[LoanOffer],
) -> Result<()> {
    let output_path = match matches.get_one::<String>("output") {
        Some(path) => PathBuf::from(path),
        None => {
            if !prompter.confirm("Do you want to save the list of qualifying loans?")? {
                println!("Thank you for using the Loan Qualifier!");
                return Ok(());
            }

            let question = match &config.output_file {
                Some(default) => format!(
                    "Please enter a file path to save qualified loans to a csv file [{}]:",
                    default
                ),
                None => "Please enter a file path to save qualified loans to a csv file:".to_string(),
            };
            let answer = prompter.text(&question)?;
            match (answer.is_empty(), &config.output_file) {
                (false, _) => PathBuf::from(answer),
                (true, Some(default)) => PathBuf::from(default),
                (true, None) => bail!("No output path given"),
            }
        }
    };

    fileio::save_csv(&output_path, rate_sheet.header.as_deref(), loans)
        .with_context(|| format!("Failed to save qualifying loans: {}", output_path.display()))?;

    println!("📄 Saved {} qualifying loans to {}", loans.len(), output_path.display());
    println!("Please find the result list at the location of your choice. Thank you for using the Loan Qualifier!");
    Ok(())
}
