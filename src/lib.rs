pub mod calculators;
pub mod error;
pub mod fileio;
pub mod filters;
pub mod models;
pub mod prompt;
pub mod qualifier;

pub use error::{QualifierError, Result};
pub use models::{ApplicantProfile, Config, LoanOffer, RateSheet};
pub use qualifier::{find_qualifying_loans, LoanQualifier, Qualification, QualifyingRatios};
