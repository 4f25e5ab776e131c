pub mod args;
pub mod domain;
pub mod error;
pub mod importer;
pub mod patterns;
pub mod record;
pub mod rows;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use error::{ImportError, ReadError};
pub use importer::CustomerImporter;
pub use patterns::{EmailPattern, EmailValidator, DEFAULT_EMAIL_PATTERN};
pub use record::Record;
pub use stats::{DomainCount, DomainCounter, TieBreak};
