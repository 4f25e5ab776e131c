use thiserror::Error;

use crate::domain::extract_domain;
use crate::error::ImportError;
use crate::patterns::EmailValidator;

pub const FIELDS_PER_RECORD: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unexpected number of fields in line, expected: {expected}, got: {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("email: {0} does not match regexp")]
    InvalidEmail(String),
}

impl RecordError {
    /// Attaches the input line the record came from.
    pub fn at_line(self, line: u64) -> ImportError {
        match self {
            RecordError::FieldCount { expected, actual } => ImportError::MalformedRecord {
                line,
                expected,
                actual,
            },
            RecordError::InvalidEmail(email) => ImportError::InvalidEmail { line, email },
        }
    }
}

/// One customer row: first name, last name, email, gender, IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    first_name: String,
    last_name: String,
    email: String,
    gender: String,
    ip_address: String,
}

impl Record {
    /// Builds a record from exactly [`FIELDS_PER_RECORD`] values, in column order.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let [first_name, last_name, email, gender, ip_address]: [String; FIELDS_PER_RECORD] =
            fields
                .try_into()
                .map_err(|fields: Vec<String>| RecordError::FieldCount {
                    expected: FIELDS_PER_RECORD,
                    actual: fields.len(),
                })?;

        Ok(Self {
            first_name,
            last_name,
            email,
            gender,
            ip_address,
        })
    }

    pub fn validate<V: EmailValidator + ?Sized>(&self, validator: &V) -> Result<(), RecordError> {
        if validator.is_valid(&self.email) {
            Ok(())
        } else {
            Err(RecordError::InvalidEmail(self.email.clone()))
        }
    }

    /// Domain of the email, see [`extract_domain`].
    pub fn domain(&self) -> Option<&str> {
        extract_domain(&self.email)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }
}
