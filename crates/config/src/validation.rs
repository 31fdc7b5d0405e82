//! Field checks for `bookshelf.toml`
//!
//! A section lists its own checks against field names local to its table.
//! `Checks` prefixes them with the table name, so a problem reads as
//! `site.title must not be blank`.

use std::fmt;
use std::path::Path;

/// One rejected value in the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted key, e.g. `site.upcoming_limit`
    pub field: String,
    pub problem: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: problem.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.problem)
    }
}

impl std::error::Error for ValidationError {}

/// Joins problems into a single line for logs and error messages
pub fn describe(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A table of `bookshelf.toml` that knows which of its values are wrong
pub trait ConfigSection: Sized {
    /// Table name in the file
    const NAME: &'static str;

    /// Records every problem with this section's fields
    fn check(&self, checks: &mut Checks);

    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut checks = Checks::default();
        checks.section(self);
        checks.finish()
    }
}

/// Collects problems across one or more sections
#[derive(Debug, Default)]
pub struct Checks {
    table: &'static str,
    problems: Vec<ValidationError>,
}

impl Checks {
    /// Runs a section's checks with its table name as the key prefix
    pub fn section<S: ConfigSection>(&mut self, section: &S) -> &mut Self {
        let outer = std::mem::replace(&mut self.table, S::NAME);
        section.check(self);
        self.table = outer;
        self
    }

    pub fn require_text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.reject(field, "must not be blank");
        }
    }

    pub fn require_path(&mut self, field: &str, value: &Path) {
        if value.as_os_str().is_empty() {
            self.reject(field, "must name a path");
        }
    }

    pub fn at_most(&mut self, field: &str, value: usize, max: usize) {
        if value > max {
            self.reject(field, format!("must be at most {max} (got {value})"));
        }
    }

    pub fn reject(&mut self, field: &str, problem: impl Into<String>) {
        let key = if self.table.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.table, field)
        };
        self.problems.push(ValidationError::new(key, problem));
    }

    pub fn finish(self) -> Result<(), Vec<ValidationError>> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(self.problems)
        }
    }
}
