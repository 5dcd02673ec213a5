//! Syntax validation for `did:andorra` identifiers
//!
//! Identifiers have the form `did:andorra:NRTAD-NNNNNNX[_ISS|_SP]`: six
//! decimal digits, one uppercase letter, and an optional role suffix.
//!
//! Validation runs as an ordered list of checks. The method prefix is checked
//! first and reports its own error; only then is the full NRTAD pattern
//! applied.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// DID method prefix accepted by this driver
pub const METHOD_PREFIX: &str = "did:andorra:";

/// Human-readable form of the accepted pattern, used in error messages
pub const PATTERN_DESCRIPTION: &str = "did:andorra:NRTAD-######X[_ISS|_SP]";

static NRTAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^did:andorra:(NRTAD-[0-9]{6}[A-Z])(?:_(ISS|SP))?$").unwrap()
});

/// Why an identifier was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DidSyntaxError {
    /// Input does not start with `did:andorra:`
    MissingPrefix,
    /// Prefix is present but the rest does not match the NRTAD pattern
    PatternMismatch,
}

impl fmt::Display for DidSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "DID must start with {METHOD_PREFIX}"),
            Self::PatternMismatch => write!(f, "DID must match pattern: {PATTERN_DESCRIPTION}"),
        }
    }
}

impl std::error::Error for DidSyntaxError {}

pub type Result<T> = std::result::Result<T, DidSyntaxError>;

/// Role encoded by the optional identifier suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DidRole {
    /// No suffix
    Subject,
    /// `_ISS`
    Issuer,
    /// `_SP`
    ServiceProvider,
}

impl DidRole {
    /// The suffix as written in the identifier, without the underscore
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::Subject => None,
            Self::Issuer => Some("ISS"),
            Self::ServiceProvider => Some("SP"),
        }
    }
}

/// A syntactically valid `did:andorra` identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AndorraDid {
    did: String,
    number_end: usize,
}

impl AndorraDid {
    /// Validate and parse an identifier
    pub fn parse(input: &str) -> Result<Self> {
        if !input.starts_with(METHOD_PREFIX) {
            return Err(DidSyntaxError::MissingPrefix);
        }

        let caps = NRTAD_RE
            .captures(input)
            .ok_or(DidSyntaxError::PatternMismatch)?;
        let number = caps.get(1).ok_or(DidSyntaxError::PatternMismatch)?;

        Ok(Self {
            did: input.to_string(),
            number_end: number.end(),
        })
    }

    /// The full DID string
    pub fn as_str(&self) -> &str {
        &self.did
    }

    /// The registry number, e.g. `NRTAD-710646J`
    pub fn nrtad_number(&self) -> &str {
        &self.did[METHOD_PREFIX.len()..self.number_end]
    }

    pub fn role(&self) -> DidRole {
        match &self.did[self.number_end..] {
            "_ISS" => DidRole::Issuer,
            "_SP" => DidRole::ServiceProvider,
            _ => DidRole::Subject,
        }
    }
}

/// Check an identifier, returning the parsed form on success
pub fn validate(input: &str) -> Result<AndorraDid> {
    AndorraDid::parse(input)
}

impl FromStr for AndorraDid {
    type Err = DidSyntaxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AndorraDid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.did)
    }
}

impl AsRef<str> for AndorraDid {
    fn as_ref(&self) -> &str {
        &self.did
    }
}
