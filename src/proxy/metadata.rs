//! Metadata identity masking
//!
//! The client tool feature-detects against the reported product identity, so
//! every backend must claim to be the same MySQL release. All identity-
//! bearing accessors funnel through one decision
//! ([`crate::dialect::is_native_identity`]); everything else is reported
//! exactly as the backend says it. The true identity stays reachable through
//! [`ProxyMetadata::true_product_name`] for diagnostics and for selecting
//! rewrite rules.

use crate::backend::{BackendConnection, BackendError};
use crate::dialect::{is_native_identity, MASKED_IDENTITY};

pub struct ProxyMetadata<'a> {
    target: &'a dyn BackendConnection,
}

impl<'a> ProxyMetadata<'a> {
    pub(crate) fn new(target: &'a dyn BackendConnection) -> Self {
        Self { target }
    }

    fn masked(&self) -> Result<bool, BackendError> {
        Ok(!is_native_identity(&self.target.product_name()?))
    }

    /// The product name reported to the client tool.
    pub fn product_name(&self) -> Result<String, BackendError> {
        if self.masked()? {
            Ok(MASKED_IDENTITY.product_name.to_string())
        } else {
            self.target.product_name()
        }
    }

    /// The product version reported to the client tool.
    pub fn product_version(&self) -> Result<String, BackendError> {
        if self.masked()? {
            Ok(MASKED_IDENTITY.product_version.to_string())
        } else {
            self.target.product_version()
        }
    }

    pub fn major_version(&self) -> Result<i32, BackendError> {
        if self.masked()? {
            Ok(MASKED_IDENTITY.major_version)
        } else {
            Ok(parse_version(&self.target.product_version()?).0)
        }
    }

    pub fn minor_version(&self) -> Result<i32, BackendError> {
        if self.masked()? {
            Ok(MASKED_IDENTITY.minor_version)
        } else {
            Ok(parse_version(&self.target.product_version()?).1)
        }
    }

    /// The backend's real product name, never masked. Not part of the
    /// client-facing metadata contract.
    pub fn true_product_name(&self) -> Result<String, BackendError> {
        self.target.product_name()
    }

    /// Delegated unchanged; the driver identity is not part of the lie.
    pub fn driver_name(&self) -> String {
        self.target.driver_name().to_string()
    }
}

fn parse_version(version: &str) -> (i32, i32) {
    let mut numbers = version.split('.').map(|part| {
        part.chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse::<i32>()
            .unwrap_or(0)
    });
    (numbers.next().unwrap_or(0), numbers.next().unwrap_or(0))
}
