//! Ledger format versions

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Supported ledger format versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    /// `id@part checksum` lines sorted by rendered text
    V1,
}

impl Version {
    /// The version written by new ledgers.
    pub const LATEST: Version = Version::V1;

    /// Numeric value as written in the `version` header.
    pub fn as_u32(&self) -> u32 {
        match self {
            Self::V1 => 1,
        }
    }
}

impl TryFrom<u32> for Version {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            other => Err(Error::UnknownVersion(other)),
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s.parse().map_err(|_| Error::VersionNotNumeric {
            value: s.to_string(),
        })?;
        Self::try_from(raw)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_is_v1() {
        assert_eq!(Version::LATEST, Version::V1);
    }

    #[test]
    fn parse_known_version() {
        assert_eq!("1".parse::<Version>().unwrap(), Version::V1);
    }

    #[test]
    fn parse_unknown_version() {
        assert_eq!("0".parse::<Version>(), Err(Error::UnknownVersion(0)));
        assert_eq!("2".parse::<Version>(), Err(Error::UnknownVersion(2)));
    }

    #[test]
    fn parse_non_numeric_version() {
        assert!(matches!(
            "-1".parse::<Version>(),
            Err(Error::VersionNotNumeric { .. })
        ));
        assert!(matches!(
            "one".parse::<Version>(),
            Err(Error::VersionNotNumeric { .. })
        ));
    }
}
