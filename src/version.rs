use crate::error::{ReleaseBumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release label prefix (alpha, beta, or rc)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPrefix {
    Alpha,
    Beta,
    Rc,
}

impl LabelPrefix {
    fn as_str(&self) -> &'static str {
        match self {
            LabelPrefix::Alpha => "alpha",
            LabelPrefix::Beta => "beta",
            LabelPrefix::Rc => "rc",
        }
    }
}

impl fmt::Display for LabelPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pre-release label with an optional numeric counter
///
/// Grammar: `(alpha|beta|rc)(\d+)?`. An absent counter is treated as
/// iteration 1, so the first label bump produces a counter of 2
/// ("alpha" -> "alpha2").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub prefix: LabelPrefix,
    pub counter: Option<u32>,
}

impl Label {
    pub fn new(prefix: LabelPrefix, counter: Option<u32>) -> Self {
        Label { prefix, counter }
    }

    /// Parse a label from a string (e.g., "alpha", "beta3", "rc10")
    pub fn parse(s: &str) -> Result<Self> {
        for prefix in [LabelPrefix::Alpha, LabelPrefix::Beta, LabelPrefix::Rc] {
            if let Some(rest) = s.strip_prefix(prefix.as_str()) {
                let counter = if rest.is_empty() {
                    None
                } else {
                    Some(rest.parse::<u32>().map_err(|_| {
                        ReleaseBumpError::version(format!(
                            "Invalid label counter in '{}': expected digits after '{}'",
                            s, prefix
                        ))
                    })?)
                };
                return Ok(Label { prefix, counter });
            }
        }

        Err(ReleaseBumpError::version(format!(
            "Invalid pre-release label: '{}' - expected alpha, beta, or rc with optional counter",
            s
        )))
    }

    /// Increment the counter, treating an absent counter as 1
    pub fn increment(&self) -> Self {
        Label {
            prefix: self.prefix,
            counter: Some(self.counter.unwrap_or(1) + 1),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)?;
        if let Some(counter) = self.counter {
            write!(f, "{}", counter)?;
        }
        Ok(())
    }
}

/// Semantic version representation with an optional pre-release label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub label: Option<Label>,
}

impl Version {
    /// Create a new version without a label
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            label: None,
        }
    }

    /// Parse a version string (e.g., "1.2.3" or "1.2.3-alpha2")
    pub fn parse(s: &str) -> Result<Self> {
        let (triple, label_part) = match s.split_once('-') {
            Some((triple, label)) => (triple, Some(label)),
            None => (s, None),
        };

        let parts: Vec<&str> = triple.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseBumpError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z or X.Y.Z-label",
                s
            )));
        }

        let major = parts[0].parse::<u32>().map_err(|_| {
            ReleaseBumpError::version(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            ReleaseBumpError::version(format!("Invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse::<u32>().map_err(|_| {
            ReleaseBumpError::version(format!("Invalid patch version: {}", parts[2]))
        })?;

        let label = match label_part {
            Some(l) => Some(Label::parse(l)?),
            None => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            label,
        })
    }

    /// The numeric triple without the label, used for release-note headers
    pub fn base(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Compute the new version for a bump request
    ///
    /// Numeric bumps reset the lower components and clear the label:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    ///
    /// A label bump leaves the numeric triple untouched and increments the
    /// label counter; bumping the label of an unlabeled version is an error
    /// rather than silently producing a malformed label.
    pub fn bump(&self, request: &BumpRequest) -> Result<Self> {
        match request {
            BumpRequest::Set(version) => Ok(*version),
            BumpRequest::Major => Ok(Version::new(self.major + 1, 0, 0)),
            BumpRequest::Minor => Ok(Version::new(self.major, self.minor + 1, 0)),
            BumpRequest::Patch => Ok(Version::new(self.major, self.minor, self.patch + 1)),
            BumpRequest::Label => {
                let label = self.label.ok_or_else(|| {
                    ReleaseBumpError::invalid_state(format!(
                        "Cannot bump label: version '{}' has no pre-release label",
                        self
                    ))
                })?;
                Ok(Version {
                    label: Some(label.increment()),
                    ..*self
                })
            }
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(label) = &self.label {
            write!(f, "-{}", label)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ReleaseBumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Version change requested on the command line
///
/// Exactly one request is selected per invocation; the CLI argument group
/// enforces mutual exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpRequest {
    /// Replace the current version with an explicit one
    Set(Version),
    Major,
    Minor,
    Patch,
    /// Increment the pre-release label counter
    Label,
}
