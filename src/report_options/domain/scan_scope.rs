use serde::{Deserialize, Serialize};

/// Which kind of packages vulnerabilities are reported for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VulnType {
    /// Packages installed by the OS package manager
    Os,
    /// Language-specific libraries
    Library,
}

impl VulnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VulnType::Os => "os",
            VulnType::Library => "library",
        }
    }
}

impl std::str::FromStr for VulnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "os" => Ok(VulnType::Os),
            "library" => Ok(VulnType::Library),
            _ => Err(format!("unknown vulnerability type: {}", s)),
        }
    }
}

impl std::fmt::Display for VulnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of finding a scan looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityCheck {
    /// Known vulnerabilities in packages
    Vuln,
    /// Misconfigurations
    Config,
    /// Hard-coded secrets
    Secret,
}

impl SecurityCheck {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityCheck::Vuln => "vuln",
            SecurityCheck::Config => "config",
            SecurityCheck::Secret => "secret",
        }
    }
}

impl std::str::FromStr for SecurityCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vuln" => Ok(SecurityCheck::Vuln),
            "config" => Ok(SecurityCheck::Config),
            "secret" => Ok(SecurityCheck::Secret),
            _ => Err(format!("unknown security check: {}", s)),
        }
    }
}

impl std::fmt::Display for SecurityCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
