use serde::{Deserialize, Serialize};

/// One version of an application's configuration.
///
/// `version` is monotonically numbered per `(application, environment)`
/// profile — see [`ConfigurationProfile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub application: String,
    pub environment: String,
    pub version: u32,
    pub data: serde_json::Value,
    pub created: jiff::Timestamp,
    pub deployed: bool,
    pub description: Option<String>,
}

/// All versions recorded for one `(application, environment)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationProfile {
    pub application: String,
    pub environment: String,
    pub versions: Vec<Configuration>,
    pub deployed_version: Option<u32>,
}

impl ConfigurationProfile {
    pub fn next_version(&self) -> u32 {
        self.versions.iter().map(|v| v.version).max().unwrap_or(0) + 1
    }

    pub fn deployed(&self) -> Option<&Configuration> {
        let deployed_version = self.deployed_version?;
        self.versions.iter().find(|v| v.version == deployed_version)
    }
}
