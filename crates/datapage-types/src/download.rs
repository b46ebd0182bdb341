use serde::{Deserialize, Serialize};

/// A downloadable file attached to a dataset version or filter output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadDescriptor {
    pub extension: String,
    /// Size as delivered upstream, normally a byte count
    #[serde(default)]
    pub size: String,
    pub uri: String,
}

impl DownloadDescriptor {
    pub fn new(
        extension: impl Into<String>,
        size: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            extension: extension.into(),
            size: size.into(),
            uri: uri.into(),
        }
    }

    /// Extension used for format matching
    pub fn normalized_extension(&self) -> String {
        self.extension.to_lowercase()
    }
}
