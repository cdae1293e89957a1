//! Identity of the running program, shown in banners and hints.

/// Program name and version as presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInfo {
    pub name: String,
    pub version: String,
}

impl ProgramInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Banner line printed before command listings
    pub fn banner(&self) -> String {
        format!("{} version {}", self.name, self.version)
    }
}
