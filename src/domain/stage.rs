use std::fmt;

/// Phases of a build run. A run only moves forward through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildStage {
    Preflight,
    Cleaning,
    Invoking,
    Reporting,
}

impl BuildStage {
    pub const ALL: [BuildStage; 4] =
        [BuildStage::Preflight, BuildStage::Cleaning, BuildStage::Invoking, BuildStage::Reporting];

    /// The stage that follows this one, or `None` at the terminal stage.
    pub fn next(self) -> Option<BuildStage> {
        match self {
            BuildStage::Preflight => Some(BuildStage::Cleaning),
            BuildStage::Cleaning => Some(BuildStage::Invoking),
            BuildStage::Invoking => Some(BuildStage::Reporting),
            BuildStage::Reporting => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuildStage::Preflight => "preflight",
            BuildStage::Cleaning => "cleaning",
            BuildStage::Invoking => "invoking",
            BuildStage::Reporting => "reporting",
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
