use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "HH")]
    Hh,
    SuperJob,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Hh => "HH",
            Platform::SuperJob => "SuperJob",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which platforms the user wants to see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFilter {
    Only(Platform),
    Both,
}

impl PlatformFilter {
    /// Parse a menu choice: "1" = HH, "2" = SuperJob, "3" = both
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(PlatformFilter::Only(Platform::Hh)),
            "2" => Some(PlatformFilter::Only(Platform::SuperJob)),
            "3" => Some(PlatformFilter::Both),
            _ => None,
        }
    }

    pub fn matches(&self, platform: Platform) -> bool {
        match self {
            PlatformFilter::Only(p) => *p == platform,
            PlatformFilter::Both => true,
        }
    }
}
