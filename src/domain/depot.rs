//! Depot records and OS classification

use std::collections::BTreeSet;
use std::fmt;

/// Operating system a depot targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsClassification {
    Windows,
    Mac,
    Linux,
    Unknown,
    /// An `oslist` value that is not one of the known platforms
    Other(String),
}

impl fmt::Display for OsClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsClassification::Windows => write!(f, "Windows"),
            OsClassification::Mac => write!(f, "macOS"),
            OsClassification::Linux => write!(f, "Linux"),
            OsClassification::Unknown => write!(f, "Unknown"),
            OsClassification::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Boolean markers Steam attaches to a depot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DepotFlag {
    Optional,
    SystemDefined,
    SharedInstall,
}

impl fmt::Display for DepotFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepotFlag::Optional => write!(f, "optional"),
            DepotFlag::SystemDefined => write!(f, "system"),
            DepotFlag::SharedInstall => write!(f, "shared"),
        }
    }
}

/// A content package of an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Depot {
    pub id: String,
    pub name: String,
    pub os: OsClassification,
    pub dlc_app_id: Option<u32>,
    pub max_size_bytes: Option<u64>,
    pub encrypted_size_bytes: Option<u64>,
    pub language: Option<String>,
    pub flags: BTreeSet<DepotFlag>,
}

impl Depot {
    /// Stand-in depot for an app that declares none of its own
    pub fn synthetic(app_id: u32, name: impl Into<String>) -> Self {
        Self {
            id: app_id.to_string(),
            name: name.into(),
            os: OsClassification::Unknown,
            dlc_app_id: None,
            max_size_bytes: None,
            encrypted_size_bytes: None,
            language: None,
            flags: BTreeSet::new(),
        }
    }

    pub fn has_flag(&self, flag: DepotFlag) -> bool {
        self.flags.contains(&flag)
    }
}
