use serde::{Deserialize, Serialize};

use crate::errors::errors::Error;

/// Metadata attached to a compilation unit.
///
/// The canonical JSON form is an object with exactly the keys `name`,
/// `path`, `pkgPath` and `usesFFI`. Decoding rejects objects missing any of
/// them, carrying extra keys, or holding values of the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleMeta {
    pub name: String,
    pub path: String,
    #[serde(rename = "pkgPath")]
    pub pkg_path: String,
    #[serde(rename = "usesFFI")]
    pub uses_ffi: bool,
}

impl ModuleMeta {
    pub fn new(name: String, path: String, pkg_path: String, uses_ffi: bool) -> Self {
        ModuleMeta {
            name,
            path,
            pkg_path,
            uses_ffi,
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
