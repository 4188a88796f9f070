use crate::error::{Error, Result};

/// Name the module is registered under.
pub const MODULE_NAME: &str = "tensorstore";

const MODULE_DOC: &str = "\
tensorstore
-----------

.. currentmodule:: tensorstore

.. autosummary::
   :toctree: _generate

   add
   subtract
";

/// Metadata attached to the module object when it is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub doc: &'static str,
}

impl ModuleInfo {
    /// Fails with [`Error::EmptyVersion`] when `version` is blank.
    pub fn new(name: &'static str, version: &'static str, doc: &'static str) -> Result<Self> {
        if version.trim().is_empty() {
            return Err(Error::EmptyVersion { module: name });
        }
        Ok(Self { name, version, doc })
    }

    /// Builds the metadata from values stamped in at compile time.
    pub fn from_build_env() -> Result<Self> {
        Self::new(MODULE_NAME, build_version(), MODULE_DOC)
    }
}

fn build_version() -> &'static str {
    // `TENSORSTORE_VERSION_INFO` overrides the crate version at compile time.
    option_env!("TENSORSTORE_VERSION_INFO").unwrap_or(env!("CARGO_PKG_VERSION"))
}
