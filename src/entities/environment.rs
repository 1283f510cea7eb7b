use crate::error::{BootstrapError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variables handed to every subprocess.
///
/// The bootstrapper never mutates its own environment; activation and cache
/// settings live here and are applied per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnvironment {
    vars: Vec<(String, String)>,
}

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Equivalent of sourcing the venv's activate script: `VIRTUAL_ENV` points
    /// at the environment and its executables come first on `PATH`.
    pub fn activate(
        &mut self,
        venv_root: &Path,
        bin_dir: &Path,
        base_path: Option<OsString>,
    ) -> Result<()> {
        let mut entries: Vec<PathBuf> = vec![bin_dir.to_path_buf()];
        if let Some(base) = base_path {
            entries.extend(std::env::split_paths(&base));
        }
        let path = std::env::join_paths(entries)
            .map_err(|e| BootstrapError::Config(format!("Invalid PATH entry: {}", e)))?;

        self.set("VIRTUAL_ENV", venv_root.to_string_lossy());
        self.set("PATH", path.to_string_lossy());
        Ok(())
    }

    pub fn extend<'a, I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (key, value) in vars {
            self.set(key.as_str(), value.as_str());
        }
    }
}
