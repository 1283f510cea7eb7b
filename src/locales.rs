use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("cannot read message catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog `{locale}` is not valid YAML: {source}")]
    Syntax {
        locale: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("no catalog loaded for locale `{0}`")]
    UnknownLocale(String),
    #[error("`{key}` has no `{locale}` message")]
    MissingKey { locale: String, key: String },
}

/// Messages of one locale, keyed by dotted path.
type Catalog = HashMap<String, String>;

/// Translated console messages, one flattened key map per locale.
///
/// Keys nest in the YAML files (`steps: { venv_creating: ... }`) and are
/// addressed with dots (`steps.venv_creating`).
#[derive(Debug, Default)]
pub struct Locales {
    catalogs: HashMap<String, Catalog>,
    active: String,
}

/// Walks nested mappings and collects every scalar leaf under its dotted path.
fn collect_messages(root: Value) -> Catalog {
    let mut catalog = Catalog::new();
    let mut pending = vec![(String::new(), root)];

    while let Some((path, value)) = pending.pop() {
        let text = match value {
            Value::Mapping(entries) => {
                for (name, child) in entries {
                    let Some(name) = name.as_str() else { continue };
                    let child_path =
                        if path.is_empty() { name.to_string() } else { format!("{path}.{name}") };
                    pending.push((child_path, child));
                }
                continue;
            }
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        catalog.insert(path, text);
    }

    catalog
}

impl Locales {
    /// Loads every `*.yml` / `*.yaml` file of `dir`; the file stem names the locale.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, LocaleError> {
        let mut locales = Self::default();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let is_yaml = matches!(path.extension().and_then(|e| e.to_str()), Some("yml" | "yaml"));
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else { continue };
            if !is_yaml || !path.is_file() {
                continue;
            }
            locales.insert_yaml(locale, &fs::read_to_string(&path)?)?;
        }

        Ok(locales)
    }

    /// Adds (or replaces) one locale from YAML source.
    pub fn insert_yaml(&mut self, locale: &str, content: &str) -> Result<(), LocaleError> {
        let root: Value = serde_yaml::from_str(content)
            .map_err(|source| LocaleError::Syntax { locale: locale.to_string(), source })?;
        self.catalogs.insert(locale.to_string(), collect_messages(root));
        Ok(())
    }

    /// Selects the locale [`Locales::t`] reads from.
    pub fn set_default(&mut self, locale: &str) -> Result<(), LocaleError> {
        if !self.catalogs.contains_key(locale) {
            return Err(LocaleError::UnknownLocale(locale.to_string()));
        }
        self.active = locale.to_string();
        Ok(())
    }

    pub fn default_locale(&self) -> &str {
        &self.active
    }

    /// Message for `key` in the active locale, or `key` itself when there is none.
    pub fn t(&self, key: &str) -> String {
        self.lookup(&self.active, key).map_or_else(|| key.to_string(), str::to_string)
    }

    /// Translates `key` and fills `{name}` placeholders from `args`.
    pub fn t_with<V: AsRef<str>>(&self, key: &str, args: &[(&str, V)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value.as_ref())
        })
    }

    pub fn translate(&self, locale: &str, key: &str) -> Result<String, LocaleError> {
        if !self.catalogs.contains_key(locale) {
            return Err(LocaleError::UnknownLocale(locale.to_string()));
        }
        self.lookup(locale, key).map(str::to_string).ok_or_else(|| LocaleError::MissingKey {
            locale: locale.to_string(),
            key: key.to_string(),
        })
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.catalogs.get(locale)?.get(key).map(String::as_str)
    }
}
