//! Generator configuration.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Settings shared by every stage of one generation run.
///
/// Every field has a default, so an empty document is a valid configuration.
///
/// ```toml
/// bean_namespace = 'App\Beans'
/// dao_namespace = 'App\Daos'
/// dao_factory_name = "DaoFactory"
/// generated_dir = "generated"
///
/// [options]
/// json_serialize = "camel"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Namespace of the generated beans.
    pub bean_namespace: String,
    /// Namespace of the generated DAOs.
    pub dao_namespace: String,
    /// Class name of the DAO factory.
    pub dao_factory_name: String,
    /// Root directory generated files are placed under.
    pub generated_dir: PathBuf,
    /// Free-form options for listeners, in declaration order.
    pub options: IndexMap<String, String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            bean_namespace: "App\\Beans".to_string(),
            dao_namespace: "App\\Daos".to_string(),
            dao_factory_name: "DaoFactory".to_string(),
            generated_dir: PathBuf::from("generated"),
            options: IndexMap::new(),
        }
    }
}

impl Configuration {
    /// Load a configuration file from the given path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parse a configuration with a filename used for error reporting.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Configuration = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    /// Look up a listener option.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Namespace of the generated base beans.
    pub fn generated_bean_namespace(&self) -> String {
        format!("{}\\Generated", self.bean_namespace)
    }

    /// Namespace of the generated base DAOs.
    pub fn generated_dao_namespace(&self) -> String {
        format!("{}\\Generated", self.dao_namespace)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        validate_namespace(&self.bean_namespace, "bean_namespace", ctx)?;
        validate_namespace(&self.dao_namespace, "dao_namespace", ctx)?;
        if let Err(reason) = check_identifier(&self.dao_factory_name) {
            return Err(ctx.invalid_identifier_error(
                &self.dao_factory_name,
                "dao_factory_name",
                reason,
            ));
        }
        Ok(())
    }
}

fn validate_namespace(namespace: &str, key: &str, ctx: &SourceContext) -> Result<()> {
    if namespace.is_empty() {
        return Err(ctx.invalid_identifier_error(namespace, key, "namespace cannot be empty"));
    }
    for segment in namespace.split('\\') {
        if let Err(reason) = check_identifier(segment) {
            return Err(ctx.invalid_identifier_error(namespace, key, reason));
        }
    }
    Ok(())
}

fn check_identifier(name: &str) -> std::result::Result<(), &'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => Err("name cannot be empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            Err("name must start with a letter or underscore")
        }
        Some(_) if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') => {
            Err("name contains invalid characters")
        }
        Some(_) => Ok(()),
    }
}
