mod configuration_block;

use std::path::Path;

use anyhow::{Context, Result};
use jdkwatch_core::{JDKS_CONFIGURATION_ID, JdkVersion, runtime_name};
use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};
use tokio::fs::read_to_string;
use tracing::debug;

pub use configuration_block::{ConfigurationBlock, find_configuration_block};

const INDENT: &[u8] = b"  ";

/// Parsed `package.json`, keeping key order so a rewrite only moves what changed.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    value: Value,
    trailing_newline: bool,
}

impl ManifestDocument {
    /// # Errors
    /// Returns error if the file cannot be read or is not valid JSON.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// # Errors
    /// Returns error if `content` is not valid JSON.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self {
            value: serde_json::from_str(content)?,
            trailing_newline: content.ends_with('\n'),
        })
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Appends the runtime name of `version` to the `java-jdks` runtime enumeration.
    ///
    /// Returns `false` when the name is already listed, leaving the enumeration as is.
    ///
    /// # Errors
    /// Returns error if the configuration block or its enumeration is missing.
    pub fn add_runtime(&mut self, version: JdkVersion) -> Result<bool> {
        let name = runtime_name(version);
        let mut block = find_configuration_block(&mut self.value, JDKS_CONFIGURATION_ID)?;
        let names = block.runtime_names_mut()?;
        if names.iter().any(|existing| existing.as_str() == Some(name.as_str())) {
            debug!(runtime = %name, "runtime already listed");
            return Ok(false);
        }
        debug!(runtime = %name, "appending runtime");
        names.push(Value::String(name));
        Ok(true)
    }

    /// Serializes with two-space indentation, keeping the source's trailing newline.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.value.serialize(&mut serializer)?;
        let mut rendered = String::from_utf8(buf)?;
        if self.trailing_newline {
            rendered.push('\n');
        }
        Ok(rendered)
    }
}
