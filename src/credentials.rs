//! API-key gate consulted before every remote call.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::{info, warn};

use crate::config::Config;
use crate::error::{GenGraphicError, Result};

pub trait CredentialGate {
    /// The usable credential, if one is configured.
    fn credential(&self) -> Option<String>;

    /// Run the interactive credential-selection flow.
    fn select_credential(&mut self) -> Result<()>;

    fn has_credential(&self) -> bool {
        self.credential().is_some()
    }
}

/// Return a usable credential, running the selection flow when none is configured.
///
/// The credential state is queried again after the flow; a flow that ends
/// without a key fails with [`GenGraphicError::MissingCredential`].
pub fn ensure_credential<C: CredentialGate + ?Sized>(gate: &mut C) -> Result<String> {
    if let Some(key) = gate.credential() {
        return Ok(key);
    }
    info!("No API key configured, starting credential selection");
    gate.select_credential()?;
    gate.credential().ok_or_else(|| {
        warn!("Credential selection finished without a usable key");
        GenGraphicError::MissingCredential
    })
}

/// Key from configuration, else from the key file; selection prompts on `reader`.
pub struct EnvCredentials<R: BufRead> {
    configured: Option<String>,
    key_path: PathBuf,
    reader: R,
}

impl<R: BufRead> EnvCredentials<R> {
    pub fn new(config: &Config, reader: R) -> Self {
        Self {
            configured: config.api_key.clone(),
            key_path: config.api_key_path(),
            reader,
        }
    }

    fn stored_key(&self) -> Option<String> {
        fs::read_to_string(&self.key_path)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

impl<R: BufRead> CredentialGate for EnvCredentials<R> {
    fn credential(&self) -> Option<String> {
        self.configured.clone().or_else(|| self.stored_key())
    }

    fn select_credential(&mut self) -> Result<()> {
        eprint!("Enter your Gemini API key: ");
        std::io::stderr().flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        let key = line.trim();
        if key.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.key_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.key_path, key)?;
        // A freshly selected key replaces whatever the environment provided.
        self.configured = Some(key.to_string());
        info!("API key saved to {}", self.key_path.display());
        Ok(())
    }
}

/// Fixed credential, with an optional key handed out by the selection flow.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    key: Option<String>,
    on_select: Option<String>,
    selections: usize,
}

impl StaticCredentials {
    pub fn new(key: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_string),
            ..Default::default()
        }
    }

    /// Key that becomes active the next time the selection flow runs.
    pub fn selecting(mut self, key: &str) -> Self {
        self.on_select = Some(key.to_string());
        self
    }

    /// How many times the selection flow has run.
    pub fn selections(&self) -> usize {
        self.selections
    }
}

impl CredentialGate for StaticCredentials {
    fn credential(&self) -> Option<String> {
        self.key.clone()
    }

    fn select_credential(&mut self) -> Result<()> {
        self.selections += 1;
        if let Some(key) = self.on_select.take() {
            self.key = Some(key);
        }
        Ok(())
    }
}
