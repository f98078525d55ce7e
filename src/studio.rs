//! Top-level design studio: explicit UI state, reducer transitions, and the
//! generate / edit / export pipelines that drive the model, the compositor and
//! the history.

use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::client::{GenerationRequest, ImageModel};
use crate::compositor::{self, CanvasSize};
use crate::credentials::{CredentialGate, ensure_credential};
use crate::error::{GenGraphicError, Result};
use crate::export::{self, FULL_HD};
use crate::history::{HistoryCache, HistoryRecord};
use crate::params::{DesignParameters, parse_dimension_label};
use crate::store::KeyValueStore;

pub const CONFIG_ERROR_MESSAGE: &str = "Configuration error. Please select a valid API key.";
pub const GENERATION_FAILED_MESSAGE: &str = "Generation failed. Check your connection or API key.";
pub const EDIT_FAILED_MESSAGE: &str = "Could not process the adjustment.";
pub const DECODE_FAILED_MESSAGE: &str = "The generated image could not be decoded.";

/// Name used in history when the brand name is empty.
pub const FALLBACK_NAME: &str = "Logo";
pub const EDITED_SUFFIX: &str = " (Adjusted)";

/// A generated or edited image.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifact {
    pub base64: String,
    pub url: String,
    pub prompt_used: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudioState {
    pub params: DesignParameters,
    pub loading: bool,
    pub exporting: bool,
    pub editing: bool,
    pub result: Option<GeneratedArtifact>,
    pub edit_prompt: String,
    pub error: Option<String>,
}

impl StudioState {
    pub fn is_busy(&self) -> bool {
        self.loading || self.exporting || self.editing
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetParams(DesignParameters),
    AddColor(String),
    RemoveColor(usize),
    SetFullHd,
    SetSquare,
    SetEditPrompt(String),
    ValidationFailed(String),
    GenerationStarted,
    GenerationSucceeded(GeneratedArtifact),
    GenerationFailed(String),
    EditStarted,
    EditSucceeded(GeneratedArtifact),
    EditFailed(String),
    ExportStarted,
    ExportFinished,
    ExportFailed(String),
    LoadedFromHistory {
        artifact: GeneratedArtifact,
        params: Option<DesignParameters>,
        dimensions: Option<(u32, u32)>,
        name: String,
    },
}

/// Pure state transition.
pub fn reduce(mut state: StudioState, action: Action) -> StudioState {
    match action {
        Action::SetParams(params) => state.params = params,
        Action::AddColor(color) => state.params.add_color(&color),
        Action::RemoveColor(index) => state.params.remove_color(index),
        Action::SetFullHd => state.params.set_full_hd(),
        Action::SetSquare => state.params.set_square(),
        Action::SetEditPrompt(prompt) => state.edit_prompt = prompt,
        Action::ValidationFailed(message) => state.error = Some(message),
        Action::GenerationStarted => {
            state.loading = true;
            state.error = None;
        }
        Action::GenerationSucceeded(artifact) => {
            state.loading = false;
            state.result = Some(artifact);
        }
        Action::GenerationFailed(message) => {
            state.loading = false;
            state.error = Some(message);
        }
        Action::EditStarted => {
            state.editing = true;
            state.error = None;
        }
        Action::EditSucceeded(artifact) => {
            state.editing = false;
            state.result = Some(artifact);
            state.edit_prompt.clear();
        }
        Action::EditFailed(message) => {
            state.editing = false;
            state.error = Some(message);
        }
        Action::ExportStarted => state.exporting = true,
        Action::ExportFinished => state.exporting = false,
        Action::ExportFailed(message) => {
            state.exporting = false;
            state.error = Some(message);
        }
        Action::LoadedFromHistory {
            artifact,
            params,
            dimensions,
            name,
        } => {
            state.result = Some(artifact);
            if let Some(snapshot) = params {
                state.params = snapshot;
            }
            if let Some((width, height)) = dimensions {
                state.params.width = width;
                state.params.height = height;
                state.params.name = name;
            }
        }
    }
    state
}

/// Brand name of a stored design, without any `" (...)"` suffix.
fn base_name(name: &str) -> &str {
    name.split(" (").next().unwrap_or(name)
}

pub struct Studio<M: ImageModel, C: CredentialGate, S: KeyValueStore> {
    model: M,
    credentials: C,
    history: HistoryCache<S>,
    state: StudioState,
}

impl<M: ImageModel, C: CredentialGate, S: KeyValueStore> Studio<M, C, S> {
    /// Build a studio, loading the persisted history from `store`.
    pub fn new(model: M, credentials: C, store: S) -> Self {
        Self {
            model,
            credentials,
            history: HistoryCache::load(store),
            state: StudioState::default(),
        }
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    pub fn history(&self) -> &HistoryCache<S> {
        &self.history
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Generate a design from the current parameters.
    pub fn generate(&mut self) -> Result<GeneratedArtifact> {
        if self.state.is_busy() {
            return Err(GenGraphicError::Busy);
        }
        if let Err(e) = self.state.params.validate() {
            let message = match &e {
                GenGraphicError::Validation(m) => m.clone(),
                other => other.to_string(),
            };
            self.dispatch(Action::ValidationFailed(message));
            return Err(e);
        }

        self.dispatch(Action::GenerationStarted);
        match self.run_generation() {
            Ok(artifact) => {
                self.dispatch(Action::GenerationSucceeded(artifact.clone()));
                Ok(artifact)
            }
            Err(e) => {
                error!("Logo generation failed: {}", e);
                let message = self.failure_message(&e, GENERATION_FAILED_MESSAGE);
                self.dispatch(Action::GenerationFailed(message));
                Err(e)
            }
        }
    }

    fn run_generation(&mut self) -> Result<GeneratedArtifact> {
        let key = ensure_credential(&mut self.credentials)?;
        let params = self.state.params.clone();
        let request = GenerationRequest::from_params(&params);

        let base64 = self.model.generate(&key, &request)?;
        let url = compositor::process_to_exact_size(
            &base64,
            CanvasSize::from((params.width, params.height)),
        )?;

        let name = if params.name.is_empty() {
            FALLBACK_NAME
        } else {
            params.name.as_str()
        };
        self.history.insert(HistoryRecord::new(
            url.clone(),
            base64.clone(),
            name,
            params.dimension_label(),
            Some(params.clone()),
        ))?;
        info!("Generated {} design for {:?}", params.dimension_label(), name);

        Ok(GeneratedArtifact {
            base64,
            url,
            prompt_used: format!("Design for {}", params.name),
        })
    }

    /// Apply the pending edit instruction to the current design.
    pub fn edit(&mut self) -> Result<GeneratedArtifact> {
        if self.state.is_busy() {
            return Err(GenGraphicError::Busy);
        }
        let Some(current) = self.state.result.clone() else {
            return Err(GenGraphicError::Validation(
                "There is no design to edit.".into(),
            ));
        };
        if self.state.edit_prompt.trim().is_empty() {
            return Err(GenGraphicError::Validation(
                "An edit instruction is required.".into(),
            ));
        }

        self.dispatch(Action::EditStarted);
        match self.run_edit(current) {
            Ok(artifact) => {
                self.dispatch(Action::EditSucceeded(artifact.clone()));
                Ok(artifact)
            }
            Err(e) => {
                error!("Logo editing failed: {}", e);
                let message = self.failure_message(&e, EDIT_FAILED_MESSAGE);
                self.dispatch(Action::EditFailed(message));
                Err(e)
            }
        }
    }

    fn run_edit(&mut self, current: GeneratedArtifact) -> Result<GeneratedArtifact> {
        let key = ensure_credential(&mut self.credentials)?;
        let params = self.state.params.clone();

        let base64 = self
            .model
            .edit(&key, &current.base64, &self.state.edit_prompt)?;
        let url = compositor::process_to_exact_size(
            &base64,
            CanvasSize::from((params.width, params.height)),
        )?;

        let name = if params.name.is_empty() {
            FALLBACK_NAME
        } else {
            params.name.as_str()
        };
        self.history.insert(HistoryRecord::new(
            url.clone(),
            base64.clone(),
            &format!("{}{}", name, EDITED_SUFFIX),
            params.dimension_label(),
            Some(params.clone()),
        ))?;

        Ok(GeneratedArtifact {
            base64,
            url,
            ..current
        })
    }

    /// Render the current design at the fixed 1920x1080 export size.
    pub fn export_full_hd(&mut self) -> Result<String> {
        if self.state.is_busy() {
            return Err(GenGraphicError::Busy);
        }
        let Some(current) = self.state.result.clone() else {
            return Err(GenGraphicError::Validation(
                "There is no design to export.".into(),
            ));
        };

        self.dispatch(Action::ExportStarted);
        match compositor::process_to_exact_size(&current.base64, FULL_HD) {
            Ok(url) => {
                self.dispatch(Action::ExportFinished);
                Ok(url)
            }
            Err(e) => {
                error!("Full HD export failed: {}", e);
                let message = self.failure_message(&e, DECODE_FAILED_MESSAGE);
                self.dispatch(Action::ExportFailed(message));
                Err(e)
            }
        }
    }

    /// Write the 1920x1080 rendering of the current design into `dir`.
    pub fn save_full_hd(&mut self, dir: &Path) -> Result<PathBuf> {
        let url = self.export_full_hd()?;
        let filename = export::full_hd_filename(&self.state.params.name);
        export::save_data_url(&url, dir, &filename)
    }

    /// Write the current design at its working size into `dir`.
    pub fn save_current(&self, dir: &Path) -> Result<PathBuf> {
        let current = self.state.result.as_ref().ok_or_else(|| {
            GenGraphicError::Validation("There is no design to download.".into())
        })?;
        let params = &self.state.params;
        let filename = export::standard_filename(&params.name, &params.dimension_label());
        export::save_data_url(&current.url, dir, &filename)
    }

    /// Write a stored design into `dir`.
    pub fn save_record(&self, id: &str, dir: &Path) -> Result<PathBuf> {
        let record = self
            .history
            .get(id)
            .ok_or_else(|| GenGraphicError::NotFound(id.to_string()))?;
        let filename = export::standard_filename(&record.name, &record.dimensions);
        export::save_data_url(&record.url, dir, &filename)
    }

    /// Make a stored design the current one, restoring its parameter snapshot, size and brand name.
    pub fn load_to_workspace(&mut self, id: &str) -> Result<()> {
        let record = self
            .history
            .get(id)
            .ok_or_else(|| GenGraphicError::NotFound(id.to_string()))?;
        let action = Action::LoadedFromHistory {
            artifact: GeneratedArtifact {
                base64: record.base64.clone(),
                url: record.url.clone(),
                prompt_used: format!("Loaded: {}", record.name),
            },
            params: record.params.clone(),
            dimensions: parse_dimension_label(&record.dimensions),
            name: base_name(&record.name).to_string(),
        };
        self.dispatch(action);
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<bool> {
        self.history.delete(id)
    }

    fn failure_message(&mut self, e: &GenGraphicError, fallback: &str) -> String {
        match e {
            GenGraphicError::CredentialRejected(_) => {
                warn!("API key rejected, reopening credential selection");
                if let Err(select_err) = self.credentials.select_credential() {
                    error!("Credential selection failed: {}", select_err);
                }
                CONFIG_ERROR_MESSAGE.to_string()
            }
            GenGraphicError::MissingCredential => CONFIG_ERROR_MESSAGE.to_string(),
            GenGraphicError::Decode(_) => DECODE_FAILED_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }
}
