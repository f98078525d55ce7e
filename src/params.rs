//! Brand design parameters collected from the user.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, COLOR_PALETTES, DISTRIBUTION_OPTIONS, FONT_OPTIONS, LOGO_TYPE_OPTIONS};
use crate::compositor::CanvasSize;
use crate::error::{GenGraphicError, Result};

pub const SQUARE_SIZE: (u32, u32) = (1024, 1024);
pub const FULL_HD_SIZE: (u32, u32) = (1920, 1080);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignParameters {
    pub name: String,
    pub slogan: String,
    pub colors: Vec<String>,
    pub font_style: String,
    pub icon_description: String,
    pub element_distribution: String,
    pub logo_type: String,
    pub width: u32,
    pub height: u32,
    pub name_color: String,
    pub slogan_color: String,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            name: String::new(),
            slogan: String::new(),
            colors: COLOR_PALETTES[0].colors.iter().map(|c| c.to_string()).collect(),
            font_style: FONT_OPTIONS[0].name.to_string(),
            icon_description: String::new(),
            element_distribution: DISTRIBUTION_OPTIONS[0].name.to_string(),
            logo_type: LOGO_TYPE_OPTIONS[2].name.to_string(),
            width: SQUARE_SIZE.0,
            height: SQUARE_SIZE.1,
            name_color: "#0f172a".to_string(),
            slogan_color: "#64748b".to_string(),
        }
    }
}

impl DesignParameters {
    /// Whether the chosen layout renders text, which makes the brand name mandatory.
    pub fn requires_text(&self) -> bool {
        self.element_distribution != catalog::icon_only_name()
            && self.logo_type != catalog::pictorial_name()
    }

    pub fn validate(&self) -> Result<()> {
        CanvasSize::checked(self.width, self.height)?;
        if self.name.trim().is_empty() && self.requires_text() {
            return Err(GenGraphicError::Validation(
                "A brand name is required.".into(),
            ));
        }
        Ok(())
    }

    /// `"WxH"` label stored alongside every generated design.
    pub fn dimension_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Append a color. Bare hex digits (3 to 6 of them) get a leading `#`.
    pub fn add_color(&mut self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        let is_bare_hex =
            (3..=6).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_hexdigit());
        let color = if is_bare_hex {
            format!("#{}", trimmed)
        } else {
            trimmed.to_string()
        };
        self.colors.push(color);
    }

    pub fn remove_color(&mut self, index: usize) {
        if index < self.colors.len() {
            self.colors.remove(index);
        }
    }

    pub fn set_full_hd(&mut self) {
        (self.width, self.height) = FULL_HD_SIZE;
    }

    pub fn set_square(&mut self) {
        (self.width, self.height) = SQUARE_SIZE;
    }
}

/// Parse a `"WxH"` label back into its dimensions.
pub fn parse_dimension_label(label: &str) -> Option<(u32, u32)> {
    let (w, h) = label.split_once('x')?;
    let w = w.trim().parse().ok()?;
    let h = h.trim().parse().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}
