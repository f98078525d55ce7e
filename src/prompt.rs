use crate::catalog;
use crate::params::DesignParameters;

/// Natural-language generation prompt embedding every design field.
pub fn build_generation_prompt(params: &DesignParameters) -> String {
    let icon_only = catalog::icon_only_name();
    format!(
        "Create a high-end professional corporate logo design.

BRAND NAME: \"{name}\"
SLOGAN: \"{slogan}\"
LOGO TYPE: {logo_type}
VISUAL STYLE: {font}
ICON CONCEPT: {icon}
ELEMENT DISTRIBUTION: {distribution}
COLORS: Text in {name_color}, Slogan in {slogan_color}, Accents in {accents}.
BACKGROUND: Solid white, clean.

CRITICAL INSTRUCTIONS:
- The design MUST follow the \"{logo_type}\" structure.
- The ONLY text allowed is exactly \"{name}\" and \"{slogan}\".
- If \"{icon_only}\" is selected, NO text should appear.
- NO technical labels, hex codes, or UI elements in the image.
- High resolution, professional vector-like finish.",
        name = params.name,
        slogan = params.slogan,
        logo_type = params.logo_type,
        font = params.font_style,
        icon = params.icon_description,
        distribution = params.element_distribution,
        name_color = params.name_color,
        slogan_color = params.slogan_color,
        accents = params.colors.join(", "),
        icon_only = icon_only,
    )
}

pub fn build_edit_prompt(instruction: &str) -> String {
    format!(
        "Precisely modify this logo: \"{}\". Keep it professional and clean. Output only the modified image.",
        instruction.trim()
    )
}
