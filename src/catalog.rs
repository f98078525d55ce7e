//! Option catalogs offered by the design form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
    pub summary: &'static str,
}

const fn opt(id: &'static str, name: &'static str, description: &'static str) -> DesignOption {
    DesignOption {
        id,
        name,
        description,
    }
}

pub const FONT_OPTIONS: &[DesignOption] = &[
    // Sans serif
    opt("m-neo", "Modern Neo-Grotesque (Helvetica/Inter style)", "Swiss neutrality, maximum clarity and contemporary professionalism."),
    opt("m-geo", "Modern Geometric (Futura/Gotham style)", "Built on pure circular forms. Forward-looking, clean and balanced."),
    opt("m-hum", "Modern Humanist (Myriad/Gill Sans style)", "Organic strokes that echo handwriting. Friendly and modern."),
    opt("m-wide", "Modern Expanded (Avenue/Space Grotesk style)", "Wide letterforms that convey authority, space and technology."),
    opt("m-cond", "Modern Condensed (Roboto/Din style)", "Narrow and tall. Suited to industrial or high-impact brands."),
    // Serif
    opt("c-old", "Classic Old Style (Garamond/Minion style)", "Renaissance elegance. Refined, traditional and highly legible."),
    opt("c-trans", "Classic Transitional (Baskerville/Caslon style)", "Balance between old and modern. Formal, cultured and trustworthy."),
    opt("c-didone", "Classic Didone (Bodoni/Didot style)", "Extreme stroke contrast. The standard of luxury and fashion."),
    opt("c-slab", "Classic Slab Serif (Clarendon/Rockwell style)", "Strong rectangular serifs. Solid, honest and impactful."),
    opt("c-ven", "Classic Venetian (Centaur/Jenson style)", "Inspired by the first movable type. Historic and artisanal."),
    // Luxury and display
    opt("l-minimal", "Luxury Minimalist Serif (Cormorant style)", "Extra fine, elegant strokes. Jewellery and beauty aesthetics."),
    opt("l-deco", "Art Deco Stylized (Peignot/Metropolis style)", "Decorative geometry from the twenties. Glamour and distinction."),
    opt("l-stencil", "Editorial Stencil (Futura Stencil style)", "Clean cuts through the letters. Signature design and avant-garde."),
    opt("l-brut", "Brutalist Heavy (Neue Haas Black style)", "Extreme weight without ornament. Raw strength and honest design."),
    // Scripts
    opt("s-formal", "Formal Script (Bickham/Zapfino style)", "Classic pen calligraphy. Tradition, galas and extreme luxury."),
    opt("s-sign", "Casual Signature (Autograph style)", "Quick signature style. Personal, authentic and creative."),
    opt("s-brush", "Urban Brush (Mistral/Street style)", "Textured brush strokes. Energy, movement and street art."),
    // Tech and monospace
    opt("t-mono", "Technical Mono (Source Code Pro style)", "Fixed spacing. Programming, engineering and precision."),
    opt("t-pixel", "Digital Pixel (8-bit style)", "Retro gaming aesthetics. Digital nostalgia and geek culture."),
    opt("t-fut", "Futuristic Display (Michroma/Orbitron style)", "Square, open forms. Science fiction and high technology."),
    // Retro
    opt("r-vintage", "Vintage Stamp (Cooper Black style)", "Rounded, heavy forms. Seventies aesthetics and pop nostalgia."),
    opt("r-western", "Wild West Slab (French Canon style)", "Exaggerated serifs. Crafted, rustic and full of history."),
    opt("r-hand", "Hand-Drawn Quirky (Amatic/Indie style)", "Handmade. Playful, approachable and artistically imperfect."),
    opt("r-goth", "Gothic Blackletter (Fraktur style)", "Medieval style. Strength, mysticism and Germanic calligraphy."),
];

pub const DISTRIBUTION_OPTIONS: &[DesignOption] = &[
    opt("vertical", "Icon Above (Vertical)", "Icon above the name and slogan"),
    opt("horizontal-left", "Icon Left (Horizontal)", "Icon to the left of the text"),
    opt("horizontal-right", "Icon Right", "Icon to the right of the text"),
    opt("centered", "Icon Centered / Integrated", "Icon and text integrated harmoniously"),
    opt("icon-only", "Icon Only", "Leave text out of the logo"),
    opt("text-only", "Typography Only", "Logo based purely on text"),
];

pub const LOGO_TYPE_OPTIONS: &[DesignOption] = &[
    opt("wordmark", "Logotype (Wordmark)", "Identity built purely on typography. The brand name is the design, with no additional icons."),
    opt("pictorial", "Isotype (Pictorial)", "A graphic symbol or icon that represents the brand and works without text."),
    opt("imagotype", "Imagotype", "Icon and text presented side by side. Both can work independently or together."),
    opt("isologo", "Isologo", "Text and icon fused into a single inseparable unit."),
    opt("lettermark", "Monogram (Lettermark)", "Design centered on the brand initials, forming a stylized typographic symbol."),
    opt("emblem", "Emblem", "Text enclosed inside a shield, seal or closed geometric shape."),
    opt("abstract", "Abstract", "Non-figurative geometric shapes expressing unique, abstract brand concepts."),
];

pub const COLOR_PALETTES: &[ColorPalette] = &[
    ColorPalette { name: "Corporate", colors: &["#003366", "#FFFFFF", "#CCCCCC"], summary: "Navy blue, white, grey" },
    ColorPalette { name: "Energetic", colors: &["#FF5733", "#FFC300", "#000000"], summary: "Orange, gold, black" },
    ColorPalette { name: "Nature", colors: &["#2ECC71", "#27AE60", "#F1C40F"], summary: "Emerald green, forest green, yellow" },
    ColorPalette { name: "Luxury", colors: &["#1A1A1A", "#D4AF37", "#FFFFFF"], summary: "Matte black, gold, white" },
    ColorPalette { name: "Pastel", colors: &["#FFB6C1", "#B0E0E6", "#FFFACD"], summary: "Light pink, powder blue, cream" },
];

pub const ICON_ONLY_DISTRIBUTION: &str = "icon-only";
pub const PICTORIAL_LOGO_TYPE: &str = "pictorial";

pub fn find_by_id<'a>(options: &'a [DesignOption], id: &str) -> Option<&'a DesignOption> {
    options.iter().find(|o| o.id == id)
}

pub fn find_by_name<'a>(options: &'a [DesignOption], name: &str) -> Option<&'a DesignOption> {
    options.iter().find(|o| o.name == name)
}

/// Resolve user input that may be either an option id or its display name.
pub fn resolve<'a>(options: &'a [DesignOption], input: &str) -> Option<&'a DesignOption> {
    find_by_id(options, input).or_else(|| find_by_name(options, input))
}

pub fn find_palette(name: &str) -> Option<&'static ColorPalette> {
    COLOR_PALETTES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Display name of the distribution that suppresses all text.
pub fn icon_only_name() -> &'static str {
    find_by_id(DISTRIBUTION_OPTIONS, ICON_ONLY_DISTRIBUTION)
        .map(|o| o.name)
        .unwrap_or("Icon Only")
}

/// Display name of the pictorial (symbol only) logo type.
pub fn pictorial_name() -> &'static str {
    find_by_id(LOGO_TYPE_OPTIONS, PICTORIAL_LOGO_TYPE)
        .map(|o| o.name)
        .unwrap_or("Isotype (Pictorial)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_per_catalog() {
        for options in [FONT_OPTIONS, DISTRIBUTION_OPTIONS, LOGO_TYPE_OPTIONS] {
            let ids: HashSet<&str> = options.iter().map(|o| o.id).collect();
            assert_eq!(ids.len(), options.len());
        }
    }

    #[test]
    fn test_resolve_by_id_or_name() {
        let by_id = resolve(LOGO_TYPE_OPTIONS, "emblem").unwrap();
        let by_name = resolve(LOGO_TYPE_OPTIONS, "Emblem").unwrap();
        assert_eq!(by_id, by_name);
        assert!(resolve(LOGO_TYPE_OPTIONS, "mascot").is_none());
    }

    #[test]
    fn test_special_option_names() {
        assert_eq!(icon_only_name(), "Icon Only");
        assert_eq!(pictorial_name(), "Isotype (Pictorial)");
    }

    #[test]
    fn test_find_palette_ignores_case() {
        let palette = find_palette("luxury").unwrap();
        assert_eq!(palette.colors, &["#1A1A1A", "#D4AF37", "#FFFFFF"]);
    }
}
