//! Aspect-ratio classification of a target canvas.
//!
//! The same thresholds drive both the label shown to the user and the ratio
//! token sent to the image model, which only accepts five canonical ratios.

use serde::{Deserialize, Serialize};

/// Label used when the ratio is undefined (height of zero).
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Wider than 1.5:1, sent as `16:9`.
    Wide,
    /// Between 1.1:1 and 1.5:1, sent as `4:3`.
    Standard,
    /// Narrower than 0.6:1, sent as `9:16`.
    Tall,
    /// Between 0.6:1 and 0.9:1, sent as `3:4`.
    Portrait,
    /// Everything else, sent as `1:1`.
    Square,
}

impl AspectRatio {
    /// Classify `width / height`. Returns `None` when `height` is zero.
    pub fn classify(width: u32, height: u32) -> Option<AspectRatio> {
        if height == 0 {
            return None;
        }
        let ratio = width as f64 / height as f64;
        let class = if ratio > 1.5 {
            AspectRatio::Wide
        } else if ratio > 1.1 {
            AspectRatio::Standard
        } else if ratio < 0.6 {
            AspectRatio::Tall
        } else if ratio < 0.9 {
            AspectRatio::Portrait
        } else {
            AspectRatio::Square
        };
        Some(class)
    }

    /// The exact ratio token accepted by the image model.
    pub fn token(self) -> &'static str {
        match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Standard => "4:3",
            AspectRatio::Tall => "9:16",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Square => "1:1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Wide => "16:9 (Wide)",
            AspectRatio::Standard => "4:3 (Standard)",
            AspectRatio::Tall => "9:16 (Tall)",
            AspectRatio::Portrait => "3:4 (Portrait)",
            AspectRatio::Square => "1:1 (Square)",
        }
    }
}

/// Human readable ratio label for a canvas, `"N/A"` when height is zero.
pub fn ratio_label(width: u32, height: u32) -> &'static str {
    AspectRatio::classify(width, height)
        .map(AspectRatio::label)
        .unwrap_or(NOT_APPLICABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_reference_ratios() {
        assert_eq!(AspectRatio::classify(2000, 1000), Some(AspectRatio::Wide));
        assert_eq!(AspectRatio::classify(1330, 1000), Some(AspectRatio::Standard));
        assert_eq!(AspectRatio::classify(500, 1000), Some(AspectRatio::Tall));
        assert_eq!(AspectRatio::classify(750, 1000), Some(AspectRatio::Portrait));
        assert_eq!(AspectRatio::classify(1000, 1000), Some(AspectRatio::Square));
        assert_eq!(AspectRatio::classify(1000, 0), None);
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        // 1.5 exactly is not wide, 1.1 exactly is not standard.
        assert_eq!(AspectRatio::classify(1500, 1000), Some(AspectRatio::Standard));
        assert_eq!(AspectRatio::classify(1100, 1000), Some(AspectRatio::Square));
        // 0.6 exactly is not tall, 0.9 exactly is not portrait.
        assert_eq!(AspectRatio::classify(600, 1000), Some(AspectRatio::Portrait));
        assert_eq!(AspectRatio::classify(900, 1000), Some(AspectRatio::Square));
    }

    #[test]
    fn test_full_hd_is_wide() {
        let class = AspectRatio::classify(1920, 1080).unwrap();
        assert_eq!(class.token(), "16:9");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ratio_label(2000, 1000), "16:9 (Wide)");
        assert_eq!(ratio_label(1024, 1024), "1:1 (Square)");
        assert_eq!(ratio_label(10, 0), NOT_APPLICABLE);
        assert_eq!(ratio_label(0, 0), NOT_APPLICABLE);
    }

    #[test]
    fn test_tokens_are_canonical() {
        let all = [
            AspectRatio::Wide,
            AspectRatio::Standard,
            AspectRatio::Tall,
            AspectRatio::Portrait,
            AspectRatio::Square,
        ];
        let tokens: Vec<&str> = all.iter().map(|a| a.token()).collect();
        assert_eq!(tokens, vec!["16:9", "4:3", "9:16", "3:4", "1:1"]);
    }
}
