//! The fixed option lists a design is assembled from.
//!
//! Each option travels over the wire as its display string
//! (`"college students"`, `"black, white, red"`), which is also what ends up
//! in the generation prompt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DesignError;

macro_rules! design_option {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DesignError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        DesignError::Validation(format!("Unknown {}: '{}'", $label, s))
                    })
            }
        }
    };
}

design_option! {
    Theme, "theme" {
        Motivation => "motivation",
        Anime => "anime",
        Streetwear => "streetwear",
        Sarcasm => "sarcasm",
        Fitness => "fitness",
        Gaming => "gaming",
        Minimalist => "minimalist",
        Vintage => "vintage",
        Tech => "tech",
        Nature => "nature",
    }
}

design_option! {
    Audience, "target audience" {
        CollegeStudents => "college students",
        GymLovers => "gym lovers",
        Programmers => "programmers",
        GeneralYouth => "general youth",
        Gamers => "gamers",
        Artists => "artists",
        Entrepreneurs => "entrepreneurs",
    }
}

design_option! {
    Mood, "mood" {
        Minimalist => "minimalist",
        Bold => "bold",
        Aesthetic => "aesthetic",
        Funny => "funny",
        Dark => "dark",
        Vintage => "vintage",
        Playful => "playful",
        Edgy => "edgy",
    }
}

design_option! {
    ArtStyle, "art style" {
        FlatIllustration => "flat illustration",
        LineArt => "line art",
        VectorArt => "vector art",
        Cartoon => "cartoon",
        Cyberpunk => "cyberpunk",
        Retro => "retro",
        Abstract => "abstract",
    }
}

design_option! {
    ColorPalette, "color palette" {
        BlackAndWhite => "black & white",
        Pastel => "pastel",
        Neon => "neon",
        Monochrome => "monochrome",
        EarthTones => "earth tones",
        BlackWhiteRed => "black, white, red",
        WhiteAndYellow => "white and yellow",
        BlueGradient => "blue gradient",
    }
}

design_option! {
    Typography, "typography" {
        Handwritten => "handwritten",
        Graffiti => "graffiti",
        BoldSansSerif => "bold sans-serif",
        RetroFont => "retro font",
        RoundedPlayful => "rounded playful",
        ModernMinimal => "modern minimal",
        Gothic => "gothic",
    }
}

design_option! {
    /// Shirt color, shared by the prompt and the mockup fill.
    GarmentColor, "T-shirt color" {
        Black => "black",
        White => "white",
        Navy => "navy",
        Charcoal => "charcoal",
        Maroon => "maroon",
    }
}

impl GarmentColor {
    pub fn hex(&self) -> &'static str {
        match self {
            GarmentColor::Black => "#1a1a1a",
            GarmentColor::White => "#ffffff",
            GarmentColor::Navy => "#1e3a5f",
            GarmentColor::Charcoal => "#36454f",
            GarmentColor::Maroon => "#800000",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GarmentColor::Black => "Black",
            GarmentColor::White => "White",
            GarmentColor::Navy => "Navy",
            GarmentColor::Charcoal => "Charcoal",
            GarmentColor::Maroon => "Maroon",
        }
    }

    /// White is the only light shirt; shading and overlays flip on it.
    pub fn is_light(&self) -> bool {
        matches!(self, GarmentColor::White)
    }

    /// Lookup that never fails: unknown tokens land on the first palette entry.
    pub fn resolve(token: &str) -> Self {
        token.parse().unwrap_or(GarmentColor::ALL[0])
    }
}

/// Geometric multipliers applied to the garment silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeScale {
    pub width: f32,
    pub height: f32,
    pub shoulder: f32,
}

design_option! {
    BodySize, "body size" {
        S => "S",
        M => "M",
        L => "L",
        XL => "XL",
        XXL => "XXL",
    }
}

impl BodySize {
    pub const DEFAULT: BodySize = BodySize::L;

    pub fn scale(&self) -> SizeScale {
        let (width, height, shoulder) = match self {
            BodySize::S => (0.88, 0.94, 0.90),
            BodySize::M => (0.94, 0.97, 0.95),
            BodySize::L => (1.0, 1.0, 1.0),
            BodySize::XL => (1.07, 1.04, 1.06),
            BodySize::XXL => (1.14, 1.08, 1.12),
        };
        SizeScale {
            width,
            height,
            shoulder,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodySize::S => "Small",
            BodySize::M => "Medium",
            BodySize::L => "Large",
            BodySize::XL => "Extra Large",
            BodySize::XXL => "2X Large",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BodySize::S => "Slim fit",
            BodySize::M => "Standard fit",
            BodySize::L => "Regular fit",
            BodySize::XL => "Relaxed fit",
            BodySize::XXL => "Oversized fit",
        }
    }

    /// Unknown tokens fall back to L.
    pub fn resolve(token: &str) -> Self {
        token.parse().unwrap_or(BodySize::DEFAULT)
    }
}

impl Default for BodySize {
    fn default() -> Self {
        BodySize::DEFAULT
    }
}
