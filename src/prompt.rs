//! Turns [`DesignParameters`] into the instruction sent to the image model.
//!
//! All variants share one layout (intro, design specifications, technical
//! requirements, closing line) and differ only in how they frame the style.
//! Rendering is pure: the same parameters and variant always give the same text.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::DesignError;
use crate::models::DesignParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromptTemplate {
    /// Raised, embossed artwork with depth and lighting.
    #[default]
    Embossed3d,
    /// Design shown as if photographed printed on fabric.
    Photorealistic,
    /// Standalone artwork on an empty background.
    IsolatedArtwork,
    /// One clean product shot, explicitly guarding against repeated motifs.
    ProductShot,
}

struct Framing {
    intro: &'static str,
    art_style_suffix: &'static str,
    typography_suffix: &'static str,
    requirements: &'static [&'static str],
    /// Index among the requirements where the garment color line goes.
    /// `None` appends it.
    garment_line_at: Option<usize>,
    closing: &'static str,
}

impl PromptTemplate {
    pub const ALL: &'static [PromptTemplate] = &[
        PromptTemplate::Embossed3d,
        PromptTemplate::Photorealistic,
        PromptTemplate::IsolatedArtwork,
        PromptTemplate::ProductShot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptTemplate::Embossed3d => "embossed-3d",
            PromptTemplate::Photorealistic => "photorealistic",
            PromptTemplate::IsolatedArtwork => "isolated-artwork",
            PromptTemplate::ProductShot => "product-shot",
        }
    }

    fn framing(&self) -> Framing {
        match self {
            PromptTemplate::Embossed3d => Framing {
                intro: "Create a high-quality, professional T-shirt design with 3D visual elements and depth.",
                art_style_suffix: " with 3D effects, depth, and dimensionality",
                typography_suffix: " style with 3D embossed or raised effect",
                requirements: &[
                    "Create a centered, print-ready design",
                    "Add 3D depth, shadows, and dimensional effects to make elements pop",
                    "Use clean vector-style artwork with professional 3D rendering",
                    "Include subtle gradients and lighting to enhance the 3D effect",
                    "Make text appear raised or embossed with realistic shadows",
                    "No background - transparent/isolated design only",
                    "Visually striking and trendy design",
                    "Keep it readable from a distance",
                    "Ultra high resolution, print-ready quality",
                ],
                garment_line_at: Some(3),
                closing: "The design should have depth and dimension, looking like it could leap off the shirt. Use professional 3D rendering techniques like drop shadows, highlights, bevels, and perspective to create a premium look.",
            },
            PromptTemplate::Photorealistic => Framing {
                intro: "Create a photorealistic product photo of a T-shirt graphic, printed and ready to sell.",
                art_style_suffix: ", rendered as a real screen print",
                typography_suffix: " style with crisp, printed lettering",
                requirements: &[
                    "Show the graphic as it would look printed on cotton fabric",
                    "Natural studio lighting with soft shadows",
                    "Realistic ink texture and fabric grain",
                    "Keep the artwork centered on the chest area",
                    "Keep it readable from a distance",
                    "Ultra high resolution, print-ready quality",
                ],
                garment_line_at: None,
                closing: "The result should be indistinguishable from a professional photo of a finished, high-end printed T-shirt graphic.",
            },
            PromptTemplate::IsolatedArtwork => Framing {
                intro: "Create a standalone piece of artwork for printing on a T-shirt.",
                art_style_suffix: "",
                typography_suffix: " style",
                requirements: &[
                    "Artwork only - do not draw a T-shirt, mannequin, or model",
                    "Plain, empty background so the artwork is fully isolated",
                    "Create a centered, print-ready composition",
                    "Clean edges suitable for cutting out",
                    "Keep it readable from a distance",
                    "Ultra high resolution, print-ready quality",
                ],
                garment_line_at: None,
                closing: "Deliver only the isolated artwork, ready to be placed onto a garment.",
            },
            PromptTemplate::ProductShot => Framing {
                intro: "Create ONE single, clean T-shirt design as a single product shot.",
                art_style_suffix: "",
                typography_suffix: " style",
                requirements: &[
                    "Exactly one design, shown exactly once",
                    "Do not repeat, tile, mirror, or duplicate any element",
                    "No collage, grid, sticker sheet, or variations",
                    "No background - transparent/isolated design only",
                    "Create a centered, print-ready design",
                    "Keep it readable from a distance",
                    "Ultra high resolution, print-ready quality",
                ],
                garment_line_at: None,
                closing: "Return a single image containing one design only. Never duplicate the design or its text.",
            },
        }
    }

    /// Render the full instruction for `params`.
    pub fn render(&self, params: &DesignParameters) -> String {
        let framing = self.framing();
        let mut prompt = String::with_capacity(1024);

        // Writing into a String cannot fail.
        let _ = writeln!(prompt, "{}", framing.intro);
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "DESIGN SPECIFICATIONS:");
        let _ = writeln!(prompt, "- Theme: {}", params.theme);
        let _ = writeln!(prompt, "- Main text/concept: \"{}\"", params.main_idea);
        let _ = writeln!(prompt, "- Target audience: {}", params.target_audience);
        let _ = writeln!(prompt, "- Mood & style: {}", params.mood);
        let _ = writeln!(
            prompt,
            "- Art style: {}{}",
            params.art_style, framing.art_style_suffix
        );
        let _ = writeln!(prompt, "- Color palette: {}", params.color_palette);
        let _ = writeln!(
            prompt,
            "- Typography: {}{}",
            params.typography, framing.typography_suffix
        );
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "TECHNICAL REQUIREMENTS:");
        let garment_line = format!(
            "Design should look striking on a {} T-shirt",
            params.garment_color
        );
        let split = framing
            .garment_line_at
            .unwrap_or(framing.requirements.len())
            .min(framing.requirements.len());
        let (before, after) = framing.requirements.split_at(split);
        for requirement in before
            .iter()
            .copied()
            .chain(std::iter::once(garment_line.as_str()))
            .chain(after.iter().copied())
        {
            let _ = writeln!(prompt, "- {}", requirement);
        }
        let _ = writeln!(prompt);
        prompt.push_str(framing.closing);

        prompt
    }
}

impl FromStr for PromptTemplate {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        PromptTemplate::ALL
            .iter()
            .copied()
            .find(|template| template.as_str() == wanted)
            .ok_or_else(|| DesignError::Configuration(format!("Unknown prompt template: '{}'", s)))
    }
}
