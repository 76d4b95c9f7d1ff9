use serde::{Deserialize, Serialize};

use crate::error::{DesignError, Result};
use crate::models::options::{
    ArtStyle, Audience, ColorPalette, GarmentColor, Mood, Theme, Typography,
};

/// Everything the user picked for one design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignParameters {
    pub theme: Theme,
    pub main_idea: String,
    pub target_audience: Audience,
    pub mood: Mood,
    pub art_style: ArtStyle,
    pub color_palette: ColorPalette,
    pub typography: Typography,
    #[serde(rename = "tshirtColor")]
    pub garment_color: GarmentColor,
}

impl Default for DesignParameters {
    fn default() -> Self {
        DesignParameters {
            theme: Theme::Motivation,
            main_idea: String::new(),
            target_audience: Audience::GeneralYouth,
            mood: Mood::Bold,
            art_style: ArtStyle::VectorArt,
            color_palette: ColorPalette::BlackAndWhite,
            typography: Typography::BoldSansSerif,
            garment_color: GarmentColor::Black,
        }
    }
}

impl DesignParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_main_idea(mut self, idea: impl Into<String>) -> Self {
        self.main_idea = idea.into();
        self
    }

    pub fn with_garment_color(mut self, color: GarmentColor) -> Self {
        self.garment_color = color;
        self
    }

    /// The only hard rule before a request goes out: there must be a quote.
    pub fn validate(&self) -> Result<()> {
        if self.main_idea.trim().is_empty() {
            return Err(DesignError::missing_quote());
        }
        Ok(())
    }

    pub fn apply(&mut self, field: DesignField) {
        match field {
            DesignField::Theme(v) => self.theme = v,
            DesignField::MainIdea(v) => self.main_idea = v,
            DesignField::TargetAudience(v) => self.target_audience = v,
            DesignField::Mood(v) => self.mood = v,
            DesignField::ArtStyle(v) => self.art_style = v,
            DesignField::ColorPalette(v) => self.color_palette = v,
            DesignField::Typography(v) => self.typography = v,
            DesignField::GarmentColor(v) => self.garment_color = v,
        }
    }
}

/// A single form edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignField {
    Theme(Theme),
    MainIdea(String),
    TargetAudience(Audience),
    Mood(Mood),
    ArtStyle(ArtStyle),
    ColorPalette(ColorPalette),
    Typography(Typography),
    GarmentColor(GarmentColor),
}

/// Wire shape of the proxy payload. Every field is a plain string so a
/// malformed option is reported by name instead of as a serde error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignRequest {
    pub theme: String,
    pub main_idea: String,
    pub target_audience: String,
    pub mood: String,
    pub art_style: String,
    pub color_palette: String,
    pub typography: String,
    pub tshirt_color: String,
}

impl From<&DesignParameters> for DesignRequest {
    fn from(params: &DesignParameters) -> Self {
        DesignRequest {
            theme: params.theme.to_string(),
            main_idea: params.main_idea.clone(),
            target_audience: params.target_audience.to_string(),
            mood: params.mood.to_string(),
            art_style: params.art_style.to_string(),
            color_palette: params.color_palette.to_string(),
            typography: params.typography.to_string(),
            tshirt_color: params.garment_color.to_string(),
        }
    }
}

impl TryFrom<DesignRequest> for DesignParameters {
    type Error = DesignError;

    fn try_from(request: DesignRequest) -> Result<Self> {
        let params = DesignParameters {
            theme: request.theme.parse()?,
            main_idea: request.main_idea,
            target_audience: request.target_audience.parse()?,
            mood: request.mood.parse()?,
            art_style: request.art_style.parse()?,
            color_palette: request.color_palette.parse()?,
            typography: request.typography.parse()?,
            garment_color: request.tshirt_color.parse()?,
        };
        params.validate()?;
        Ok(params)
    }
}
