use serde::Serialize;

use crate::models::design::DesignParameters;
use crate::models::options::{
    ArtStyle, Audience, ColorPalette, GarmentColor, Mood, Theme, Typography,
};

/// A ready-made set of parameters the user can start from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub data: DesignParameters,
}

impl Preset {
    pub fn all() -> Vec<Preset> {
        vec![
            Preset {
                id: "motivation",
                title: "Motivational",
                icon: "🔥",
                data: DesignParameters {
                    theme: Theme::Motivation,
                    main_idea: "Discipline Beats Talent".to_string(),
                    target_audience: Audience::GymLovers,
                    mood: Mood::Bold,
                    art_style: ArtStyle::VectorArt,
                    color_palette: ColorPalette::BlackWhiteRed,
                    typography: Typography::BoldSansSerif,
                    garment_color: GarmentColor::Black,
                },
            },
            Preset {
                id: "funny",
                title: "Funny",
                icon: "😄",
                data: DesignParameters {
                    theme: Theme::Sarcasm,
                    main_idea: "I Put the Pro in Procrastinate".to_string(),
                    target_audience: Audience::CollegeStudents,
                    mood: Mood::Playful,
                    art_style: ArtStyle::Cartoon,
                    color_palette: ColorPalette::WhiteAndYellow,
                    typography: Typography::RoundedPlayful,
                    garment_color: GarmentColor::Black,
                },
            },
            Preset {
                id: "streetwear",
                title: "Streetwear",
                icon: "👕",
                data: DesignParameters {
                    theme: Theme::Streetwear,
                    main_idea: "Urban Confidence".to_string(),
                    target_audience: Audience::GeneralYouth,
                    mood: Mood::Edgy,
                    art_style: ArtStyle::LineArt,
                    color_palette: ColorPalette::BlackAndWhite,
                    typography: Typography::Graffiti,
                    garment_color: GarmentColor::Black,
                },
            },
            Preset {
                id: "minimal",
                title: "Text Only",
                icon: "💡",
                data: DesignParameters {
                    theme: Theme::Minimalist,
                    main_idea: "Stay Weird".to_string(),
                    target_audience: Audience::GeneralYouth,
                    mood: Mood::Minimalist,
                    art_style: ArtStyle::FlatIllustration,
                    color_palette: ColorPalette::BlackAndWhite,
                    typography: Typography::ModernMinimal,
                    garment_color: GarmentColor::Black,
                },
            },
        ]
    }

    pub fn find(id: &str) -> Option<Preset> {
        Self::all().into_iter().find(|preset| preset.id == id)
    }
}
