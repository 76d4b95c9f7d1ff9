//! T-shirt mockup renderer.
//!
//! [`render`] is total: any color or size token, any image, either generating
//! state produces a [`Mockup`]. Unknown colors become the first palette entry,
//! unknown sizes become L.

pub mod svg;

use serde::Serialize;

use crate::models::{BodySize, GarmentColor, SizeScale};

pub const VIEW_WIDTH: f32 = 400.0;
pub const VIEW_HEIGHT: f32 = 500.0;

pub const PLACEHOLDER_CAPTION: &str = "Your design will appear here";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Chest region: 45% wide, 35% tall, centred, top edge at 28%.
pub fn print_area() -> Rect {
    let width = VIEW_WIDTH * 0.45;
    let height = VIEW_HEIGHT * 0.35;
    Rect {
        x: (VIEW_WIDTH - width) / 2.0,
        y: VIEW_HEIGHT * 0.28,
        width,
        height,
    }
}

/// Shading over the flat garment fill. Chosen only by garment lightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shading {
    pub body_shadow: f32,
    pub sleeve_shadow: f32,
    pub collar_stroke: &'static str,
    pub inner_collar: &'static str,
    pub highlight: &'static str,
}

impl Shading {
    pub fn for_color(color: GarmentColor) -> Self {
        if color.is_light() {
            Shading {
                body_shadow: 0.10,
                sleeve_shadow: 0.15,
                collar_stroke: "rgba(0,0,0,0.2)",
                inner_collar: "rgba(0,0,0,0.08)",
                highlight: "rgba(255,255,255,0)",
            }
        } else {
            Shading {
                body_shadow: 0.35,
                sleeve_shadow: 0.45,
                collar_stroke: "rgba(255,255,255,0.18)",
                inner_collar: "rgba(0,0,0,0.3)",
                highlight: "rgba(255,255,255,0.08)",
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DropShadow {
    pub dy: f32,
    pub blur: f32,
    pub opacity: f32,
}

/// What the print area shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PrintContent {
    Spinner,
    Image {
        href: String,
        shadow: Option<DropShadow>,
    },
    Placeholder {
        border: &'static str,
        text: &'static str,
        background: &'static str,
    },
}

impl PrintContent {
    fn choose(color: GarmentColor, image: Option<&str>, generating: bool) -> Self {
        if generating {
            return PrintContent::Spinner;
        }
        match image {
            Some(href) if !href.trim().is_empty() => PrintContent::Image {
                href: href.to_string(),
                shadow: (!color.is_light()).then_some(DropShadow {
                    dy: 2.0,
                    blur: 2.0,
                    opacity: 0.3,
                }),
            },
            _ if color.is_light() => PrintContent::Placeholder {
                border: "#d1d5db",
                text: "#9ca3af",
                background: "rgba(249,250,251,0.5)",
            },
            _ => PrintContent::Placeholder {
                border: "rgba(255,255,255,0.3)",
                text: "rgba(255,255,255,0.6)",
                background: "rgba(255,255,255,0.05)",
            },
        }
    }

    pub fn is_spinner(&self) -> bool {
        matches!(self, PrintContent::Spinner)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PrintContent::Placeholder { .. })
    }

    pub fn image_href(&self) -> Option<&str> {
        match self {
            PrintContent::Image { href, .. } => Some(href.as_str()),
            _ => None,
        }
    }
}

/// A fully resolved mockup, ready to be turned into SVG.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mockup {
    pub color: GarmentColor,
    pub fill: &'static str,
    pub size: BodySize,
    pub scale: SizeScale,
    pub shading: Shading,
    pub print_area: Rect,
    pub content: PrintContent,
    pub color_label: String,
    pub size_label: String,
}

impl Mockup {
    pub fn to_svg(&self) -> String {
        svg::write(self)
    }
}

pub fn render(color: &str, size: &str, image: Option<&str>, generating: bool) -> Mockup {
    compose(
        GarmentColor::resolve(color),
        BodySize::resolve(size),
        image,
        generating,
    )
}

/// Same as [`render`] for callers that already hold typed values.
pub fn compose(
    color: GarmentColor,
    size: BodySize,
    image: Option<&str>,
    generating: bool,
) -> Mockup {
    Mockup {
        color,
        fill: color.hex(),
        size,
        scale: size.scale(),
        shading: Shading::for_color(color),
        print_area: print_area(),
        content: PrintContent::choose(color, image, generating),
        color_label: format!("{} T-Shirt", color.label()),
        size_label: format!("Size {} · {}", size.as_str(), size.description()),
    }
}
