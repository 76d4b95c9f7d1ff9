//! SVG serialization of a [`Mockup`].
//!
//! Layers, back to front: ground shadow, garment group (scaled by size),
//! print area (never scaled), labels.

use quick_xml::escape::escape;
use std::fmt::Write as _;

use super::{Mockup, PrintContent, Rect, PLACEHOLDER_CAPTION, VIEW_HEIGHT, VIEW_WIDTH};

const LABEL_BAND: f32 = 60.0;

const BODY_PATH: &str = "M80 90 L70 100 L70 450 C70 465 85 480 100 480 L300 480 \
    C315 480 330 465 330 450 L330 100 L320 90 C320 90 290 70 280 60 \
    C260 42 240 35 200 35 C160 35 140 42 120 60 C110 70 80 90 80 90 Z";
const LEFT_SLEEVE_PATH: &str = "M80 90 L20 150 L35 165 L70 130 L70 100 C70 95 75 92 80 90 Z";
const RIGHT_SLEEVE_PATH: &str =
    "M320 90 L380 150 L365 165 L330 130 L330 100 C330 95 325 92 320 90 Z";
const COLLAR_PATH: &str = "M120 60 C140 42 160 35 200 35 C240 35 260 42 280 60 \
    C280 60 260 80 200 80 C140 80 120 60 120 60 Z";
const CONTOUR_PATHS: [&str; 2] = ["M100 200 Q95 300 100 400", "M300 200 Q305 300 300 400"];
const HEM_PATH: &str = "M100 475 C150 482 250 482 300 475";

pub fn write(mockup: &Mockup) -> String {
    let mut out = String::with_capacity(4096);
    // fmt::Write into a String is infallible.
    let _ = write_into(&mut out, mockup);
    out
}

fn write_into(out: &mut String, mockup: &Mockup) -> std::fmt::Result {
    let total_height = VIEW_HEIGHT + LABEL_BAND;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {VIEW_WIDTH} {total_height}" width="{VIEW_WIDTH}" height="{total_height}">"#
    )?;
    write_defs(out, mockup)?;
    write_ground_shadow(out, mockup)?;
    write_garment(out, mockup)?;
    write_print_area(out, mockup)?;
    write_labels(out, mockup)?;
    out.push_str("</svg>\n");
    Ok(())
}

fn write_defs(out: &mut String, mockup: &Mockup) -> std::fmt::Result {
    let shading = &mockup.shading;
    out.push_str("<defs>\n");
    writeln!(
        out,
        r#"<linearGradient id="bodyShadow" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="rgba(0,0,0,{})"/></linearGradient>"#,
        shading.highlight, shading.body_shadow
    )?;
    writeln!(
        out,
        r#"<linearGradient id="leftSleeveShadow" x1="100%" y1="0%" x2="0%" y2="0%"><stop offset="0%" stop-color="rgba(0,0,0,0)"/><stop offset="100%" stop-color="rgba(0,0,0,{})"/></linearGradient>"#,
        shading.sleeve_shadow
    )?;
    writeln!(
        out,
        r#"<linearGradient id="rightSleeveShadow" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="rgba(0,0,0,0)"/><stop offset="100%" stop-color="rgba(0,0,0,{})"/></linearGradient>"#,
        shading.sleeve_shadow
    )?;
    if let PrintContent::Image {
        shadow: Some(shadow),
        ..
    } = &mockup.content
    {
        writeln!(
            out,
            r##"<filter id="designShadow" x="-10%" y="-10%" width="120%" height="120%"><feDropShadow dx="0" dy="{}" stdDeviation="{}" flood-color="#000" flood-opacity="{}"/></filter>"##,
            shadow.dy, shadow.blur, shadow.opacity
        )?;
    }
    out.push_str("</defs>\n");
    Ok(())
}

fn write_ground_shadow(out: &mut String, mockup: &Mockup) -> std::fmt::Result {
    let color = if mockup.color.is_light() { "#000" } else { mockup.fill };
    writeln!(
        out,
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="12" fill="{color}" opacity="0.2"/>"#,
        VIEW_WIDTH / 2.0,
        VIEW_HEIGHT - 8.0,
        VIEW_WIDTH * 0.375
    )
}

fn write_garment(out: &mut String, mockup: &Mockup) -> std::fmt::Result {
    let (cx, cy) = (VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0);
    let scale = mockup.scale;
    let fill = mockup.fill;
    let shading = &mockup.shading;

    writeln!(
        out,
        r#"<g id="garment" transform="translate({cx} {cy}) scale({} {}) translate(-{cx} -{cy})">"#,
        scale.width, scale.height
    )?;
    writeln!(out, r#"<path d="{BODY_PATH}" fill="{fill}"/>"#)?;
    writeln!(out, r#"<path d="{BODY_PATH}" fill="url(#bodyShadow)"/>"#)?;

    // Shoulders get their own horizontal stretch on top of the body width.
    let shoulder = scale.shoulder / scale.width;
    writeln!(
        out,
        r#"<g id="sleeves" transform="translate({cx} 0) scale({shoulder} 1) translate(-{cx} 0)">"#
    )?;
    for (path, gradient) in [
        (LEFT_SLEEVE_PATH, "leftSleeveShadow"),
        (RIGHT_SLEEVE_PATH, "rightSleeveShadow"),
    ] {
        writeln!(out, r#"<path d="{path}" fill="{fill}"/>"#)?;
        writeln!(out, r#"<path d="{path}" fill="url(#{gradient})"/>"#)?;
    }
    out.push_str("</g>\n");

    writeln!(
        out,
        r#"<path d="{COLLAR_PATH}" fill="none" stroke="{}" stroke-width="2"/>"#,
        shading.collar_stroke
    )?;
    writeln!(
        out,
        r#"<ellipse cx="200" cy="58" rx="55" ry="18" fill="{}"/>"#,
        shading.inner_collar
    )?;
    for path in CONTOUR_PATHS {
        writeln!(
            out,
            r#"<path d="{path}" fill="none" stroke="rgba(0,0,0,0.03)" stroke-width="3"/>"#
        )?;
    }
    writeln!(
        out,
        r#"<path d="{HEM_PATH}" fill="none" stroke="rgba(0,0,0,0.1)" stroke-width="2"/>"#
    )?;
    out.push_str("</g>\n");
    Ok(())
}

fn write_print_area(out: &mut String, mockup: &Mockup) -> std::fmt::Result {
    let area = mockup.print_area;
    writeln!(
        out,
        r#"<g id="print-area" data-state="{}">"#,
        state_name(&mockup.content)
    )?;
    match &mockup.content {
        PrintContent::Spinner => write_spinner(out, &area)?,
        PrintContent::Image { href, shadow } => {
            let filter = if shadow.is_some() {
                r#" filter="url(#designShadow)""#
            } else {
                ""
            };
            writeln!(
                out,
                r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet"{filter}/>"#,
                escape(href.as_str()),
                area.x,
                area.y,
                area.width,
                area.height
            )?;
        }
        PrintContent::Placeholder {
            border,
            text,
            background,
        } => {
            let inset = 12.0;
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="12" fill="{background}" stroke="{border}" stroke-width="2" stroke-dasharray="8 6"/>"#,
                area.x + inset,
                area.y + inset,
                area.width - inset * 2.0,
                area.height - inset * 2.0
            )?;
            writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="middle" font-size="30">👕</text>"#,
                area.center_x(),
                area.center_y() - 6.0
            )?;
            writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="middle" font-size="12" font-weight="500" fill="{text}">{}</text>"#,
                area.center_x(),
                area.center_y() + 22.0,
                escape(PLACEHOLDER_CAPTION)
            )?;
        }
    }
    out.push_str("</g>\n");
    Ok(())
}

/// Two counter-rotating arcs.
fn write_spinner(out: &mut String, area: &Rect) -> std::fmt::Result {
    let (cx, cy) = (area.center_x(), area.center_y());
    let r = 36.0;
    writeln!(
        out,
        r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="rgba(139,92,246,0.3)" stroke-width="6"/>"#
    )?;
    for (color, from, to, duration) in [
        ("#8b5cf6", 0, 360, "1s"),
        ("#f472b6", 360, 0, "1.5s"),
    ] {
        writeln!(
            out,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{color}" stroke-width="6" stroke-linecap="round" stroke-dasharray="56 170"><animateTransform attributeName="transform" type="rotate" from="{from} {cx} {cy}" to="{to} {cx} {cy}" dur="{duration}" repeatCount="indefinite"/></circle>"#
        )?;
    }
    Ok(())
}

fn write_labels(out: &mut String, mockup: &Mockup) -> std::fmt::Result {
    let y = VIEW_HEIGHT + 24.0;
    let cx = VIEW_WIDTH / 2.0;
    writeln!(
        out,
        r##"<circle cx="{}" cy="{}" r="6" fill="{}" stroke="#d4d4d8"/>"##,
        cx - 62.0,
        y - 4.0,
        mockup.fill
    )?;
    writeln!(
        out,
        r##"<text x="{}" y="{y}" font-size="13" fill="#71717a">{}</text>"##,
        cx - 50.0,
        escape(mockup.color_label.as_str())
    )?;
    writeln!(
        out,
        r##"<text x="{cx}" y="{}" text-anchor="middle" font-size="12" fill="#a1a1aa">{}</text>"##,
        y + 22.0,
        escape(mockup.size_label.as_str())
    )
}

fn state_name(content: &PrintContent) -> &'static str {
    match content {
        PrintContent::Spinner => "generating",
        PrintContent::Image { .. } => "image",
        PrintContent::Placeholder { .. } => "placeholder",
    }
}
