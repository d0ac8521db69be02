// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG serialisation of a `sciglyph_core::Surface`.

use kurbo::{Affine, Point};
use peniko::Brush;
use sciglyph_core::{Node, Paint, StrokeStyle, Surface, TextAnchor};

/// Size used when a surface was never given one.
const FALLBACK_SIZE: f64 = 100.0;

pub(crate) fn surface_to_svg(surface: &Surface) -> String {
    let (width, height) = surface
        .size()
        .map_or((FALLBACK_SIZE, FALLBACK_SIZE), |s| (s.width, s.height));
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    ));
    out.push('\n');
    for node in surface.children() {
        write_node(&mut out, node, 1);
    }
    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    indent(out, depth);
    match node {
        Node::Group(g) => {
            out.push_str("<g");
            write_transform(out, g.transform);
            out.push_str(">\n");
            for child in &g.children {
                write_node(out, child, depth + 1);
            }
            indent(out, depth);
            out.push_str("</g>\n");
        }
        Node::Path(p) => {
            let d = p.path.to_svg();
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint(out, &p.paint);
            out.push_str("/>\n");
        }
        Node::Circle(c) => {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}""#,
                c.center.x, c.center.y, c.radius
            ));
            write_paint(out, &c.paint);
            out.push_str("/>\n");
        }
        Node::Polygon(p) => {
            out.push_str(&format!(r#"<polygon points="{}""#, points_attr(&p.points)));
            write_transform(out, p.transform);
            write_paint(out, &p.paint);
            out.push_str("/>\n");
        }
        Node::Line(l) => {
            out.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                l.from.x, l.from.y, l.to.x, l.to.y
            ));
            write_stroke(out, &l.stroke);
            out.push_str("/>\n");
        }
        Node::Text(t) => {
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" font-weight="{}""#,
                t.pos.x, t.pos.y, t.font_size, t.font_weight
            ));
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_transform(out, t.transform);
            if let Some(fill) = &t.fill {
                write_brush_attr(out, "fill", fill, None);
            }
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_transform(out: &mut String, transform: Affine) {
    if transform == Affine::IDENTITY {
        return;
    }
    let [a, b, c, d, e, f] = transform.as_coeffs();
    out.push_str(&format!(r#" transform="matrix({a} {b} {c} {d} {e} {f})""#));
}

fn write_paint(out: &mut String, paint: &Paint) {
    // An unset fill is left to the SVG default.
    if let Some(fill) = &paint.fill {
        write_brush_attr(out, "fill", fill, paint.fill_opacity);
    } else if let Some(o) = paint.fill_opacity {
        out.push_str(&format!(r#" fill-opacity="{o}""#));
    }
    if let Some(stroke) = &paint.stroke {
        write_stroke(out, stroke);
    }
}

fn write_stroke(out: &mut String, stroke: &StrokeStyle) {
    write_brush_attr(out, "stroke", &stroke.brush, None);
    out.push_str(&format!(r#" stroke-width="{}""#, stroke.width()));
    let dashes = stroke.dashes();
    if !dashes.is_empty() {
        let pattern = dashes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(r#" stroke-dasharray="{pattern}""#));
        if stroke.stroke.dash_offset != 0.0 {
            out.push_str(&format!(
                r#" stroke-dashoffset="{}""#,
                stroke.stroke.dash_offset
            ));
        }
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (value, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_brush_attr(out: &mut String, name: &str, brush: &Brush, extra_opacity: Option<f64>) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    let opacity = match (opacity, extra_opacity) {
        (Some(a), Some(b)) => Some(a * b),
        (a, b) => a.or(b),
    };
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
