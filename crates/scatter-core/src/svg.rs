// File: crates/scatter-core/src/svg.rs
// Summary: SVG/HTML document writer for a resolved ChartLayout, plus the visible error-state document.
// Notes:
// - Marks carry their tooltip text as data attributes; the inline script only
//   copies them into `#tooltip` on mouseenter and hides it on mouseleave.

use std::fmt::Write;

use crate::axis::{AxisLayout, Orient};
use crate::chart::ChartLayout;
use crate::legend::Legend;
use crate::theme::{css_color, css_hex, Theme};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const TOOLTIP_SCRIPT: &str = r#"(function () {
  var ns = "http://www.w3.org/2000/svg";
  var tip = document.getElementById("tooltip");
  var text = tip.querySelector("text");
  var bg = tip.querySelector("rect");
  function show(evt) {
    var dot = evt.currentTarget;
    var lines = ["data-tip-heading", "data-tip-detail", "data-tip-doping"]
      .map(function (a) { return dot.getAttribute(a); })
      .filter(function (l) { return l; });
    while (text.firstChild) { text.removeChild(text.firstChild); }
    lines.forEach(function (l) {
      var span = document.createElementNS(ns, "tspan");
      span.setAttribute("x", "8");
      span.setAttribute("dy", "1.2em");
      span.textContent = l;
      text.appendChild(span);
    });
    tip.setAttribute("data-year", dot.getAttribute("data-xvalue"));
    var box = text.getBBox();
    bg.setAttribute("width", box.width + 16);
    bg.setAttribute("height", box.height + 10);
    var cx = Number(dot.getAttribute("cx"));
    var cy = Number(dot.getAttribute("cy"));
    tip.setAttribute("transform", "translate(" + (cx + 10) + "," + (cy - box.height / 2) + ")");
    tip.setAttribute("visibility", "visible");
  }
  function hide() {
    tip.setAttribute("visibility", "hidden");
  }
  Array.prototype.forEach.call(document.querySelectorAll("circle.dot"), function (dot) {
    dot.addEventListener("mouseenter", show);
    dot.addEventListener("mouseleave", hide);
  });
})();"#;

/// Escape text content and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Compact number formatting: at most two decimals, no trailing zeros.
pub fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn open_svg(out: &mut String, width: i32, height: i32, theme: &Theme) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {width} {height}" preserveAspectRatio="xMinYMin meet" font-family="sans-serif">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect class="background" width="{width}" height="{height}" fill="{}"/>"#,
        css_hex(theme.background)
    );
}

/// Render the chart layout as a standalone SVG document.
pub fn render_svg(layout: &ChartLayout) -> String {
    let theme = &layout.theme;
    let mut out = String::new();
    open_svg(&mut out, layout.width, layout.height, theme);

    write_axis(&mut out, &layout.x_axis, theme);
    write_axis(&mut out, &layout.y_axis, theme);

    for t in &layout.titles {
        let transform = if t.rotate != 0.0 {
            format!(r#" transform="rotate({})""#, num(t.rotate))
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            r#"  <text class="axis-title"{transform} x="{}" y="{}" font-size="{}" font-weight="bold" fill="{}">{}</text>"#,
            num(t.x),
            num(t.y),
            num(t.size),
            css_hex(theme.axis_label),
            escape(t.text)
        );
    }

    for m in &layout.marks {
        let _ = writeln!(
            out,
            concat!(
                r#"  <circle class="dot" cx="{}" cy="{}" r="{}" fill="{}" data-xvalue="{}" data-yvalue="{}""#,
                r#" data-tip-heading="{}" data-tip-detail="{}" data-tip-doping="{}"><title>{}</title></circle>"#
            ),
            num(m.cx),
            num(m.cy),
            num(m.r),
            css_hex(m.color),
            m.x_value,
            m.y_value.to_rfc3339(),
            escape(&m.tooltip.heading),
            escape(&m.tooltip.detail),
            escape(&m.tooltip.doping),
            escape(&m.tooltip.lines().join("\n"))
        );
    }

    write_legend(&mut out, &layout.legend, theme);

    let _ = writeln!(
        out,
        r#"  <g id="tooltip" visibility="hidden" pointer-events="none"><rect rx="4" width="0" height="0" fill="{}"/><text font-size="12" fill="{}"></text></g>"#,
        css_color(theme.tooltip_background),
        css_hex(theme.tooltip_text)
    );
    let _ = writeln!(out, "  <script><![CDATA[\n{TOOLTIP_SCRIPT}\n]]></script>");
    out.push_str("</svg>\n");
    out
}

fn write_axis(out: &mut String, axis: &AxisLayout, theme: &Theme) {
    let (tx, ty) = axis.translate;
    let (r0, r1) = axis.range;
    let k = axis.tick_size;
    let stroke = css_hex(theme.axis_line);
    let tick_color = css_hex(theme.tick);
    let (anchor, domain) = match axis.orient {
        Orient::Bottom => ("middle", format!("M{},{}V0H{}V{}", num(r0), num(k), num(r1), num(k))),
        Orient::Left => ("end", format!("M{},{}H0V{}H{}", num(-k), num(r0), num(r1), num(-k))),
    };
    let _ = writeln!(
        out,
        r#"  <g id="{}" transform="translate({},{})" fill="none" font-size="10" text-anchor="{anchor}">"#,
        axis.id,
        num(tx),
        num(ty)
    );
    let _ = writeln!(out, r#"    <path class="domain" stroke="{stroke}" d="{domain}"/>"#);
    for tick in &axis.ticks {
        let label = escape(&tick.label);
        match axis.orient {
            Orient::Bottom => {
                let _ = writeln!(
                    out,
                    r#"    <g class="tick" transform="translate({},0)"><line stroke="{tick_color}" y2="{}"/><text fill="{tick_color}" y="{}" dy="0.71em">{label}</text></g>"#,
                    num(tick.offset),
                    num(k),
                    num(k + 3.0)
                );
            }
            Orient::Left => {
                let _ = writeln!(
                    out,
                    r#"    <g class="tick" transform="translate(0,{})"><line stroke="{tick_color}" x2="{}"/><text fill="{tick_color}" x="{}" dy="0.32em">{label}</text></g>"#,
                    num(tick.offset),
                    num(-k),
                    num(-(k + 3.0))
                );
            }
        }
    }
    out.push_str("  </g>\n");
}

fn write_legend(out: &mut String, legend: &Legend, theme: &Theme) {
    let (tx, ty) = legend.caption_anchor();
    let _ = writeln!(
        out,
        r#"  <g id="legend" class="legendBox" transform="translate({},{})">"#,
        num(legend.origin.0),
        num(legend.origin.1)
    );
    for entry in &legend.entries {
        let color = css_hex(entry.color);
        let _ = writeln!(
            out,
            r#"    <g class="legend" data-key="{}" transform="translate(0,{})"><rect width="{}" height="{}" fill="{color}" stroke="{color}"/><text x="{}" y="{}" dy="0.25em" font-size="10" fill="{}">{}</text></g>"#,
            entry.category.key(),
            num(entry.offset_y),
            num(legend.rect_size),
            num(legend.rect_size),
            num(tx),
            num(ty),
            css_hex(theme.axis_label),
            escape(entry.caption)
        );
    }
    out.push_str("  </g>\n");
}

/// Same viewbox as the chart, carrying a visible message instead of a blank canvas.
pub fn render_error_svg(width: i32, height: i32, theme: &Theme, message: &str) -> String {
    let mut out = String::new();
    open_svg(&mut out, width, height, theme);
    let _ = writeln!(
        out,
        r#"  <text id="error" x="{}" y="{}" text-anchor="middle" font-size="18" fill="{}">{}</text>"#,
        num(width as f32 / 2.0),
        num(height as f32 / 2.0),
        css_hex(theme.error_text),
        escape(message)
    );
    out.push_str("</svg>\n");
    out
}

/// HTML page with the SVG placed inside the `#graph` container.
pub fn wrap_html(svg: &str, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Doping in Professional Bicycle Racing</title>\n");
    let _ = writeln!(out, "<style>body {{ margin: 0; background: {}; }}</style>", css_hex(theme.background));
    out.push_str("</head>\n<body>\n<div id=\"graph\">\n");
    out.push_str(svg);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
