//! Palette export as a plain list or a standalone styled HTML document.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::scheme::Scheme;
use crate::swatch::Swatch;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("no palette generated yet")]
    EmptyPalette,
}

/// `palette-<scheme>-<unix millis>.<ext>`
pub fn export_file_name(scheme: Scheme, format: ExportFormat, timestamp: DateTime<Utc>) -> String {
    format!(
        "palette-{}-{}.{}",
        scheme,
        timestamp.timestamp_millis(),
        format.extension()
    )
}

pub fn render(
    format: ExportFormat,
    scheme: Scheme,
    swatches: &[Swatch],
    date: NaiveDate,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Text => text_export(swatches),
        ExportFormat::Html => html_export(scheme, swatches, date),
    }
}

/// One `Label: HEX` line per swatch.
pub fn text_export(swatches: &[Swatch]) -> Result<String, ExportError> {
    if swatches.is_empty() {
        return Err(ExportError::EmptyPalette);
    }

    let mut out = String::new();
    for swatch in swatches {
        out.push_str(&swatch.label);
        out.push_str(": ");
        out.push_str(&swatch.hex);
        out.push('\n');
    }
    Ok(out)
}

pub fn html_export(
    scheme: Scheme,
    swatches: &[Swatch],
    date: NaiveDate,
) -> Result<String, ExportError> {
    if swatches.is_empty() {
        return Err(ExportError::EmptyPalette);
    }

    let title = scheme.title();
    let generated = date.format("%B %-d, %Y").to_string();

    let mut cards = String::new();
    for swatch in swatches {
        cards.push_str(&format!(
            r#"
          <div class="color-item">
            <div class="color-swatch" style="background:{hex}"></div>
            <div class="color-info">
              <div class="color-name">{label}</div>
              <div class="color-value">{hex}</div>
              <div class="color-rgb">{rgb}</div>
              <div class="color-contrast">{contrast}</div>
            </div>
          </div>"#,
            hex = swatch.hex,
            label = escape_html(&swatch.label),
            rgb = swatch.rgb_label(),
            contrast = swatch.contrast,
        ));
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Color Palette - {title}</title>
  <style>{STYLE}</style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>Color Palette</h1>
      <p>{title} Color Scheme</p>
      <div class="metadata">
        <div class="metadata-item"><div class="metadata-label">Scheme</div><div class="metadata-value">{title}</div></div>
        <div class="metadata-item"><div class="metadata-label">Colors</div><div class="metadata-value">{count}</div></div>
        <div class="metadata-item"><div class="metadata-label">Generated</div><div class="metadata-value">{generated}</div></div>
      </div>
    </div>
    <div class="content">
      <div class="intro">
        <p><strong>Color Palette Documentation</strong> - This palette was generated using the {title} color harmony method. Contrast ratios are measured against the base color.</p>
      </div>
      <div class="palette-grid">{cards}
      </div>
      <div class="usage-section">
        <h2>Usage Guidelines</h2>
        <div class="usage-tips">
          <div class="tip"><h3>Web Design</h3><p>Use these colors for websites, apps, and digital interfaces.</p></div>
          <div class="tip"><h3>Print Materials</h3><p>These colors are optimized for screen display. For print, consult a color conversion chart.</p></div>
          <div class="tip"><h3>Accessibility</h3><p>Pair colors rated AA or AAA for text. Colors marked Fail need a different background.</p></div>
          <div class="tip"><h3>Brand Consistency</h3><p>Keep these hex values in your brand guidelines and use them consistently.</p></div>
        </div>
      </div>
    </div>
    <div class="footer"><p>Generated by Vancy Painter Design Hub | {generated}</p></div>
  </div>
</body>
</html>
"#,
        count = swatches.len(),
    ))
}

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; background: #f9fafb; padding: 40px 20px; color: #111827; }
    .container { max-width: 1000px; margin: 0 auto; background: white; border-radius: 12px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1); overflow: hidden; }
    .header { background: linear-gradient(135deg, #10b981 0%, #059669 100%); color: white; padding: 40px; text-align: center; }
    .header h1 { font-size: 2.5rem; margin-bottom: 10px; font-weight: 800; }
    .metadata { display: flex; justify-content: space-around; background: rgba(255, 255, 255, 0.1); padding: 20px; border-radius: 8px; margin-top: 20px; }
    .metadata-label { font-size: 0.85rem; opacity: 0.8; text-transform: uppercase; letter-spacing: 0.5px; }
    .metadata-value { font-size: 1.1rem; font-weight: 600; }
    .content { padding: 40px; }
    .intro { margin-bottom: 40px; padding: 20px; background: #f0fdf4; border-left: 4px solid #10b981; border-radius: 8px; }
    .palette-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 20px; margin-bottom: 40px; }
    .color-item { border: 1px solid #e5e7eb; border-radius: 8px; overflow: hidden; }
    .color-swatch { width: 100%; height: 150px; }
    .color-info { padding: 15px; }
    .color-name { font-size: 0.85rem; color: #6b7280; text-transform: uppercase; font-weight: 600; }
    .color-value { font-size: 1.2rem; font-weight: 700; color: #10b981; font-family: 'Courier New', monospace; }
    .color-rgb, .color-contrast { font-size: 0.8rem; color: #9ca3af; font-family: 'Courier New', monospace; }
    .usage-section { background: #f3f4f6; padding: 30px; border-radius: 8px; }
    .usage-tips { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 20px; }
    .tip { background: white; padding: 15px; border-radius: 6px; border-left: 3px solid #10b981; }
    .footer { background: #f9fafb; padding: 20px 40px; border-top: 1px solid #e5e7eb; text-align: center; color: #6b7280; font-size: 0.85rem; }
    @media print { body { background: white; padding: 0; } .container { box-shadow: none; } }
  "#;

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::generate_palette;
    use crate::swatch::annotate;
    use chrono::TimeZone;

    fn triadic_swatches() -> Vec<Swatch> {
        let palette = generate_palette("#3498DB", Scheme::Triadic).expect("valid base");
        annotate(&palette, "#3498DB").expect("annotate palette")
    }

    #[test]
    fn text_export_lists_label_and_hex() {
        let text = text_export(&triadic_swatches()).expect("export text");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Base: #3498DB");
        assert!(lines[1].starts_with("Triadic 1: #"));
        assert!(lines[2].starts_with("Triadic 2: #"));
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(text_export(&[]), Err(ExportError::EmptyPalette));
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            html_export(Scheme::Triadic, &[], date),
            Err(ExportError::EmptyPalette)
        );
        assert_eq!(
            ExportError::EmptyPalette.to_string(),
            "no palette generated yet"
        );
    }

    #[test]
    fn html_export_includes_metadata_and_cards() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
        let swatches = triadic_swatches();
        let html = html_export(Scheme::Triadic, &swatches, date).expect("export html");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Color Palette - Triadic</title>"));
        assert!(html.contains("October 9, 2026"));
        assert!(html.contains(r#"<div class="metadata-value">3</div>"#));
        assert_eq!(html.matches(r#"class="color-item""#).count(), 3);
        for swatch in &swatches {
            assert!(html.contains(&swatch.hex));
            assert!(html.contains(&swatch.rgb_label()));
        }
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_html(r#"<Base & "Co">"#), "&lt;Base &amp; &quot;Co&quot;&gt;");
    }

    #[test]
    fn file_name_carries_scheme_timestamp_and_extension() {
        let timestamp = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let name = export_file_name(Scheme::Analogous, ExportFormat::Html, timestamp);
        assert_eq!(
            name,
            format!("palette-analogous-{}.html", timestamp.timestamp_millis())
        );
        assert!(export_file_name(Scheme::Tetradic, ExportFormat::Text, timestamp).ends_with(".txt"));
    }
}
