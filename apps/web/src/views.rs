//! # HTML Views
//!
//! Server-side rendering for the band form and its results.
//!
//! Every piece of text that can carry user input goes through [`escape_html`].

use ohm_core::{format_ohms, BandColor, ParseBandColorError, ResistorError, BAND_COUNT};

/// Form field names and labels, in band order.
pub const BAND_FIELDS: [(&str, &str); BAND_COUNT] = [
    ("band_a", "Band A (first significant figure)"),
    ("band_b", "Band B (second significant figure)"),
    ("band_c", "Band C (multiplier)"),
    ("band_d", "Band D (tolerance)"),
];

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps page content in the shared document shell.
fn layout(site_title: &str, heading: &str, body: &str) -> String {
    let site_title = escape_html(site_title);
    let heading = escape_html(heading);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{heading} - {site_title}</title>
</head>
<body>
<header>
<h1>{site_title}</h1>
<nav><a href="/">Home</a> | <a href="/about">About</a> | <a href="/contact">Contact</a></nav>
</header>
<main>
<h2>{heading}</h2>
{body}
</main>
</body>
</html>
"#
    )
}

fn band_select(name: &str, label: &str, selected: BandColor) -> String {
    let options: String = BandColor::ALL
        .iter()
        .map(|color| {
            let marker = if *color == selected { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, color.name(), marker)
        })
        .collect();

    format!(
        r#"<p><label for="{name}">{label}</label>
<select id="{name}" name="{name}">{options}</select></p>
"#
    )
}

/// Renders the band selection page.
pub fn index_page(site_title: &str, selected: [BandColor; BAND_COUNT]) -> String {
    let selects: String = BAND_FIELDS
        .iter()
        .zip(selected)
        .map(|((name, label), color)| band_select(name, label, color))
        .collect();

    let body = format!(
        r#"<form id="bands" method="post" action="/resistance">
{selects}<p><button type="submit">Calculate</button></p>
</form>
<div id="resistance"></div>
<script>
document.getElementById("bands").addEventListener("submit", async (event) => {{
  event.preventDefault();
  const response = await fetch("/resistance", {{
    method: "POST",
    body: new URLSearchParams(new FormData(event.target)),
  }});
  document.getElementById("resistance").innerHTML = await response.text();
}});
</script>
"#
    );

    layout(site_title, "Resistance", &body)
}

/// Renders the outcome of one calculation as a fragment.
///
/// Validation failures are shown as text, the same way a value is.
pub fn resistance_fragment(outcome: &Result<i64, ResistorError>) -> String {
    match outcome {
        Ok(ohms) => format!(
            r#"<p class="resistance" data-ohms="{ohms}">Resistance: {}</p>
"#,
            escape_html(&format_ohms(*ohms))
        ),
        Err(err) => format!(
            r#"<p class="error" data-code="{}">{}</p>
"#,
            err.code(),
            escape_html(&err.to_string())
        ),
    }
}

/// Renders a fragment for a band name that is not a color.
pub fn invalid_band_fragment(err: &ParseBandColorError) -> String {
    format!(
        r#"<p class="error" data-code="INVALID_BAND_COLOR">{}</p>
"#,
        escape_html(&err.to_string())
    )
}

/// Renders a page holding a single message.
pub fn message_page(site_title: &str, heading: &str, message: &str) -> String {
    layout(
        site_title,
        heading,
        &format!("<p>{}</p>\n", escape_html(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohm_core::BandLabel;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("4.7 kΩ"), "4.7 kΩ");
    }

    #[test]
    fn test_index_lists_every_color_for_every_band() {
        let html = index_page("Calc", [BandColor::None; BAND_COUNT]);
        for (name, _) in BAND_FIELDS {
            assert!(html.contains(&format!(r#"name="{name}""#)));
        }
        for color in BandColor::ALL {
            let option = format!(r#"<option value="{}""#, color.name());
            assert_eq!(html.matches(&option).count(), BAND_COUNT);
        }
    }

    #[test]
    fn test_index_marks_selection() {
        let html = index_page(
            "Calc",
            [BandColor::Yellow, BandColor::Violet, BandColor::Red, BandColor::Gold],
        );
        assert!(html.contains(r#"<option value="yellow" selected>"#));
        assert!(html.contains(r#"<option value="gold" selected>"#));
        assert_eq!(html.matches(" selected>").count(), BAND_COUNT);
    }

    #[test]
    fn test_site_title_is_escaped() {
        let html = message_page("<Calc>", "About", "hi");
        assert!(html.contains("&lt;Calc&gt;"));
        assert!(!html.contains("<Calc>"));
    }

    #[test]
    fn test_value_fragment() {
        let html = resistance_fragment(&Ok(4_700));
        assert!(html.contains(r#"data-ohms="4700""#));
        assert!(html.contains("Resistance: 4.7 kΩ"));
    }

    #[test]
    fn test_error_fragment() {
        let html = resistance_fragment(&Err(ResistorError::MissingSignificantFigureBand(
            BandLabel::A,
        )));
        assert!(html.contains("Significant figure band A not present."));
        assert!(html.contains(r#"data-code="MISSING_SIGNIFICANT_FIGURE_BAND""#));
    }

    #[test]
    fn test_invalid_band_fragment_escapes_input() {
        let html = invalid_band_fragment(&ParseBandColorError("<b>".to_string()));
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
