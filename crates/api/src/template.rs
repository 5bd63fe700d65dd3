//! `{!key}` page template rendering.
//!
//! Templates are plain HTML files with `{!name}` placeholders. Rendering
//! substitutes known keys and blanks whatever is left, so a template never
//! leaks raw placeholder syntax to the browser. Every substituted value is
//! HTML-escaped; templates carry the markup, values are always data.

use std::path::Path;

/// Escape a value for interpolation into HTML text or attribute content.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a template string, substituting `{!key}` placeholders.
///
/// Unknown placeholders are replaced with the empty string. A `{!` without
/// a closing `}` is not a placeholder and passes through literally.
pub fn render_str(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{!") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                if let Some((_, value)) = params.iter().find(|(k, _)| *k == key) {
                    out.push_str(&escape_html(value));
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated placeholder; emit the tail as-is.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Load a template file and render it.
pub async fn render_file(
    path: &Path,
    params: &[(&str, &str)],
) -> Result<String, std::io::Error> {
    let template = tokio::fs::read_to_string(path).await?;
    Ok(render_str(&template, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_placeholders() {
        let html = render_str("<h1>{!title}</h1>", &[("title", "Owly")]);
        assert_eq!(html, "<h1>Owly</h1>");
    }

    #[test]
    fn blanks_unknown_placeholders() {
        let html = render_str("<p>{!missing}</p><p>{!other}</p>", &[]);
        assert_eq!(html, "<p></p><p></p>");
    }

    #[test]
    fn escapes_substituted_values() {
        let html = render_str(
            "<p>{!name}</p>",
            &[("name", "<script>alert('x')</script>")],
        );
        assert_eq!(
            html,
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn repeated_placeholders_are_all_replaced() {
        let html = render_str("{!a} en {!a}", &[("a", "uil")]);
        assert_eq!(html, "uil en uil");
    }

    #[test]
    fn unterminated_placeholder_passes_through() {
        let html = render_str("begin {!broken", &[("broken", "x")]);
        assert_eq!(html, "begin {!broken");
    }

    #[test]
    fn template_markup_is_untouched() {
        let html = render_str("<b>&amp;</b>{!v}", &[("v", "ok")]);
        assert_eq!(html, "<b>&amp;</b>ok");
    }
}
