//! Builds the print-ready HTML document from a page layout and Markdown text.
//!
//! All rendering is delegated to browser libraries referenced by URL: marked
//! (Markdown), DOMPurify (sanitization), MathJax (math) and highlight.js
//! (code). The only work done here is templating: layout values become CSS
//! custom properties, and the Markdown text is embedded in the render script
//! through a single escape function.

use super::config::PageConfig;

pub const HIGHLIGHT_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css";
pub const HIGHLIGHT_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";
pub const DOMPURIFY_URL: &str =
    "https://cdn.jsdelivr.net/npm/dompurify@3.1.7/dist/purify.min.js";
pub const MARKED_URL: &str = "https://cdn.jsdelivr.net/npm/marked/marked.min.js";
pub const MATHJAX_URL: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js";

/// Escape Markdown text for embedding inside the render script's template
/// literal. Backslashes are rewritten first, then backticks and dollar
/// signs, so no input can terminate the literal early (escaping `$` also
/// rules out `${`). This is the only path user text takes into the
/// generated document.
pub fn escape_for_template_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' => out.push_str("\\$"),
            _ => out.push(ch),
        }
    }
    out
}

/// Assemble the complete, self-contained HTML document for the given layout
/// and Markdown text. Pure function of its inputs.
pub fn assemble(config: &PageConfig, markdown: &str) -> String {
    let (page_w, page_h) = config.orientation.page_size_mm();
    let orientation = config.orientation.as_css();
    let column_rule = if config.show_guides {
        "1px solid #ddd"
    } else {
        "none"
    };
    let raw = escape_for_template_literal(markdown);

    let mut doc = String::with_capacity(raw.len() + 6 * 1024);

    doc.push_str("<!doctype html>\n<html>\n<head>\n");
    doc.push_str("  <meta charset=\"utf-8\" />\n");
    doc.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    doc.push_str(&format!(
        "  <link rel=\"stylesheet\" href=\"{HIGHLIGHT_CSS_URL}\" />\n"
    ));
    doc.push_str(&format!("  <script src=\"{HIGHLIGHT_JS_URL}\"></script>\n"));
    doc.push_str(&format!("  <script src=\"{DOMPURIFY_URL}\"></script>\n"));
    doc.push_str(&format!("  <script src=\"{MARKED_URL}\"></script>\n"));
    // MathJax reads its configuration from window.MathJax before it loads.
    doc.push_str("  <script>\n");
    doc.push_str("    window.MathJax = { tex: { inlineMath: [['$', '$'], ['\\\\(', '\\\\)']] }, svg: { fontCache: 'global' } };\n");
    doc.push_str("  </script>\n");
    doc.push_str(&format!("  <script src=\"{MATHJAX_URL}\"></script>\n"));

    doc.push_str("  <style>\n");
    doc.push_str("    :root {\n");
    doc.push_str(&format!("      --page-w-mm: {page_w}mm;\n"));
    doc.push_str(&format!("      --page-h-mm: {page_h}mm;\n"));
    doc.push_str(&format!("      --margin-mm: {}mm;\n", config.margin_mm));
    doc.push_str(&format!("      --gap-mm: {}mm;\n", config.gap_mm));
    doc.push_str(&format!("      --font-px: {}px;\n", config.font_px));
    doc.push_str(&format!("      --cols: {};\n", config.columns));
    doc.push_str("    }\n");
    doc.push_str(&format!(
        "    @page {{ size: A4 {orientation}; margin: var(--margin-mm); }}\n"
    ));
    doc.push_str("    html, body { height: 100%; }\n");
    doc.push_str("    body { background: #f4f5f7; margin: 0; }\n");
    doc.push_str("    .toolbar { position: sticky; top: 0; background: #fff; border-bottom: 1px solid #e5e7eb; padding: 8px 12px; z-index: 10; font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial; }\n");
    doc.push_str("    .page-shell { width: var(--page-w-mm); height: var(--page-h-mm); margin: 24px auto; background: #fff; box-shadow: 0 10px 25px rgba(0,0,0,.08); overflow: hidden; }\n");
    doc.push_str(&format!("    .page-content {{ box-sizing: border-box; padding: var(--margin-mm); font-size: var(--font-px); line-height: 1.45; column-count: var(--cols); column-gap: var(--gap-mm); column-rule: {column_rule}; font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial; }}\n"));
    doc.push_str("    .page-content h1, .page-content h2, .page-content h3 { break-inside: avoid; }\n");
    doc.push_str("    .page-content pre, .page-content code, .page-content img, .page-content table { break-inside: avoid; max-width: 100%; }\n");
    doc.push_str("    .page-content pre { background: #f6f8fa; padding: 10px; border-radius: 6px; overflow: auto; }\n");
    doc.push_str("    .page-content code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; }\n");
    doc.push_str("    .print-button { position: fixed; right: 16px; bottom: 16px; padding: 8px 12px; border: 1px solid #ddd; border-radius: 6px; background: #fff; cursor: pointer; }\n");
    doc.push_str("    @media print { body { -webkit-print-color-adjust: exact; print-color-adjust: exact; background: #fff; } .toolbar, .print-button { display: none; } .page-shell { box-shadow: none; margin: 0 auto; } }\n");
    doc.push_str("  </style>\n</head>\n<body>\n");

    doc.push_str(&format!(
        "  <div class=\"toolbar\">A4 preview \u{2022} {orientation} \u{2022} {} column(s)</div>\n",
        config.columns
    ));
    doc.push_str(
        "  <div class=\"page-shell\"><div id=\"content\" class=\"page-content\"></div></div>\n",
    );
    if config.show_print_button {
        doc.push_str("  <button class=\"print-button\" onclick=\"window.print()\">Print / Save as PDF</button>\n");
    }

    doc.push_str("  <script>\n");
    doc.push_str(&format!("    const raw = `{raw}`;\n"));
    doc.push_str("    const html = DOMPurify.sanitize(marked.parse(raw));\n");
    doc.push_str("    const container = document.getElementById('content');\n");
    doc.push_str("    container.innerHTML = html;\n");
    doc.push_str("    document.querySelectorAll('pre code').forEach((el) => window.hljs.highlightElement(el));\n");
    doc.push_str("    if (window.MathJax && window.MathJax.typeset) { window.MathJax.typeset([container]); }\n");
    doc.push_str("  </script>\n</body>\n</html>\n");

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Orientation;

    fn config() -> PageConfig {
        PageConfig::default()
    }

    /// True if `s` contains a backtick not preceded by an odd run of
    /// backslashes, i.e. one that would terminate a template literal.
    fn has_unescaped_backtick(s: &str) -> bool {
        let mut backslashes = 0;
        for ch in s.chars() {
            match ch {
                '\\' => backslashes += 1,
                '`' => {
                    if backslashes % 2 == 0 {
                        return true;
                    }
                    backslashes = 0;
                }
                _ => backslashes = 0,
            }
        }
        false
    }

    /// The embedded literal region of an assembled document.
    fn embedded_region(doc: &str) -> &str {
        let start = doc.find("const raw = `").expect("literal open") + "const raw = `".len();
        // No backticks appear after the literal, so the last "`;" closes it.
        let end = doc.rfind("`;").expect("literal close");
        &doc[start..end]
    }

    #[test]
    fn test_escape_backslash() {
        assert_eq!(escape_for_template_literal(r"\"), r"\\");
    }

    #[test]
    fn test_escape_backtick() {
        assert_eq!(escape_for_template_literal("`"), "\\`");
    }

    #[test]
    fn test_escape_dollar() {
        assert_eq!(escape_for_template_literal("$E=mc^2$"), "\\$E=mc^2\\$");
    }

    #[test]
    fn test_escape_backslash_before_backtick() {
        // A backslash directly before a backtick must not swallow the
        // backtick's own escape.
        assert_eq!(escape_for_template_literal("\\`"), "\\\\\\`");
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        let text = "# Heading\n\nplain *markdown* text\n";
        assert_eq!(escape_for_template_literal(text), text);
    }

    #[test]
    fn test_portrait_dimensions() {
        let doc = assemble(&config(), "");
        assert!(doc.contains("--page-w-mm: 210mm;"));
        assert!(doc.contains("--page-h-mm: 297mm;"));
        assert!(doc.contains("size: A4 portrait;"));
    }

    #[test]
    fn test_landscape_dimensions() {
        let mut c = config();
        c.orientation = Orientation::Landscape;
        let doc = assemble(&c, "");
        assert!(doc.contains("--page-w-mm: 297mm;"));
        assert!(doc.contains("--page-h-mm: 210mm;"));
        assert!(doc.contains("size: A4 landscape;"));
    }

    #[test]
    fn test_css_values_round_trip() {
        // Corners of the valid ranges land in the document verbatim.
        for (columns, margin, gap, font) in [(1, 5, 4, 9), (4, 25, 20, 16), (3, 12, 8, 11)] {
            let mut c = config();
            c.set_columns(columns);
            c.set_margin_mm(margin);
            c.set_gap_mm(gap);
            c.set_font_px(font);
            let doc = assemble(&c, "");
            assert!(doc.contains(&format!("--margin-mm: {margin}mm;")));
            assert!(doc.contains(&format!("--gap-mm: {gap}mm;")));
            assert!(doc.contains(&format!("--font-px: {font}px;")));
            assert!(doc.contains(&format!("--cols: {columns};")));
        }
    }

    #[test]
    fn test_column_guides_toggle() {
        let mut c = config();
        c.show_guides = true;
        assert!(assemble(&c, "").contains("column-rule: 1px solid #ddd;"));
        c.show_guides = false;
        assert!(assemble(&c, "").contains("column-rule: none;"));
    }

    #[test]
    fn test_print_button_toggle() {
        let mut c = config();
        c.show_print_button = true;
        assert!(assemble(&c, "").contains("window.print()"));
        c.show_print_button = false;
        assert!(!assemble(&c, "").contains("window.print()"));
    }

    #[test]
    fn test_references_all_renderers() {
        let doc = assemble(&config(), "");
        for url in [
            HIGHLIGHT_CSS_URL,
            HIGHLIGHT_JS_URL,
            DOMPURIFY_URL,
            MARKED_URL,
            MATHJAX_URL,
        ] {
            assert!(doc.contains(url), "missing {url}");
        }
    }

    #[test]
    fn test_embeds_escaped_text() {
        let doc = assemble(&config(), "plain text");
        assert_eq!(embedded_region(&doc), "plain text");
    }

    #[test]
    fn test_hostile_text_stays_well_formed() {
        let markdown = "inline `code`, a backslash \\ and math $x$ and ${weird}";
        let doc = assemble(&config(), markdown);
        let region = embedded_region(&doc);
        assert_eq!(region, escape_for_template_literal(markdown));
        assert!(!has_unescaped_backtick(region));
        // The render script survives intact after the literal.
        assert!(doc.contains("DOMPurify.sanitize(marked.parse(raw))"));
    }

    #[test]
    fn test_toolbar_reflects_layout() {
        let mut c = config();
        c.set_columns(3);
        let doc = assemble(&c, "");
        assert!(doc.contains("portrait \u{2022} 3 column(s)"));
    }
}
