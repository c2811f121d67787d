//! Link rewriting for DocBase export references.
//!
//! The export format references other documents, images, and attachments
//! through service-specific patterns. This module rewrites those patterns
//! in the raw markdown source, before HTML conversion, into references the
//! local handlers can serve.

use anyhow::{Context, Result};
use regex::Regex;

/// A single text transformation applied to raw markdown source.
#[derive(Debug)]
enum RewriteRule {
    /// Regex substitution; `${n}` in the replacement refers to a capture.
    Pattern {
        pattern: Regex,
        replacement: &'static str,
    },
    /// Plain substring substitution, no pattern semantics.
    Literal {
        needle: &'static str,
        replacement: &'static str,
    },
}

impl RewriteRule {
    fn apply(&self, input: &str) -> String {
        match self {
            Self::Pattern {
                pattern,
                replacement,
            } => pattern.replace_all(input, *replacement).into_owned(),
            Self::Literal {
                needle,
                replacement,
            } => input.replace(needle, replacement),
        }
    }
}

/// Ordered pipeline of rewrite rules for exported markdown.
///
/// Rules run in a fixed order over the raw source:
///
/// 1. `#{<digits>}` cross-document references become local `.md` links,
///    prefixed with a link marker.
/// 2. Absolute attachment URLs are shortened to their bare file name.
/// 3. File-type icon markup collapses to a fixed 📄️ marker regardless of
///    the file type it named.
/// 4. Absolute image URLs are shortened to their bare file name; any query
///    suffix is discarded.
/// 5. `[ ]` / `[x]` become disabled checkbox markup. These are substring
///    replacements and also fire inside code spans; known limitation kept
///    from the export format.
/// 6. `/guidance/` paths point back at the public help site.
///
/// No replacement text matches any rule, so the pipeline is idempotent
/// over its own output.
#[derive(Debug)]
pub struct LinkRewriter {
    rules: Vec<RewriteRule>,
}

impl LinkRewriter {
    /// Compiles the rule pipeline.
    ///
    /// # Errors
    ///
    /// Returns error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        let rules = vec![
            RewriteRule::Pattern {
                pattern: Regex::new(r"#\{([0-9]+)\}").context("document link pattern")?,
                replacement: r#"🔗 <a href="${1}.md">${1}.md</a>"#,
            },
            RewriteRule::Pattern {
                pattern: Regex::new(r"https://docbase\.io/file_attachments/([0-9a-zA-Z.]+)")
                    .context("attachment link pattern")?,
                replacement: "${1}",
            },
            RewriteRule::Pattern {
                pattern: Regex::new(r"!\[[a-z]+\]\(/images/file_icons/[a-z]+\.svg\)")
                    .context("file icon pattern")?,
                replacement: "📄️",
            },
            RewriteRule::Pattern {
                pattern: Regex::new(r"https://image\.docbase\.io/uploads/([0-9a-zA-Z.-]+)[^)]*")
                    .context("image link pattern")?,
                replacement: "${1}",
            },
            RewriteRule::Literal {
                needle: "[ ]",
                replacement: r#"<input type="checkbox" disabled></input>"#,
            },
            RewriteRule::Literal {
                needle: "[x]",
                replacement: r#"<input type="checkbox" disabled checked></input>"#,
            },
            RewriteRule::Literal {
                needle: "/guidance/",
                replacement: "https://help.docbase.io/guidance/",
            },
        ];

        Ok(Self { rules })
    }

    /// Applies every rule in order to the raw markdown source.
    pub fn rewrite(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |text, rule| rule.apply(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> LinkRewriter {
        LinkRewriter::new().expect("Rules should compile")
    }

    #[test]
    fn test_document_reference_becomes_local_link() {
        // Arrange
        let input = "see #{42} for details";

        // Act
        let output = rewriter().rewrite(input);

        // Assert
        assert_eq!(output, r#"see 🔗 <a href="42.md">42.md</a> for details"#);
    }

    #[test]
    fn test_attachment_url_is_shortened() {
        // Arrange
        let input = "[report](https://docbase.io/file_attachments/abc123.pdf)";

        // Act
        let output = rewriter().rewrite(input);

        // Assert
        assert_eq!(output, "[report](abc123.pdf)");
    }

    #[test]
    fn test_file_icon_markup_collapses_to_marker() {
        // Arrange
        let input = "![pdf](/images/file_icons/pdf.svg) report";

        // Act
        let output = rewriter().rewrite(input);

        // Assert: no distinction between file types
        assert_eq!(output, "📄️ report");
    }

    #[test]
    fn test_image_url_is_shortened() {
        // Arrange
        let input = "![shot](https://image.docbase.io/uploads/screen-1.png)";

        // Act
        let output = rewriter().rewrite(input);

        // Assert
        assert_eq!(output, "![shot](screen-1.png)");
    }

    #[test]
    fn test_image_url_query_suffix_is_discarded() {
        // Arrange
        let input = "![shot](https://image.docbase.io/uploads/screen-1.png?w=600&h=400)";

        // Act
        let output = rewriter().rewrite(input);

        // Assert
        assert_eq!(output, "![shot](screen-1.png)");
    }

    #[test]
    fn test_checkboxes_become_form_controls() {
        // Arrange
        let input = "- [ ] open\n- [x] done";

        // Act
        let output = rewriter().rewrite(input);

        // Assert
        assert!(!output.contains("[ ]"), "Unchecked marker must not survive");
        assert!(!output.contains("[x]"), "Checked marker must not survive");
        assert!(output.contains(r#"<input type="checkbox" disabled></input>"#));
        assert!(output.contains(r#"<input type="checkbox" disabled checked></input>"#));
    }

    #[test]
    fn test_checkbox_fires_inside_code_span() {
        // Substring substitution by design, even in code
        let output = rewriter().rewrite("`[x]` literal");
        assert!(output.contains("checked"));
        assert!(!output.contains("[x]"));
    }

    #[test]
    fn test_guidance_path_points_at_help_site() {
        // Arrange
        let input = "read /guidance/welcome first";

        // Act
        let output = rewriter().rewrite(input);

        // Assert
        assert_eq!(output, "read https://help.docbase.io/guidance/welcome first");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        // Arrange
        let input = "#{7} and [ ] and [x] and \
                     https://docbase.io/file_attachments/a.png and \
                     ![img](https://image.docbase.io/uploads/b.png?x=1)";
        let rewriter = rewriter();

        // Act
        let once = rewriter.rewrite(input);
        let twice = rewriter.rewrite(&once);

        // Assert
        assert_eq!(once, twice, "Second pass must not alter the output");
    }

    #[test]
    fn test_unrelated_text_passes_through() {
        let input = "# plain heading\n\nnothing to rewrite here";
        assert_eq!(rewriter().rewrite(input), input);
    }

    #[test]
    fn test_shortened_attachment_name_is_not_rewritten_again() {
        // A bare name produced by rule 2 lacks the URL prefix rule 2 needs
        let rewriter = rewriter();
        let output = rewriter.rewrite("abc123.pdf");
        assert_eq!(output, "abc123.pdf");
    }
}
