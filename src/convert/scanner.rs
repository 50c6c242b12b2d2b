// src/convert/scanner.rs

//! Lexical scanning for `property: value` declarations and pixel literals
//!
//! This is a pattern matcher over raw text, not a CSS tokenizer. It does not
//! know about comments, strings or nesting, so a `12px` inside a quoted
//! string that happens to follow `width:` is indistinguishable from a real
//! declaration. Swapping in a real tokenizer only requires keeping the two
//! entry points below.

use regex::Regex;
use std::sync::LazyLock;

/// Pre-compiled scanning patterns
struct Patterns {
    /// `identifier-with-hyphens : value` where the value runs to `;`, `{` or `}`
    declaration: Regex,
    /// Maximal ASCII digit run directly followed by `px`
    pixel: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    declaration: Regex::new(r"([\w-]+)\s*:\s*([^;{}]+)").expect("valid declaration pattern"),
    pixel: Regex::new(r"([0-9]+)px").expect("valid pixel pattern"),
});

/// A `property: value` match within one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Property name as written (not normalized)
    pub property: &'a str,
    /// Value text up to, not including, the terminating `;`, `{` or `}`
    pub value: &'a str,
    /// Byte offset of `value` within the scanned line
    pub value_start: usize,
}

/// A pixel literal within a declaration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelToken<'a> {
    /// Numeric part of the literal
    pub magnitude: u64,
    /// Literal text, e.g. `18px`
    pub raw: &'a str,
    /// Byte offset of `raw` within the value span
    pub offset: usize,
}

/// Finds declarations in a line and pixel literals in a declaration value
pub struct DeclarationScanner;

impl DeclarationScanner {
    /// Find declarations left to right, non-overlapping
    pub fn find_declarations(line: &str) -> impl Iterator<Item = Declaration<'_>> {
        PATTERNS.declaration.captures_iter(line).filter_map(|cap| {
            let property = cap.get(1)?;
            let value = cap.get(2)?;
            Some(Declaration {
                property: property.as_str(),
                value: value.as_str(),
                value_start: value.start(),
            })
        })
    }

    /// Find pixel literals inside a value span, left to right, non-overlapping
    ///
    /// Literals whose digits do not fit in a `u64` are skipped.
    pub fn find_pixel_tokens(value: &str) -> impl Iterator<Item = PixelToken<'_>> {
        PATTERNS.pixel.captures_iter(value).filter_map(|cap| {
            let whole = cap.get(0)?;
            let magnitude = cap.get(1)?.as_str().parse().ok()?;
            Some(PixelToken {
                magnitude,
                raw: whole.as_str(),
                offset: whole.start(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declarations(line: &str) -> Vec<(&str, &str)> {
        DeclarationScanner::find_declarations(line)
            .map(|d| (d.property, d.value))
            .collect()
    }

    #[test]
    fn test_single_declaration() {
        assert_eq!(
            declarations("  padding: 18px 2px;"),
            vec![("padding", "18px 2px")]
        );
    }

    #[test]
    fn test_multiple_declarations_on_one_line() {
        assert_eq!(
            declarations(".a { margin: 4px; font-size: 14px }"),
            vec![("margin", "4px"), ("font-size", "14px ")]
        );
    }

    #[test]
    fn test_value_start_points_into_line() {
        let line = "div{gap:  24px}";
        let decl = DeclarationScanner::find_declarations(line).next().unwrap();
        assert_eq!(decl.property, "gap");
        assert_eq!(&line[decl.value_start..decl.value_start + decl.value.len()], "24px");
    }

    #[test]
    fn test_js_object_style() {
        let found = declarations("  style={{ padding: '12px', width: '320px' }}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "padding");
        // Value runs to the closing brace, swallowing the second property
        assert_eq!(found[0].1, "'12px', width: '320px' ");
    }

    #[test]
    fn test_no_declaration() {
        assert!(declarations("}").is_empty());
        assert!(declarations("// just a comment").is_empty());
        assert!(declarations("").is_empty());
    }

    #[test]
    fn test_pixel_tokens() {
        let tokens: Vec<_> = DeclarationScanner::find_pixel_tokens("18px 2px 1.5em 100%").collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], PixelToken { magnitude: 18, raw: "18px", offset: 0 });
        assert_eq!(tokens[1], PixelToken { magnitude: 2, raw: "2px", offset: 5 });
    }

    #[test]
    fn test_pixel_tokens_take_maximal_digit_runs() {
        let tokens: Vec<_> = DeclarationScanner::find_pixel_tokens("calc(100% - 120px)").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].magnitude, 120);
        assert_eq!(tokens[0].raw, "120px");
    }

    #[test]
    fn test_decimal_pixels_match_fraction_only() {
        // "1.5px" is not understood as a decimal; only the trailing digits match
        let tokens: Vec<_> = DeclarationScanner::find_pixel_tokens("1.5px").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].raw, "5px");
        assert_eq!(tokens[0].offset, 2);
    }

    #[test]
    fn test_overflowing_literal_skipped() {
        let tokens: Vec<_> =
            DeclarationScanner::find_pixel_tokens("99999999999999999999999px 4px").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].magnitude, 4);
    }
}
