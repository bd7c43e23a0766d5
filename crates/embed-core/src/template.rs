//! Minimal `{token}` template rendering
//!
//! A single substitution pass over a markup skeleton. Tokens without a
//! matching key stay verbatim, and replacement values are never re-scanned
//! for tokens, so values containing `{` or `}` cannot trigger a second
//! expansion.

use std::collections::HashMap;

/// Replace every `{key}` token in `template` with its value from
/// `substitutions`
///
/// Tokens whose key is absent from the map are left untouched; that is not
/// an error. The output is built in one left-to-right pass, so substituted
/// values are treated as opaque text. A stray `{` before a token is literal
/// text: the innermost `{…}` of a brace run is the token candidate, so
/// `"a{b{embed}"` renders as `"a{bE"`.
pub fn render(template: &str, substitutions: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('}') {
            Some(close) => {
                let key = &tail[1..close];
                if let Some(inner) = key.rfind('{') {
                    // Everything up to the innermost '{' is literal; the
                    // token candidate starts there.
                    out.push_str(&tail[..inner + 1]);
                    rest = &tail[inner + 1..];
                    continue;
                }
                match substitutions.get(key) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
            }
            None => {
                // Unterminated brace: literal output
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_adjacent_tokens() {
        let subs = HashMap::from([("embed", "E"), ("params", "P")]);
        assert_eq!(render("{embed}{params}", &subs), "EP");
    }

    #[test]
    fn test_render_leaves_unknown_tokens_verbatim() {
        let subs = HashMap::from([("x", "1")]);
        assert_eq!(render("{x}{y}", &subs), "1{y}");
    }

    #[test]
    fn test_render_plain_text_passthrough() {
        let subs = HashMap::from([("x", "1")]);
        assert_eq!(render("no tokens here", &subs), "no tokens here");
    }

    #[test]
    fn test_render_token_in_attribute_position() {
        let subs = HashMap::from([("embed", "https://www.youtube.com/embed/abc")]);
        assert_eq!(
            render(r#"<iframe src="{embed}">"#, &subs),
            r#"<iframe src="https://www.youtube.com/embed/abc">"#
        );
    }

    #[test]
    fn test_render_does_not_reexpand_values() {
        let subs = HashMap::from([("x", "{y}"), ("y", "!")]);
        assert_eq!(render("{x}", &subs), "{y}");
    }

    #[test]
    fn test_render_stray_brace_before_token() {
        let subs = HashMap::from([("embed", "E")]);
        assert_eq!(render("a{b{embed}", &subs), "a{bE");
    }

    #[test]
    fn test_render_doubled_braces_around_token() {
        let subs = HashMap::from([("x", "1")]);
        assert_eq!(render("{{x}}", &subs), "{1}");
    }

    #[test]
    fn test_render_brace_run_with_unknown_key_stays_verbatim() {
        let subs = HashMap::from([("x", "1")]);
        assert_eq!(render("{a{b}", &subs), "{a{b}");
    }

    #[test]
    fn test_render_unterminated_brace_is_literal() {
        let subs = HashMap::from([("x", "1")]);
        assert_eq!(render("{x} and {oops", &subs), "1 and {oops");
    }

    #[test]
    fn test_render_empty_template() {
        assert_eq!(render("", &HashMap::new()), "");
    }

    #[test]
    fn test_render_repeated_token() {
        let subs = HashMap::from([("a", "x")]);
        assert_eq!(render("{a}{a}{a}", &subs), "xxx");
    }
}
