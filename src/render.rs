//! Literal placeholder rendering.

use crate::context::SubstitutionContext;

/// Replaces every literal occurrence of each context token in `text`.
///
/// One pass per key; tokens without a context entry are left verbatim.
/// The `{{..}}` delimiter discipline keeps token literals mutually
/// non-overlapping, so key order cannot change the result. Pure function,
/// no I/O, safe to call concurrently on independent inputs.
pub fn render(text: &str, context: &SubstitutionContext) -> String {
    let mut rendered = text.to_string();
    for (token, value) in context {
        if rendered.contains(token.as_str()) {
            rendered = rendered.replace(token.as_str(), value);
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_all_occurrences() {
        let mut context = SubstitutionContext::new();
        context.insert("{{NAME}}".to_string(), "Widget".to_string());
        assert_eq!(render("{{NAME}} and {{NAME}}", &context), "Widget and Widget");
    }

    #[test]
    fn test_render_leaves_unknown_tokens() {
        let context = SubstitutionContext::new();
        assert_eq!(render("keep {{UNKNOWN}}", &context), "keep {{UNKNOWN}}");
    }
}
