//! Shortcode rendering.
//!
//! Finds `[tag attrs]body[/tag]` blocks for the configured tags and replaces
//! each with the content selected for the viewer. Resolved content is rendered
//! again so blocks nested inside other tags expand too, down to `max_depth`.
//! An opening tag with no matching close is treated as an empty block.

use hidethis_rules::context::ViewerContext;
use regex::Regex;

use crate::attributes::Attributes;
use crate::config::RenderConfig;
use crate::error::AppResult;
use crate::selector::ContentSelector;

#[derive(Debug, Clone)]
pub struct ShortcodeRenderer {
    selector: ContentSelector,
    open_pattern: Regex,
    max_depth: usize,
}

impl ShortcodeRenderer {
    pub fn new<S: AsRef<str>>(selector: ContentSelector, tags: &[S], max_depth: usize) -> AppResult<Self> {
        let alternation = tags
            .iter()
            .map(|t| regex::escape(t.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let open_pattern = Regex::new(&format!(r"\[({alternation})(\s[^\]]*)?\]"))?;

        Ok(Self {
            selector,
            open_pattern,
            max_depth,
        })
    }

    pub fn from_config(config: &RenderConfig) -> AppResult<Self> {
        Self::new(
            ContentSelector::from_config(config),
            config.shortcode_tags.as_slice(),
            config.max_depth,
        )
    }

    pub fn with_selector(mut self, selector: ContentSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn selector(&self) -> &ContentSelector {
        &self.selector
    }

    /// Render every shortcode block in `document` for `ctx`.
    pub fn render(&self, document: &str, ctx: &ViewerContext) -> String {
        self.render_at(document, ctx, 0)
    }

    fn render_at(&self, document: &str, ctx: &ViewerContext, depth: usize) -> String {
        if depth > self.max_depth {
            tracing::warn!(depth, "shortcode nesting too deep, leaving blocks unexpanded");
            return document.to_string();
        }

        let mut out = String::with_capacity(document.len());
        let mut cursor = 0;

        while let Some(caps) = self.open_pattern.captures_at(document, cursor) {
            let Some(open) = caps.get(0) else { break };
            let tag = &caps[1];
            let raw_attributes = caps.get(2).map_or("", |m| m.as_str());
            let close = format!("[/{tag}]");

            let (body, next) = match document[open.end()..].find(&close) {
                Some(offset) => (
                    &document[open.end()..open.end() + offset],
                    open.end() + offset + close.len(),
                ),
                None => ("", open.end()),
            };

            out.push_str(&document[cursor..open.start()]);
            out.push_str(&self.render_block(raw_attributes, body, ctx, depth));
            cursor = next;
        }

        out.push_str(&document[cursor..]);
        out
    }

    fn render_block(&self, raw_attributes: &str, body: &str, ctx: &ViewerContext, depth: usize) -> String {
        let attributes = Attributes::parse(raw_attributes);
        let resolved = self.selector.resolve(attributes, body, ctx);
        let expanded = self.render_at(&resolved, ctx, depth + 1);
        self.selector.hooks().apply_content(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::Hooks;

    fn renderer() -> ShortcodeRenderer {
        ShortcodeRenderer::from_config(&RenderConfig::default()).unwrap()
    }

    fn editor() -> ViewerContext {
        ViewerContext::logged_in("42", "alice", "alice@example.com").with_role("editor")
    }

    #[test]
    fn test_plain_text_untouched() {
        let doc = "No shortcodes [here] at all.";
        assert_eq!(renderer().render(doc, &editor()), doc);
    }

    #[test]
    fn test_both_tags() {
        let doc = r#"A[hide for="editor"]B[/hide]C[hidethis for="subscriber"]D[/hidethis]E"#;
        assert_eq!(renderer().render(doc, &editor()), "ABCE");
    }

    #[test]
    fn test_default_attributes_show_block() {
        assert_eq!(renderer().render("[hide]body[/hide]", &editor()), "body");
    }

    #[test]
    fn test_similar_tag_names_ignored() {
        let doc = "[hidden]x[/hidden]";
        assert_eq!(renderer().render(doc, &editor()), doc);
    }

    #[test]
    fn test_multiline_body() {
        let doc = "[hide for=\"!logged\"]\n<p>Sign in</p>\n[/hide]";
        assert_eq!(renderer().render(doc, &editor()), "");
        assert_eq!(
            renderer().render(doc, &ViewerContext::anonymous()),
            "\n<p>Sign in</p>\n"
        );
    }

    #[test]
    fn test_nested_blocks_expand() {
        let doc = r#"[hide for="logged"]Hi [hidethis for="editor"]editor[/hidethis][/hide]"#;
        assert_eq!(renderer().render(doc, &editor()), "Hi editor");

        let guest = ViewerContext::logged_in("9", "guest", "g@example.com");
        assert_eq!(renderer().render(doc, &guest), "Hi ");
    }

    #[test]
    fn test_depth_limit() {
        let selector = ContentSelector::new();
        let renderer = ShortcodeRenderer::new(selector, &["hide", "hidethis"][..], 0).unwrap();
        let doc = "[hide]a[hidethis]b[/hidethis][/hide]";
        assert_eq!(renderer.render(doc, &editor()), "a[hidethis]b[/hidethis]");
    }

    #[test]
    fn test_unclosed_tag_is_empty_block() {
        let doc = "before [hide test=\"empty\"] after";
        assert_eq!(renderer().render(doc, &editor()), "before  TEST PASSED! after");
    }

    #[test]
    fn test_content_hook_runs_per_block() {
        let selector = ContentSelector::new().with_hooks(Hooks::new().on_content(|c| c.trim().to_string()));
        let renderer = renderer().with_selector(selector);
        assert_eq!(renderer.render("x[hide]  y  [/hide]z", &editor()), "xyz");
    }

    #[test]
    fn test_custom_tags() {
        let config = RenderConfig {
            shortcode_tags: vec!["members".to_string()],
            ..RenderConfig::default()
        };
        let renderer = ShortcodeRenderer::from_config(&config).unwrap();
        let doc = "[members for=logged]m[/members][hide]h[/hide]";
        assert_eq!(renderer.render(doc, &editor()), "m[hide]h[/hide]");
    }
}
