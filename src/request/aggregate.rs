//! Aggregate request view.
//!
//! A read-only merge of the five named sub-environments, built in a
//! configurable precedence order. The handler's authenticity check consults
//! this view rather than the individual stores, so it has to be installed
//! before dispatch.

use std::collections::HashMap;

use crate::config::DEFAULT_REQUEST_ORDER;
use crate::core::context::RequestContext;
use crate::types::ParamList;

/// Merged view over the sub-environment stores of a [`RequestContext`].
#[derive(Debug, Default)]
pub struct AggregateRequestView {
    entries: HashMap<String, String>,
}

impl AggregateRequestView {
    /// Build the view from `order`, a string of single-character tokens:
    /// `E` environment, `G` query, `P` body, `C` cookies, `S` server.
    ///
    /// Later tokens win key conflicts. A sub-environment whose token is
    /// omitted contributes no keys at all. Unrecognized tokens are ignored.
    /// An empty order falls back to the fixed default.
    pub fn build(ctx: &RequestContext, order: &str) -> Self {
        let order = if order.is_empty() {
            DEFAULT_REQUEST_ORDER
        } else {
            order
        };

        let mut view = Self::default();
        for token in order.chars() {
            match token {
                'E' => view.merge(&ctx.env),
                'G' => view.merge(&ctx.query),
                'P' => view.merge(&ctx.post),
                'C' => view.merge(&ctx.cookies),
                'S' => view.merge(&ctx.server),
                _ => {}
            }
        }
        view
    }

    fn merge(&mut self, store: &ParamList) {
        for (key, value) in store {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Look up a key in the merged view.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflicted_ctx() -> RequestContext {
        let mut ctx = RequestContext::new();
        ctx.post.push(("x".to_string(), "1".to_string()));
        ctx.query.push(("x".to_string(), "2".to_string()));
        ctx
    }

    #[test]
    fn test_later_token_wins() {
        let ctx = conflicted_ctx();

        let view = AggregateRequestView::build(&ctx, "PG");
        assert_eq!(view.get("x"), Some("2"));

        let view = AggregateRequestView::build(&ctx, "GP");
        assert_eq!(view.get("x"), Some("1"));
    }

    #[test]
    fn test_omitted_token_contributes_nothing() {
        let ctx = conflicted_ctx();

        let view = AggregateRequestView::build(&ctx, "P");
        assert_eq!(view.get("x"), Some("1"));
        assert_eq!(view.len(), 1);

        let mut ctx = RequestContext::new();
        ctx.cookies.push(("session".to_string(), "abc".to_string()));
        let view = AggregateRequestView::build(&ctx, "P");
        assert!(!view.contains("session"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_unrecognized_tokens_ignored() {
        let ctx = conflicted_ctx();

        let view = AggregateRequestView::build(&ctx, "XgPz");
        assert_eq!(view.get("x"), Some("1"));
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_empty_order_uses_default() {
        let mut ctx = conflicted_ctx();
        ctx.server
            .push(("REQUEST_METHOD".to_string(), "POST".to_string()));

        // Default EGPCS: server is merged last among the populated stores.
        let view = AggregateRequestView::build(&ctx, "");
        assert_eq!(view.get("x"), Some("1"));
        assert_eq!(view.get("REQUEST_METHOD"), Some("POST"));
    }
}
