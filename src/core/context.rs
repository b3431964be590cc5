//! Request context for the synthetic form submission.
//!
//! A [`RequestContext`] is the explicit, per-invocation replacement for the
//! ambient request state a web runtime would provide. It is constructed
//! fresh by the environment composer, written once, and read-only from the
//! handler's point of view. No process-wide mutable state is involved.

use crate::config::parse::env_bool;
use crate::request::aggregate::AggregateRequestView;
use crate::types::{ParamList, UploadDescriptor};

/// Administrative execution context flag.
///
/// The import handler's capability checks only pass when the invocation is
/// flagged as administrative. The flag is resolved from the `WP_ADMIN`
/// environment variable, mirroring how the handler's host bootstrap marks
/// admin requests.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext {
    pub admin: bool,
}

impl ExecutionContext {
    /// Resolve the flag from the environment.
    pub fn from_env() -> Self {
        Self {
            admin: env_bool("WP_ADMIN", false),
        }
    }

    /// Explicit constructor, used by embedders and tests.
    #[inline]
    pub fn admin(admin: bool) -> Self {
        Self { admin }
    }
}

/// The five named sub-environments plus the uploads store and the derived
/// aggregate view. Field names in the body store match exactly what the
/// external handler expects.
#[derive(Debug, Default)]
pub struct RequestContext {
    /// Environment variables (`E`).
    pub env: ParamList,
    /// Query fields (`G`).
    pub query: ParamList,
    /// Body fields (`P`).
    pub post: ParamList,
    /// Cookies (`C`).
    pub cookies: ParamList,
    /// Server metadata (`S`).
    pub server: ParamList,

    files: Vec<(String, UploadDescriptor)>,
    request: Option<AggregateRequestView>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a body field, replacing any previous value under the same name.
    pub fn set_post_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.post.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.post.push((name, value));
        }
    }

    /// Look up a body field by name.
    pub fn post_field(&self, name: &str) -> Option<&str> {
        self.post
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attach an upload descriptor under its field name.
    pub fn attach_file(&mut self, field: impl Into<String>, descriptor: UploadDescriptor) {
        self.files.push((field.into(), descriptor));
    }

    /// Look up an upload by field name.
    pub fn file(&self, field: &str) -> Option<&UploadDescriptor> {
        self.files.iter().find(|(f, _)| f == field).map(|(_, d)| d)
    }

    /// All uploads in attachment order.
    pub fn files(&self) -> &[(String, UploadDescriptor)] {
        &self.files
    }

    /// Install the merged request view. The view is the only introspection
    /// surface the handler's authenticity check consults.
    pub fn install_request_view(&mut self, view: AggregateRequestView) {
        self.request = Some(view);
    }

    /// The installed request view, if any.
    pub fn request_view(&self) -> Option<&AggregateRequestView> {
        self.request.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StagingError;

    fn descriptor(name: &str) -> UploadDescriptor {
        UploadDescriptor {
            name: name.to_string(),
            mime_type: "text/csv".to_string(),
            tmp_name: "/tmp/phptest".to_string(),
            size: Some(42),
            error: StagingError::Ok,
        }
    }

    #[test]
    fn test_set_post_field_replaces() {
        let mut ctx = RequestContext::new();
        ctx.set_post_field("action", "first");
        ctx.set_post_field("action", "second");

        assert_eq!(ctx.post_field("action"), Some("second"));
        assert_eq!(ctx.post.len(), 1);
    }

    #[test]
    fn test_post_field_missing() {
        let ctx = RequestContext::new();
        assert_eq!(ctx.post_field("absent"), None);
    }

    #[test]
    fn test_attach_and_look_up_file() {
        let mut ctx = RequestContext::new();
        ctx.attach_file("import_file", descriptor("members.csv"));

        let found = ctx.file("import_file").unwrap();
        assert_eq!(found.name, "members.csv");
        assert!(ctx.file("other_field").is_none());
        assert_eq!(ctx.files().len(), 1);
    }

    #[test]
    fn test_request_view_install() {
        let mut ctx = RequestContext::new();
        assert!(ctx.request_view().is_none());

        ctx.set_post_field("x", "1");
        let view = AggregateRequestView::build(&ctx, "P");
        ctx.install_request_view(view);

        assert_eq!(ctx.request_view().unwrap().get("x"), Some("1"));
    }

    #[test]
    fn test_execution_context_explicit() {
        assert!(ExecutionContext::admin(true).admin);
        assert!(!ExecutionContext::admin(false).admin);
    }
}
