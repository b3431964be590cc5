//! Environment composer.
//!
//! Assembles the full synthetic request: stages the upload, maps the import
//! options into the handler's body-field names, synthesizes the
//! authenticity token, populates the ambient sub-environments, and installs
//! the aggregate view.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{ImportOptions, RequestConfig, StagingConfig};
use crate::core::context::RequestContext;
use crate::request::aggregate::AggregateRequestView;
use crate::request::fields;
use crate::request::nonce::NonceProvider;
use crate::request::upload;

/// Path the synthetic submission claims to target.
const ADMIN_POST_PATH: &str = "/wp-admin/admin-post.php";

/// Fallback declared MIME type when the source extension is not recognized.
const DEFAULT_MIME_TYPE: &str = "text/csv";

/// Compose the synthetic request environment for one import invocation.
///
/// Every recognized option field is always sent, set independently of the
/// others; the handler applies its own dependency logic between them.
pub async fn compose(
    options: &ImportOptions,
    source: &Path,
    request_config: &RequestConfig,
    staging_config: &StagingConfig,
    nonce: &dyn NonceProvider,
) -> RequestContext {
    let mut ctx = RequestContext::new();

    ctx.set_post_field(
        fields::MAX_FILE_SIZE,
        fields::MAX_FILE_SIZE_BYTES.to_string(),
    );
    ctx.set_post_field(
        fields::MERGE_EXISTING_USER_MEMBERSHIPS,
        bool_field(options.merge_existing_user_memberships),
    );
    ctx.set_post_field(
        fields::ALLOW_MEMBERSHIPS_TRANSFER,
        bool_field(options.allow_memberships_transfer),
    );
    ctx.set_post_field(
        fields::CREATE_NEW_USER_MEMBERSHIPS,
        bool_field(options.create_new_user_memberships),
    );
    ctx.set_post_field(
        fields::CREATE_NEW_USERS,
        bool_field(options.create_new_users),
    );
    ctx.set_post_field(
        fields::DEFAULT_START_DATE,
        options.default_start_date.clone().unwrap_or_default(),
    );
    ctx.set_post_field(fields::TIMEZONE, options.timezone.clone().unwrap_or_default());
    ctx.set_post_field(
        fields::FIELDS_DELIMITER,
        options.input_fields_delimiter.as_str(),
    );

    ctx.set_post_field(fields::ACTION, fields::IMPORT_ACTION);
    ctx.set_post_field(fields::NONCE, nonce.create(fields::IMPORT_ACTION));
    ctx.set_post_field(fields::HTTP_REFERER, fields::IMPORT_REFERER);

    let declared_type = mime_guess::from_path(source)
        .first_raw()
        .unwrap_or(DEFAULT_MIME_TYPE);
    let descriptor = upload::stage(source, declared_type, staging_config).await;
    tracing::debug!(
        name = %descriptor.name,
        error = %descriptor.error,
        "compose: upload staged"
    );
    ctx.attach_file(fields::IMPORT_FILE, descriptor);

    populate_ambient(&mut ctx);

    let view = AggregateRequestView::build(&ctx, &request_config.request_order);
    tracing::debug!(
        order = %request_config.request_order,
        keys = view.len(),
        "compose: aggregate view installed"
    );
    ctx.install_request_view(view);

    ctx
}

/// Environment-variable and server-metadata stores, matching what the
/// handler would see for a real form POST.
fn populate_ambient(ctx: &mut RequestContext) {
    for (key, value) in std::env::vars() {
        ctx.env.push((key, value));
    }

    let request_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    ctx.server
        .push(("REQUEST_METHOD".to_string(), "POST".to_string()));
    ctx.server
        .push(("REQUEST_URI".to_string(), ADMIN_POST_PATH.to_string()));
    ctx.server
        .push(("SCRIPT_NAME".to_string(), ADMIN_POST_PATH.to_string()));
    ctx.server
        .push(("HTTP_REFERER".to_string(), fields::IMPORT_REFERER.to_string()));
    ctx.server
        .push(("REQUEST_TIME".to_string(), request_time.to_string()));
}

#[inline]
fn bool_field(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Delimiter;
    use crate::request::nonce::SessionNonce;
    use crate::types::StagingError;
    use std::io::Write;

    fn fixture() -> (tempfile::TempDir, std::path::PathBuf, StagingConfig) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("members.csv");
        let mut file = std::fs::File::create(&source).unwrap();
        file.write_all(b"id,email\n1,a@example.com\n").unwrap();
        let staging = StagingConfig::with_dir(dir.path().join("uploads"));
        std::fs::create_dir(dir.path().join("uploads")).unwrap();
        (dir, source, staging)
    }

    #[tokio::test]
    async fn test_compose_maps_every_option_field() {
        let (_dir, source, staging) = fixture();
        let nonce = SessionNonce::new("test-session");
        let options = ImportOptions {
            default_start_date: Some("2020-01-01".to_string()),
            timezone: Some("UTC".to_string()),
            input_fields_delimiter: Delimiter::Tab,
            ..ImportOptions::default()
        };

        let ctx = compose(
            &options,
            &source,
            &RequestConfig::default(),
            &staging,
            &nonce,
        )
        .await;

        assert_eq!(
            ctx.post_field(fields::MERGE_EXISTING_USER_MEMBERSHIPS),
            Some("1")
        );
        assert_eq!(ctx.post_field(fields::ALLOW_MEMBERSHIPS_TRANSFER), Some("0"));
        assert_eq!(
            ctx.post_field(fields::CREATE_NEW_USER_MEMBERSHIPS),
            Some("1")
        );
        assert_eq!(ctx.post_field(fields::CREATE_NEW_USERS), Some("0"));
        assert_eq!(
            ctx.post_field(fields::DEFAULT_START_DATE),
            Some("2020-01-01")
        );
        assert_eq!(ctx.post_field(fields::TIMEZONE), Some("UTC"));
        assert_eq!(ctx.post_field(fields::FIELDS_DELIMITER), Some("tab"));
        assert_eq!(ctx.post_field(fields::MAX_FILE_SIZE), Some("2097152"));
        assert_eq!(ctx.post_field(fields::ACTION), Some(fields::IMPORT_ACTION));
        assert_eq!(
            ctx.post_field(fields::HTTP_REFERER),
            Some(fields::IMPORT_REFERER)
        );
    }

    #[tokio::test]
    async fn test_compose_no_option_coupling() {
        let (_dir, source, staging) = fixture();
        let nonce = SessionNonce::new("test-session");
        let options = ImportOptions {
            create_new_user_memberships: false,
            create_new_users: true,
            ..ImportOptions::default()
        };

        let ctx = compose(
            &options,
            &source,
            &RequestConfig::default(),
            &staging,
            &nonce,
        )
        .await;

        // Both fields are sent as set, independently.
        assert_eq!(
            ctx.post_field(fields::CREATE_NEW_USER_MEMBERSHIPS),
            Some("0")
        );
        assert_eq!(ctx.post_field(fields::CREATE_NEW_USERS), Some("1"));
    }

    #[tokio::test]
    async fn test_compose_absent_optionals_sent_empty() {
        let (_dir, source, staging) = fixture();
        let nonce = SessionNonce::new("test-session");

        let ctx = compose(
            &ImportOptions::default(),
            &source,
            &RequestConfig::default(),
            &staging,
            &nonce,
        )
        .await;

        assert_eq!(ctx.post_field(fields::DEFAULT_START_DATE), Some(""));
        assert_eq!(ctx.post_field(fields::TIMEZONE), Some(""));
    }

    #[tokio::test]
    async fn test_compose_token_matches_provider() {
        let (_dir, source, staging) = fixture();
        let nonce = SessionNonce::new("test-session");

        let ctx = compose(
            &ImportOptions::default(),
            &source,
            &RequestConfig::default(),
            &staging,
            &nonce,
        )
        .await;

        let token = ctx.post_field(fields::NONCE).unwrap();
        assert!(nonce.verify(token, fields::IMPORT_ACTION));
    }

    #[tokio::test]
    async fn test_compose_stages_upload_and_installs_view() {
        let (_dir, source, staging) = fixture();
        let nonce = SessionNonce::new("test-session");

        let ctx = compose(
            &ImportOptions::default(),
            &source,
            &RequestConfig::default(),
            &staging,
            &nonce,
        )
        .await;

        let upload = ctx.file(fields::IMPORT_FILE).unwrap();
        assert_eq!(upload.error, StagingError::Ok);
        assert_eq!(upload.name, "members.csv");
        assert_eq!(upload.mime_type, "text/csv");
        assert_eq!(ctx.files().len(), 1);

        // The default order includes P, so the token is visible in the view.
        let view = ctx.request_view().unwrap();
        assert_eq!(
            view.get(fields::NONCE),
            ctx.post_field(fields::NONCE)
        );
        assert_eq!(view.get("REQUEST_METHOD"), Some("POST"));
    }
}
