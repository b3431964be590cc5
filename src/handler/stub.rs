//! Stub import handler.
//!
//! Stands in for the external handler when the crate runs without a host:
//! performs the same surface validation the real handler applies to a
//! submission (authenticity token against the view, upload error code,
//! recognized fields) without the import business rules.

use async_trait::async_trait;

use super::{HandlerExit, ImportHandler, MessageHandler};
use crate::core::context::RequestContext;
use crate::request::fields;
use crate::request::nonce::NonceProvider;
use crate::types::StagingError;

pub struct StubImportHandler {
    nonce: Box<dyn NonceProvider + Send + Sync>,
    messages: MessageHandler,
}

impl StubImportHandler {
    pub fn new(nonce: impl NonceProvider + Send + Sync + 'static) -> Self {
        Self {
            nonce: Box::new(nonce),
            messages: MessageHandler::new(),
        }
    }

    fn exit(&self, ctx: &RequestContext) -> HandlerExit {
        match ctx.post_field(fields::HTTP_REFERER) {
            Some(referer) => HandlerExit::redirect(referer),
            None => HandlerExit::halt(),
        }
    }
}

#[async_trait]
impl ImportHandler for StubImportHandler {
    fn hook(&self) -> &'static str {
        fields::ADMIN_POST_HOOK
    }

    async fn handle(&self, ctx: &RequestContext) -> HandlerExit {
        // The authenticity check consults the aggregate view, not the
        // individual stores.
        let token = ctx
            .request_view()
            .and_then(|view| view.get(fields::NONCE))
            .unwrap_or_default();

        if !self.nonce.verify(token, fields::IMPORT_ACTION) {
            self.messages
                .add_error("The authenticity of the request could not be verified.".to_string());
            return self.exit(ctx);
        }

        let Some(upload) = ctx.file(fields::IMPORT_FILE) else {
            self.messages
                .add_error("You need to select a file to upload.".to_string());
            return self.exit(ctx);
        };

        match upload.error {
            StagingError::Ok => {}
            error => {
                // Report in the upload-error vocabulary of the form flow.
                self.messages
                    .add_error(format!("File upload failed: {} (code {}).", error, error.code()));
                return self.exit(ctx);
            }
        }

        let delimiter = ctx
            .post_field(fields::FIELDS_DELIMITER)
            .unwrap_or("comma");
        let size = upload.size.unwrap_or(0);

        tracing::info!(
            name = %upload.name,
            size = size,
            delimiter = %delimiter,
            "stub: accepted import submission"
        );

        self.messages.add_message(format!(
            "Accepted {} ({} bytes, {}-delimited) for import.",
            upload.name, size, delimiter
        ));

        self.exit(ctx)
    }

    fn message_handler(&self) -> Option<&MessageHandler> {
        Some(&self.messages)
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
