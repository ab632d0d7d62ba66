//! Application state management.

use feedback_core::{AppConfig, Secrets};
use feedback_mail::{Dispatcher, MailError};
use feedback_template::{id_source, IdError, IdSource, TemplatePopulator};
use std::sync::Arc;

/// Shared by every request handler; read-only after startup.
pub struct AppState {
    pub populator: TemplatePopulator,

    /// Asked once per submission for the document identifier
    pub ids: Arc<dyn IdSource>,

    /// `Err` when the mail account is not configured. Submissions still
    /// produce documents and report the dispatch failure.
    pub dispatcher: Result<Dispatcher, MailError>,
}

impl AppState {
    pub fn new(
        populator: TemplatePopulator,
        ids: Arc<dyn IdSource>,
        dispatcher: Result<Dispatcher, MailError>,
    ) -> Self {
        Self {
            populator,
            ids,
            dispatcher,
        }
    }

    /// Build the production state from configuration and secrets.
    pub fn from_config(config: &AppConfig, secrets: &Secrets) -> Result<Self, IdError> {
        let populator = TemplatePopulator::from_config(&config.template);
        if populator.template_path().exists() {
            tracing::info!("Template: {}", populator.template_path().display());
        } else {
            tracing::warn!(
                "Template {} not found; submissions will fail until it exists",
                populator.template_path().display()
            );
        }
        tracing::info!("Output directory: {}", populator.output_dir().display());

        let ids = id_source::from_config(&config.id_service)?;

        let dispatcher = Dispatcher::smtp(&config.smtp, secrets);
        if let Err(e) = &dispatcher {
            tracing::warn!("Email dispatch unavailable: {}", e);
        }

        Ok(Self::new(populator, ids, dispatcher))
    }
}
