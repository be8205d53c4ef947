use common::image_gen::{ImageGenError, ImageGenerator};
use common::storage::{ObjectStore, StorageError};
use sea_orm::{ConnectionTrait, DbErr};
use tracing::{info, instrument, warn};

use super::icon_store::IconStore;
use super::ledger::{CreditLedger, LedgerError};
use crate::entity::icon;

/// Credits consumed by one generation request.
pub const CREDITS_PER_ICON: i32 = 1;

/// Content type every icon is uploaded with.
pub const ICON_CONTENT_TYPE: &str = "image/png";

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("not enough credits")]
    InsufficientCredits,
    #[error("image generation failed: {0}")]
    Generation(#[from] ImageGenError),
    #[error("icon upload failed: {0}")]
    Storage(#[from] StorageError),
    #[error("credit ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// A stored icon and where its image is served from.
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub icon: icon::Model,
    pub image_url: String,
}

/// Spends a credit, generates an image, records it and uploads it.
///
/// The steps run strictly in that order and nothing is compensated: a
/// failure after the spend keeps the credit spent, and a failed upload
/// leaves the icon row behind without an object.
pub struct IconGenerationService<'a, C: ConnectionTrait> {
    conn: &'a C,
    images: &'a dyn ImageGenerator,
    storage: &'a dyn ObjectStore,
}

impl<'a, C: ConnectionTrait> IconGenerationService<'a, C> {
    pub fn new(
        conn: &'a C,
        images: &'a dyn ImageGenerator,
        storage: &'a dyn ObjectStore,
    ) -> Self {
        Self {
            conn,
            images,
            storage,
        }
    }

    #[instrument(
        skip(self, prompt),
        fields(generator = self.images.name(), icon_id = tracing::field::Empty)
    )]
    pub async fn generate_icon(
        &self,
        user_id: i32,
        prompt: &str,
    ) -> Result<GeneratedIcon, GenerateError> {
        let spent = CreditLedger::new(self.conn)
            .try_spend(user_id, CREDITS_PER_ICON)
            .await?;
        if !spent {
            info!("No credits left, rejecting");
            return Err(GenerateError::InsufficientCredits);
        }

        let image = self.images.generate(prompt).await.inspect_err(|e| {
            warn!(error = %e, "Generation failed after credit was spent");
        })?;

        let icon = IconStore::new(self.conn).create(user_id, prompt).await?;
        tracing::Span::current().record("icon_id", tracing::field::display(icon.id));

        let key = icon.id.to_string();
        let bytes = image.decode()?;
        let image_url = self
            .storage
            .put(&key, bytes, ICON_CONTENT_TYPE)
            .await
            .inspect_err(|e| {
                warn!(error = %e, "Upload failed, icon row kept without an object");
            })?;

        info!(%image_url, "Icon generated");
        Ok(GeneratedIcon { icon, image_url })
    }
}
