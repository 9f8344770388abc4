//! Settings and roster store singletons using the OnceCell pattern.

use std::path::PathBuf;

use store::FileStore;
use tokio::sync::OnceCell;

use crate::error::ServerError;
use crate::settings::Settings;

static SETTINGS: OnceCell<Settings> = OnceCell::const_new();
static STORE: OnceCell<FileStore> = OnceCell::const_new();

async fn load_settings() -> Result<Settings, ServerError> {
    Ok(Settings::new()?)
}

/// Get or load the server settings.
pub async fn get_settings() -> Result<&'static Settings, ServerError> {
    SETTINGS.get_or_try_init(load_settings).await
}

/// Open the file store described by the settings, seeding the document if asked to.
async fn open_store() -> Result<FileStore, ServerError> {
    let settings = get_settings().await?;
    let store = FileStore::new(
        PathBuf::from(&settings.storage.data_dir),
        settings.roster.doc_ref(),
    );

    if settings.storage.create_missing {
        store.create_if_missing()?;
    }

    tracing::info!(
        document = %settings.roster.doc_ref(),
        path = %store.document_path().display(),
        capacity = settings.roster.capacity,
        "roster store ready"
    );
    Ok(store)
}

/// Get or initialize the roster store.
pub async fn get_store() -> Result<&'static FileStore, ServerError> {
    STORE.get_or_try_init(open_store).await
}
