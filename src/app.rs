//! End-to-end page generation: fetch, assemble, render, write.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::application::services::PageService;
use crate::config::Config;
use crate::domain::catalog::SpeciesChoice;
use crate::domain::repositories::PokeApiRepository;
use crate::error::AppError;
use crate::infrastructure::http::{HttpClient, HttpPokeApiRepository};
use crate::web::render_page;

/// Where the page for `choice` is written inside `output_dir`.
pub fn output_path(output_dir: &Path, choice: SpeciesChoice) -> PathBuf {
    output_dir.join(format!("{}.html", choice.name()))
}

/// Generates the page for `choice` against the configured API.
///
/// # Errors
///
/// See [`generate_with`].
pub async fn generate(config: &Config, choice: SpeciesChoice) -> Result<PathBuf, AppError> {
    let client = HttpClient::new(config.request_timeout())?;
    let repository = Arc::new(HttpPokeApiRepository::new(
        client,
        config.api_base_url.as_str(),
    ));

    generate_with(repository, choice, &config.output_dir).await
}

/// Generates the page for `choice` using `repository` and writes it to
/// `{output_dir}/{name}.html`, replacing any existing file.
///
/// Nothing is written unless every required lookup succeeded.
///
/// # Errors
///
/// - [`AppError::Fetch`] - pokemon, species, evolution chain or type lookup failed
/// - [`AppError::Render`] - template rendering failed
/// - [`AppError::Io`] - the output directory or file could not be written
pub async fn generate_with<R: PokeApiRepository>(
    repository: Arc<R>,
    choice: SpeciesChoice,
    output_dir: &Path,
) -> Result<PathBuf, AppError> {
    let service = PageService::new(repository);

    let record = service.fetch_pokemon(choice.name()).await?;
    let page = service.assemble(&record).await?;
    let html = render_page(&page)?;

    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| AppError::io(output_dir, e))?;

    let path = output_path(output_dir, choice);
    tokio::fs::write(&path, html)
        .await
        .map_err(|e| AppError::io(&path, e))?;

    info!("Wrote {}", path.display());
    Ok(path)
}
