//! Hero image download
//!
//! Thumbnails are streamed into the asset directory under the record's
//! `hero_image` name. This stage is best-effort: every failure is reported as
//! [`StageOutcome::Tolerated`] and the record is built regardless.

use crate::fetcher::{FetchError, Fetcher};
use crate::stage::{Stage, StageOutcome};
use futures::StreamExt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ImageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Image stream interrupted: {0}")]
    Stream(#[from] reqwest::Error),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// The file name would resolve outside the image directory
    #[error("Unsafe image file name: {0:?}")]
    UnsafeName(String),
}

pub type ImageOutcome = StageOutcome<PathBuf, ImageError>;

/// Downloads thumbnails into a local directory
#[derive(Debug, Clone)]
pub struct ImageMaterializer {
    fetcher: Fetcher,
    image_dir: PathBuf,
}

impl ImageMaterializer {
    pub fn new(fetcher: Fetcher, image_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            image_dir: image_dir.into(),
        }
    }

    /// Download `thumbnail_url` to `<image_dir>/<filename>`.
    ///
    /// Never fails the caller: no URL gives `Skipped`, any error `Tolerated`.
    /// `filename` must be a single plain path component.
    pub async fn materialize(&self, thumbnail_url: Option<&str>, filename: &str) -> ImageOutcome {
        let Some(url) = thumbnail_url else {
            return StageOutcome::Skipped("no thumbnail");
        };

        let result = if is_plain_file_name(filename) {
            self.download(url, filename).await
        } else {
            Err(ImageError::UnsafeName(filename.to_string()))
        };
        match &result {
            Ok(path) => info!(path = %path.display(), "Hero image saved"),
            Err(err) => warn!(url, filename, error = %err, "Image download failed, continuing"),
        }

        StageOutcome::from_result(Stage::MaterializeImage, result)
    }

    async fn download(&self, url: &str, filename: &str) -> Result<PathBuf, ImageError> {
        tokio::fs::create_dir_all(&self.image_dir).await?;

        let target = self.image_dir.join(filename);
        let partial = self.image_dir.join(format!("{filename}.part"));

        let written = self.stream_to(url, &partial).await;
        match written {
            Ok(bytes) => {
                tokio::fs::rename(&partial, &target).await?;
                debug!(bytes, path = %target.display(), "Image committed");
                Ok(target)
            },
            Err(err) => {
                // never leave a truncated image behind
                let _ = tokio::fs::remove_file(&partial).await;
                Err(err)
            },
        }
    }

    async fn stream_to(&self, url: &str, path: &Path) -> Result<u64, ImageError> {
        let response = self.fetcher.fetch(url, &[]).await?;
        let mut file = tokio::fs::File::create(path).await?;
        let mut stream = response.bytes_stream();
        let mut written = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;
        Ok(written)
    }
}

fn is_plain_file_name(filename: &str) -> bool {
    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
