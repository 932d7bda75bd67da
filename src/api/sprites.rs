//! Sprite download and on-disk caching
//!
//! Grid sprites and detail artwork are fetched once, downscaled, and saved as
//! PNG under the sprite cache directory so iced can load them by path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, Stream, StreamExt};
use image::imageops::FilterType;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::client::PokeApiClient;
use crate::error::SpriteError;

/// Largest edge of a cached image; artwork from the API is 512px
pub const SPRITE_MAX_EDGE: u32 = 192;

/// Outcome of fetching one sprite, keyed by its source URL
#[derive(Debug, Clone)]
pub struct SpriteReady {
    pub url: String,
    pub path: Option<PathBuf>,
}

/// Get the cache path for a sprite URL (doesn't fetch, just returns the expected path)
pub fn cached_sprite_path(cache_dir: &Path, url: &str) -> PathBuf {
    // Keep the tail of the URL so different sprite sets don't collide
    let tail: Vec<&str> = url
        .trim_end_matches('/')
        .rsplit('/')
        .take(3)
        .collect();
    let stem: String = tail
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    cache_dir.join(format!("{stem}.png"))
}

/// Fetch a sprite into the cache, reusing a previously cached copy
pub async fn fetch_sprite(
    client: &PokeApiClient,
    url: &str,
    cache_dir: &Path,
) -> Result<PathBuf, SpriteError> {
    let path = cached_sprite_path(cache_dir, url);
    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        let cached = path.clone();
        let readable = tokio::task::spawn_blocking(move || image::open(&cached).is_ok())
            .await
            .map_err(|e| SpriteError::Join(e.to_string()))?;
        if readable {
            return Ok(path);
        }
        warn!(path = %path.display(), "discarding unreadable cached sprite");
        tokio::fs::remove_file(&path).await?;
    }

    let bytes = client.fetch_bytes(url).await?;
    tokio::fs::create_dir_all(cache_dir).await?;

    let target = path.clone();
    tokio::task::spawn_blocking(move || save_sprite(&bytes, &target))
        .await
        .map_err(|e| SpriteError::Join(e.to_string()))??;

    debug!(path = %path.display(), "cached sprite");
    Ok(path)
}

/// Decode, downscale if needed, and save as PNG.
///
/// Animated sources (the showdown GIFs) keep only their first frame, since
/// iced's image widget draws still images. The PNG is written to a temporary
/// file next to `path` and renamed into place, so a partial write never
/// shows up as a cache entry.
fn save_sprite(bytes: &[u8], path: &Path) -> Result<(), SpriteError> {
    let img = image::load_from_memory(bytes)?;
    let img = if img.width() > SPRITE_MAX_EDGE || img.height() > SPRITE_MAX_EDGE {
        img.resize(SPRITE_MAX_EDGE, SPRITE_MAX_EDGE, FilterType::Lanczos3)
    } else {
        img
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let temp = tempfile::NamedTempFile::new_in(dir)?;
    img.save_with_format(temp.path(), image::ImageFormat::Png)?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Fetch every URL with at most `max_concurrent` downloads in flight.
///
/// Results arrive in completion order. Failures are logged and reported with
/// `path: None`. The stream ends early once `cancel` fires.
pub fn fetch_all(
    client: Arc<PokeApiClient>,
    urls: Vec<String>,
    cache_dir: PathBuf,
    max_concurrent: usize,
    cancel: CancellationToken,
) -> impl Stream<Item = SpriteReady> + Send + 'static {
    let cache_dir = Arc::new(cache_dir);

    stream::iter(urls)
        .map(move |url| {
            let client = Arc::clone(&client);
            let cache_dir = Arc::clone(&cache_dir);
            async move {
                let path = match fetch_sprite(&client, &url, &cache_dir).await {
                    Ok(path) => Some(path),
                    Err(e) => {
                        warn!(%url, error = %e, "sprite unavailable");
                        None
                    }
                };
                SpriteReady { url, path }
            }
        })
        .buffer_unordered(max_concurrent.max(1))
        .take_until(cancel.cancelled_owned())
}
