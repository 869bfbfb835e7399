use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// State of one downloaded artwork image, keyed by its source URL.
#[derive(Debug, Clone)]
pub enum ArtState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory cache mapping artwork URLs to their download state.
///
/// Cards reference images by URL, so the same image shared between
/// entries is only fetched once.
#[derive(Debug, Default)]
pub struct ArtCache {
    pub states: HashMap<String, ArtState>,
}

impl ArtCache {
    pub fn get(&self, url: &str) -> Option<&ArtState> {
        self.states.get(url)
    }
}

/// Directory for cached artwork.
pub fn art_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hibiki")
        .map(|dirs| dirs.cache_dir().join("artwork"))
        .unwrap_or_else(|| PathBuf::from("artwork"))
}

/// Expected file path for an artwork URL.
pub fn art_path(url: &str) -> PathBuf {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    url.hash(&mut hasher);
    art_dir().join(format!("{:016x}.img", hasher.finish()))
}

/// Download an artwork image and save it to disk. Returns the saved path.
pub async fn fetch_art(url: String) -> Result<PathBuf, String> {
    let dir = art_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = art_path(&url);

    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}
