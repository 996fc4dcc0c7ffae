use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tokio::sync::RwLock;

/// The cached content sections served to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Gallery,
    Testimonials,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Gallery, Section::Testimonials];

    fn file_name(&self) -> &'static str {
        match self {
            Section::Gallery => "gallery.json",
            Section::Testimonials => "testimonials.json",
        }
    }

    fn cms_path(&self) -> &'static str {
        match self {
            Section::Gallery => "gallery",
            Section::Testimonials => "testimonials",
        }
    }
}

/// In-memory copies of the gallery and testimonial JSON caches, backed by
/// files on disk. Reads never touch the disk or the CMS; the revalidation
/// webhook refreshes the caches.
pub struct ContentStore {
    dir: PathBuf,
    gallery: RwLock<Value>,
    testimonials: RwLock<Value>,
}

impl ContentStore {
    /// Load the on-disk caches. A missing or unreadable file yields an
    /// empty list so the site still renders.
    pub fn load(dir: &Path) -> Self {
        let gallery = read_cache(dir, Section::Gallery);
        let testimonials = read_cache(dir, Section::Testimonials);
        Self {
            dir: dir.to_path_buf(),
            gallery: RwLock::new(gallery),
            testimonials: RwLock::new(testimonials),
        }
    }

    pub async fn get(&self, section: Section) -> Value {
        match section {
            Section::Gallery => self.gallery.read().await.clone(),
            Section::Testimonials => self.testimonials.read().await.clone(),
        }
    }

    async fn set(&self, section: Section, value: Value) {
        match section {
            Section::Gallery => *self.gallery.write().await = value,
            Section::Testimonials => *self.testimonials.write().await = value,
        }
    }

    /// Re-read both sections from the disk caches.
    pub async fn refresh_from_disk(&self) {
        for section in Section::ALL {
            self.set(section, read_cache(&self.dir, section)).await;
        }
    }

    /// Fetch both sections from the CMS, update memory, and rewrite the
    /// disk caches. A per-section fetch failure keeps the previous data.
    pub async fn refresh_from_cms(&self, client: &reqwest::Client, base_url: &str) {
        for section in Section::ALL {
            let url = format!("{}/{}", base_url.trim_end_matches('/'), section.cms_path());
            match fetch_section(client, &url).await {
                Ok(value) => {
                    let path = self.dir.join(section.file_name());
                    match serde_json::to_vec_pretty(&value) {
                        Ok(bytes) => {
                            if let Err(e) = tokio::fs::write(&path, bytes).await {
                                tracing::warn!("Failed to write cache {}: {e}", path.display());
                            }
                        }
                        Err(e) => tracing::warn!("Failed to serialize {url}: {e}"),
                    }
                    self.set(section, value).await;
                    tracing::info!("Refreshed {} from CMS", section.file_name());
                }
                Err(e) => {
                    tracing::warn!("CMS fetch failed for {url}, keeping cached data: {e}");
                }
            }
        }
    }
}

fn read_cache(dir: &Path, section: Section) -> Value {
    let path = dir.join(section.file_name());
    match std::fs::read(&path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Malformed cache {}: {e}", path.display());
                json!([])
            }
        },
        Err(e) => {
            tracing::warn!("No content cache at {}: {e}", path.display());
            json!([])
        }
    }
}

async fn fetch_section(client: &reqwest::Client, url: &str) -> Result<Value, String> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("CMS returned {}", resp.status()));
    }

    resp.json().await.map_err(|e| format!("invalid JSON: {e}"))
}
