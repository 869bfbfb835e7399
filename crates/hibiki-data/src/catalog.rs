use std::path::PathBuf;

use reqwest::Client;
use url::Url;

use hibiki_core::section::{Section, SectionData};

use crate::error::DataError;

/// Where the catalog datasets live.
#[derive(Debug, Clone)]
pub enum SourceBase {
    /// An http(s) endpoint serving the dataset files.
    Remote(Url),
    /// A local directory containing the dataset files.
    Local(PathBuf),
}

impl SourceBase {
    /// Interpret a base locator string: http(s) URLs become remote
    /// sources, anything else is treated as a directory path.
    pub fn parse(base: &str) -> Self {
        match Url::parse(base) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
            _ => Self::Local(PathBuf::from(base)),
        }
    }
}

/// Client for fetching catalog datasets.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base: SourceBase,
    http: Client,
}

impl CatalogClient {
    pub fn new(base: SourceBase) -> Self {
        Self {
            base,
            http: Client::new(),
        }
    }

    /// Fetch and decode one section's dataset.
    ///
    /// Non-success HTTP status, I/O failure, and malformed JSON are all
    /// errors; the caller decides how to surface them.
    pub async fn fetch_section(&self, section: Section) -> Result<SectionData, DataError> {
        let bytes = self.fetch_resource(section.resource()).await?;
        decode_section(section, &bytes)
    }

    /// Never-failing variant of [`fetch_section`](Self::fetch_section):
    /// logs the failure and yields the empty section so rendering can
    /// proceed with zero items.
    pub async fn fetch_section_or_empty(&self, section: Section) -> SectionData {
        match self.fetch_section(section).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("failed to fetch {}: {e}", section.resource());
                SectionData::empty(section)
            }
        }
    }

    async fn fetch_resource(&self, resource: &str) -> Result<Vec<u8>, DataError> {
        match &self.base {
            SourceBase::Remote(base) => {
                let url = base.join(resource)?;
                let resp = self.http.get(url).send().await?;
                if !resp.status().is_success() {
                    return Err(DataError::Status {
                        resource: resource.to_string(),
                        status: resp.status().as_u16(),
                    });
                }
                Ok(resp.bytes().await?.to_vec())
            }
            SourceBase::Local(dir) => Ok(tokio::fs::read(dir.join(resource)).await?),
        }
    }
}

fn decode_section(section: Section, bytes: &[u8]) -> Result<SectionData, DataError> {
    let data = match section {
        Section::Anime => serde_json::from_slice(bytes).map(SectionData::Anime),
        Section::Manga => serde_json::from_slice(bytes).map(SectionData::Manga),
        Section::Reviews => serde_json::from_slice(bytes).map(SectionData::Reviews),
        Section::Fights => serde_json::from_slice(bytes).map(SectionData::Fights),
        Section::Motivation => serde_json::from_slice(bytes).map(SectionData::Motivation),
    };
    data.map_err(|e| DataError::Decode {
        resource: section.resource().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn local_client(dir: &TempDir) -> CatalogClient {
        CatalogClient::new(SourceBase::Local(dir.path().to_path_buf()))
    }

    fn write_resource(dir: &TempDir, section: Section, content: &str) {
        std::fs::write(dir.path().join(section.resource()), content).unwrap();
    }

    #[test]
    fn test_base_parse() {
        assert!(matches!(
            SourceBase::parse("https://example.com/datasets/"),
            SourceBase::Remote(_)
        ));
        assert!(matches!(SourceBase::parse("data"), SourceBase::Local(_)));
        assert!(matches!(
            SourceBase::parse("/srv/hibiki/data"),
            SourceBase::Local(_)
        ));
    }

    #[tokio::test]
    async fn test_fetch_local_section_in_order() {
        let dir = TempDir::new().unwrap();
        write_resource(
            &dir,
            Section::Motivation,
            r#"[
                {"characterName": "Kamina", "animeTitle": "Gurren Lagann",
                 "quoteText": "Believe in the you that believes in yourself."},
                {"characterName": "All Might", "animeTitle": "My Hero Academia",
                 "quoteText": "It's fine now. Why? Because I am here!"}
            ]"#,
        );

        let data = local_client(&dir)
            .fetch_section(Section::Motivation)
            .await
            .unwrap();
        let SectionData::Motivation(quotes) = data else {
            panic!("wrong section kind");
        };
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].character_name, "Kamina");
        assert_eq!(quotes[1].character_name, "All Might");
        assert!(quotes[0].character_image.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, Section::Anime, "{not json");

        let err = local_client(&dir)
            .fetch_section(Section::Anime)
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_missing_resource_is_io_error() {
        let dir = TempDir::new().unwrap();

        let err = local_client(&dir)
            .fetch_section(Section::Fights)
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }

    #[tokio::test]
    async fn test_or_empty_swallows_failure() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, Section::Reviews, "[[[");

        let data = local_client(&dir)
            .fetch_section_or_empty(Section::Reviews)
            .await;
        assert_eq!(data.section(), Section::Reviews);
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_remote_connection_failure_is_http_error() {
        // Nothing listens on this port; reqwest fails at the connection
        // level, which must surface as Http, not a panic.
        let client = CatalogClient::new(SourceBase::parse("http://127.0.0.1:9"));
        let err = client.fetch_section(Section::Anime).await.unwrap_err();
        assert!(matches!(err, DataError::Http(_)));
    }
}
