//! File-backed activity catalog.
//!
//! Loads the ordered activity list once, from JSON or YAML chosen by file
//! extension, and serves it from memory afterwards.

use std::path::Path;

use tracing::info;

use super::{CatalogLoadError, InMemoryActivityCatalog};
use crate::domain::catalog::Activity;
use crate::domain::foundation::ActivityId;
use crate::ports::ActivityCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Result<Self, CatalogLoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            _ => Err(CatalogLoadError::UnsupportedFormat { extension }),
        }
    }
}

/// Catalog read from a file on disk.
#[derive(Debug, Clone)]
pub struct FileActivityCatalog {
    inner: InMemoryActivityCatalog,
}

impl FileActivityCatalog {
    /// Reads and validates the catalog at `path`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat` for extensions other than json, yaml, yml
    /// - `Io` if the file cannot be read
    /// - `Parse` if the content does not match the catalog shape
    /// - `InvalidActivity` / `DuplicateId` as for the in-memory catalog
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;

        let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let activities: Vec<Activity> = match format {
            CatalogFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
            CatalogFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        }
        .map_err(|message| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        let inner = InMemoryActivityCatalog::new(activities)?;
        info!(path = %path.display(), activities = inner.len(), "Activity catalog loaded");
        Ok(Self { inner })
    }
}

impl ActivityCatalog for FileActivityCatalog {
    fn get_all(&self) -> Vec<Activity> {
        self.inner.get_all()
    }

    fn find_by_id(&self, id: &ActivityId) -> Option<Activity> {
        self.inner.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn file_with(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const JSON_CATALOG: &str = r#"[
        {
            "id": "A",
            "time": "09:00",
            "title": "Opening ceremony",
            "description": "Main hall",
            "status": "open",
            "statusColor": "green",
            "priceOptions": [
                { "id": "standard", "label": "Standard", "price": 5000, "currency": "XOF" },
                { "id": "vip", "label": "VIP", "price": 50000, "currency": "XOF" }
            ]
        },
        {
            "id": "D",
            "time": "12:00",
            "title": "Lunch",
            "description": "",
            "status": "open",
            "statusColor": "green",
            "priceOptions": null
        }
    ]"#;

    const YAML_CATALOG: &str = r#"
- id: E
  title: Gala dinner
  statusColor: orange
  priceOptions:
    - id: gratuit
      label: Gratuit
      price: 0
      currency: XOF
"#;

    #[test]
    fn loads_json_catalog() {
        let file = file_with(".json", JSON_CATALOG);
        let catalog = FileActivityCatalog::load(file.path()).unwrap();

        let all = catalog.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "A");
        assert_eq!(all[0].price_options.as_ref().unwrap()[1].price, 50_000);
        assert!(all[1].is_included_access());
    }

    #[test]
    fn loads_yaml_catalog_with_defaults() {
        let file = file_with(".yml", YAML_CATALOG);
        let catalog = FileActivityCatalog::load(file.path()).unwrap();

        let e = catalog.find_by_id(&ActivityId::new("E").unwrap()).unwrap();
        assert!(e.is_all_free());
        assert_eq!(e.status_color, "orange");
        assert_eq!(e.time, "");
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = file_with(".toml", "");
        assert!(matches!(
            FileActivityCatalog::load(file.path()),
            Err(CatalogLoadError::UnsupportedFormat { extension }) if extension == "toml"
        ));
    }

    #[test]
    fn reports_parse_errors() {
        let file = file_with(".json", "{ not a list");
        assert!(matches!(
            FileActivityCatalog::load(file.path()),
            Err(CatalogLoadError::Parse { .. })
        ));
    }

    #[test]
    fn reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("catalog.json");
        assert!(matches!(
            FileActivityCatalog::load(&missing),
            Err(CatalogLoadError::Io { .. })
        ));
    }

    #[test]
    fn rejects_empty_price_option_list() {
        let file = file_with(
            ".json",
            r#"[{ "id": "X", "title": "Workshop", "priceOptions": [] }]"#,
        );
        assert!(matches!(
            FileActivityCatalog::load(file.path()),
            Err(CatalogLoadError::InvalidActivity { .. })
        ));
    }
}
