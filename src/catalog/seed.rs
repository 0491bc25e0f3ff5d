//! Catalog seeding from a TOML file.
//!
//! ```toml
//! [[cameras]]
//! brand = "Nikon"
//! model = "Z6 II"
//! score = 8.7
//!
//! [[telescopes]]
//! brand = "Celestron"
//! model = "NexStar 8SE"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::repository::CatalogRepository;
use super::types::{EquipmentKind, NewEquipmentItem};
use crate::{LentilleError, Result};

/// Items to insert, grouped by kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub cameras: Vec<NewEquipmentItem>,
    #[serde(default)]
    pub telescopes: Vec<NewEquipmentItem>,
}

impl CatalogSeed {
    /// Read a seed file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse seed data from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| LentilleError::Config(format!("catalog seed: {e}")))
    }

    fn items(&self, kind: EquipmentKind) -> &[NewEquipmentItem] {
        match kind {
            EquipmentKind::Camera => &self.cameras,
            EquipmentKind::Telescope => &self.telescopes,
        }
    }
}

/// Insert seed items into empty catalog tables.
///
/// A kind whose table already has rows is left untouched. Returns the
/// number of inserted rows.
pub async fn apply_seed(repo: &CatalogRepository<'_>, seed: &CatalogSeed) -> Result<usize> {
    let mut inserted = 0;
    for kind in [EquipmentKind::Camera, EquipmentKind::Telescope] {
        if repo.count(kind).await? > 0 {
            debug!(kind = %kind, "Catalog table already populated, skipping seed");
            continue;
        }
        for item in seed.items(kind) {
            repo.create_item(kind, item).await?;
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// Load a seed file and apply it.
pub async fn seed_catalog<P: AsRef<Path>>(repo: &CatalogRepository<'_>, path: P) -> Result<usize> {
    let seed = CatalogSeed::load(path.as_ref())?;
    let inserted = apply_seed(repo, &seed).await?;
    info!(
        path = %path.as_ref().display(),
        inserted,
        "Catalog seeded"
    );
    Ok(inserted)
}
