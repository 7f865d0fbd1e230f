use seq_types::KindDescriptor;
use serde_derive::{Deserialize, Serialize};

/* ============================================================================
   Import Source Types
   ============================================================================ */

/* Where an imported catalog comes from */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ImportSource {
    /* Local file path import */
    Path {
        /* Relative or absolute path to the catalog file */
        path: String,
    },
}

impl ImportSource {
    /* Get the path for path imports */
    pub fn path(&self) -> &str {
        match self {
            ImportSource::Path { path } => path,
        }
    }

    /* Get a canonical identifier for this import source */
    pub fn canonical_id(&self) -> String {
        match self {
            ImportSource::Path { path } => format!("path:{}", path),
        }
    }
}

/* ============================================================================
   Catalog File
   ============================================================================ */

/* Catalog-level metadata */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogMetadata {
    /* Package name (e.g., "syntax.collections") */
    #[serde(default)]
    pub package: String,

    #[serde(default)]
    pub description: Option<String>,

    /* `use` paths emitted at the top of the generated unit */
    #[serde(default)]
    pub uses: Vec<String>,

    /* Other catalog files whose kinds come before this file's kinds */
    #[serde(default)]
    pub imports: Vec<ImportSource>,
}

/* One catalog file on disk */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogFile {
    #[serde(default)]
    pub catalog: CatalogMetadata,

    #[serde(default)]
    pub kinds: Vec<KindDescriptor>,
}

impl CatalogFile {
    /* Parse a catalog file from YAML text */
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yml::from_str(contents)?)
    }

    pub fn package(&self) -> &str {
        &self.catalog.package
    }

    pub fn description(&self) -> Option<&str> {
        self.catalog.description.as_deref()
    }

    pub fn imports(&self) -> &[ImportSource] {
        &self.catalog.imports
    }

    pub fn uses(&self) -> &[String] {
        &self.catalog.uses
    }

    pub fn get_kinds(&self) -> &[KindDescriptor] {
        &self.kinds
    }
}
