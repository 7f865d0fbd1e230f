use seq_types::{KindCatalog, KindDescriptor};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::file::{CatalogFile, ImportSource};

/* Import resolver for loading and merging imported catalog files */
#[derive(Debug)]
pub struct ImportResolver {
    /* Track loaded files to detect repeated and circular imports */
    loaded_files: HashSet<PathBuf>,

    /* Include directories for searching imports */
    include_dirs: Vec<PathBuf>,

    /* All collected kind descriptors, in load order */
    all_kinds: Vec<KindDescriptor>,

    /* All collected `use` paths, first occurrence wins */
    all_uses: Vec<String>,

    /* All loaded catalog files */
    all_files: Vec<CatalogFile>,

    /* Map from package name to the kinds it declares */
    package_kinds: HashMap<String, Vec<String>>,
}

impl ImportResolver {
    /* Create a new import resolver with the given include directories */
    pub fn new(include_dirs: Vec<PathBuf>) -> Self {
        Self {
            loaded_files: HashSet::new(),
            include_dirs,
            all_kinds: Vec::new(),
            all_uses: Vec::new(),
            all_files: Vec::new(),
            package_kinds: HashMap::new(),
        }
    }

    /* Resolve an import path relative to a base file or include directories */
    fn resolve_import_path(&self, import_path: &str, base_file: &Path) -> anyhow::Result<PathBuf> {
        /* First try relative to the base file's directory */
        if let Some(parent) = base_file.parent() {
            let relative_path = parent.join(import_path);
            if relative_path.exists() {
                return Ok(relative_path.canonicalize()?);
            }
        }

        /* Then try each include directory */
        for include_dir in &self.include_dirs {
            let include_path = include_dir.join(import_path);
            if include_path.exists() {
                return Ok(include_path.canonicalize()?);
            }
        }

        anyhow::bail!(
            "Import '{}' not found relative to '{}' or in include directories",
            import_path,
            base_file.display()
        )
    }

    /* Load a catalog file and recursively load its imports first */
    pub fn load_file_with_imports(&mut self, file_path: &Path) -> anyhow::Result<()> {
        /* Canonicalize the path to detect duplicates */
        let canonical_path = file_path
            .canonicalize()
            .with_context(|| format!("Catalog file '{}' not found", file_path.display()))?;

        /* Skip if already loaded */
        if self.loaded_files.contains(&canonical_path) {
            debug!(file = %file_path.display(), "skipping already loaded catalog");
            return Ok(());
        }

        /* Mark as loaded before processing imports so cycles terminate */
        self.loaded_files.insert(canonical_path);

        debug!(file = %file_path.display(), "loading catalog");

        let contents = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read '{}'", file_path.display()))?;
        let catalog_file = CatalogFile::from_yaml(&contents)
            .with_context(|| format!("Failed to parse '{}'", file_path.display()))?;

        debug!(
            package = catalog_file.package(),
            kinds = catalog_file.get_kinds().len(),
            imports = catalog_file.imports().len(),
            "parsed catalog"
        );

        for import in catalog_file.imports() {
            match import {
                ImportSource::Path { path } => {
                    debug!(import = %path, "resolving path import");
                    let import_path = self.resolve_import_path(path, file_path)?;
                    self.load_file_with_imports(&import_path)?;
                }
            }
        }

        /* Add kinds from this file and register them with the package */
        let package_name = catalog_file.package().to_string();
        let kind_names: Vec<String> = catalog_file
            .get_kinds()
            .iter()
            .map(|k| k.name.clone())
            .collect();

        self.all_kinds.extend(catalog_file.get_kinds().iter().cloned());
        for use_path in catalog_file.uses() {
            if !self.all_uses.contains(use_path) {
                self.all_uses.push(use_path.clone());
            }
        }

        self.package_kinds
            .entry(package_name)
            .or_default()
            .extend(kind_names);

        self.all_files.push(catalog_file);

        Ok(())
    }

    /* Get all collected kind descriptors */
    pub fn get_all_kinds(&self) -> &[KindDescriptor] {
        &self.all_kinds
    }

    /* Get all loaded catalog files */
    pub fn get_all_files(&self) -> &[CatalogFile] {
        &self.all_files
    }

    /* Get the number of loaded files */
    pub fn loaded_file_count(&self) -> usize {
        self.loaded_files.len()
    }

    /* Get the package name for a given kind */
    pub fn get_package_for_kind(&self, kind_name: &str) -> Option<String> {
        self.package_kinds
            .iter()
            .find(|(_, kinds)| kinds.iter().any(|k| k == kind_name))
            .map(|(package, _)| package.clone())
    }

    /* Get all packages, sorted */
    pub fn get_packages(&self) -> Vec<String> {
        let mut packages: Vec<String> = self.package_kinds.keys().cloned().collect();
        packages.sort();
        packages
    }

    /* Merge everything loaded so far into one ordered catalog */
    pub fn to_catalog(&self) -> KindCatalog {
        KindCatalog {
            uses: self.all_uses.clone(),
            kinds: self.all_kinds.clone(),
        }
    }
}

/* ============================================================================
   Tests
   ============================================================================ */
