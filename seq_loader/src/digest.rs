/* Catalog fingerprinting */

use seq_types::KindCatalog;
use sha2::{Digest, Sha256};

/* SHA-256 over the canonical YAML rendering of the catalog, lowercase hex */
pub fn catalog_digest(catalog: &KindCatalog) -> anyhow::Result<String> {
    let yaml = catalog.to_yaml()?;
    let hash = Sha256::digest(yaml.as_bytes());
    Ok(format!("{:x}", hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use seq_types::KindDescriptor;

    #[test]
    fn test_digest_is_deterministic() {
        let catalog = KindCatalog::new(vec![KindDescriptor::new("TokenList", "Token").atomic()]);
        let first = catalog_digest(&catalog).unwrap();
        let second = catalog_digest(&catalog.clone()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_digest_tracks_traits() {
        let plain = KindCatalog::new(vec![KindDescriptor::new("ArrayElementList", "ArrayElement")]);
        let separated = KindCatalog::new(vec![
            KindDescriptor::new("ArrayElementList", "ArrayElement").trailing_separator(),
        ]);
        assert_ne!(catalog_digest(&plain).unwrap(), catalog_digest(&separated).unwrap());
    }
}
