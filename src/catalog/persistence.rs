use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::MenuItem;

/// Load menu items from a JSON array file.
///
/// Order is preserved; duplicate ids are left for `Catalog::new` to reject.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;
    Ok(items)
}

/// Write menu items to a JSON array file.
pub fn save_items<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_preserves_order() {
        let json = r#"[
            {"id": 2, "category": "Main", "name": "Khachapuri", "oldPrice": 300, "newPrice": 345},
            {"id": 1, "category": "Supa", "name": "Borscht", "oldPrice": 100, "newPrice": 120}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_items(file.path()).unwrap();
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_save_and_reload() {
        let items = vec![MenuItem::new(1, "Супы", "Харчо", 390.0, 450.0)];

        let file = NamedTempFile::new().unwrap();
        save_items(file.path(), &items).unwrap();

        let reloaded = load_items(file.path()).unwrap();
        assert_eq!(reloaded, items);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": 1}]").unwrap();
        assert!(load_items(file.path()).is_err());
    }
}
