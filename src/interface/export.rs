use std::io;
use std::path::Path;

use crate::error::Result;
use crate::models::MenuItem;
use crate::query::calculations::price_change;

const HEADER: [&str; 8] = [
    "id",
    "category",
    "name",
    "old_price",
    "new_price",
    "diff",
    "percent",
    "high_impact",
];

/// Write items and their derived values as CSV rows.
pub fn write_items<W: io::Write>(wtr: &mut csv::Writer<W>, items: &[&MenuItem]) -> Result<()> {
    wtr.write_record(HEADER)?;

    for item in items {
        let change = price_change(item);
        wtr.write_record([
            item.id.to_string(),
            item.category.clone(),
            item.name.clone(),
            item.old_price.to_string(),
            item.new_price.to_string(),
            change.diff.to_string(),
            change.percent,
            change.is_high_impact.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export items to a CSV file.
pub fn write_csv(items: &[&MenuItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_items(&mut wtr, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_rows() {
        let items = vec![
            MenuItem::new(1, "Supa", "Borscht", 100.0, 120.0),
            MenuItem::new(2, "Main", "Khachapuri, large", 300.0, 345.0),
        ];
        let refs: Vec<&MenuItem> = items.iter().collect();

        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_items(&mut wtr, &refs).unwrap();
        let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines[0], "id,category,name,old_price,new_price,diff,percent,high_impact");
        assert_eq!(lines[1], "1,Supa,Borscht,100,120,20,20.0,true");
        assert_eq!(lines[2], "2,Main,\"Khachapuri, large\",300,345,45,15.0,true");
    }

    #[test]
    fn test_csv_file() {
        let items = vec![MenuItem::new(1, "Bar", "Water", 0.0, 50.0)];
        let refs: Vec<&MenuItem> = items.iter().collect();

        let file = NamedTempFile::new().unwrap();
        write_csv(&refs, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][6], "0");
        assert_eq!(&rows[0][7], "false");
    }
}
