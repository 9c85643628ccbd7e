use super::MeshEntry;
use crate::internal::*;

/// Parse one `meshCode,name,zone` record.
///
/// Exactly three comma separated fields are expected. The mesh code must be
/// an unsigned integer, the name must be non-empty, and the zone must be one
/// of 1..=19.
pub(super) fn parse_record(line: &str) -> Result<MeshEntry, Error> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [code, name, zone] = fields[..] else {
        return Err(Error::BadParam(
            "record".to_string(),
            format!("expected 3 fields, found {}", fields.len()),
        ));
    };

    let code = code
        .parse::<u32>()
        .map_err(|_| Error::BadParam("meshCode".to_string(), code.to_string()))?;
    if name.is_empty() {
        return Err(Error::BadParam("name".to_string(), String::new()));
    }
    let zone = zone
        .parse::<u8>()
        .ok()
        .filter(|z| (1..=19).contains(z))
        .ok_or_else(|| Error::BadParam("zone".to_string(), zone.to_string()))?;

    Ok(MeshEntry {
        code,
        name: name.to_string(),
        zone,
    })
}

/// Parse a complete parameter file. Malformed records are skipped with a
/// warning; blank lines and `#`-comments are skipped silently.
pub(super) fn parse(text: &str) -> BTreeMap<u32, MeshEntry> {
    let mut entries = BTreeMap::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_record(trimmed) {
            Ok(entry) => {
                if let Some(previous) = entries.insert(entry.code, entry) {
                    warn!(
                        "Mesh parameters, line {}: duplicate mesh code {} replaces '{}'",
                        index + 1,
                        previous.code,
                        previous.name
                    );
                }
            }
            Err(e) => warn!("Mesh parameters, line {}: skipping '{line}': {e}", index + 1),
        }
    }
    entries
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record() -> Result<(), Error> {
        let entry = parse_record("12345,TestMesh,9")?;
        assert_eq!(entry.code, 12345);
        assert_eq!(entry.name, "TestMesh");
        assert_eq!(entry.zone, 9);

        // Whitespace around the fields is tolerated
        let entry = parse_record(" 5339 , 東京 , 9 ")?;
        assert_eq!((entry.code, entry.name.as_str(), entry.zone), (5339, "東京", 9));
        Ok(())
    }

    #[test]
    fn malformed_records() {
        for line in [
            ",,",
            "12345,TestMesh",
            "12345,TestMesh,9,extra",
            "abc,TestMesh,9",
            "-5,TestMesh,9",
            "12345,,9",
            "12345,TestMesh,0",
            "12345,TestMesh,20",
            "12345,TestMesh,nine",
        ] {
            assert!(
                matches!(parse_record(line), Err(Error::BadParam(_, _))),
                "accepted '{line}'"
            );
        }
    }

    #[test]
    fn file() {
        let entries = parse("12345,TestMesh,9\n,,\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries.get(&12345),
            Some(&MeshEntry {
                code: 12345,
                name: "TestMesh".to_string(),
                zone: 9
            })
        );

        let text = "# code,name,zone\r\n\r\n3036,Kagoshima,1\r\n3639,Hachijo,9\r\nbad line\r\n3639,Aogashima,9\r\n";
        let entries = parse(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[&3036].zone, 1);
        // The last of the duplicates wins
        assert_eq!(entries[&3639].name, "Aogashima");
    }
}
