//! Zone lookup by mesh code, or by an approximate geodetic position.
//!
//! The lookup table is read from a plain text parameter file with one
//! `meshCode,name,zone` record per line, traditionally stored in a legacy
//! Japanese encoding (Shift_JIS by default).
use crate::internal::*;
use encoding_rs::Encoding;
use std::path::Path;
use std::path::PathBuf;

mod parser;

/// Zone number reported when a position does not match any mesh
pub const NOT_FOUND: u8 = 0;

/// Default parameter file encoding
pub const DEFAULT_ENCODING: &str = "Shift_JIS";

/// Default parameter file name
pub const DEFAULT_FILE_NAME: &str = "mesh_zone.csv";

/// One record of the mesh parameter table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshEntry {
    pub code: u32,
    pub name: String,
    pub zone: u8,
}

/// The lookup key for a geodetic position (degrees): the decimal digits of
/// ⌊1.5·lat⌋ followed by those of ⌊lon⌋ - 100, read as one integer.
///
/// Mirrors the first level of the standard grid square code, [Mic73](crate::Bibliography::Mic73).
/// Positions giving a negative component, e.g. west of 100°E, have no key.
/// Neither have non-finite positions, nor keys too large for a `u32`.
#[must_use]
pub fn position_key(latitude: f64, longitude: f64) -> Option<u32> {
    let b = (latitude * 1.5).floor();
    let l = longitude.floor() - 100.;
    let representable = |v: f64| (0. ..=f64::from(u32::MAX)).contains(&v);
    if !representable(b) || !representable(l) {
        return None;
    }
    format!("{}{}", b as u32, l as u32).parse().ok()
}

// ----- T H E   R E S O L V E R -------------------------------------------------------

/// The mesh to zone lookup table, and where to load it from.
///
/// Load once, read many: (re)loading needs `&mut self`, so concurrent readers
/// must be serialized against a reload by the owner, e.g. through a lock.
#[derive(Debug)]
pub struct MeshZones {
    path: PathBuf,
    encoding: &'static Encoding,
    entries: BTreeMap<u32, MeshEntry>,
}

impl Default for MeshZones {
    fn default() -> MeshZones {
        MeshZones::new(default_path())
    }
}

impl MeshZones {
    /// An empty resolver, reading from `path` in the default encoding
    pub fn new(path: impl Into<PathBuf>) -> MeshZones {
        MeshZones {
            path: path.into(),
            encoding: encoding_rs::SHIFT_JIS,
            entries: BTreeMap::new(),
        }
    }

    /// A resolver for `path`, loaded right away. Never fails: problems are
    /// logged, and leave the resolver empty.
    pub fn open(path: impl Into<PathBuf>) -> MeshZones {
        let mut zones = MeshZones::new(path);
        zones.load_parameter();
        zones
    }

    // ----- Configuration ---------------------------------------------------------

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// The canonical name of the parameter file encoding
    #[must_use]
    pub fn encoding(&self) -> &'static str {
        self.encoding.name()
    }

    /// Select the parameter file encoding by its label, e.g. "Shift_JIS",
    /// "EUC-JP" or "UTF-8"
    pub fn set_encoding(&mut self, label: &str) -> Result<(), Error> {
        let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) else {
            error!("Mesh parameters: unknown encoding '{label}'");
            return Err(Error::UnknownEncoding(label.to_string()));
        };
        self.encoding = encoding;
        Ok(())
    }

    pub fn with_encoding(mut self, label: &str) -> Result<MeshZones, Error> {
        self.set_encoding(label)?;
        Ok(self)
    }

    // ----- Loading ---------------------------------------------------------------

    /// Read the parameter file, replacing the current table entirely.
    ///
    /// A file that cannot be read, or that is not valid in the selected
    /// encoding, is an error, and the current table is left untouched.
    pub fn try_load(&mut self) -> Result<usize, Error> {
        let bytes = std::fs::read(&self.path)?;
        let (text, actual, malformed) = self.encoding.decode(&bytes);
        if malformed {
            return Err(Error::BadParam(
                "encoding".to_string(),
                format!("{} is not valid {}", self.path.display(), actual.name()),
            ));
        }
        Ok(self.load_from_str(&text))
    }

    /// Read the parameter file, replacing the current table entirely.
    ///
    /// Never fails: an unreadable file is logged, and the last good table
    /// (initially empty) stays in use. Returns the number of entries.
    pub fn load_parameter(&mut self) -> usize {
        match self.try_load() {
            Ok(n) => n,
            Err(e) => {
                warn!(
                    "Mesh parameters: cannot read {}: {e}. Keeping {} entries",
                    self.path.display(),
                    self.entries.len()
                );
                self.entries.len()
            }
        }
    }

    /// Replace the table by the records in `text`, returning the number of entries
    pub fn load_from_str(&mut self, text: &str) -> usize {
        self.entries = parser::parse(text);
        debug!("Mesh parameters: {} entries", self.entries.len());
        self.entries.len()
    }

    // ----- Lookup ----------------------------------------------------------------

    /// Is there anything to look up in?
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, code: u32) -> Option<&MeshEntry> {
        self.entries.get(&code)
    }

    /// The zone of the mesh `code`, if known
    #[must_use]
    pub fn resolve_by_mesh_code(&self, code: u32) -> Option<u8> {
        self.get(code).map(|entry| entry.zone)
    }

    /// The zone of the mesh containing the position (`latitude`, `longitude`),
    /// in degrees, or [`NOT_FOUND`]
    #[must_use]
    pub fn resolve_by_position(&self, latitude: f64, longitude: f64) -> u8 {
        let Some(key) = position_key(latitude, longitude) else {
            return NOT_FOUND;
        };
        trace!("Mesh key for ({latitude}, {longitude}): {key}");
        self.resolve_by_mesh_code(key).unwrap_or(NOT_FOUND)
    }

    /// All known mesh codes, in increasing order
    pub fn mesh_codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = &MeshEntry> {
        self.entries.values()
    }
}

/// Where to look for the parameter file when none is given: `./jprcs`, then
/// the `jprcs` directory under the user's local data directory. The first
/// existing file wins; if there is none, the local one is used.
#[must_use]
pub fn default_path() -> PathBuf {
    let local: PathBuf = [".", "jprcs", DEFAULT_FILE_NAME].iter().collect();
    if local.exists() {
        return local;
    }

    #[cfg(feature = "with_plain")]
    if let Some(mut userpath) = dirs::data_local_dir() {
        userpath.push("jprcs");
        userpath.push(DEFAULT_FILE_NAME);
        if userpath.exists() {
            return userpath;
        }
    }

    local
}

// ----- Tests ---------------------------------------------------------------------
