use crate::model::suit::Suit;
use crate::model::tile::Tile;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

/// Bidirectional mapping between external tile codes and tile values.
///
/// The mapping is a bijection over the configured tile set; both directions
/// agree by construction. A catalog is built once (from the standard table
/// or a resource file) and passed explicitly to whatever needs to translate
/// codes at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TileCatalog {
    by_code: HashMap<String, Tile>,
    by_tile: HashMap<Tile, String>,
}

#[derive(Debug)]
pub enum CatalogError {
    UnknownCode(String),
    UnknownTile(Tile),
    DuplicateCode(String),
    DuplicateTile(String),
    InvalidEntry {
        code: String,
        suit: String,
        rank: u8,
    },
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownCode(code) => write!(f, "unknown tile code '{code}'"),
            CatalogError::UnknownTile(tile) => write!(f, "tile {tile} has no code"),
            CatalogError::DuplicateCode(code) => {
                write!(f, "tile code '{code}' appears more than once")
            }
            CatalogError::DuplicateTile(code) => {
                write!(f, "tile code '{code}' maps to an already-mapped tile")
            }
            CatalogError::InvalidEntry { code, suit, rank } => {
                write!(f, "entry '{code}' has invalid suit/rank pair ({suit}, {rank})")
            }
            CatalogError::Io(err) => write!(f, "I/O error: {err}"),
            CatalogError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        CatalogError::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        CatalogError::Json(value)
    }
}

impl TileCatalog {
    /// The default catalog over the full 43-value universe, using each
    /// tile's display form as its code.
    pub fn standard() -> Self {
        let mut by_code = HashMap::new();
        let mut by_tile = HashMap::new();
        for tile in Tile::all() {
            let code = tile.to_string();
            by_code.insert(code.clone(), tile);
            by_tile.insert(tile, code);
        }
        Self { by_code, by_tile }
    }

    /// Builds a catalog from `(code, (suit name, rank))` entries, rejecting
    /// malformed pairs and anything that would break the bijection.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, (String, u8))>,
    {
        let mut by_code = HashMap::new();
        let mut by_tile = HashMap::new();
        for (code, (suit_name, rank)) in entries {
            let tile = Suit::from_name(&suit_name)
                .and_then(|suit| Tile::new(suit, rank))
                .ok_or_else(|| CatalogError::InvalidEntry {
                    code: code.clone(),
                    suit: suit_name.clone(),
                    rank,
                })?;
            if by_code.contains_key(&code) {
                return Err(CatalogError::DuplicateCode(code));
            }
            if by_tile.contains_key(&tile) {
                return Err(CatalogError::DuplicateTile(code));
            }
            by_code.insert(code.clone(), tile);
            by_tile.insert(tile, code);
        }
        Ok(Self { by_code, by_tile })
    }

    /// Parses the on-disk resource format: a JSON object mapping code
    /// strings to `[suit name, rank]` pairs.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, (String, u8)> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn tile(&self, code: &str) -> Result<Tile, CatalogError> {
        self.by_code
            .get(code)
            .copied()
            .ok_or_else(|| CatalogError::UnknownCode(code.to_string()))
    }

    pub fn code(&self, tile: Tile) -> Result<&str, CatalogError> {
        self.by_tile
            .get(&tile)
            .map(String::as_str)
            .ok_or(CatalogError::UnknownTile(tile))
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.by_tile.keys().copied()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.by_code.keys().map(String::as_str)
    }
}
