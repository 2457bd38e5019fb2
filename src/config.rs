//! Asset table configuration for the embedder
//!
//! Holds the list of (file name, header-skip) pairs the embedder processes.
//!
//! This program is unlicensed and dedicated to the public domain.
//! Developed by Tommy Olsen.

/// Application version
pub const VERSION: &str = "0.9";

/// One binary asset to embed: its file name and how many leading bytes
/// (a load address or other file-format header) to drop before embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub file: String,
    pub skip: usize,
}

impl AssetEntry {
    pub fn new(file: impl Into<String>, skip: usize) -> Self {
        Self {
            file: file.into(),
            skip,
        }
    }

    /// Parse a `<file>=<skip>` command-line spec
    pub fn parse(spec: &str) -> Result<Self, String> {
        let (file, skip) = spec
            .split_once('=')
            .ok_or_else(|| format!("Invalid asset spec (expected <file>=<skip>): {}", spec))?;

        if file.is_empty() {
            return Err(format!("Invalid asset spec (empty file name): {}", spec));
        }

        let skip = skip
            .parse::<usize>()
            .map_err(|_| format!("Invalid header-skip count in asset spec: {}", spec))?;

        Ok(Self::new(file, skip))
    }
}

/// The stock asset table of the EasyFlash builder.
///
/// The PRG files carry a 2-byte load address header; the raw .bin files
/// are embedded whole. Order matters: the generated arrays must appear in
/// this order in both output files.
pub fn default_asset_table() -> Vec<AssetEntry> {
    vec![
        AssetEntry::new("kapi_hi.prg", 2),
        AssetEntry::new("kapi_nm.prg", 2),
        AssetEntry::new("kapi_lo.prg", 2),
        AssetEntry::new("launcher_hi.bin", 0),
        AssetEntry::new("startup.bin", 0),
        AssetEntry::new("sprites.bin", 0),
    ]
}
