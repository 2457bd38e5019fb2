//! Binary asset embedder
//!
//! Reads a table of binary assets, drops each one's header bytes and emits
//! two C artifacts: `binaries.c` with one byte-array constant per asset and
//! `binaries.h` with the matching extern declarations and size defines.
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

use crate::config::AssetEntry;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub const SOURCE_FILE: &str = "binaries.c";
pub const HEADER_FILE: &str = "binaries.h";
pub const HEADER_GUARD: &str = "BINARIES_H";

pub struct EmbedBinaries {
    assets: Vec<AssetEntry>,
    dir: PathBuf,
}

impl EmbedBinaries {
    /// Embedder operating on the current working directory
    pub fn new(assets: Vec<AssetEntry>) -> Self {
        Self::in_dir(assets, ".")
    }

    /// Embedder reading assets from and writing artifacts to `dir`
    pub fn in_dir(assets: Vec<AssetEntry>, dir: impl AsRef<Path>) -> Self {
        Self {
            assets,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Generate both artifacts and write them out.
    ///
    /// Both outputs are built in memory first and each is written exactly
    /// once, so a failing asset read leaves no partially written file.
    pub fn run(&self) -> Result<(), String> {
        let (source, header) = self.generate()?;

        let source_path = self.dir.join(SOURCE_FILE);
        fs::write(&source_path, source)
            .map_err(|e| format!("Failed to write {}: {}", source_path.display(), e))?;

        let header_path = self.dir.join(HEADER_FILE);
        fs::write(&header_path, header)
            .map_err(|e| format!("Failed to write {}: {}", header_path.display(), e))?;

        Ok(())
    }

    /// Generate the (`binaries.c`, `binaries.h`) contents, in table order
    pub fn generate(&self) -> Result<(String, String), String> {
        let mut source = String::from("#include <stdint.h>\n");
        let mut header = format!(
            "#ifndef {guard}\n#define {guard}\n\n#include <stdint.h>\n",
            guard = HEADER_GUARD
        );

        for asset in &self.assets {
            let data = self.read_asset(asset)?;
            let name = array_name(&asset.file);
            debug!("{}: {} bytes after {}-byte header", name, data.len(), asset.skip);

            source.push_str(&format!("uint8_t {}[] = {{", name));
            for byte in &data {
                source.push_str(&format!("{}, ", byte));
            }
            source.push_str("};\n");

            header.push_str(&format!("extern uint8_t {}[];\n", name));
            header.push_str(&format!("#define {}_size {}\n", name, data.len()));
        }

        header.push_str("#endif\n");

        Ok((source, header))
    }

    /// Read one asset and drop its header-skip bytes
    fn read_asset(&self, asset: &AssetEntry) -> Result<Vec<u8>, String> {
        let path = self.dir.join(&asset.file);
        let bytes = fs::read(&path)
            .map_err(|e| format!("Failed to read asset {}: {}", path.display(), e))?;

        if asset.skip > bytes.len() {
            return Err(format!(
                "Asset {} is {} bytes, smaller than its {}-byte header",
                path.display(),
                bytes.len(),
                asset.skip
            ));
        }

        Ok(bytes[asset.skip..].to_vec())
    }
}

/// Derive the C constant name from an asset file name.
///
/// Strips the extension by delimiter, not by character count, so names
/// with extensions other than 3 characters come out intact.
fn array_name(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or(file)
        .to_string()
}
