// librc522/src/card/keys.rs

use std::collections::BTreeMap;

use crate::card::trailer::check_sector;
use crate::types::{AuthMode, SectorKey};
use crate::Result;

/// Per-sector authentication keys. Sectors without an entry use the
/// fallback, Key A with the factory transport key unless changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyring {
    fallback: (AuthMode, SectorKey),
    sectors: BTreeMap<u8, (AuthMode, SectorKey)>,
}

impl Keyring {
    pub fn new() -> Self {
        Self::with_fallback(AuthMode::KeyA, SectorKey::DEFAULT)
    }

    pub fn with_fallback(mode: AuthMode, key: SectorKey) -> Self {
        Self {
            fallback: (mode, key),
            sectors: BTreeMap::new(),
        }
    }

    /// Register the key for `sector`, replacing any previous one.
    pub fn set_key(&mut self, sector: u8, mode: AuthMode, key: SectorKey) -> Result<()> {
        self.sectors.insert(check_sector(sector)?, (mode, key));
        Ok(())
    }

    pub fn remove_key(&mut self, sector: u8) -> Option<(AuthMode, SectorKey)> {
        self.sectors.remove(&sector)
    }

    pub fn key_for(&self, sector: u8) -> (AuthMode, SectorKey) {
        self.sectors.get(&sector).copied().unwrap_or(self.fallback)
    }

    /// Sectors with an explicit key.
    pub fn sectors(&self) -> impl Iterator<Item = u8> + '_ {
        self.sectors.keys().copied()
    }
}

impl Default for Keyring {
    fn default() -> Self {
        Self::new()
    }
}
