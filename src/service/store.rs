//! # Character Store
//!
//! The persistence boundary. Characters and guildcard books are stored as
//! the exact fixed-size blobs the client uses, so the store never needs to
//! know their layout; it only hands bytes back to the record decoders.
//!
//! `MemoryStore` keeps blobs in a `HashMap` behind an `RwLock` and is the
//! reference implementation used by tests and single-process setups.

use std::collections::HashMap;
use std::sync::RwLock;

use bytes::Bytes;
use tracing::{debug, instrument};

use crate::core::record::Record;
use crate::error::{constants, ProtocolError, Result};
use crate::records::{CharacterPreview, FullCharacter, GuildcardData};

/// Number of character slots per account
pub const CHARACTER_SLOTS: u8 = 4;

/// Storage for per-account character and guildcard blobs.
pub trait CharacterStore: Send + Sync {
    /// Load the character in `slot`, if one exists.
    fn load_character(&self, guildcard: u32, slot: u8) -> Result<Option<FullCharacter>>;

    /// Create or replace the character in `slot`.
    fn save_character(&self, guildcard: u32, slot: u8, character: &FullCharacter) -> Result<()>;

    /// Remove the character in `slot`. Returns whether one was present.
    fn delete_character(&self, guildcard: u32, slot: u8) -> Result<bool>;

    /// Load the account's guildcard book.
    fn load_guildcards(&self, guildcard: u32) -> Result<Option<GuildcardData>>;

    /// Create or replace the account's guildcard book.
    fn save_guildcards(&self, guildcard: u32, data: &GuildcardData) -> Result<()>;

    /// Selection menu previews for every occupied slot, in slot order.
    fn previews(&self, guildcard: u32) -> Result<Vec<(u8, CharacterPreview)>> {
        let mut out = Vec::new();
        for slot in 0..CHARACTER_SLOTS {
            if let Some(character) = self.load_character(guildcard, slot)? {
                out.push((slot, character.preview()));
            }
        }
        Ok(out)
    }
}

fn check_slot(slot: u8) -> Result<()> {
    if slot >= CHARACTER_SLOTS {
        return Err(ProtocolError::Custom(format!(
            "Character slot {slot} out of range (0-{})",
            CHARACTER_SLOTS - 1
        )));
    }
    Ok(())
}

#[derive(Default)]
struct Blobs {
    characters: HashMap<(u32, u8), Bytes>,
    guildcards: HashMap<u32, Bytes>,
}

/// In-process character store.
#[derive(Default)]
pub struct MemoryStore {
    blobs: RwLock<Blobs>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored bytes for a character, exactly as persisted.
    pub fn character_blob(&self, guildcard: u32, slot: u8) -> Result<Option<Bytes>> {
        Ok(self.read_lock()?.characters.get(&(guildcard, slot)).cloned())
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, Blobs>> {
        self.blobs
            .write()
            .map_err(|_| ProtocolError::Custom(constants::ERR_STORE_WRITE_LOCK.to_string()))
    }

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, Blobs>> {
        self.blobs
            .read()
            .map_err(|_| ProtocolError::Custom(constants::ERR_STORE_READ_LOCK.to_string()))
    }
}

impl CharacterStore for MemoryStore {
    #[instrument(skip(self), level = "debug")]
    fn load_character(&self, guildcard: u32, slot: u8) -> Result<Option<FullCharacter>> {
        check_slot(slot)?;
        let blob = self.read_lock()?.characters.get(&(guildcard, slot)).cloned();
        blob.map(|bytes| FullCharacter::from_bytes(&bytes)).transpose()
    }

    #[instrument(skip(self, character), level = "debug")]
    fn save_character(&self, guildcard: u32, slot: u8, character: &FullCharacter) -> Result<()> {
        check_slot(slot)?;
        let blob = character.to_bytes();
        self.write_lock()?.characters.insert((guildcard, slot), blob);
        debug!(size = FullCharacter::SIZE, "character saved");
        Ok(())
    }

    fn delete_character(&self, guildcard: u32, slot: u8) -> Result<bool> {
        check_slot(slot)?;
        Ok(self
            .write_lock()?
            .characters
            .remove(&(guildcard, slot))
            .is_some())
    }

    fn load_guildcards(&self, guildcard: u32) -> Result<Option<GuildcardData>> {
        let blob = self.read_lock()?.guildcards.get(&guildcard).cloned();
        blob.map(|bytes| GuildcardData::from_bytes(&bytes)).transpose()
    }

    fn save_guildcards(&self, guildcard: u32, data: &GuildcardData) -> Result<()> {
        let blob = data.to_bytes();
        self.write_lock()?.guildcards.insert(guildcard, blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::utf16_fixed;

    #[test]
    fn test_save_and_load_character() {
        let store = MemoryStore::new();
        let mut character = FullCharacter::with_default_config();
        character.guildcard = 42_000_001;
        character.character.level = 10;
        character.unknown5[17] = 0x5A;

        store.save_character(42_000_001, 1, &character).expect("save");
        let blob = store
            .character_blob(42_000_001, 1)
            .expect("blob")
            .expect("stored");
        assert_eq!(blob.len(), FullCharacter::SIZE);

        let loaded = store
            .load_character(42_000_001, 1)
            .expect("load")
            .expect("present");
        assert_eq!(loaded, character);
        assert!(store.load_character(42_000_001, 0).expect("load").is_none());
    }

    #[test]
    fn test_previews_in_slot_order() {
        let store = MemoryStore::new();
        for slot in [3u8, 0] {
            let mut character = FullCharacter::default();
            character.character.level = u32::from(slot) + 1;
            character.character.info.name = utf16_fixed("Slot");
            store.save_character(7, slot, &character).expect("save");
        }

        let previews = store.previews(7).expect("previews");
        let slots: Vec<u8> = previews.iter().map(|(slot, _)| *slot).collect();
        assert_eq!(slots, vec![0, 3]);
        assert_eq!(previews[1].1.level, 4);
    }

    #[test]
    fn test_slot_bounds() {
        let store = MemoryStore::new();
        assert!(store.load_character(1, CHARACTER_SLOTS).is_err());
        assert!(!store.delete_character(1, 0).expect("delete"));
    }

    #[test]
    fn test_guildcard_book_roundtrip() {
        let store = MemoryStore::new();
        let mut book = GuildcardData::default();
        book.entries[0].guildcard = 42_000_002;
        book.blocked[100] = 1;
        store.save_guildcards(42_000_001, &book).expect("save");
        let loaded = store
            .load_guildcards(42_000_001)
            .expect("load")
            .expect("present");
        assert_eq!(loaded, book);
    }
}
