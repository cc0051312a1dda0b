//! Guildcard book records.

use bytes::{Buf, BufMut};

use crate::core::record::{get_array, get_u16_array, put_u16_slice, Record};

/// Number of entries in a guildcard book
pub const GUILDCARD_ENTRIES: usize = 104;

/// A friend's guildcard as stored in the owner's book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildcardEntry {
    pub guildcard: u32,
    pub name: [u16; 24],
    pub team_name: [u16; 16],
    pub description: [u16; 88],
    pub reserved: u8,
    pub language: u8,
    pub section_id: u8,
    pub char_class: u8,
    pub padding: u32,
    pub comment: [u16; 88],
}

impl Default for GuildcardEntry {
    fn default() -> Self {
        Self {
            guildcard: 0,
            name: [0; 24],
            team_name: [0; 16],
            description: [0; 88],
            reserved: 0,
            language: 0,
            section_id: 0,
            char_class: 0,
            padding: 0,
            comment: [0; 88],
        }
    }
}

impl Record for GuildcardEntry {
    const NAME: &'static str = "GuildcardEntry";
    const SIZE: usize = 4 + 24 * 2 + 16 * 2 + 88 * 2 + 4 + 4 + 88 * 2;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.guildcard);
        put_u16_slice(buf, &self.name);
        put_u16_slice(buf, &self.team_name);
        put_u16_slice(buf, &self.description);
        buf.put_u8(self.reserved);
        buf.put_u8(self.language);
        buf.put_u8(self.section_id);
        buf.put_u8(self.char_class);
        buf.put_u32_le(self.padding);
        put_u16_slice(buf, &self.comment);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            guildcard: buf.get_u32_le(),
            name: get_u16_array(buf),
            team_name: get_u16_array(buf),
            description: get_u16_array(buf),
            reserved: buf.get_u8(),
            language: buf.get_u8(),
            section_id: buf.get_u8(),
            char_class: buf.get_u8(),
            padding: buf.get_u32_le(),
            comment: get_u16_array(buf),
        }
    }
}

/// Per-account guildcard file.
///
/// Only the entry table is understood. The blocked list and the three
/// unknown ranges are carried as raw bytes; their sizes are fixed by the
/// client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildcardData {
    pub unknown: [u8; 0x114],
    // TODO: decode as a blocked-sender table once its entry layout is known
    pub blocked: [u8; 0x1DE8],
    pub unknown2: [u8; 0x78],
    pub entries: [GuildcardEntry; GUILDCARD_ENTRIES],
    pub unknown3: [u8; 0x1BC],
}

impl Default for GuildcardData {
    fn default() -> Self {
        Self {
            unknown: [0; 0x114],
            blocked: [0; 0x1DE8],
            unknown2: [0; 0x78],
            entries: std::array::from_fn(|_| GuildcardEntry::default()),
            unknown3: [0; 0x1BC],
        }
    }
}

impl GuildcardData {
    /// Byte offset of the entry table
    pub const ENTRIES_OFFSET: usize = 0x114 + 0x1DE8 + 0x78;

    /// Find the entry for a guildcard number, ignoring empty slots.
    pub fn find(&self, guildcard: u32) -> Option<&GuildcardEntry> {
        if guildcard == 0 {
            return None;
        }
        self.entries.iter().find(|e| e.guildcard == guildcard)
    }
}

impl Record for GuildcardData {
    const NAME: &'static str = "GuildcardData";
    const SIZE: usize = Self::ENTRIES_OFFSET + GUILDCARD_ENTRIES * GuildcardEntry::SIZE + 0x1BC;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.unknown);
        buf.put_slice(&self.blocked);
        buf.put_slice(&self.unknown2);
        for entry in &self.entries {
            entry.write_to(buf);
        }
        buf.put_slice(&self.unknown3);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        let unknown = get_array(buf);
        let blocked = get_array(buf);
        let unknown2 = get_array(buf);
        let entries = std::array::from_fn(|_| GuildcardEntry::read_from(buf));
        let unknown3 = get_array(buf);
        Self {
            unknown,
            blocked,
            unknown2,
            entries,
            unknown3,
        }
    }
}
