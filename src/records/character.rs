//! Character records.
//!
//! `Character` is the lobby-facing view, `CharacterPreview` the smaller
//! view used by the character selection menu, and `FullCharacter` the
//! superset that is persisted and sent with the full-character packet.
//! The two views are laid out independently; keep them in step with
//! `FullCharacter` by hand when fields change.

use bytes::{Buf, BufMut};

use super::defaults;
use super::items::{Bank, Inventory};
use crate::core::record::{get_array, get_u16_array, put_u16_slice, Record};
use crate::error::ProtocolError;

/// Playable classes as numbered by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    Humar = 0x00,
    Hunewearl = 0x01,
    Hucast = 0x02,
    Ramar = 0x03,
    Racast = 0x04,
    Racaseal = 0x05,
    Fomarl = 0x06,
    Fonewm = 0x07,
    Fonewearl = 0x08,
    Hucaseal = 0x09,
    Fomar = 0x0A,
    Ramarl = 0x0B,
}

impl TryFrom<u8> for CharClass {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0x00 => CharClass::Humar,
            0x01 => CharClass::Hunewearl,
            0x02 => CharClass::Hucast,
            0x03 => CharClass::Ramar,
            0x04 => CharClass::Racast,
            0x05 => CharClass::Racaseal,
            0x06 => CharClass::Fomarl,
            0x07 => CharClass::Fonewm,
            0x08 => CharClass::Fonewearl,
            0x09 => CharClass::Hucaseal,
            0x0A => CharClass::Fomar,
            0x0B => CharClass::Ramarl,
            other => return Err(ProtocolError::UnknownCharClass(other)),
        })
    }
}

impl From<CharClass> for u8 {
    fn from(class: CharClass) -> Self {
        class as u8
    }
}

/// Base stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterStats {
    pub atp: u16,
    pub mst: u16,
    pub evp: u16,
    pub hp: u16,
    pub dfp: u16,
    pub tp: u16,
    pub lck: u16,
    pub ata: u16,
}

impl Record for CharacterStats {
    const NAME: &'static str = "CharacterStats";
    const SIZE: usize = 16;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16_le(self.atp);
        buf.put_u16_le(self.mst);
        buf.put_u16_le(self.evp);
        buf.put_u16_le(self.hp);
        buf.put_u16_le(self.dfp);
        buf.put_u16_le(self.tp);
        buf.put_u16_le(self.lck);
        buf.put_u16_le(self.ata);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            atp: buf.get_u16_le(),
            mst: buf.get_u16_le(),
            evp: buf.get_u16_le(),
            hp: buf.get_u16_le(),
            dfp: buf.get_u16_le(),
            tp: buf.get_u16_le(),
            lck: buf.get_u16_le(),
            ata: buf.get_u16_le(),
        }
    }
}

/// Appearance and identity block shared by every character view.
///
/// Equality compares `prop_x` and `prop_y` by bit pattern, so a decoded
/// record equals its source whenever their encodings match.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterInfo {
    pub name_color_checksum: u32,
    pub section_id: u8,
    pub char_class: u8,
    pub v2_flags: u8,
    pub version: u8,
    pub v1_flags: u32,
    pub costume: u16,
    pub skin: u16,
    pub face: u16,
    pub head: u16,
    pub hair: u16,
    pub hair_red: u16,
    pub hair_green: u16,
    pub hair_blue: u16,
    pub prop_x: f32,
    pub prop_y: f32,
    pub name: [u16; 16],
}

impl PartialEq for CharacterInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name_color_checksum == other.name_color_checksum
            && self.section_id == other.section_id
            && self.char_class == other.char_class
            && self.v2_flags == other.v2_flags
            && self.version == other.version
            && self.v1_flags == other.v1_flags
            && self.costume == other.costume
            && self.skin == other.skin
            && self.face == other.face
            && self.head == other.head
            && self.hair == other.hair
            && self.hair_red == other.hair_red
            && self.hair_green == other.hair_green
            && self.hair_blue == other.hair_blue
            && self.prop_x.to_bits() == other.prop_x.to_bits()
            && self.prop_y.to_bits() == other.prop_y.to_bits()
            && self.name == other.name
    }
}

impl Eq for CharacterInfo {}

impl CharacterInfo {
    /// Decoded class, if the byte is one the client defines.
    pub fn class(&self) -> Result<CharClass, ProtocolError> {
        CharClass::try_from(self.char_class)
    }
}

impl Record for CharacterInfo {
    const NAME: &'static str = "CharacterInfo";
    const SIZE: usize = 68;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.name_color_checksum);
        buf.put_u8(self.section_id);
        buf.put_u8(self.char_class);
        buf.put_u8(self.v2_flags);
        buf.put_u8(self.version);
        buf.put_u32_le(self.v1_flags);
        buf.put_u16_le(self.costume);
        buf.put_u16_le(self.skin);
        buf.put_u16_le(self.face);
        buf.put_u16_le(self.head);
        buf.put_u16_le(self.hair);
        buf.put_u16_le(self.hair_red);
        buf.put_u16_le(self.hair_green);
        buf.put_u16_le(self.hair_blue);
        buf.put_f32_le(self.prop_x);
        buf.put_f32_le(self.prop_y);
        put_u16_slice(buf, &self.name);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            name_color_checksum: buf.get_u32_le(),
            section_id: buf.get_u8(),
            char_class: buf.get_u8(),
            v2_flags: buf.get_u8(),
            version: buf.get_u8(),
            v1_flags: buf.get_u32_le(),
            costume: buf.get_u16_le(),
            skin: buf.get_u16_le(),
            face: buf.get_u16_le(),
            head: buf.get_u16_le(),
            hair: buf.get_u16_le(),
            hair_red: buf.get_u16_le(),
            hair_green: buf.get_u16_le(),
            hair_blue: buf.get_u16_le(),
            prop_x: buf.get_f32_le(),
            prop_y: buf.get_f32_le(),
            name: get_u16_array(buf),
        }
    }
}

/// Character data sent to other lobby members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub stats: CharacterStats,
    pub unknown: [u8; 8],
    pub level: u32,
    pub exp: u32,
    pub meseta: u32,
    pub guildcard_str: [u8; 24],
    pub name_color: u32,
    pub model: u8,
    pub unused: [u8; 11],
    pub playtime: u32,
    pub info: CharacterInfo,
    pub config: [u8; 232],
    pub techniques: [u8; 20],
}

impl Default for Character {
    fn default() -> Self {
        Self {
            stats: CharacterStats::default(),
            unknown: [0; 8],
            level: 0,
            exp: 0,
            meseta: 0,
            guildcard_str: [0; 24],
            name_color: 0,
            model: 0,
            unused: [0; 11],
            playtime: 0,
            info: CharacterInfo::default(),
            config: [0; 232],
            techniques: [0; 20],
        }
    }
}

impl Character {
    /// Offset of the embedded `CharacterInfo`
    pub const INFO_OFFSET: usize = CharacterStats::SIZE + 8 + 12 + 24 + 4 + 1 + 11 + 4;
}

impl Record for Character {
    const NAME: &'static str = "Character";
    const SIZE: usize = Self::INFO_OFFSET + CharacterInfo::SIZE + 232 + 20;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        self.stats.write_to(buf);
        buf.put_slice(&self.unknown);
        buf.put_u32_le(self.level);
        buf.put_u32_le(self.exp);
        buf.put_u32_le(self.meseta);
        buf.put_slice(&self.guildcard_str);
        buf.put_u32_le(self.name_color);
        buf.put_u8(self.model);
        buf.put_slice(&self.unused);
        buf.put_u32_le(self.playtime);
        self.info.write_to(buf);
        buf.put_slice(&self.config);
        buf.put_slice(&self.techniques);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            stats: CharacterStats::read_from(buf),
            unknown: get_array(buf),
            level: buf.get_u32_le(),
            exp: buf.get_u32_le(),
            meseta: buf.get_u32_le(),
            guildcard_str: get_array(buf),
            name_color: buf.get_u32_le(),
            model: buf.get_u8(),
            unused: get_array(buf),
            playtime: buf.get_u32_le(),
            info: CharacterInfo::read_from(buf),
            config: get_array(buf),
            techniques: get_array(buf),
        }
    }
}

/// Character summary shown in the selection menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterPreview {
    pub experience: u32,
    pub level: u32,
    pub guildcard_str: [u8; 16],
    pub unknown: [u32; 2],
    pub name_color: u32,
    pub model: u8,
    pub unused: [u8; 15],
    pub info: CharacterInfo,
    pub playtime: u32,
}

impl Record for CharacterPreview {
    const NAME: &'static str = "CharacterPreview";
    const SIZE: usize = 4 + 4 + 16 + 8 + 4 + 1 + 15 + CharacterInfo::SIZE + 4;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.experience);
        buf.put_u32_le(self.level);
        buf.put_slice(&self.guildcard_str);
        buf.put_u32_le(self.unknown[0]);
        buf.put_u32_le(self.unknown[1]);
        buf.put_u32_le(self.name_color);
        buf.put_u8(self.model);
        buf.put_slice(&self.unused);
        self.info.write_to(buf);
        buf.put_u32_le(self.playtime);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            experience: buf.get_u32_le(),
            level: buf.get_u32_le(),
            guildcard_str: get_array(buf),
            unknown: [buf.get_u32_le(), buf.get_u32_le()],
            name_color: buf.get_u32_le(),
            model: buf.get_u8(),
            unused: get_array(buf),
            info: CharacterInfo::read_from(buf),
            playtime: buf.get_u32_le(),
        }
    }
}

impl From<&Character> for CharacterPreview {
    fn from(character: &Character) -> Self {
        let mut guildcard_str = [0u8; 16];
        guildcard_str.copy_from_slice(&character.guildcard_str[..16]);
        Self {
            experience: character.exp,
            level: character.level,
            guildcard_str,
            unknown: [0; 2],
            name_color: character.name_color,
            model: character.model,
            unused: [0; 15],
            info: character.info,
            playtime: character.playtime,
        }
    }
}

/// Complete character as persisted and sent by the full-character packet.
///
/// The `unknown*` ranges have never been decoded and are kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullCharacter {
    pub inventory: Inventory,
    pub character: Character,
    pub unknown: [u8; 16],
    pub options: u32,
    pub quest_data1: [u8; 520],
    pub bank: Bank,
    pub guildcard: u32,
    pub name: [u16; 16],
    pub team_name: [u16; 16],
    pub guildcard_desc: [u16; 88],
    pub reserved1: u8,
    pub reserved2: u8,
    pub section_id: u8,
    pub char_class: u8,
    pub unknown2: u32,
    pub symbol_chats: [u8; defaults::SYMBOL_CHATS_SIZE],
    pub shortcuts: [u8; 2624],
    pub autoreply: [u16; 172],
    pub infoboard: [u16; 172],
    pub unknown3: [u8; 28],
    pub challenge_data: [u8; 320],
    pub tech_menu: [u8; 40],
    pub unknown4: [u8; 44],
    pub quest_data2: [u8; 88],
    // Team config?
    pub unknown5: [u8; 276],
    pub key_config: [u8; defaults::KEY_CONFIG_SIZE],
    pub joystick_config: [u8; defaults::JOYSTICK_CONFIG_SIZE],
    pub guildcard2: u32,
    pub team_id: u32,
    pub team_info: [u8; 8],
    pub team_privilege: u16,
    pub reserved3: u16,
    pub team_name2: [u16; 16],
    pub team_flag: [u8; 2048],
    pub team_rewards: [u32; 2],
}

impl Default for FullCharacter {
    fn default() -> Self {
        Self {
            inventory: Inventory::default(),
            character: Character::default(),
            unknown: [0; 16],
            options: 0,
            quest_data1: [0; 520],
            bank: Bank::default(),
            guildcard: 0,
            name: [0; 16],
            team_name: [0; 16],
            guildcard_desc: [0; 88],
            reserved1: 0,
            reserved2: 0,
            section_id: 0,
            char_class: 0,
            unknown2: 0,
            symbol_chats: [0; defaults::SYMBOL_CHATS_SIZE],
            shortcuts: [0; 2624],
            autoreply: [0; 172],
            infoboard: [0; 172],
            unknown3: [0; 28],
            challenge_data: [0; 320],
            tech_menu: [0; 40],
            unknown4: [0; 44],
            quest_data2: [0; 88],
            unknown5: [0; 276],
            key_config: [0; defaults::KEY_CONFIG_SIZE],
            joystick_config: [0; defaults::JOYSTICK_CONFIG_SIZE],
            guildcard2: 0,
            team_id: 0,
            team_info: [0; 8],
            team_privilege: 0,
            reserved3: 0,
            team_name2: [0; 16],
            team_flag: [0; 2048],
            team_rewards: [0; 2],
        }
    }
}

impl FullCharacter {
    /// Offset of the embedded `Character`
    pub const CHARACTER_OFFSET: usize = Inventory::SIZE;

    /// Offset of the embedded `Bank`
    pub const BANK_OFFSET: usize = Self::CHARACTER_OFFSET + Character::SIZE + 16 + 4 + 520;

    /// Offset of the symbol chat table
    pub const SYMBOL_CHATS_OFFSET: usize =
        Self::BANK_OFFSET + Bank::SIZE + 4 + 32 + 32 + 176 + 4 + 4;

    /// Offset of the keyboard configuration block
    pub const KEY_CONFIG_OFFSET: usize = Self::SYMBOL_CHATS_OFFSET
        + defaults::SYMBOL_CHATS_SIZE
        + 2624
        + 344
        + 344
        + 28
        + 320
        + 40
        + 44
        + 88
        + 276;

    /// A zeroed character carrying the default control and symbol chat blocks.
    pub fn with_default_config() -> Self {
        let mut character = Self::default();
        defaults::apply_default_config(&mut character);
        character
    }

    /// Selection menu projection of this character.
    pub fn preview(&self) -> CharacterPreview {
        CharacterPreview::from(&self.character)
    }
}

impl Record for FullCharacter {
    const NAME: &'static str = "FullCharacter";
    const SIZE: usize = Self::KEY_CONFIG_OFFSET
        + defaults::KEY_CONFIG_SIZE
        + defaults::JOYSTICK_CONFIG_SIZE
        + 4
        + 4
        + 8
        + 2
        + 2
        + 32
        + 2048
        + 8;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        self.inventory.write_to(buf);
        self.character.write_to(buf);
        buf.put_slice(&self.unknown);
        buf.put_u32_le(self.options);
        buf.put_slice(&self.quest_data1);
        self.bank.write_to(buf);
        buf.put_u32_le(self.guildcard);
        put_u16_slice(buf, &self.name);
        put_u16_slice(buf, &self.team_name);
        put_u16_slice(buf, &self.guildcard_desc);
        buf.put_u8(self.reserved1);
        buf.put_u8(self.reserved2);
        buf.put_u8(self.section_id);
        buf.put_u8(self.char_class);
        buf.put_u32_le(self.unknown2);
        buf.put_slice(&self.symbol_chats);
        buf.put_slice(&self.shortcuts);
        put_u16_slice(buf, &self.autoreply);
        put_u16_slice(buf, &self.infoboard);
        buf.put_slice(&self.unknown3);
        buf.put_slice(&self.challenge_data);
        buf.put_slice(&self.tech_menu);
        buf.put_slice(&self.unknown4);
        buf.put_slice(&self.quest_data2);
        buf.put_slice(&self.unknown5);
        buf.put_slice(&self.key_config);
        buf.put_slice(&self.joystick_config);
        buf.put_u32_le(self.guildcard2);
        buf.put_u32_le(self.team_id);
        buf.put_slice(&self.team_info);
        buf.put_u16_le(self.team_privilege);
        buf.put_u16_le(self.reserved3);
        put_u16_slice(buf, &self.team_name2);
        buf.put_slice(&self.team_flag);
        buf.put_u32_le(self.team_rewards[0]);
        buf.put_u32_le(self.team_rewards[1]);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            inventory: Inventory::read_from(buf),
            character: Character::read_from(buf),
            unknown: get_array(buf),
            options: buf.get_u32_le(),
            quest_data1: get_array(buf),
            bank: Bank::read_from(buf),
            guildcard: buf.get_u32_le(),
            name: get_u16_array(buf),
            team_name: get_u16_array(buf),
            guildcard_desc: get_u16_array(buf),
            reserved1: buf.get_u8(),
            reserved2: buf.get_u8(),
            section_id: buf.get_u8(),
            char_class: buf.get_u8(),
            unknown2: buf.get_u32_le(),
            symbol_chats: get_array(buf),
            shortcuts: get_array(buf),
            autoreply: get_u16_array(buf),
            infoboard: get_u16_array(buf),
            unknown3: get_array(buf),
            challenge_data: get_array(buf),
            tech_menu: get_array(buf),
            unknown4: get_array(buf),
            quest_data2: get_array(buf),
            unknown5: get_array(buf),
            key_config: get_array(buf),
            joystick_config: get_array(buf),
            guildcard2: buf.get_u32_le(),
            team_id: buf.get_u32_le(),
            team_info: get_array(buf),
            team_privilege: buf.get_u16_le(),
            reserved3: buf.get_u16_le(),
            team_name2: get_u16_array(buf),
            team_flag: get_array(buf),
            team_rewards: [buf.get_u32_le(), buf.get_u32_le()],
        }
    }
}
