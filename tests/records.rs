#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Integration tests for the fixed-layout record library
//! Covers declared sizes, reserved-range preservation, composite offsets and
//! the default-state character

use archon_protocol::core::record::{utf16_fixed, utf16_to_string, Record};
use archon_protocol::error::ProtocolError;
use archon_protocol::records::defaults::{
    BASE_KEY_CONFIG, BASE_SYMBOL_CHATS, JOYSTICK_CONFIG_SIZE, KEY_CONFIG_SIZE,
};
use archon_protocol::records::*;

// ============================================================================
// DECLARED SIZES
// ============================================================================

#[test]
fn test_record_sizes() {
    assert_eq!(CharacterStats::SIZE, 16);
    assert_eq!(CharacterInfo::SIZE, 68);
    assert_eq!(Item::SIZE, 20);
    assert_eq!(Inventory::SIZE, 604);
    assert_eq!(BankItem::SIZE, 16);
    assert_eq!(Bank::SIZE, 3208);
    assert_eq!(GuildcardEntry::SIZE, 444);
    assert_eq!(GuildcardData::SIZE, 54672);
    assert_eq!(Character::SIZE, 400);
    assert_eq!(CharacterPreview::SIZE, 124);
    assert_eq!(FullCharacter::SIZE, 12888);
}

#[test]
fn test_encoded_length_matches_size() {
    assert_eq!(CharacterStats::default().to_bytes().len(), CharacterStats::SIZE);
    assert_eq!(CharacterInfo::default().to_bytes().len(), CharacterInfo::SIZE);
    assert_eq!(Inventory::default().to_bytes().len(), Inventory::SIZE);
    assert_eq!(Bank::default().to_bytes().len(), Bank::SIZE);
    assert_eq!(GuildcardData::default().to_bytes().len(), GuildcardData::SIZE);
    assert_eq!(Character::default().to_bytes().len(), Character::SIZE);
    assert_eq!(CharacterPreview::default().to_bytes().len(), CharacterPreview::SIZE);
    assert_eq!(FullCharacter::default().to_bytes().len(), FullCharacter::SIZE);
}

// ============================================================================
// SHAPE ERRORS
// ============================================================================

#[test]
fn test_short_buffer_is_shape_error() {
    let bytes = Character::default().to_bytes();
    match Character::from_bytes(&bytes[..399]) {
        Err(ProtocolError::Shape {
            record,
            expected,
            actual,
        }) => {
            assert_eq!(record, "Character");
            assert_eq!(expected, 400);
            assert_eq!(actual, 399);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_long_buffer_is_shape_error() {
    let mut bytes = Bank::default().to_bytes().to_vec();
    bytes.push(0);
    assert!(matches!(
        Bank::from_bytes(&bytes),
        Err(ProtocolError::Shape { expected: 3208, actual: 3209, .. })
    ));
}

#[test]
fn test_empty_buffer_is_shape_error() {
    assert!(FullCharacter::from_bytes(&[]).is_err());
    assert!(GuildcardEntry::from_bytes(&[]).is_err());
}

// ============================================================================
// RESERVED RANGES
// ============================================================================

#[test]
fn test_arbitrary_bytes_survive_roundtrip() {
    // every byte position, including never-decoded ranges, is preserved
    let raw: Vec<u8> = (0..FullCharacter::SIZE).map(|i| (i * 7 + 3) as u8).collect();
    let character = FullCharacter::from_bytes(&raw).expect("decode");
    assert_eq!(character.to_bytes().as_ref(), raw.as_slice());
}

#[test]
fn test_guildcard_book_reserved_ranges_survive() {
    let raw: Vec<u8> = (0..GuildcardData::SIZE).map(|i| (i % 251) as u8).collect();
    let book = GuildcardData::from_bytes(&raw).expect("decode");
    assert_eq!(book.to_bytes().as_ref(), raw.as_slice());
}

#[test]
fn test_character_opaque_fields_are_copied() {
    let mut character = Character::default();
    character.unknown = [0xDE, 0xAD, 0xBE, 0xEF, 1, 2, 3, 4];
    character.unused[10] = 0x77;
    character.config[231] = 0x42;
    let decoded = Character::from_bytes(&character.to_bytes()).expect("decode");
    assert_eq!(decoded, character);
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[test]
fn test_bank_offset_in_full_character() {
    assert_eq!(FullCharacter::BANK_OFFSET, 1544);

    let mut character = FullCharacter::default();
    character.bank.num_items = 3;
    character.bank.meseta = 999_999;
    character.bank.items[0].item_id = 0x0001_0203;

    let bytes = character.to_bytes();
    let bank = &bytes[FullCharacter::BANK_OFFSET..FullCharacter::BANK_OFFSET + Bank::SIZE];
    assert_eq!(bank, character.bank.to_bytes().as_ref());
}

#[test]
fn test_character_offset_in_full_character() {
    let mut character = FullCharacter::default();
    character.character.level = 0x0102_0304;
    let bytes = character.to_bytes();
    let start = FullCharacter::CHARACTER_OFFSET;
    assert_eq!(&bytes[start..start + Character::SIZE], character.character.to_bytes().as_ref());
}

#[test]
fn test_info_offset_in_character() {
    let mut character = Character::default();
    character.info.name = utf16_fixed("Sue");
    let bytes = character.to_bytes();
    let start = Character::INFO_OFFSET;
    assert_eq!(&bytes[start..start + CharacterInfo::SIZE], character.info.to_bytes().as_ref());
}

#[test]
fn test_preview_projection() {
    let mut character = Character::default();
    character.level = 199;
    character.exp = 123_456;
    character.name_color = 0xFFFF_FFFF;
    character.model = 2;
    character.playtime = 3600;
    character.guildcard_str = *b"  42000001\0\0\0\0\0\0xxxxxxxx";
    character.info.char_class = CharClass::Ramarl.into();
    character.info.name = utf16_fixed("Rico");

    let preview = CharacterPreview::from(&character);
    assert_eq!(preview.level, 199);
    assert_eq!(preview.experience, 123_456);
    assert_eq!(preview.name_color, 0xFFFF_FFFF);
    assert_eq!(preview.model, 2);
    assert_eq!(preview.playtime, 3600);
    assert_eq!(&preview.guildcard_str[..], &character.guildcard_str[..16]);
    assert_eq!(preview.unknown, [0, 0]);
    assert_eq!(preview.info, character.info);
    assert_eq!(utf16_to_string(&preview.info.name), "Rico");
    assert_eq!(preview.info.class().expect("class"), CharClass::Ramarl);
}

#[test]
fn test_unknown_class_is_preserved() {
    let mut info = CharacterInfo::default();
    info.char_class = 0x2A;
    assert!(matches!(info.class(), Err(ProtocolError::UnknownCharClass(0x2A))));
    let decoded = CharacterInfo::from_bytes(&info.to_bytes()).expect("decode");
    assert_eq!(decoded.char_class, 0x2A);
}

// ============================================================================
// DEFAULT STATE
// ============================================================================

#[test]
fn test_default_config_blocks() {
    let character = FullCharacter::with_default_config();
    assert_eq!(&character.key_config[..], &BASE_KEY_CONFIG[..KEY_CONFIG_SIZE]);
    assert_eq!(&character.joystick_config[..], &BASE_KEY_CONFIG[KEY_CONFIG_SIZE..]);
    assert_eq!(character.joystick_config.len(), JOYSTICK_CONFIG_SIZE);
    assert_eq!(&character.symbol_chats[..], &BASE_SYMBOL_CHATS[..]);

    let bytes = character.to_bytes();
    let key = FullCharacter::KEY_CONFIG_OFFSET;
    assert_eq!(&bytes[key..key + BASE_KEY_CONFIG.len()], &BASE_KEY_CONFIG[..]);
    let chats = FullCharacter::SYMBOL_CHATS_OFFSET;
    assert_eq!(&bytes[chats..chats + BASE_SYMBOL_CHATS.len()], &BASE_SYMBOL_CHATS[..]);
}

#[test]
fn test_default_character_is_otherwise_zero() {
    let character = FullCharacter::with_default_config();
    let bytes = character.to_bytes();
    let key = FullCharacter::KEY_CONFIG_OFFSET;
    let chats = FullCharacter::SYMBOL_CHATS_OFFSET;
    let zero_outside = bytes.iter().enumerate().all(|(i, &b)| {
        let in_chats = (chats..chats + BASE_SYMBOL_CHATS.len()).contains(&i);
        let in_keys = (key..key + BASE_KEY_CONFIG.len()).contains(&i);
        in_chats || in_keys || b == 0
    });
    assert!(zero_outside);
}

#[test]
fn test_default_character_is_deterministic() {
    let a = FullCharacter::with_default_config().to_bytes();
    let b = FullCharacter::with_default_config().to_bytes();
    assert_eq!(a, b);
}
