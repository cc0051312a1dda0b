#![no_main]

use archon_protocol::core::record::Record;
use archon_protocol::records::{Character, CharacterPreview, FullCharacter, GuildcardEntry};
use libfuzzer_sys::fuzz_target;

fn check<R: Record>(data: &[u8]) {
    if let Ok(record) = R::from_bytes(data) {
        // any accepted image re-encodes to itself
        assert_eq!(record.to_bytes().as_ref(), data);
    }
}

fuzz_target!(|data: &[u8]| {
    check::<Character>(data);
    check::<CharacterPreview>(data);
    check::<GuildcardEntry>(data);
    check::<FullCharacter>(data);
    if data.len() >= Character::SIZE {
        check::<Character>(&data[..Character::SIZE]);
    }
});
