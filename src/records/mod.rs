//! # Entity Records
//!
//! Fixed-layout representations of character state exactly as the client
//! lays them out in memory.
//!
//! ## Components
//! - **Character**: stats, appearance, the lobby view, the selection preview
//!   and the full persisted character
//! - **Items**: inventory (30 slots) and bank (200 slots)
//! - **Guildcard**: guildcard entries and the 104-entry guildcard book
//! - **Defaults**: canonical control and symbol chat blocks for new characters
//!
//! ## Sizes
//! ```text
//! CharacterStats     16    Inventory       604
//! CharacterInfo      68    Bank           3208
//! Character         400    GuildcardEntry  444
//! CharacterPreview  124    GuildcardData 54672
//! FullCharacter   12888
//! ```

pub mod character;
pub mod defaults;
pub mod guildcard;
pub mod items;

pub use character::{CharClass, Character, CharacterInfo, CharacterPreview, CharacterStats, FullCharacter};
pub use guildcard::{GuildcardData, GuildcardEntry, GUILDCARD_ENTRIES};
pub use items::{Bank, BankItem, Inventory, Item, BANK_SLOTS, INVENTORY_SLOTS};
