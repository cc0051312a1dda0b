//! Inventory and bank records.
//!
//! Both containers are fixed arrays: the count fields say how many slots
//! are in use, but every slot is always encoded.

use bytes::{Buf, BufMut};

use crate::core::record::Record;

/// Number of inventory slots sent to the client
pub const INVENTORY_SLOTS: usize = 30;

/// Number of bank slots sent to the client
pub const BANK_SLOTS: usize = 200;

/// Item held in a character's inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Item {
    pub equipped: u32,
    pub flags: u32,
    pub data: u32,
    pub item_id: u32,
    // Only meaningful for mags
    pub data2: u32,
}

impl Record for Item {
    const NAME: &'static str = "Item";
    const SIZE: usize = 20;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.equipped);
        buf.put_u32_le(self.flags);
        buf.put_u32_le(self.data);
        buf.put_u32_le(self.item_id);
        buf.put_u32_le(self.data2);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            equipped: buf.get_u32_le(),
            flags: buf.get_u32_le(),
            data: buf.get_u32_le(),
            item_id: buf.get_u32_le(),
            data2: buf.get_u32_le(),
        }
    }
}

/// A character's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub num_items: u8,
    pub hp_mats_used: u8,
    pub tp_mats_used: u8,
    pub language: u8,
    pub items: [Item; INVENTORY_SLOTS],
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            num_items: 0,
            hp_mats_used: 0,
            tp_mats_used: 0,
            language: 0,
            items: [Item::default(); INVENTORY_SLOTS],
        }
    }
}

impl Inventory {
    /// Slots that the count field marks as occupied.
    pub fn occupied(&self) -> &[Item] {
        let used = usize::from(self.num_items).min(INVENTORY_SLOTS);
        &self.items[..used]
    }
}

impl Record for Inventory {
    const NAME: &'static str = "Inventory";
    const SIZE: usize = 4 + INVENTORY_SLOTS * Item::SIZE;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.num_items);
        buf.put_u8(self.hp_mats_used);
        buf.put_u8(self.tp_mats_used);
        buf.put_u8(self.language);
        for item in &self.items {
            item.write_to(buf);
        }
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        let num_items = buf.get_u8();
        let hp_mats_used = buf.get_u8();
        let tp_mats_used = buf.get_u8();
        let language = buf.get_u8();
        let items = std::array::from_fn(|_| Item::read_from(buf));
        Self {
            num_items,
            hp_mats_used,
            tp_mats_used,
            language,
            items,
        }
    }
}

/// Item stored in a character's bank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BankItem {
    pub data: u32,
    pub item_id: u32,
    pub data2: u32,
    pub amount: u16,
    pub flags: u16,
}

impl Record for BankItem {
    const NAME: &'static str = "BankItem";
    const SIZE: usize = 16;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.data);
        buf.put_u32_le(self.item_id);
        buf.put_u32_le(self.data2);
        buf.put_u16_le(self.amount);
        buf.put_u16_le(self.flags);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            data: buf.get_u32_le(),
            item_id: buf.get_u32_le(),
            data2: buf.get_u32_le(),
            amount: buf.get_u16_le(),
            flags: buf.get_u16_le(),
        }
    }
}

/// A character's bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pub num_items: u32,
    pub meseta: u32,
    pub items: [BankItem; BANK_SLOTS],
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            num_items: 0,
            meseta: 0,
            items: [BankItem::default(); BANK_SLOTS],
        }
    }
}

impl Record for Bank {
    const NAME: &'static str = "Bank";
    const SIZE: usize = 8 + BANK_SLOTS * BankItem::SIZE;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.num_items);
        buf.put_u32_le(self.meseta);
        for item in &self.items {
            item.write_to(buf);
        }
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        let num_items = buf.get_u32_le();
        let meseta = buf.get_u32_le();
        let items = std::array::from_fn(|_| BankItem::read_from(buf));
        Self {
            num_items,
            meseta,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_size_ignores_item_count() {
        let empty = Inventory::default();
        let mut full = Inventory::default();
        full.num_items = INVENTORY_SLOTS as u8;
        for (i, item) in full.items.iter_mut().enumerate() {
            item.item_id = 0x0001_0000 + i as u32;
        }

        assert_eq!(Inventory::SIZE, 604);
        assert_eq!(empty.to_bytes().len(), 604);
        assert_eq!(full.to_bytes().len(), 604);
    }

    #[test]
    fn test_item_field_order() {
        let item = Item {
            equipped: 1,
            flags: 2,
            data: 3,
            item_id: 4,
            data2: 5,
        };
        let bytes = item.to_bytes();
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[12..16], &[4, 0, 0, 0]);
        assert_eq!(&bytes[16..20], &[5, 0, 0, 0]);
    }

    #[test]
    fn test_occupied_clamps_to_slot_count() {
        let mut inventory = Inventory::default();
        inventory.num_items = 200;
        assert_eq!(inventory.occupied().len(), INVENTORY_SLOTS);
        inventory.num_items = 3;
        assert_eq!(inventory.occupied().len(), 3);
    }

    #[test]
    fn test_bank_roundtrip_preserves_unused_slots() {
        let mut bank = Bank::default();
        bank.num_items = 1;
        bank.meseta = 999_999;
        bank.items[0].amount = 10;
        // Stale data beyond num_items must survive untouched
        bank.items[199].item_id = 0xDEAD_BEEF;

        let bytes = bank.to_bytes();
        assert_eq!(bytes.len(), 3208);
        let decoded = Bank::from_bytes(&bytes).expect("decode bank");
        assert_eq!(decoded, bank);
    }
}
