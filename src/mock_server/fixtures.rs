//! Test data fixtures for the mock server.

use crate::Item;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create an item whose full description is derived from its name.
    pub fn item(id: u64, name: &str, short_description: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            short_description: short_description.to_string(),
            full_description: format!("{name}: {short_description}."),
        }
    }

    /// The reference catalog served by the real backend.
    pub fn default_scenario() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "Wireless Mouse".to_string(),
                short_description: "Compact 2.4GHz wireless mouse".to_string(),
                full_description: "A compact 2.4GHz wireless mouse with ergonomic design, \
                    silent clicks, and up to 12 months of battery life."
                    .to_string(),
            },
            Item {
                id: 2,
                name: "Mechanical Keyboard".to_string(),
                short_description: "RGB mechanical keyboard (blue switches)".to_string(),
                full_description: "Full-size mechanical keyboard with RGB backlight, blue \
                    switches, and detachable USB-C cable for gamers and programmers."
                    .to_string(),
            },
            Item {
                id: 3,
                name: "Noise Cancelling Headphones".to_string(),
                short_description: "Over-ear ANC Bluetooth headphones".to_string(),
                full_description: "Over-ear Bluetooth headphones with active noise \
                    cancellation, 30 hours battery life, and fast charging support."
                    .to_string(),
            },
        ]
    }

    /// `count` generic items with ids starting at 1, for paging tests.
    pub fn numbered(count: u64) -> Vec<Item> {
        (1..=count)
            .map(|id| Self::item(id, &format!("Item {id}"), &format!("Numbered item {id}")))
            .collect()
    }
}
