//! Static seed data: the operator roster and the initial inventory.

use super::types::{InventoryItem, User};

pub const USERS: &[User] = &[
    User { id: 1, name: "Jorge Toledo" },
    User { id: 2, name: "Andres Clavijo" },
    User { id: 3, name: "Luis Casique" },
    User { id: 4, name: "Ruben Rodriguez" },
    User { id: 5, name: "Branco Segovia" },
    User { id: 6, name: "Vicente Morales" },
];

const INITIAL_ITEMS: &[(u32, u32, &str)] = &[
    (1, 1, "NEUMATICOS NIRO"),
    (2, 2, "NEUMATICOS DONGFENG"),
    (3, 3, "BATERIAS 12V (E70, NIRO, MAXUS)"),
    (4, 4, "BATERIAS 12V (NETA,NAMMI)"),
    (5, 5, "JUEGO DE CHICHARRA"),
    (6, 6, "GATA HIDRAULICA Y ACCESORIOS"),
    (7, 7, "PARTIDOR Y CABLE AUXILIAR"),
];

/// Fresh copy of the seed inventory, every line at zero.
pub fn initial_inventory() -> Vec<InventoryItem> {
    INITIAL_ITEMS
        .iter()
        .map(|&(id, code, name)| InventoryItem {
            id,
            code,
            name: name.to_string(),
            quantity: 0,
        })
        .collect()
}

pub fn find_user(id: u32) -> Option<&'static User> {
    USERS.iter().find(|user| user.id == id)
}
