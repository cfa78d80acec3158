use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Fruit,
    Vegetable,
}

/// A sortable item. Immutable once built; `id` is unique and stable for
/// the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    pub name: String,
}

/// Seed entry before id assignment. This is what config files declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub kind: ItemKind,
    pub name: String,
}

impl SeedItem {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// The stock registry.
pub fn default_seeds() -> Vec<SeedItem> {
    use ItemKind::{Fruit, Vegetable};
    vec![
        SeedItem::new(Fruit, "Apple"),
        SeedItem::new(Vegetable, "Broccoli"),
        SeedItem::new(Vegetable, "Mushroom"),
        SeedItem::new(Fruit, "Banana"),
        SeedItem::new(Vegetable, "Tomato"),
        SeedItem::new(Fruit, "Orange"),
        SeedItem::new(Fruit, "Mango"),
        SeedItem::new(Fruit, "Pineapple"),
        SeedItem::new(Vegetable, "Cucumber"),
        SeedItem::new(Fruit, "Watermelon"),
        SeedItem::new(Vegetable, "Carrot"),
    ]
}

/// Assign stable ids: the item name with whitespace dashed, suffixed with
/// the seed index. Duplicate names stay distinguishable through the index.
pub fn build_items(seeds: &[SeedItem]) -> Vec<Item> {
    seeds
        .iter()
        .enumerate()
        .map(|(index, seed)| Item {
            id: format!("{}-{}", seed.name.replace(char::is_whitespace, "-"), index),
            kind: seed.kind,
            name: seed.name.clone(),
        })
        .collect()
}
