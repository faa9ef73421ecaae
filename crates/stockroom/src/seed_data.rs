use stockroom_core::item::Item;

/// Generates the demo catalog the store is seeded with at process start.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("Laptop", 999.99)
            .with_description("Un ordinateur portable")
            .with_id(1),
        Item::new("Mouse", 29.99)
            .with_description("Une souris sans fil")
            .with_id(2),
        Item::new("Keyboard", 149.99)
            .with_description("Un clavier mécanique")
            .with_id(3)
            .out_of_stock(),
    ]
}
