use super::{Collection, Item, ItemFactory, ValidationError};

pub const DEMO_CATALOG_NAME: &str = "Main Catalog";

/// The sample catalog a fresh session starts with
pub fn demo_catalog() -> Result<Collection, ValidationError> {
    let factory = ItemFactory::new();

    let mut fantasy = factory.collection("Fantasy Now Collection")?;
    fantasy.add_item(Item::from(factory.book(
        "The Lord of the Rings (ENG)",
        "J.R.R. Tolkien",
        1954,
        "978-0618640157",
    )?));

    let mut tech = factory.collection("Digital Tech Collection")?;
    tech.add_item(Item::from(factory.book(
        "Clean Code",
        "Robert C. Martin",
        2008,
        "978-0132350884",
    )?));
    tech.add_item(Item::from(factory.book(
        "Design Patterns",
        "Gang of Four",
        1994,
        "978-0201633610",
    )?));

    let mut root = factory.collection(DEMO_CATALOG_NAME)?;
    root.add_item(Item::from(fantasy));
    root.add_item(Item::from(tech));
    root.add_item(Item::from(factory.magazine(
        "National Geographic Magazine",
        256,
        "National Geographic Society",
        2023,
    )?));
    root.add_item(Item::from(factory.magazine(
        "Scientific American Magazine",
        124,
        "Springer Nature",
        2023,
    )?));
    root.add_item(Item::from(factory.disc(
        "Inception",
        "Christopher Nolan",
        148,
        2010,
    )?));
    root.add_item(Item::from(factory.disc(
        "The Matrix",
        "Andy and Larry Wachowski",
        136,
        1999,
    )?));

    Ok(root)
}
