use aims_core::cart::ensure_available;
use aims_core::{Cart, CartLineItem, StorageError};
use aims_shared::Media;
use rusqlite::{params, Connection};
use std::path::Path;

/// Cart persisted in SQLite alongside the media catalog
pub struct SqliteCart {
    db: Connection,
}

impl SqliteCart {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Connection::open(path).map_err(StorageError::backend)?;
        Self::with_connection(db)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let db = Connection::open_in_memory().map_err(StorageError::backend)?;
        Self::with_connection(db)
    }

    pub fn with_connection(db: Connection) -> Result<Self, StorageError> {
        db.execute_batch(
            "CREATE TABLE IF NOT EXISTS media (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                category TEXT NOT NULL,
                price INTEGER NOT NULL,
                stock INTEGER NOT NULL
            );
            CREATE TABLE IF NOT EXISTS cart_item (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                media_id INTEGER NOT NULL REFERENCES media(id),
                quantity INTEGER NOT NULL,
                price INTEGER NOT NULL
            );",
        )
        .map_err(StorageError::backend)?;
        Ok(Self { db })
    }

    /// Insert or replace a media row
    pub fn save_media(&self, media: &Media) -> Result<(), StorageError> {
        self.db
            .execute(
                "INSERT OR REPLACE INTO media (id, title, category, price, stock)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![media.id, media.title, media.category, media.price, media.stock],
            )
            .map_err(StorageError::backend)?;
        Ok(())
    }

    /// Put `quantity` units of a stored media into the cart at its current price
    pub fn add_item(&self, media_id: i64, quantity: u32) -> Result<(), StorageError> {
        let inserted = self
            .db
            .execute(
                "INSERT INTO cart_item (media_id, quantity, price)
                 SELECT id, ?2, price FROM media WHERE id = ?1",
                params![media_id, quantity],
            )
            .map_err(StorageError::backend)?;
        if inserted == 0 {
            return Err(StorageError::UnknownMedia(media_id));
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.db
            .execute("DELETE FROM cart_item", [])
            .map_err(StorageError::backend)?;
        Ok(())
    }
}

impl Cart for SqliteCart {
    fn line_items(&self) -> Result<Vec<CartLineItem>, StorageError> {
        let mut stmt = self
            .db
            .prepare(
                "SELECT m.id, m.title, m.category, m.price, m.stock, c.quantity, c.price
                 FROM cart_item c JOIN media m ON m.id = c.media_id
                 ORDER BY c.id",
            )
            .map_err(StorageError::backend)?;

        let rows = stmt
            .query_map([], |row| {
                let media = Media {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    category: row.get(2)?,
                    price: row.get(3)?,
                    stock: row.get(4)?,
                };
                Ok(CartLineItem::new(media, row.get(5)?, row.get(6)?))
            })
            .map_err(StorageError::backend)?;

        let items = rows
            .collect::<Result<Vec<CartLineItem>, _>>()
            .map_err(StorageError::backend)?;
        tracing::debug!(count = items.len(), "loaded cart from sqlite");
        Ok(items)
    }

    fn check_availability(&self) -> Result<(), StorageError> {
        ensure_available(&self.line_items()?)
    }
}
