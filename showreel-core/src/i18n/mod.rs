mod catalog;
mod locales;
mod slots;

pub use catalog::{Catalog, CatalogError};
pub use locales::{Direction, Lang, LocaleError, LocaleMeta, locales};
pub use slots::{CardSet, FieldSlot, ListSlot, SLOT_TABLE, SlotTable};
