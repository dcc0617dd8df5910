//! Persistence for the two local JSON documents.
//! `store::JsonStore` is the only code that touches the files; everything else
//! goes through it, e.g. `database::store::JsonStore::load_inventory`.

pub mod models;
pub mod store;
