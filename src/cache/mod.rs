//! Cache Module
//!
//! Process-local read cache mirroring recently seen items.

mod item_cache;


pub use item_cache::ItemCache;
