//! Configuration source adapters.
//!
//! Each adapter answers a single question: does this source have a record
//! for the hostname? Faults never escape an adapter; they are logged and
//! reported as absence so the resolver can fall through in strict
//! priority order (presets, KV exact, KV default, env blob, built-in).

pub mod defaults;
pub mod env_table;
pub mod kv;
pub mod presets;

pub use env_table::EnvTable;
pub use kv::{HttpKvStore, KvStore, MemoryKvStore};
pub use presets::PresetStore;
