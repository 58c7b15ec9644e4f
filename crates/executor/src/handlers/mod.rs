//! Command handlers.
//!
//! | Module | Commands | Store |
//! |--------|----------|-------|
//! | `kv` | Save, Read, Delete | JsonFileStore |

pub mod kv;
