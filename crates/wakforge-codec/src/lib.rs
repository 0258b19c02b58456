//! Build codes for Wakforge.
//!
//! A build code is a short, copy-paste-safe string that carries a complete
//! [`CharacterBuild`](wakforge_model::CharacterBuild). This crate turns
//! builds into codes and back:
//!
//! ```text
//! encode:  build → schema::serialize → [Value] → Container::pack → bytes
//!                → compress (raw deflate) → text::to_text → build code
//!
//! decode:  build code → text::from_text → decompress → Container::unpack
//!                → schema::deserialize (version dispatch) → RawBuild
//!                → assemble (catalog lookups) → build
//! ```
//!
//! - **Schema** ([`schema`]): the one place the field order lives. Both
//!   directions walk the same layout table.
//! - **Container** ([`Container`], [`BincodeContainer`]): packs the flat
//!   value sequence into bytes.
//! - **Compression** ([`compress`]): headerless deflate.
//! - **Text** ([`text`]): an 11-bits-per-character alphabet of CJK
//!   ideographs.
//! - **Errors** ([`CodecError`]): every way a code can be rejected.
//!   [`BuildCodec::decode`] folds them all into `None`.
//!
//! # Example
//!
//! ```rust
//! use wakforge_catalog::StaticCatalog;
//! use wakforge_codec::BuildCodec;
//! use wakforge_model::{CharacterBuild, CharacterClass};
//!
//! let codec = BuildCodec::default();
//! let mut build = CharacterBuild::new().with_class(CharacterClass::Sram);
//! build.set_level(120).unwrap();
//!
//! let code = codec.encode(&build);
//! let decoded = codec.decode(&code, &StaticCatalog::new()).unwrap();
//! assert!(decoded.same_loadout(&build));
//! ```

mod assemble;
mod codec;
pub mod compress;
mod container;
mod cursor;
mod error;
pub mod schema;
pub mod text;
mod value;

pub use codec::{decode, encode, BuildCodec, CodecConfig};
pub use container::{BincodeContainer, Container};
#[cfg(feature = "json")]
pub use container::JsonContainer;
pub use error::CodecError;
pub use schema::FORMAT_VERSION;
pub use value::{Value, MAX_DEPTH};
