//! # Wakforge
//!
//! Shareable build codes for Wakfu character builds.
//!
//! A build (class, level, characteristics, 14 equipment slots with runes
//! and sublimations, 18 spell slots) becomes a short string that survives
//! chat clients and URLs, and decodes back against the current game
//! catalog.
//!
//! | Crate | Role |
//! |-------|------|
//! | [`wakforge_model`] | build and catalog types |
//! | [`wakforge_catalog`] | in-memory catalog loaded from JSON |
//! | [`wakforge_codec`] | the build-code pipeline |
//!
//! ## Quick Start
//!
//! ```rust
//! use wakforge::prelude::*;
//!
//! let planner = Planner::new(BuildCodec::default(), StaticCatalog::new());
//! let build = CharacterBuild::new().with_class(CharacterClass::Ecaflip);
//!
//! let code = planner.encode(&build);
//! let decoded = planner.decode(&code).expect("fresh code decodes");
//! assert_eq!(decoded.class, Some(CharacterClass::Ecaflip));
//! ```

pub mod config;
mod error;
pub mod logging;
mod planner;

pub use config::PlannerConfig;
pub use error::WakforgeError;
pub use planner::{build_from_json, values_to_json, Planner};

pub use wakforge_catalog as catalog;
pub use wakforge_codec as codec;
pub use wakforge_model as model;

pub mod prelude {
    pub use crate::{Planner, PlannerConfig, WakforgeError};
    pub use wakforge_catalog::StaticCatalog;
    pub use wakforge_codec::{BuildCodec, CodecConfig, CodecError};
    pub use wakforge_model::{
        Catalog, CharacterBuild, CharacterClass, Characteristic, Element, EquipmentSlotId,
        EquippedItem, ItemId, RuneId, SpellId,
    };
}
