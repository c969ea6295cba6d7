//! geosite2list - Convert binary GeoSite catalogs into plain-text rule lists.
//!
//! A GeoSite catalog is the compact binary `.dat` file used by v2ray-style
//! routers: an ordered list of country/category groups, each holding typed
//! domain-matching rules. This crate decodes that catalog and re-serializes
//! every group as its own Clash-style `.list` file, one directive line per
//! rule:
//!
//! ```text
//! DOMAIN-SUFFIX:example.com
//! DOMAIN:a.test
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use geosite2list::{emit, fetch, Catalog};
//! use std::path::Path;
//!
//! let data = fetch::from_file(Path::new("geosite.dat"))?;
//! let catalog = Catalog::decode(&data)?;
//!
//! let out = Path::new("out");
//! emit::prepare_dir(out)?;
//! let summary = emit::emit_catalog(&catalog, out);
//! println!("{} lists written", summary.written);
//! ```
//!
//! # Directive Mapping
//!
//! | rule kind   | directive        |
//! |-------------|------------------|
//! | plain       | `DOMAIN-KEYWORD` |
//! | root domain | `DOMAIN-SUFFIX`  |
//! | regex       | `DOMAIN-REGEX`   |
//! | full        | `DOMAIN`         |
//!
//! Rules with a kind tag outside the known set are emitted with an empty
//! directive prefix rather than rejected, and unknown fields anywhere in
//! the catalog are skipped, so newer catalogs keep converting.

mod error;
mod rule_kind;

pub mod catalog;
pub mod emit;
pub mod fetch;
pub mod wire;

// Re-export core types
pub use catalog::{Catalog, Group, Rule};
pub use emit::EmitSummary;
pub use error::{Error, Result};
pub use rule_kind::RuleKind;
