//! GeoSite catalog model and decoder.
//!
//! The catalog schema has three nesting levels:
//!
//! ```text
//! GeoSiteList:  field 1 = repeated GeoSite (len-delimited)
//! GeoSite:      field 1 = code string
//!               field 2 = repeated Domain (len-delimited)
//! Domain:       field 1 = kind tag (varint)
//!               field 2 = value string
//! ```
//!
//! Everything else (resource hashes, attribute tags, future additions) is
//! skipped by the generic wire reader.

use crate::wire::{WireReader, WireType};
use crate::{Error, Result, RuleKind};

const LIST_ENTRY: u64 = 1;
const SITE_CODE: u64 = 1;
const SITE_DOMAIN: u64 = 2;
const DOMAIN_KIND: u64 = 1;
const DOMAIN_VALUE: u64 = 2;

/// A single (kind, value) domain-matching rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Matching semantics of the rule
    pub kind: RuleKind,
    /// Domain fragment or pattern
    pub value: String,
}

/// A named collection of rules, keyed by a short country/category code.
///
/// Codes are assumed unique within a catalog; the decoder does not enforce
/// this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Country or category code, as stored in the catalog
    pub code: String,
    /// Rules in catalog order
    pub rules: Vec<Rule>,
}

/// The full decoded catalog: an ordered sequence of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Groups in catalog order
    pub groups: Vec<Group>,
}

impl Catalog {
    /// Decode a catalog from its wire encoding.
    ///
    /// Unknown fields at any level are skipped. Grammar violations
    /// (truncated prefixes, invalid wire types) fail the whole decode;
    /// no partial catalog is produced.
    pub fn decode(buf: &[u8]) -> Result<Catalog> {
        let mut reader = WireReader::new(buf);
        let mut groups = Vec::new();

        while !reader.is_empty() {
            match reader.read_tag()? {
                (LIST_ENTRY, WireType::LenDelimited) => {
                    groups.push(decode_group(reader.read_bytes()?)?);
                }
                (LIST_ENTRY, _) => {
                    return Err(Error::UnexpectedWireType { field: LIST_ENTRY });
                }
                (_, wire_type) => reader.skip_field(wire_type)?,
            }
        }

        Ok(Catalog { groups })
    }

    /// Total number of rules across all groups.
    pub fn rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.rules.len()).sum()
    }
}

fn decode_group(buf: &[u8]) -> Result<Group> {
    let mut reader = WireReader::new(buf);
    let mut code = String::new();
    let mut rules = Vec::new();

    while !reader.is_empty() {
        match reader.read_tag()? {
            (SITE_CODE, WireType::LenDelimited) => {
                code = reader.read_string()?.to_string();
            }
            (SITE_DOMAIN, WireType::LenDelimited) => {
                rules.push(decode_rule(reader.read_bytes()?)?);
            }
            (field @ (SITE_CODE | SITE_DOMAIN), _) => {
                return Err(Error::UnexpectedWireType { field });
            }
            (_, wire_type) => reader.skip_field(wire_type)?,
        }
    }

    Ok(Group { code, rules })
}

fn decode_rule(buf: &[u8]) -> Result<Rule> {
    let mut reader = WireReader::new(buf);
    // tag 0 (plain) is the wire default for an absent kind field
    let mut kind = RuleKind::Plain;
    let mut value = String::new();

    while !reader.is_empty() {
        match reader.read_tag()? {
            (DOMAIN_KIND, WireType::Varint) => {
                kind = RuleKind::from_tag(reader.read_varint()?);
            }
            (DOMAIN_VALUE, WireType::LenDelimited) => {
                value = reader.read_string()?.to_string();
            }
            (field @ (DOMAIN_KIND | DOMAIN_VALUE), _) => {
                return Err(Error::UnexpectedWireType { field });
            }
            (_, wire_type) => reader.skip_field(wire_type)?,
        }
    }

    Ok(Rule { kind, value })
}
