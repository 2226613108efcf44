//! ID prefixes for every persisted entity.
//!
//! IDs are generated by the store as `{prefix}-{8 hex chars}`, e.g. `lot-a3f8b2c1`.

pub const PREFIX_LOT: &str = "lot";
pub const PREFIX_WEIGHING: &str = "pes";
pub const PREFIX_EXPENSE: &str = "gas";
pub const PREFIX_SALE: &str = "ven";
pub const PREFIX_TASK: &str = "tar";

/// Every prefix in use, for exhaustive tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_LOT,
    PREFIX_WEIGHING,
    PREFIX_EXPENSE,
    PREFIX_SALE,
    PREFIX_TASK,
];

/// Check whether `id` has the shape `{prefix}-{8 hex}`.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
