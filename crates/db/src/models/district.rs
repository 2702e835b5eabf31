//! Aggregate district statistics.

use serde::Serialize;
use sqlx::FromRow;

/// Aggregate project counts for a district set.
///
/// Statuses with no matching projects report zero rather than being omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct DistrictStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub completed: i64,
    pub archived: i64,
}
