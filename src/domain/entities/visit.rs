use serde::{Deserialize, Serialize};

/// Primary key of the singleton counter row.
pub const VISIT_COUNTER_ID: i32 = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisitCount {
    pub total: i64,
}
