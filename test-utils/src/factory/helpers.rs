use std::sync::atomic::{AtomicU64, Ordering};

/// First id handed out, shaped like a real Discord snowflake.
const FIRST_SNOWFLAKE: u64 = 900_000_000_000_000_000;

static NEXT_SNOWFLAKE: AtomicU64 = AtomicU64::new(FIRST_SNOWFLAKE);

/// Returns an id unique within the test run, for unique columns such as guild ids.
pub fn next_snowflake() -> u64 {
    NEXT_SNOWFLAKE.fetch_add(1, Ordering::Relaxed)
}
