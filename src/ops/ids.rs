use crate::model::dashboard::Dashboard;

/// Loaded ids above this are not timestamps any clock will reach, so they
/// cannot collide with generated ids and are not used for seeding.
const MAX_SEEDED_ID: i64 = i64::MAX / 2;

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Hands out timestamp-style ids (`"1718000000000"`) that never repeat.
///
/// Ids are the current epoch-millisecond time, bumped past the last id issued
/// when two requests land in the same millisecond (or the clock steps back).
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// A generator that will never hand out an id already present in `dashboard`.
    /// Non-numeric and out-of-range ids cannot collide with generated ones and
    /// are ignored.
    pub fn seeded_from(dashboard: &Dashboard) -> Self {
        let mut ids = IdGenerator::new();
        for id in dashboard.all_ids() {
            ids.observe(id);
        }
        ids
    }

    /// Record an existing id so later ids are issued past it
    pub fn observe(&mut self, id: &str) {
        if let Ok(n) = id.parse::<i64>()
            && n <= MAX_SEEDED_ID
        {
            self.last = self.last.max(n);
        }
    }

    /// Next id, using the wall clock
    pub fn next_id(&mut self) -> String {
        self.next_id_at(now_millis())
    }

    /// Next id given an explicit `now` in epoch milliseconds
    pub fn next_id_at(&mut self, now: i64) -> String {
        let next = now.max(self.last.saturating_add(1));
        self.last = next;
        next.to_string()
    }
}
