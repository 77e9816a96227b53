use std::collections::HashSet;

use crate::domain::schedule_window::TimeRangeKey;
use crate::domain::slot::Slot;

/// Collapses slots that coincide in start and end time into one
/// representative slot.
///
/// Several ramps can advertise the identical window; the public listing must
/// present one bookable option per distinct time range. The first slot seen
/// for a `(start, end)` key wins and keeps its ramp assignment; relative
/// order of the survivors is preserved. The operation is idempotent.
pub fn dedupe(slots: Vec<Slot>) -> Vec<Slot> {
    let mut seen: HashSet<TimeRangeKey> = HashSet::with_capacity(slots.len());

    slots.into_iter().filter(|slot| seen.insert(slot.range_key())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn slot(start_h: u32, end_h: u32, ramp_id: i64) -> Slot {
        Slot {
            start_time: NaiveTime::from_hms_opt(start_h, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end_h, 0, 0).unwrap(),
            is_available: true,
            ramp_id,
            ramp_name: format!("Rampa {}", ramp_id),
        }
    }

    #[test]
    fn first_seen_slot_wins_for_a_shared_range() {
        let deduped = dedupe(vec![slot(7, 8, 2), slot(7, 8, 3), slot(8, 9, 3)]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].ramp_id, 2, "The first slot seen for a range must keep its ramp assignment");
        assert_eq!(deduped[1].ramp_id, 3);
    }

    #[test]
    fn relative_order_is_preserved() {
        let deduped = dedupe(vec![slot(9, 10, 1), slot(7, 8, 1), slot(9, 10, 2), slot(8, 9, 1)]);

        let starts: Vec<u32> = deduped.iter().map(|s| chrono::Timelike::hour(&s.start_time)).collect();
        assert_eq!(starts, vec![9, 7, 8]);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let input = vec![slot(7, 8, 1), slot(7, 8, 2), slot(8, 9, 1), slot(8, 9, 1)];

        let once = dedupe(input);
        let twice = dedupe(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn same_start_different_end_is_not_a_duplicate() {
        let deduped = dedupe(vec![slot(7, 8, 1), slot(7, 9, 1)]);

        assert_eq!(deduped.len(), 2);
    }
}
