use std::collections::HashMap;

use chrono::Duration;

use crate::domain::ramp::Ramp;
use crate::domain::schedule_window::TimeRangeKey;
use crate::domain::slot::Slot;

/// Expands each open window into successive slots of exactly
/// `interval_minutes` length.
///
/// Windows are processed independently; overlapping windows intentionally
/// yield overlapping slot sequences, because each window may belong to a
/// different ramp with its own booking granularity. A trailing remainder
/// shorter than one interval is dropped, so a window shorter than the
/// interval yields no slots at all.
///
/// Ramp assignment is deterministic: the ramps sharing a window are ordered
/// ascending by id and picked round-robin by the slot's index within the
/// window. The whole generation is a pure function of its inputs.
pub fn generate(window_to_ramps: &HashMap<TimeRangeKey, Vec<Ramp>>, interval_minutes: i64) -> Vec<Slot> {
    let interval = Duration::minutes(interval_minutes);
    let mut slots: Vec<Slot> = Vec::new();

    // HashMap iteration order is arbitrary; sort the keys so the output is
    // stable across identical requests.
    let mut windows: Vec<&TimeRangeKey> = window_to_ramps.keys().collect();
    windows.sort();

    for window in windows {
        if window.start_time >= window.end_time {
            log::warn!("Skipping malformed schedule window {:?}: start does not lie before end.", window);
            continue;
        }

        let mut ramps: Vec<&Ramp> = window_to_ramps[window].iter().collect();
        if ramps.is_empty() {
            log::warn!("Skipping schedule window {:?} without any ramp attached.", window);
            continue;
        }
        ramps.sort_by_key(|ramp| ramp.id);

        let mut slot_index: usize = 0;
        let mut cursor = window.start_time;

        loop {
            let (slot_end, wrapped) = cursor.overflowing_add_signed(interval);

            // A wrap past midnight can never stay inside a same-day window.
            if wrapped != 0 || slot_end > window.end_time {
                break;
            }

            let ramp = ramps[slot_index % ramps.len()];

            slots.push(Slot {
                start_time: cursor,
                end_time: slot_end,
                is_available: true,
                ramp_id: ramp.id,
                ramp_name: ramp.name.clone(),
            });

            slot_index += 1;
            cursor = slot_end;
        }
    }

    return slots;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ramp::CargoType;
    use chrono::NaiveTime;

    fn ramp(id: i64, name: &str) -> Ramp {
        Ramp { id, name: name.to_string(), branch_id: 1, is_available: true, capabilities: CargoType::default_for_name(name) }
    }

    fn key(start: (u32, u32), end: (u32, u32)) -> TimeRangeKey {
        TimeRangeKey {
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn evenly_dividing_window_yields_exact_slot_count() {
        // 07:00-12:00 at 60 minutes: exactly 5 slots.
        let map = HashMap::from([(key((7, 0), (12, 0)), vec![ramp(1, "Rampa 1")])]);

        let slots = generate(&map, 60);

        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].start_time, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        assert_eq!(slots[4].end_time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn every_slot_spans_exactly_one_interval() {
        let map = HashMap::from([(key((8, 0), (17, 30)), vec![ramp(1, "Rampa 1")])]);

        for slot in generate(&map, 45) {
            assert_eq!(slot.end_time - slot.start_time, Duration::minutes(45), "Slot span must match the requested interval exactly");
        }
    }

    #[test]
    fn trailing_partial_slot_is_dropped() {
        // 07:00-08:30 at 60 minutes leaves a 30 minute remainder.
        let map = HashMap::from([(key((7, 0), (8, 30)), vec![ramp(1, "Rampa 1")])]);

        let slots = generate(&map, 60);

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].end_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn window_shorter_than_interval_yields_no_slots() {
        let map = HashMap::from([(key((7, 0), (7, 30)), vec![ramp(1, "Rampa 1")])]);

        assert!(generate(&map, 60).is_empty());
    }

    #[test]
    fn malformed_window_is_skipped_without_panic() {
        let map = HashMap::from([
            (key((9, 0), (7, 0)), vec![ramp(1, "Rampa 1")]),
            (key((7, 0), (9, 0)), vec![ramp(2, "Rampa 2")]),
        ]);

        let slots = generate(&map, 60);

        assert_eq!(slots.len(), 2, "Only the well-formed window contributes slots");
        assert!(slots.iter().all(|slot| slot.ramp_id == 2));
    }

    #[test]
    fn ramp_assignment_is_deterministic_round_robin() {
        let map = HashMap::from([(key((7, 0), (11, 0)), vec![ramp(3, "Rampa 3"), ramp(2, "Rampa 2")])]);

        let first = generate(&map, 60);
        let second = generate(&map, 60);

        assert_eq!(first, second, "Generation must be a pure function of its inputs");

        // Sorted by id, the rotation starts at ramp 2.
        let assigned: Vec<i64> = first.iter().map(|slot| slot.ramp_id).collect();
        assert_eq!(assigned, vec![2, 3, 2, 3]);
    }

    #[test]
    fn overlapping_windows_stay_independent() {
        // Two overlapping windows of different ramps both contribute their
        // full slot sequence; nothing is merged before generation.
        let map = HashMap::from([
            (key((7, 0), (9, 0)), vec![ramp(1, "Rampa 1")]),
            (key((8, 0), (10, 0)), vec![ramp(2, "Rampa 2")]),
        ]);

        let slots = generate(&map, 60);

        assert_eq!(slots.len(), 4);
    }

    #[test]
    fn window_ending_at_midnight_is_handled() {
        let map = HashMap::from([(key((22, 0), (23, 59)), vec![ramp(1, "Rampa 1")])]);

        let slots = generate(&map, 60);

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].end_time, NaiveTime::from_hms_opt(23, 0, 0).unwrap());
    }
}
