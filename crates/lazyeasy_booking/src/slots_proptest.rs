#[cfg(test)]
mod tests {
    use crate::cache::RecordCache;
    use crate::fixtures::record;
    use crate::slots::{
        effective_min_date, generate_slots, SlotSchedule, SlotStatus, DATE_FORMAT, NOTICE_BLACKOUT,
        NOTICE_FULLY_BOOKED, SLOT_FORMAT,
    };
    use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
    use proptest::prelude::*;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn schedule(blackout: Vec<NaiveDate>) -> SlotSchedule {
        SlotSchedule::new(
            vec![NaiveTime::from_hms_opt(19, 0, 0).unwrap()],
            vec![
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
            ],
            blackout,
        )
    }

    // Bookings spread over the first weeks of the year at template times
    fn create_records(picks: &[(i64, bool)]) -> Vec<lazyeasy_common::BookingRecord> {
        picks
            .iter()
            .map(|&(offset, early)| {
                let date = base_date() + Duration::days(offset);
                let time = if early { "10:00" } else { "19:00" };
                record(&date.format(DATE_FORMAT).to_string(), time)
            })
            .collect()
    }

    proptest! {
        // Every offered slot follows the weekday/weekend template
        #[test]
        fn test_slots_follow_template(day_offset in 0..120i64) {
            let date = base_date() + Duration::days(day_offset);
            let cache = RecordCache::from_records(vec![]);
            let now = base_date().and_hms_opt(0, 0, 0).unwrap();
            let day = generate_slots(&schedule(vec![]), date, &cache, now);

            let expected = match date.weekday() {
                Weekday::Sat | Weekday::Sun => 2,
                _ => 1,
            };
            prop_assert_eq!(day.slots.len(), expected);
            prop_assert!(day.slots.iter().all(|s| s.date == date));
        }

        // Blackout days never offer anything, whatever is booked
        #[test]
        fn test_blackout_is_empty(
            day_offset in 0..60i64,
            picks in prop::collection::vec((0..60i64, any::<bool>()), 0..20),
        ) {
            let date = base_date() + Duration::days(day_offset);
            let cache = RecordCache::from_records(create_records(&picks));
            let now = base_date().and_hms_opt(0, 0, 0).unwrap();
            let day = generate_slots(&schedule(vec![date]), date, &cache, now);

            prop_assert!(day.slots.is_empty());
            prop_assert_eq!(day.notice, Some(NOTICE_BLACKOUT));
        }

        // An available slot is in the future and not in the records
        #[test]
        fn test_available_slots_are_free_and_future(
            day_offset in 0..60i64,
            now_offset_minutes in 0..(60 * 24 * 60i64),
            picks in prop::collection::vec((0..60i64, any::<bool>()), 0..30),
        ) {
            let date = base_date() + Duration::days(day_offset);
            let records = create_records(&picks);
            let cache = RecordCache::from_records(records.clone());
            let now = base_date().and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(now_offset_minutes);
            let day = generate_slots(&schedule(vec![]), date, &cache, now);
            let date_key = date.format(DATE_FORMAT).to_string();

            for slot in &day.slots {
                let label = slot.start.format(SLOT_FORMAT).to_string();
                let taken = records.iter().any(|r| r.occupies(&date_key, &label));
                let past = date.and_time(slot.start) <= now;
                match slot.status {
                    SlotStatus::Available => prop_assert!(!taken && !past),
                    SlotStatus::Past => prop_assert!(past),
                    SlotStatus::Booked => prop_assert!(taken && !past),
                }
            }
            if day.available_count() == 0 {
                prop_assert_eq!(day.notice, Some(NOTICE_FULLY_BOOKED));
            } else {
                prop_assert_eq!(day.notice, None);
            }
        }

        // The picker floor is never before the threshold nor before today
        #[test]
        fn test_min_date_bounds(today_offset in -400..400i64, threshold_offset in -400..400i64) {
            let today = base_date() + Duration::days(today_offset);
            let threshold = base_date() + Duration::days(threshold_offset);
            let min = effective_min_date(today, threshold);
            prop_assert!(min >= today);
            prop_assert!(min >= threshold);
            prop_assert!(min == today || min == threshold);
        }
    }
}
