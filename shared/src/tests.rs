#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use time::macros::datetime;
    use time::{Duration, OffsetDateTime};
    use crate::auth::{Authorization, SecretKey};
    use crate::config::SurveyConfig;
    use crate::controller::{InactivityTimer, LockStatus, Notice, SurveyController};
    use crate::logger::VoteSink;
    use crate::models::{Breakdown, Category, Color, ColorCounts, VoteRecord};

    const KEY: &str = "GG2024";

    #[derive(Default)]
    struct FakeTimer {
        armed: Vec<Duration>,
        pending: Option<Duration>,
        cancels: usize,
    }

    impl InactivityTimer for FakeTimer {
        fn arm(&mut self, after: Duration) {
            self.armed.push(after);
            self.pending = Some(after);
        }

        fn cancel(&mut self) {
            self.cancels += 1;
            self.pending = None;
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        records: RefCell<Vec<VoteRecord>>,
    }

    impl VoteSink for RecordingSink {
        fn submit(&self, record: VoteRecord) {
            self.records.borrow_mut().push(record);
        }
    }

    type Controller = SurveyController<FakeTimer, RecordingSink>;

    fn controller() -> Controller {
        SurveyController::new(SurveyConfig::default(), FakeTimer::default(), RecordingSink::default())
    }

    // Inside the lunch window.
    fn lunch() -> OffsetDateTime { datetime!(2026-10-16 12:00:00 UTC) }
    // Between lunch and dinner.
    fn afternoon() -> OffsetDateTime { datetime!(2026-10-16 15:00:00 UTC) }

    fn ms(n: i64) -> Duration { Duration::milliseconds(n) }

    fn displayed(b: &Breakdown) -> (u32, u32, u32) {
        (b.display(Color::Red), b.display(Color::Yellow), b.display(Color::Green))
    }

    #[test]
    fn test_end_to_end_menu_votes() {
        let mut c = controller();
        for color in [Color::Red, Color::Red, Color::Green] {
            assert!(c.cast_vote(Category::Menu, color, lunch()));
        }

        assert_eq!(*c.tally().counts(Category::Menu), ColorCounts { red: 2, yellow: 0, green: 1 });
        assert_eq!(displayed(&c.tally().breakdown(Category::Menu)), (67, 0, 33));
        assert_eq!(displayed(&c.tally().aggregate()), (67, 0, 33));
        assert_eq!(displayed(&c.tally().breakdown(Category::Higiene)), (0, 0, 0));

        let sent = c.sink().records.borrow();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[2], VoteRecord { category: Category::Menu, color: Color::Green });
    }

    #[test]
    fn test_votes_while_locked_are_dropped() {
        let mut c = controller();
        assert_eq!(c.status(afternoon()), LockStatus::Locked);
        for _ in 0..10 {
            assert!(!c.cast_vote(Category::Atencion, Color::Green, afternoon()));
        }
        assert!(c.tally().is_empty());
        assert!(c.sink().records.borrow().is_empty());
        assert!(c.timer().armed.is_empty());
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let mut c = controller();
        let mut rng = 7u32;
        for _ in 0..200 {
            rng = rng.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let category = Category::ALL[(rng >> 8) as usize % 5];
            let color = Color::ALL[(rng >> 16) as usize % 3];
            c.cast_vote(category, color, lunch());

            for view in c.dashboard(lunch()).categories {
                let (r, y, g) = displayed(&view.breakdown);
                if view.counts.total() == 0 {
                    assert_eq!((r, y, g), (0, 0, 0));
                } else {
                    assert!((99..=101).contains(&(r + y + g)), "{:?} -> {:?}", view.counts, (r, y, g));
                }
            }
        }
        assert_eq!(c.tally().total(), 200);
    }

    #[test]
    fn test_reset_requires_key() {
        let mut c = controller();
        c.cast_vote(Category::Cantidad, Color::Yellow, lunch());
        c.cast_vote(Category::Higiene, Color::Red, lunch());

        assert_eq!(c.reset(Some("gg2024")), Authorization::Denied);
        assert_eq!(c.reset(None), Authorization::Cancelled);
        assert_eq!(c.tally().total(), 2);

        assert_eq!(c.reset(Some(KEY)), Authorization::Granted);
        assert!(c.tally().is_empty());
        let dash = c.dashboard(lunch());
        assert!(dash.categories.iter().all(|v| displayed(&v.breakdown) == (0, 0, 0)));
        assert_eq!(displayed(&dash.aggregate), (0, 0, 0));
    }

    #[test]
    fn test_reset_leaves_override_alone() {
        let mut c = controller();
        c.unlock(Some(KEY), afternoon());
        c.reset(Some(KEY));
        assert!(c.override_active());
        assert!(c.is_unlocked(afternoon()));
    }

    #[test]
    fn test_unlock_outside_schedule() {
        let mut c = controller();
        let now = afternoon();

        assert_eq!(c.unlock(Some("wrong"), now), Authorization::Denied);
        assert_eq!(c.unlock(Some(""), now), Authorization::Denied);
        assert_eq!(c.unlock(None, now), Authorization::Cancelled);
        assert!(!c.is_unlocked(now));
        assert!(c.timer().armed.is_empty());

        assert_eq!(c.unlock(Some(KEY), now), Authorization::Granted);
        assert!(c.is_unlocked(now));
        assert_eq!(c.status(now), LockStatus::UnlockedManually);
        assert_eq!(c.timer().pending, Some(ms(10_000)));
        assert_eq!(c.pending_deadline(), Some(now + ms(10_000)));
        assert!(c.cast_vote(Category::Utensilios, Color::Green, now));
    }

    #[test]
    fn test_unlock_inside_schedule_does_not_arm() {
        let mut c = controller();
        assert_eq!(c.status(lunch()), LockStatus::UnlockedBySchedule);
        c.unlock(Some(KEY), lunch());
        assert_eq!(c.status(lunch()), LockStatus::UnlockedManually);
        assert!(c.timer().armed.is_empty());
        assert_eq!(c.pending_deadline(), None);
    }

    #[test]
    fn test_inactivity_locks_outside_schedule() {
        let mut c = controller();
        let t0 = afternoon();
        c.unlock(Some(KEY), t0);

        assert!(c.inactivity_elapsed(t0 + ms(10_000)));
        assert!(!c.override_active());
        assert!(!c.is_unlocked(t0 + ms(10_000)));
        assert_eq!(c.pending_deadline(), None);
        assert!(!c.cast_vote(Category::Menu, Color::Red, t0 + ms(10_001)));
    }

    #[test]
    fn test_activity_before_deadline_postpones_lock() {
        let mut c = controller();
        let t0 = afternoon();
        c.unlock(Some(KEY), t0);

        c.record_activity(t0 + ms(9_999));
        assert_eq!(c.pending_deadline(), Some(t0 + ms(19_999)));

        // The first deadline passes without locking.
        assert!(!c.inactivity_elapsed(t0 + ms(10_000)));
        assert!(c.is_unlocked(t0 + ms(10_000)));
        assert_eq!(c.timer().pending, Some(ms(9_999)));

        assert!(c.inactivity_elapsed(t0 + ms(19_999)));
        assert!(!c.is_unlocked(t0 + ms(19_999)));
    }

    #[test]
    fn test_accepted_vote_rearms_timer() {
        let mut c = controller();
        let t0 = afternoon();
        c.unlock(Some(KEY), t0);
        let cancels = c.timer().cancels;

        c.cast_vote(Category::Menu, Color::Yellow, t0 + ms(5_000));
        assert_eq!(c.timer().cancels, cancels + 1);
        assert_eq!(c.pending_deadline(), Some(t0 + ms(15_000)));
        assert!(!c.inactivity_elapsed(t0 + ms(10_000)));
    }

    #[test]
    fn test_activity_without_override_is_ignored() {
        let mut c = controller();
        c.record_activity(afternoon());
        c.tick(afternoon());
        assert!(c.timer().armed.is_empty());
        assert_eq!(c.timer().cancels, 0);
        assert!(!c.inactivity_elapsed(afternoon()));
    }

    #[test]
    fn test_activity_inside_window_cancels_pending_timer() {
        let mut c = controller();
        let before_lunch = datetime!(2026-10-16 10:59:55 UTC);
        c.unlock(Some(KEY), before_lunch);
        assert!(c.pending_deadline().is_some());

        c.record_activity(datetime!(2026-10-16 11:00:01 UTC));
        assert_eq!(c.pending_deadline(), None);
        assert_eq!(c.timer().pending, None);
    }

    #[test]
    fn test_deadline_inside_window_keeps_override() {
        let mut c = controller();
        c.unlock(Some(KEY), datetime!(2026-10-16 10:59:55 UTC));
        assert!(!c.inactivity_elapsed(datetime!(2026-10-16 11:00:05 UTC)));
        assert!(c.override_active());
        assert_eq!(c.pending_deadline(), None);
    }

    #[test]
    fn test_tick_arms_timer_when_window_closes() {
        let mut c = controller();
        c.unlock(Some(KEY), datetime!(2026-10-16 13:29:00 UTC));
        c.tick(datetime!(2026-10-16 13:29:30 UTC));
        assert_eq!(c.pending_deadline(), None);

        let closed = datetime!(2026-10-16 13:30:00 UTC);
        c.tick(closed);
        assert_eq!(c.pending_deadline(), Some(closed + ms(10_000)));

        c.tick(closed + ms(1_000));
        assert_eq!(c.pending_deadline(), Some(closed + ms(10_000)));

        assert!(c.inactivity_elapsed(closed + ms(10_000)));
        assert_eq!(c.status(closed + ms(10_000)), LockStatus::Locked);
    }

    #[test]
    fn test_midnight_window() {
        let mut c = controller();
        assert!(c.is_unlocked(datetime!(2026-10-16 00:05:00 UTC)));
        assert!(c.is_unlocked(datetime!(2026-10-16 01:29:59 UTC)));
        assert!(!c.is_unlocked(datetime!(2026-10-16 01:30:00 UTC)));
        assert!(!c.is_unlocked(datetime!(2026-10-16 00:04:59 UTC)));
        assert!(c.cast_vote(Category::Higiene, Color::Green, datetime!(2026-10-16 00:30:00 UTC)));
    }

    #[test]
    fn test_dashboard() {
        let mut c = controller();
        c.cast_vote(Category::Atencion, Color::Red, lunch());
        c.cast_vote(Category::Utensilios, Color::Green, lunch());

        let dash = c.dashboard(lunch());
        assert!(dash.unlocked);
        assert_eq!(dash.clock, "Fecha: 16 de octubre de 2026 | Hora: 12:00:00 p. m.");
        let order: Vec<_> = dash.categories.iter().map(|v| v.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert_eq!(displayed(&dash.aggregate), (50, 0, 50));
        assert!(!c.dashboard(afternoon()).unlocked);
    }

    #[test]
    fn test_notices() {
        let ten = Duration::seconds(10);
        assert_eq!(Notice::for_unlock(Authorization::Cancelled), None);
        assert_eq!(Notice::for_reset(Authorization::Denied), Some(Notice::ResetRejected));
        assert!(Notice::AutoLocked.message(ten).contains("10 segundos"));
        assert!(Notice::for_unlock(Authorization::Granted).unwrap().message(ten).starts_with("¡Formulario desbloqueado!"));
    }

    #[test]
    fn test_config_validation() {
        assert!(SurveyConfig::default().validate().is_ok());
        assert_eq!(SurveyConfig::default().schedule.windows().len(), 4);

        let mut config = SurveyConfig::default();
        config.secret_key = SecretKey::new("");
        assert!(config.validate().is_err());

        let mut config = SurveyConfig::default();
        config.inactivity = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_identifiers_round_trip_through_text() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>().unwrap(), category);
        }
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert!("Menu".parse::<Category>().is_err());
        assert!("blue".parse::<Color>().is_err());
    }
}
