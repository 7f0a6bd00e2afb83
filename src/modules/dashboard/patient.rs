//! Patient landing screen: one joint fetch, one derived view model.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use futures::try_join;

use crate::modules::goals::domain::newest_first;
use crate::modules::store::ports::{
    CommentBoard, GoalStore, HealthTipFeed, ReminderStore, StoreError,
};
use crate::modules::store::records::{Goal, HealthTip, ProviderComment, Reminder, ReminderStatus};

/// Recommended daily targets the progress bars measure against.
pub const STEPS_TARGET: u32 = 10_000;
pub const WATER_TARGET: u32 = 8;
pub const SLEEP_TARGET: f64 = 8.0;

const FALLBACK_TIP: &str = "Stay healthy!";

/// The latest logged entry with its progress toward each target,
/// capped at 100.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal: Goal,
    pub steps_pct: u32,
    pub water_pct: u32,
    pub sleep_pct: u32,
}

impl GoalProgress {
    fn from_goal(goal: Goal) -> Self {
        let steps_pct = percent(goal.steps as f64, STEPS_TARGET as f64);
        let water_pct = percent(goal.water_intake as f64, WATER_TARGET as f64);
        let sleep_pct = percent(goal.sleep_hours, SLEEP_TARGET);
        Self {
            goal,
            steps_pct,
            water_pct,
            sleep_pct,
        }
    }
}

fn percent(value: f64, target: f64) -> u32 {
    ((value / target) * 100.0).min(100.0).max(0.0) as u32
}

#[derive(Debug, Clone)]
pub struct PatientDashboard {
    pub latest: Option<GoalProgress>,
    pub goals: Vec<Goal>,
    pub pending_reminders: Vec<Reminder>,
    pub tip_of_the_day: String,
    /// Provider feedback, newest first.
    pub comments: Vec<ProviderComment>,
}

#[async_trait]
pub trait ILoadPatientDashboardUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<PatientDashboard, StoreError>;
}

pub struct LoadPatientDashboardUseCase<G, R, H, C>
where
    G: GoalStore,
    R: ReminderStore,
    H: HealthTipFeed,
    C: CommentBoard,
{
    goals: G,
    reminders: R,
    tips: H,
    comments: C,
}

impl<G, R, H, C> LoadPatientDashboardUseCase<G, R, H, C>
where
    G: GoalStore,
    R: ReminderStore,
    H: HealthTipFeed,
    C: CommentBoard,
{
    pub fn new(goals: G, reminders: R, tips: H, comments: C) -> Self {
        Self {
            goals,
            reminders,
            tips,
            comments,
        }
    }
}

#[async_trait]
impl<G, R, H, C> ILoadPatientDashboardUseCase for LoadPatientDashboardUseCase<G, R, H, C>
where
    G: GoalStore,
    R: ReminderStore,
    H: HealthTipFeed,
    C: CommentBoard,
{
    async fn execute(&self, user_id: &str) -> Result<PatientDashboard, StoreError> {
        // All four requests go out together and the screen renders from
        // all of them or from none; partial results are discarded.
        let (goals, reminders, tips, comments) = try_join!(
            self.goals.goals_for(user_id),
            self.reminders.reminders_for(user_id),
            self.tips.health_tips(),
            self.comments.comments_for_patient(user_id),
        )?;

        let goals = newest_first(goals);
        let latest = goals.first().cloned().map(GoalProgress::from_goal);

        let pending_reminders = reminders
            .into_iter()
            .filter(|r| r.status == ReminderStatus::Pending)
            .collect();

        let mut comments = comments;
        comments.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(PatientDashboard {
            latest,
            goals,
            pending_reminders,
            tip_of_the_day: tip_of_the_day(&tips, Local::now().date_naive()),
            comments,
        })
    }
}

/// Today's tip when the feed has one, otherwise the first entry,
/// otherwise a stock line.
fn tip_of_the_day(tips: &[HealthTip], today: NaiveDate) -> String {
    tips.iter()
        .find(|t| t.date == today)
        .or_else(|| tips.first())
        .map(|t| t.tip.clone())
        .unwrap_or_else(|| FALLBACK_TIP.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::records::GoalPatch;
    use chrono::{Duration, TimeZone, Utc};

    struct MockStore {
        goals: Vec<Goal>,
        reminders: Vec<Reminder>,
        tips: Vec<HealthTip>,
        comments: Vec<ProviderComment>,
        fail_tips: bool,
    }

    impl Default for MockStore {
        fn default() -> Self {
            Self {
                goals: vec![],
                reminders: vec![],
                tips: vec![],
                comments: vec![],
                fail_tips: false,
            }
        }
    }

    #[async_trait]
    impl GoalStore for MockStore {
        async fn goals_for(&self, _user_id: &str) -> Result<Vec<Goal>, StoreError> {
            Ok(self.goals.clone())
        }

        async fn create_goal(&self, _goal: &Goal) -> Result<Goal, StoreError> {
            unimplemented!("not used by dashboard")
        }

        async fn patch_goal(&self, _id: &str, _patch: &GoalPatch) -> Result<Goal, StoreError> {
            unimplemented!("not used by dashboard")
        }

        async fn delete_goal(&self, _id: &str) -> Result<(), StoreError> {
            unimplemented!("not used by dashboard")
        }
    }

    #[async_trait]
    impl ReminderStore for MockStore {
        async fn reminders_for(&self, _user_id: &str) -> Result<Vec<Reminder>, StoreError> {
            Ok(self.reminders.clone())
        }

        async fn set_reminder_status(
            &self,
            _id: &str,
            _status: ReminderStatus,
        ) -> Result<Reminder, StoreError> {
            unimplemented!("not used by dashboard")
        }
    }

    #[async_trait]
    impl HealthTipFeed for MockStore {
        async fn health_tips(&self) -> Result<Vec<HealthTip>, StoreError> {
            if self.fail_tips {
                return Err(StoreError::Transport("timed out".to_string()));
            }
            Ok(self.tips.clone())
        }
    }

    #[async_trait]
    impl CommentBoard for MockStore {
        async fn comments_for_patient(
            &self,
            _patient_id: &str,
        ) -> Result<Vec<ProviderComment>, StoreError> {
            Ok(self.comments.clone())
        }

        async fn create_comment(
            &self,
            _comment: &ProviderComment,
        ) -> Result<ProviderComment, StoreError> {
            unimplemented!("not used by dashboard")
        }

        async fn mark_comment_read(&self, _id: &str) -> Result<ProviderComment, StoreError> {
            unimplemented!("not used by dashboard")
        }
    }

    fn goal(id: &str, day: u32, steps: u32) -> Goal {
        Goal {
            id: id.to_string(),
            user_id: "u-1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            steps,
            water_intake: 4,
            sleep_hours: 6.0,
        }
    }

    fn reminder(id: &str, status: ReminderStatus) -> Reminder {
        Reminder {
            id: id.to_string(),
            user_id: "u-1".to_string(),
            kind: "checkup".to_string(),
            title: "Annual physical".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            status,
        }
    }

    fn comment(id: &str, hours_ago: i64) -> ProviderComment {
        ProviderComment {
            id: id.to_string(),
            patient_id: "u-1".to_string(),
            provider_id: "p-1".to_string(),
            provider_name: "Dr. Reyes".to_string(),
            goal_id: "g-1".to_string(),
            goal_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            comment: "Nice progress".to_string(),
            date: Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
                - Duration::hours(hours_ago),
            read: false,
        }
    }

    #[tokio::test]
    async fn test_dashboard_derives_progress_pending_and_ordering() {
        let store = MockStore {
            goals: vec![goal("g-1", 1, 5000), goal("g-2", 2, 12_000)],
            reminders: vec![
                reminder("r-1", ReminderStatus::Pending),
                reminder("r-2", ReminderStatus::Completed),
            ],
            comments: vec![comment("c-old", 5), comment("c-new", 1)],
            ..MockStore::default()
        };
        let use_case = LoadPatientDashboardUseCase::new(
            clone_of(&store),
            clone_of(&store),
            clone_of(&store),
            store,
        );

        let dashboard = use_case.execute("u-1").await.unwrap();

        // Latest goal wins and its progress caps at 100.
        let latest = dashboard.latest.unwrap();
        assert_eq!(latest.goal.id, "g-2");
        assert_eq!(latest.steps_pct, 100);
        assert_eq!(latest.water_pct, 50);
        assert_eq!(latest.sleep_pct, 75);

        // Only pending reminders reach the screen.
        assert_eq!(dashboard.pending_reminders.len(), 1);
        assert_eq!(dashboard.pending_reminders[0].id, "r-1");

        // Comments come newest first.
        let ids: Vec<_> = dashboard.comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c-new", "c-old"]);
    }

    fn clone_of(store: &MockStore) -> MockStore {
        MockStore {
            goals: store.goals.clone(),
            reminders: store.reminders.clone(),
            tips: store.tips.clone(),
            comments: store.comments.clone(),
            fail_tips: store.fail_tips,
        }
    }

    #[tokio::test]
    async fn test_one_failed_fetch_fails_the_whole_load() {
        let failing = MockStore {
            fail_tips: true,
            ..MockStore::default()
        };
        let use_case = LoadPatientDashboardUseCase::new(
            MockStore::default(),
            MockStore::default(),
            failing,
            MockStore::default(),
        );

        assert!(use_case.execute("u-1").await.is_err());
    }

    #[test]
    fn test_tip_of_the_day_prefers_today_then_first_then_fallback() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let tips = vec![
            HealthTip {
                date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
                tip: "Drink water".to_string(),
            },
            HealthTip {
                date: today,
                tip: "Take a walk".to_string(),
            },
        ];

        assert_eq!(tip_of_the_day(&tips, today), "Take a walk");
        assert_eq!(tip_of_the_day(&tips[..1], today), "Drink water");
        assert_eq!(tip_of_the_day(&[], today), FALLBACK_TIP);
    }

    #[test]
    fn test_no_goals_means_no_progress_card() {
        let progress = Vec::<Goal>::new().first().cloned().map(GoalProgress::from_goal);
        assert!(progress.is_none());
    }
}
