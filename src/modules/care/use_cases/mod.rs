pub mod complete_reminder;
pub mod fetch_roster;
pub mod leave_comment;
pub mod mark_comment_read;
pub mod review_patient;
