//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod achievement_repo;
pub mod progress_repo;
pub mod recording_repo;
pub mod segment_repo;
pub mod streak_repo;

pub use achievement_repo::AchievementRepo;
pub use progress_repo::ProgressRepo;
pub use recording_repo::RecordingRepo;
pub use segment_repo::SegmentRepo;
pub use streak_repo::StreakRepo;
