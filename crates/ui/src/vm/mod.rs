mod content_vm;
mod curriculum_vm;
mod feedback_vm;
mod markdown;
mod mentor_vm;
mod portfolio_vm;
mod progress_vm;
mod time_fmt;

pub use content_vm::{
    CourseCardVm, GalleryTileVm, course_cards, gallery_tiles, total_course_weeks,
};
pub use curriculum_vm::{
    AssessmentVm, LessonDetailVm, LessonLinkVm, LessonRowVm, LevelCardVm, PrerequisiteVm,
    TermCardVm, bar_width, format_percent, map_lesson_detail, map_level_cards,
};
pub use feedback_vm::{
    AnalysisVm, FeedbackTab, FeedbackVm, RecommendedLessonVm, SubmissionVm, map_feedback,
    score_band_class,
};
pub use markdown::{markdown_to_html, sanitize_html};
pub use mentor_vm::{
    AvailabilityRowVm, MentorCardVm, ScheduleVm, SessionRowVm, map_mentor_cards, map_schedule,
};
pub use portfolio_vm::{
    CategoryTabVm, EditFormVm, PortfolioCardVm, ViewMode, map_category_tabs, map_portfolio_cards,
};
pub use progress_vm::{
    DeadlineVm, ProgressTab, ProgressVm, ScoreBarVm, SkillCategoryVm, map_progress, streak_class,
};
pub use time_fmt::{format_date, format_datetime, format_days_ago, format_minutes};
