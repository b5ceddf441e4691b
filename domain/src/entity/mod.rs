//! Entity extraction: day, time and course filters from free text.

pub mod course_matcher;
pub mod day;
pub mod extractor;
pub mod filters;
pub mod time;

pub use course_matcher::{CourseMatcher, CoursePattern};
pub use day::extract_days;
pub use extractor::EntityExtractor;
pub use filters::ExtractedFilters;
pub use time::extract_time_window;
