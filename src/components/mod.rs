//! UI Components for the Campus Placement Portal.

pub mod cards;
mod cohort_section;
mod feedback_stack;
mod nav_header;

pub use cohort_section::CohortSection;
pub use feedback_stack::FeedbackStack;
pub use nav_header::NavHeader;
