//! Opportunity cards and the empty-cohort placeholder.

mod empty_state;
mod opportunity_card;

pub use empty_state::EmptyStateCard;
pub use opportunity_card::OpportunityCard;
