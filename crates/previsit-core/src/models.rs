pub mod questionnaire;
pub mod summary;
