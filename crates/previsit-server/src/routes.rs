pub mod health;
pub mod summarize;
