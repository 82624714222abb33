pub mod rewards;

pub use rewards::ExperienceCalculator;
