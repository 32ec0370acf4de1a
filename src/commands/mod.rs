pub mod browse;
pub mod conflicts;
pub mod days;
pub mod decide;
pub mod events;
pub mod export;
pub mod reset;
pub mod review;
pub mod schedule;
pub mod status;
