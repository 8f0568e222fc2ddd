pub mod backup;
pub mod calculator;
pub mod clock;
pub mod log;
pub mod report;
