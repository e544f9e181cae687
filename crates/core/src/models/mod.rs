pub mod calculator;
pub mod display_format;
pub mod field;
pub mod inputs;
pub mod mode;
pub mod preferences;
pub mod results;
pub mod theme;
