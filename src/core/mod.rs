pub mod calculator;
pub mod catalog;
pub mod logic;
pub mod report;
pub mod validator;
