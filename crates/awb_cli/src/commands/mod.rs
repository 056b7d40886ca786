pub mod batch;
pub mod classify;
pub mod key;
pub mod keywords;
pub mod output;
