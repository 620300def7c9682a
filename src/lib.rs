pub mod facade;
pub mod structured;
pub mod convert;
pub mod hook;
pub mod formatter;

pub mod text_format;
pub mod json_format;
pub mod capture;
