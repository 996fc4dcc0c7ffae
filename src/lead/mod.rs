pub mod form;
pub mod parser;
pub mod pipeline;
pub mod sanitize;
pub mod validate;
