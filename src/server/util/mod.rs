pub mod deadline;
pub mod parse;
