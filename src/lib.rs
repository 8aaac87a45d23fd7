pub mod catalog;
pub mod checker;
pub mod cli;
pub mod discovery;
pub mod javadoc;
pub mod linting;
pub mod model;
pub mod parser;
pub mod resolver;
