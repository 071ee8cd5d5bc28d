pub mod github;
pub mod graphviz;
