pub mod issue;
pub mod reference;
pub mod graph;
pub mod crawler;
pub mod ports;
