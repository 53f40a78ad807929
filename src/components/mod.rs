pub mod force_graph;
pub mod header;
pub mod project_card;
pub mod project_graph;
