pub mod headers;

pub mod model;
