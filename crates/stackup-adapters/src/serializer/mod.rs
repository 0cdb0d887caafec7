//! Composition serializer adapters.

mod yaml;

pub use yaml::YamlSerializer;
