mod cli_py;
mod schema_json;
mod schema_yaml;

pub use cli_py::CliPy;
pub use schema_json::SchemaJson;
pub use schema_yaml::SchemaYaml;
