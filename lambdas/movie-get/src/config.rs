use std::env;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `TABLE_NAME`, the movies table.
    pub table_name: Option<String>,
    /// `CAST_TABLE_NAME`, only needed for `?cast=true`.
    pub cast_table_name: Option<String>,
    /// `REGION`, falls back to the default provider chain.
    pub region: Option<String>,
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Config {
            table_name: var("TABLE_NAME"),
            cast_table_name: var("CAST_TABLE_NAME"),
            region: var("REGION"),
        }
    }
}
