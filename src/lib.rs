pub mod case;
pub mod cli;
pub mod config;
pub mod convention;

pub use case::{from_camel_case, to_camel_case, to_pascal_case};
pub use config::Config;
pub use convention::NamingConvention;

#[derive(Debug, Clone)]
pub struct Rename {
    pub original: String,
    pub renamed: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConvertResult {
    pub renames: Vec<Rename>,
    pub changed_count: usize,
}

impl ConvertResult {
    pub fn push(&mut self, original: String, renamed: String) {
        if original != renamed {
            self.changed_count += 1;
        }
        self.renames.push(Rename { original, renamed });
    }
}
