//! Stub files copied into every new day directory.

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub content: &'static str,
}

macro_rules! template {
    ($name:literal) => {
        Template {
            name: $name,
            content: include_str!(concat!("../templates/", $name)),
        }
    };
}

pub const TEMPLATES: [Template; 6] = [
    template!("input.txt"),
    template!("input_sample.txt"),
    template!("solution.rs"),
    template!("solution_test.rs"),
    template!("solution_bench.rs"),
    template!("solution_refactored.rs"),
];

pub fn names() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|t| t.name)
}
