mod help;
mod start;
pub mod unknown;

pub fn commands() -> [crate::Command; 2] {
    [start::start(), help::help()]
}
