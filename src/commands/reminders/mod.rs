mod add;
mod dismiss;
mod list;
pub mod util;

pub fn commands() -> [crate::Command; 3] {
    [add::add(), dismiss::dismiss(), list::list()]
}
