//! Command implementations.

pub mod list;
pub mod show;
pub mod tags;

pub use self::list::execute_list;
pub use self::show::execute_show;
pub use self::tags::execute_tags;
