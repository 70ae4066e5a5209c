mod dashboard;
pub use dashboard::Dashboard;

mod lookup;
pub use lookup::{Lookup, Task};
