extern crate quickcheck;
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod tree;

use std::sync::Once;

use simplelog::{Config, LevelFilter, TestLogger};

/// Routes the tree's log output through the test harness so it shows up next to failures.
pub(crate) fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Debug, Config::default());
    });
}
