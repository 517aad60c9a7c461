use log::LevelFilter;
use mathutil::util::log::init_simple_logger;
use mathutil::{term, Expression};

// the logger is global, so it gets a binary of its own.
#[test]
fn develop_with_trace_logging() { 
    assert!(init_simple_logger(LevelFilter::Trace).is_ok());

    let a = Expression::from(term!(1, x = 1)) + term!(-2);
    let b = (&a * &a).develop();
    assert_eq!(b.to_string(), "x² - 4x + 4");

    assert!(init_simple_logger(LevelFilter::Info).is_err());
}
