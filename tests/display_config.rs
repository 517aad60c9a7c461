use mathutil::config;
use mathutil::{term, Expression};

// runs in its own binary: the switch is process-wide.
#[test]
fn keep_null_values() { 
    let e = Expression::from(term!(0, x = 2)) + term!(3);
    assert_eq!(e.to_string(), "3");

    config::set_remove_null_values_on_display(false);
    assert!(!config::is_remove_null_values_on_display());
    assert_eq!(e.to_string(), "0x² + 3");

    config::set_remove_null_values_on_display(true);
    assert_eq!(e.to_string(), "3");
}
