// Kept in its own test binary since it changes the process environment.
use litcatalog::literature::Magazine;
use litcatalog::settings::{DEFAULT_MAX_YEAR, Limits};

#[test]
fn environment_overrides_defaults() {
    unsafe {
        std::env::set_var("LITCATALOG_MAX_TITLE_LENGTH", "8");
    }
    let limits = Limits::load(None).expect("settings load");
    unsafe {
        std::env::remove_var("LITCATALOG_MAX_TITLE_LENGTH");
    }
    assert_eq!(limits.max_title_length, 8);
    assert_eq!(limits.max_year, DEFAULT_MAX_YEAR);
    assert!(Magazine::with_limits("Time", 1923, &limits).is_ok());
    assert!(Magazine::with_limits("The New Yorker", 1925, &limits).is_err());
}
