use std::cell::Cell;
use std::sync::Once;

use gravity_rk::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static WARNINGS: Cell<usize> = const { Cell::new(0) };
}

/// Counts warnings per thread so parallel tests do not see each other's logs.
struct WarningCounter;

impl Log for WarningCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn {
            WARNINGS.with(|count| count.set(count.get() + 1));
        }
    }

    fn flush(&self) {}
}

static LOGGER: WarningCounter = WarningCounter;
static INIT: Once = Once::new();

fn warnings_during<T>(f: impl FnOnce() -> T) -> (T, usize) {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger installed once");
        log::set_max_level(LevelFilter::Warn);
    });
    WARNINGS.with(|count| count.set(0));
    let result = f();
    (result, WARNINGS.with(Cell::get))
}

fn two_body_pair() -> [Body; 2] {
    [Body::at_rest(1.0, 0.0, 0.0), Body::at_rest(1.0, 1.0, 0.0)]
}

#[test]
fn scope_constant_is_used_without_warning() {
    let scope = Scope::new().with("G", 1.0);
    let ((d, resolution), warnings) =
        warnings_during(|| gravity_first_order_in_scope(&two_body_pair(), &scope));
    assert_eq!(warnings, 0);
    assert!(!resolution.is_fallback());
    assert_eq!(d.dv_x, vec![1.0, -1.0]);
}

#[test]
fn missing_constant_falls_back_with_one_warning() {
    let ((d, resolution), warnings) =
        warnings_during(|| gravity_first_order_in_scope(&two_body_pair(), &Scope::new()));
    assert_eq!(warnings, 1);
    assert_eq!(resolution.warning, Some(ConstantWarning::Missing));
    assert_eq!(resolution.constant, GravitationalConstant::DEFAULT);

    let g = config::DEFAULT_GRAVITATIONAL_CONSTANT;
    assert_eq!(d.dv_x, vec![g, -g]);
    assert_eq!(d.dv_y, vec![0.0, 0.0]);
}

#[test]
fn invalid_constant_is_discarded_with_one_warning() {
    let scope = Scope::new().with("G", "strong");
    let ((d, resolution), warnings) =
        warnings_during(|| gravity_first_order_in_scope(&two_body_pair(), &scope));
    assert_eq!(warnings, 1);
    assert!(matches!(resolution.warning, Some(ConstantWarning::Invalid(_))));
    assert_eq!(d.dv_x[0], config::DEFAULT_GRAVITATIONAL_CONSTANT);
}

#[test]
fn constant_is_resolved_once_per_call() {
    let bodies: Vec<Body> = (0..10).map(|i| Body::at_rest(1.0, i as f64, 0.0)).collect();
    let (_, warnings) = warnings_during(|| gravity_first_order_in_scope(&bodies, &Scope::new()));
    assert_eq!(warnings, 1);
}

#[test]
fn constant_may_change_between_calls() {
    let mut scope = Scope::new().with("G", 1.0);
    let (weak, _) = gravity_first_order_in_scope(&two_body_pair(), &scope);
    scope.insert("G", 4.0);
    let (strong, _) = gravity_first_order_in_scope(&two_body_pair(), &scope);
    assert_eq!(strong.dv_x[0], 4.0 * weak.dv_x[0]);

    assert_eq!(scope.remove("G"), Some(ScopeValue::Number(4.0)));
    assert!(scope.gravitational_constant().is_fallback());
}
