//! Log levels emitted while building interpolators.
//!
//! Rejected input is reported to the caller through `InterpolationError`,
//! so construction must never log above `DEBUG`.

use std::sync::{Arc, Mutex};

use spline_core::math::interpolators::{MonotoneCubicInterpolator, NaturalSpline};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// Records the level of every event it sees.
#[derive(Clone, Default)]
struct LevelRecorder {
    levels: Arc<Mutex<Vec<Level>>>,
}

impl LevelRecorder {
    fn levels(&self) -> Vec<Level> {
        self.levels.lock().unwrap().clone()
    }
}

impl Subscriber for LevelRecorder {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        self.levels.lock().unwrap().push(*event.metadata().level());
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn levels_while<F: FnOnce()>(f: F) -> Vec<Level> {
    let recorder = LevelRecorder::default();
    tracing::subscriber::with_default(recorder.clone(), f);
    recorder.levels()
}

#[test]
fn test_rejected_input_logs_at_debug() {
    let levels = levels_while(|| {
        assert!(NaturalSpline::new(vec![[0.0, 0.0], [0.0, 1.0]]).is_err());
        assert!(MonotoneCubicInterpolator::new(vec![[0.0, f64::NAN]]).is_err());
        assert!(NaturalSpline::new(vec![[-1e308, 0.0], [1e308, 1.0]]).is_err());
    });

    assert_eq!(levels, vec![Level::DEBUG; 3]);
}

#[test]
fn test_accepted_input_logs_at_debug() {
    let levels = levels_while(|| {
        assert!(NaturalSpline::new(vec![[0.0, 0.0], [1.0, 1.0]]).is_ok());
        assert!(MonotoneCubicInterpolator::new(vec![[0.0, 0.0], [1.0, 1.0]]).is_ok());
    });

    assert!(!levels.is_empty());
    assert!(levels.iter().all(|&level| level == Level::DEBUG));
}
