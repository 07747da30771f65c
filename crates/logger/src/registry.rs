//! Process-wide logger slot.
//!
//! The slot starts empty. Any thread may install, replace or clear the
//! logger at any time. Readers always see either no logger or a fully
//! constructed one, and a handle returned by [`get_logger`] stays valid
//! after the slot is replaced; the old logger is dropped once its last
//! holder lets go.

use crate::Logger;
use arc_swap::ArcSwapOption;
use std::sync::Arc;

// `ArcSwap` needs a sized pointee, hence the extra `Arc` around the trait object.
static LOGGER: ArcSwapOption<Arc<dyn Logger>> = ArcSwapOption::const_empty();

/// Replace the global logger; `None` clears it.
///
/// In-flight log calls holding the previous logger are not waited for.
pub fn set_logger(logger: Option<Arc<dyn Logger>>) {
    LOGGER.store(logger.map(Arc::new));
}

/// Shared handle to the current global logger, if any
pub fn get_logger() -> Option<Arc<dyn Logger>> {
    let slot = LOGGER.load();
    (*slot).as_ref().map(|logger| Arc::clone(&**logger))
}

/// Install `logger` globally, returning the logger it replaced
pub fn init(logger: Arc<dyn Logger>) -> Option<Arc<dyn Logger>> {
    unwrap_slot(LOGGER.swap(Some(Arc::new(logger))))
}

/// Clear the global logger, returning the logger that was installed
pub fn take_logger() -> Option<Arc<dyn Logger>> {
    unwrap_slot(LOGGER.swap(None))
}

/// Whether a call at `level` would currently be emitted
pub fn enabled(level: crate::Level) -> bool {
    if !level.is_enabled_static() {
        return false;
    }
    let slot = LOGGER.load();
    (*slot).as_ref().is_some_and(|logger| logger.is_enabled(level))
}

fn unwrap_slot(slot: Option<Arc<Arc<dyn Logger>>>) -> Option<Arc<dyn Logger>> {
    slot.map(Arc::unwrap_or_clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AtomicLevel, Level, NoOpLogger, Record};
    use serial_test::serial;

    struct Counting {
        level: AtomicLevel,
    }

    impl Logger for Counting {
        fn log(&self, _record: Record) {}
        fn set_level(&self, level: Level) {
            self.level.store(level);
        }
        fn level(&self) -> Level {
            self.level.load()
        }
    }

    #[test]
    #[serial(global_logger)]
    fn test_set_get_clear() {
        set_logger(None);
        assert!(get_logger().is_none());

        let logger: Arc<dyn Logger> = Arc::new(Counting { level: AtomicLevel::new(Level::Warn) });
        set_logger(Some(logger.clone()));

        let fetched = get_logger().expect("logger installed");
        assert!(Arc::ptr_eq(&fetched, &logger));
        assert_eq!(fetched.level(), Level::Warn);

        set_logger(None);
        assert!(get_logger().is_none());
        // The handle we fetched outlives the slot
        assert_eq!(fetched.level(), Level::Warn);
    }

    #[test]
    #[serial(global_logger)]
    fn test_init_and_take_return_previous() {
        set_logger(None);
        let first: Arc<dyn Logger> = Arc::new(NoOpLogger);
        let second: Arc<dyn Logger> = Arc::new(Counting { level: AtomicLevel::default() });

        assert!(init(first.clone()).is_none());
        let previous = init(second.clone()).expect("first logger returned");
        assert!(Arc::ptr_eq(&previous, &first));

        let taken = take_logger().expect("second logger returned");
        assert!(Arc::ptr_eq(&taken, &second));
        assert!(take_logger().is_none());
    }

    #[test]
    #[serial(global_logger)]
    fn test_enabled() {
        set_logger(None);
        assert!(!enabled(Level::Critical));

        init(Arc::new(Counting { level: AtomicLevel::new(Level::Error) }));
        assert!(!enabled(Level::Warn));
        assert_eq!(enabled(Level::Error), Level::Error.is_enabled_static());

        init(Arc::new(NoOpLogger));
        assert!(!enabled(Level::Critical));
        set_logger(None);
    }

    #[test]
    #[serial(global_logger)]
    fn test_dropped_when_last_holder_releases() {
        set_logger(None);
        let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
        set_logger(Some(logger.clone()));
        assert_eq!(Arc::strong_count(&logger), 2);

        let held = get_logger().expect("installed");
        set_logger(None);
        assert_eq!(Arc::strong_count(&logger), 2);
        drop(held);
        assert_eq!(Arc::strong_count(&logger), 1);
    }
}
