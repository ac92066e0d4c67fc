#![cfg(feature = "logging")]

// Log records emitted by PairTable when built with `--features logging`.
//
// Assumes: this is the only test in its binary, so the global logger is
// installed once and sees no records from other tests.
use log::{Level, LevelFilter, Log, Metadata, Record};
use pair_table::PairTable;
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

// Test: table resizes log at debug, bucket growths at trace.
// Verifies: one debug record per doubling with old/new slot counts, one
// trace record per bucket growth.
#[test]
fn growth_is_logged() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut t = PairTable::builder()
        .initial_capacity(4)
        .bucket_capacity(1)
        .build()
        .unwrap();
    // Same sum: one slot, the second entry grows its bucket.
    t.put(0, 5, 1);
    t.put(5, 0, 2);
    // Third entry pushes len above 4 * 0.5.
    t.put(1, 1, 3);

    let records = LOGGER.records.lock().unwrap().clone();
    let resizes: Vec<_> = records
        .iter()
        .filter(|(level, _)| *level == Level::Debug)
        .map(|(_, msg)| msg.as_str())
        .collect();
    assert_eq!(
        resizes,
        vec!["pair table resized from 4 to 8 slots holding 3 entries"]
    );

    let growths = records
        .iter()
        .filter(|(level, msg)| *level == Level::Trace && msg.starts_with("bucket at slot"))
        .count();
    assert_eq!(growths as u64, t.stats().bucket_growths());
    assert!(growths >= 1);
}
