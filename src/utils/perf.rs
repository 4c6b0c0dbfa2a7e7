#[macro_export]
macro_rules! trace_time {
    // $threshold_ms: Enter 50 for 50ms etc. Fits and workbook reads block the UI thread.
    ($name:expr, $threshold_ms:expr, $block:block) => {{
        if $crate::config::LOG_PERFORMANCE {
            let start = $crate::utils::AppInstant::now();
            let result = $block;
            let millis = start.elapsed().as_secs_f64() * 1000.0;
            if millis > $threshold_ms as f64 {
                log::warn!(
                    "🐢 SLOW [{}]: '{}' took {:.1}ms (Threshold: {}ms)",
                    if cfg!(debug_assertions) { "DEBUG" } else { "RELEASE" },
                    $name,
                    millis,
                    $threshold_ms
                );
            }
            result
        } else {
            $block
        }
    }};
}
