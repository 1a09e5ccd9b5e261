//! One-time initialisation of the cryptographic backend

/// Initialise the asymmetric crypto backend
///
/// Runs at most once per process no matter how many threads call it.
/// Key construction calls this on its own; applications may call it early
/// to move the setup cost out of the first request. Teardown belongs to the
/// backend.
pub fn init() {
    #[cfg(feature = "asymmetric")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            aws_lc_rs::init();
            tracing::debug!("crypto backend initialised");
        });
    }
}
