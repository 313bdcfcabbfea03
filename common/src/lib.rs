pub mod config;
pub mod network;
pub mod retry;
pub mod scan;

pub use tracing;

/// Status line for completed steps. The CLI formatter styles the
/// `sonr::success` target with its own symbol.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "sonr::success", $($arg)*)
    };
}
