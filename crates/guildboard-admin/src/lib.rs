/*
[INPUT]:  Public API exports for guildboard-admin crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod balance;
pub mod config;
pub mod logging;
pub mod notify;
pub mod settings;
pub mod whitelist;

// Re-export main types for convenience
pub use balance::TokenBalance;
pub use config::AdminConfig;
pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier, Toast, ToastColor};
pub use settings::ServerModulePage;
pub use whitelist::WhitelistService;
