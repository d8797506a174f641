pub mod config;
pub mod models;
pub mod medications; // Medication list editor
pub mod onboarding; // Onboarding wizard
pub mod dashboard; // Dashboard projection + dose tracking
pub mod notices; // Outbound notice queue
pub mod store; // Top-level screen state + reducer
pub mod core_state; // Shared state for the IPC layer
#[cfg(feature = "desktop")]
pub mod commands;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins; otherwise [`config::default_log_filter`] applies.
/// Safe to call more than once: later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use std::sync::Arc;

    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    tauri::Builder::default()
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::get_view,
            commands::drain_notices,
            commands::navigation::get_started,
            commands::navigation::add_medication_flow,
            commands::dashboard::mark_taken,
            commands::dashboard::view_history,
            commands::onboarding::select_medicated,
            commands::onboarding::advance_onboarding,
            commands::onboarding::go_back_onboarding,
            commands::onboarding::complete_onboarding,
            commands::onboarding::add_medication,
            commands::onboarding::remove_medication,
            commands::onboarding::edit_medication,
            commands::onboarding::add_intake_time,
            commands::onboarding::remove_intake_time,
            commands::onboarding::update_intake_time,
            commands::onboarding::set_caregiver_alerts,
            commands::onboarding::set_caregiver_contact,
        ])
        .run(tauri::generate_context!())
        .expect("error while running VYVA Health");
}
