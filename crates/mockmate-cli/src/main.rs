mod cli;

use mockmate_client::ApiError;

/// Exit status when the backend rejected the stored credential.
const EXIT_SESSION_EXPIRED: i32 = 2;

fn main() {
    if let Err(e) = cli::run() {
        if e
            .downcast_ref::<ApiError>()
            .is_some_and(ApiError::is_session_expired)
        {
            // The login hint was already printed by the navigator.
            std::process::exit(EXIT_SESSION_EXPIRED);
        }
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
