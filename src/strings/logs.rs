pub fn config_loaded(user: &str) -> String {
    format!("Loaded configuration for user: {user}")
}

pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";
pub const MISSING_CREDENTIAL: &str =
    "No Matrix password configured: set services.matrix.password or services.matrix.password_env";
pub const MISSING_ADMIN: &str =
    "No admin configured (system.admin / system.admin_env): admin notifications are disabled and admin actions are denied";

pub const LOGIN_SUCCESS: &str = "Logged in successfully!";

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn store_ready(path: &str, count: usize) -> String {
    format!("Request store at {path} ({count} requests)")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub const SHUTDOWN: &str = "Shutting down...";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id:?}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub const JOIN_INVITE_SUCCESS: &str = "✅ Successfully joined room!";
