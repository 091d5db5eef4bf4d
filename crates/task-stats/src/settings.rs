use clap::Parser;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise task records read from standard input.
///
/// Expects a header line followed by comma-separated lines of
/// `task_id,state,creation_time,updated_time,spent_time,total_size,valid_image,product_id,error_msg,last_phase`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "task-stats",
    about = "Summarise valid and invalid task records read from stdin",
    version
)]
pub struct Settings {
    /// Logging level for diagnostics written to stderr
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}
