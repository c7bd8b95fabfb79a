//! CLI handler for configuration display

use crate::config::paths::SmootherPaths;
use crate::config::settings::Settings;
use crate::error::SmootherResult;
use crate::services::LineSink;

/// Handle `smoother config`
///
/// With `init`, the current settings are written to disk first.
pub fn handle_config_command(
    paths: &SmootherPaths,
    settings: &Settings,
    init: bool,
    out: &mut dyn LineSink,
) -> SmootherResult<()> {
    if init {
        settings.save(paths)?;
        out.emit(&format!("Wrote settings to {}", paths.settings_file().display()));
        out.emit("");
    }

    out.emit("Smoother Configuration");
    out.emit("======================");
    out.emit(&format!("Base directory:   {}", paths.base_dir().display()));
    out.emit(&format!("Settings file:    {}", paths.settings_file().display()));
    out.emit(&format!("Export directory: {}", paths.export_dir().display()));
    out.emit(&format!(
        "Initialized:      {}",
        if paths.is_initialized() { "yes" } else { "no" }
    ));
    out.emit("");
    out.emit("Settings:");
    out.emit(&format!("  Default scenario: {}", settings.default_scenario));
    out.emit(&format!("  Verbose replay:   {}", settings.verbose));
    out.emit(&format!("  Log level:        {}", settings.log_level));
    out.emit(&format!("  Ratio tolerance:  {}", settings.ratio_tolerance));
    out.emit(&format!("  Export format:    {}", settings.export_format.extension()));

    Ok(())
}
