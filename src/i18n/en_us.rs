// ============================================================================
// Kratos - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ❌ Should not contain translation logic
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // run command
    ("run.select_prompt", "Which directory do you want to run?"),
    ("run.searching", "Searching for entry directories from {}"),
    ("run.launching", "Running: {}"),
    ("run.work_dir", "Working directory: {}"),
    // init command
    ("init.start", "Initializing configuration file..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite the existing file"),
    ("init.config_created", "Configuration file created: {}"),
    ("init.create_failed", "Failed to create configuration file {}"),
    // errors
    ("error.environment", "failed to determine the current directory: {}"),
    ("error.discovery", "failed to scan {}: {}"),
    ("error.no_target", "The cmd directory cannot be found in the current directory"),
    ("error.spawn", "failed to start `{}`: {}"),
    ("error.launch_status", "`{}` exited with status {}"),
    ("error.launch_signal", "`{}` exited with a signal"),
];
