/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Name of the sentinel file that flags a directory as buildable
///
/// Only the presence of the file matters; its content is ignored.
pub const MARKER_FILENAME: &str = "folder.buildable";

/// Substring that identifies a source file eligible for transformation
pub const SOURCE_MARKER: &str = "Base.js";

/// Path token replaced (ESM) or removed (CommonJS) when deriving output paths
pub const BASE_TOKEN: &str = "Base";

/// Path token substituted for `Base` in the ESM output path
pub const MODULE_TOKEN: &str = "Module";

/// Declaration keyword rewritten when generating the ESM variant
pub const DECLARATION_KEYWORD: &str = "const";

/// Export-qualified replacement for the declaration keyword
pub const EXPORT_KEYWORD: &str = "export const";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
pub const APPLICATION: &str = "module_build";

/// Help text for the root command-line argument
pub const ROOT_HELP: &str = "Root directory to scan for buildable folders";

/// Help text for the single-file command-line option
pub const FILE_HELP: &str = "Transform a single source file and exit";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file to the working directory";

/// Default filename for the log file
pub const LOG_FILE_DEFAULT: &str = "module_build.log";
