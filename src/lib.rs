pub use cli::*;
pub use errors::*;

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod transform;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{check_for_stdout_stream, get_log_file, get_matches, get_verbosity};
    pub use crate::errors::{
        directory_not_found_error, file_operation_error, generic_error, invalid_filename_error,
        invalid_text_error, path_operation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_default_logger, init_logger};
    pub use crate::transform::{Transformer, transform_file};
    pub use crate::utils::expand_path;
    pub use crate::workflow::{ProcessingOptions, WorkflowContext, run_build};
}
