//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use lineage_core::log_op_start;
/// log_op_start!("validate");
/// log_op_start!("describe", entity_type = "Achievement");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::lineage_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::lineage_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use lineage_core::log_op_end;
/// log_op_end!("validate", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::lineage_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::lineage_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError).
///
/// # Example
///
/// ```
/// # use lineage_core::{log_op_error, errors::LineageError};
/// let err = LineageError::InvalidConfig { reason: "zero".to_string() };
/// log_op_error!("load_config", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::lineage_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::lineage_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Log a swallowed failure that an operation degraded around
///
/// The operation still completes; the event records why its output is
/// reduced.
#[macro_export]
macro_rules! log_op_degraded {
    ($op:expr, $err:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        $crate::tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::lineage_core_types::schema::EVENT_DEGRADED,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            reason = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        $crate::tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::lineage_core_types::schema::EVENT_DEGRADED,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            reason = ex_err.message(),
            $($field)*
        );
    }};
}
