// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct for this crate. Note that a malformed hex text field is NOT
/// reported through this type at the widget boundary: [`crate::ColorState`] surfaces it
/// as the `hex_field_invalid` flag on the snapshot instead, since it is a recoverable,
/// user-visible condition. This error type is for callers that use the conversion
/// functions directly, eg: [`crate::RgbValue::try_from_hex_color`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("{error_type:?}: {error_message:?}")]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy)]
pub enum CommonErrorType {
    #[default]
    General,
    ValueOutOfRange,
    InvalidHexColorFormat,
    ClipboardAccessError,
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    ///
    /// # Errors
    ///
    /// Always returns an [`Err`] wrapping the newly constructed [`CommonError`].
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }

    /// Only [`CommonError::error_type`] available, and no
    /// [`CommonError::error_message`].
    ///
    /// # Errors
    ///
    /// Always returns an [`Err`] wrapping the newly constructed [`CommonError`].
    pub fn new_error_result_with_only_type<T>(
        err_type: CommonErrorType,
    ) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: None,
        }))
    }
}
