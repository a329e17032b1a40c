//! Fluent transform builder
//!
//! A builder is bound to one source file URI. It holds at most one transform
//! command plus any number of adjustments and filters, and renders them into
//! a REST path:
//!
//! ```
//! use wixmedia::image::{TransformBuilder, Unsharp};
//!
//! let mut image = TransformBuilder::new("http://media.example.net/images/dog.png");
//! let url = image
//!     .srz(120, 120, None, Some("top-left"), Unsharp::default())?
//!     .adjust([("brightness", 60)])
//!     .filter(["oil"])
//!     .filter([("blur", 22)])
//!     .rest_url();
//!
//! assert_eq!(
//!     url,
//!     "http://media.example.net/images/srz/w_120,h_120,a_tl/adjust/br_60/filter/oil,blur_22/dog.png"
//! );
//! # Ok::<(), wixmedia::image::TransformError>(())
//! ```

use std::fmt;

use super::alignment::parse_alignment;
use super::codec::{adjustment_token_strict, filter_token_strict};
use super::command::{TransformCommand, Unsharp};
use super::error::TransformError;
use super::params::{Param, ParamSet, ParamValue};
use super::url;

/// Mutable transform state for one source image
#[derive(Debug, Clone, PartialEq)]
pub struct TransformBuilder {
    file_uri: String,
    command: TransformCommand,
    adjustments: ParamSet,
    filters: ParamSet,
    default_quality: Option<u8>,
    strict_names: bool,
}

impl TransformBuilder {
    pub fn new(file_uri: impl Into<String>) -> Self {
        Self {
            file_uri: file_uri.into(),
            command: TransformCommand::None,
            adjustments: ParamSet::new(),
            filters: ParamSet::new(),
            default_quality: None,
            strict_names: false,
        }
    }

    /// Quality written for commands that don't specify one
    pub fn default_quality(mut self, quality: Option<u8>) -> Self {
        self.default_quality = quality;
        self
    }

    /// Make `checked_rest_url` reject unknown adjustment/filter names
    pub fn strict_names(mut self, strict: bool) -> Self {
        self.strict_names = strict;
        self
    }

    pub fn file_uri(&self) -> &str {
        &self.file_uri
    }

    pub fn command(&self) -> &TransformCommand {
        &self.command
    }

    pub fn adjustments(&self) -> &ParamSet {
        &self.adjustments
    }

    pub fn filters(&self) -> &ParamSet {
        &self.filters
    }

    pub fn is_strict(&self) -> bool {
        self.strict_names
    }

    /// The only place a command is assigned.
    ///
    /// The guard runs before `build`, so a rejected call never touches state.
    fn transition<F>(&mut self, build: F) -> Result<&mut Self, TransformError>
    where
        F: FnOnce() -> Result<TransformCommand, TransformError>,
    {
        if self.command.is_set() {
            let current = self.command.name();
            tracing::warn!(
                file_uri = %self.file_uri,
                current,
                "Rejected transform command: command already set"
            );
            return Err(TransformError::CommandAlreadySet { current });
        }

        let command = build()?.with_default_quality(self.default_quality);
        tracing::debug!(
            file_uri = %self.file_uri,
            command = command.name(),
            params = %command.params_segment(),
            "Transform command set"
        );
        self.command = command;
        Ok(self)
    }

    /// Smart resize (`srz`)
    pub fn srz(
        &mut self,
        width: u32,
        height: u32,
        quality: Option<u8>,
        alignment: Option<&str>,
        unsharp: Unsharp,
    ) -> Result<&mut Self, TransformError> {
        self.transition(|| {
            Ok(TransformCommand::ResizeSmart {
                width,
                height,
                quality,
                alignment: parse_alignment(alignment)?,
                sharpen: unsharp.resolve(),
            })
        })
    }

    /// Resize into a box (`srb`)
    pub fn srb(
        &mut self,
        width: u32,
        height: u32,
        quality: Option<u8>,
        unsharp: Unsharp,
    ) -> Result<&mut Self, TransformError> {
        self.transition(|| {
            Ok(TransformCommand::ResizeBox {
                width,
                height,
                quality,
                sharpen: unsharp.resolve(),
            })
        })
    }

    pub fn canvas(
        &mut self,
        width: u32,
        height: u32,
        quality: Option<u8>,
        alignment: Option<&str>,
    ) -> Result<&mut Self, TransformError> {
        self.transition(|| {
            Ok(TransformCommand::Canvas {
                width,
                height,
                quality,
                alignment: parse_alignment(alignment)?,
            })
        })
    }

    pub fn fill(
        &mut self,
        width: u32,
        height: u32,
        quality: Option<u8>,
    ) -> Result<&mut Self, TransformError> {
        self.transition(|| {
            Ok(TransformCommand::Fill {
                width,
                height,
                quality,
            })
        })
    }

    pub fn crop(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        quality: Option<u8>,
    ) -> Result<&mut Self, TransformError> {
        self.transition(|| {
            Ok(TransformCommand::Crop {
                x,
                y,
                width,
                height,
                quality,
            })
        })
    }

    /// Merge adjustments; a repeated name keeps its position and takes the new value
    pub fn adjust<I>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        self.adjustments.extend(params);
        self
    }

    /// Merge filters; a repeated name keeps its position and takes the new value
    pub fn filter<I>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        self.filters.extend(params);
        self
    }

    /// Overlay the account watermark
    ///
    /// Recorded as filter entries; no transform command is set, so this can
    /// be combined with any command.
    pub fn watermark(
        &mut self,
        opacity: u8,
        alignment: Option<&str>,
        scale: u32,
    ) -> Result<&mut Self, TransformError> {
        let alignment = parse_alignment(alignment)?;

        self.filters.insert("opacity", ParamValue::from(opacity));
        if let Some(a) = alignment {
            self.filters.insert("alignment", ParamValue::from(a.code()));
        }
        self.filters.insert("scale", ParamValue::from(scale));
        Ok(self)
    }

    /// Clear command, adjustments and filters; the file URI is kept
    pub fn reset(&mut self) -> &mut Self {
        self.command = TransformCommand::None;
        self.adjustments.clear();
        self.filters.clear();
        self
    }

    /// Check every adjustment and filter name against the known tokens
    pub fn validate(&self) -> Result<(), TransformError> {
        for name in self.adjustments.names() {
            adjustment_token_strict(name)?;
        }
        for name in self.filters.names() {
            filter_token_strict(name)?;
        }
        Ok(())
    }

    /// Render the REST path; unknown names pass through unchanged
    pub fn rest_url(&self) -> String {
        url::render(
            &self.file_uri,
            &self.command,
            &self.adjustments,
            &self.filters,
        )
    }

    /// Render the REST path, validating names first when strict
    pub fn checked_rest_url(&self) -> Result<String, TransformError> {
        if self.strict_names {
            self.validate()?;
        }
        Ok(self.rest_url())
    }

    pub fn img_tag<K, V>(&self, attrs: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        url::img_tag(&self.rest_url(), attrs)
    }
}

impl fmt::Display for TransformBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TransformBuilder {} command={} [{}]>",
            self.file_uri,
            self.command.name(),
            self.command.params_segment()
        )
    }
}
