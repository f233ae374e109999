//! Decoded call metadata.
//!
//! # Responsibilities
//! - Carry the already-decoded fields of one inbound RPC
//! - Distinguish "absent" from "present but empty" for optional fields
//! - Expose positional parameters by index with a not-present sentinel
//!
//! # Design Decisions
//! - Plain owned data, built once per call by the protocol decoder
//! - Optional fields are `Option`, never sentinel empty strings; the
//!   header-check policy in routing depends on absent vs. empty

use std::collections::HashMap;

/// Read-only metadata of one inbound call, as produced by the protocol
/// decoder. The routing engine never mutates it.
#[derive(Debug, Clone, Default)]
pub struct RpcMetadata {
    /// Fully qualified service interface name.
    pub service_name: String,

    /// Service group, if the call carries one.
    pub group: Option<String>,

    /// Service version, if the call carries one.
    pub version: Option<String>,

    /// Invoked method name, if the call carries one.
    pub method_name: Option<String>,

    /// Header-like attachments. `None` means the call carried no
    /// attachment section at all, which is distinct from an empty map.
    pub headers: Option<HashMap<String, String>>,

    /// Positional parameter values in call order. `None` means the call
    /// carried no parameter section.
    pub parameters: Option<Vec<String>>,
}

impl RpcMetadata {
    /// Create metadata for a call to the given service.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method_name = Some(method.into());
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<String>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// True if the call carried a header attachment section.
    pub fn has_headers(&self) -> bool {
        self.headers.is_some()
    }

    /// True if the call carried a parameter section.
    pub fn has_parameters(&self) -> bool {
        self.parameters.is_some()
    }

    /// Value of the positional parameter at `index`, or `""` when the
    /// index is out of range. Empty string doubles as the not-present
    /// sentinel on the matching path.
    pub fn parameter_value(&self, index: usize) -> &str {
        self.parameters
            .as_ref()
            .and_then(|params| params.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}
