//! HTTP route contract.
//!
//! The public API is declared here as data: method, path template, input
//! shape and the response shape for each status. The server mounts its
//! routes from these descriptors and clients build URLs with
//! [`build_url`], so neither side restates paths.

use std::fmt;

use serde_json::Value;

use crate::error::CoreError;
use crate::schema::{validate_fields, FieldRule, ValidatedFields, CONTACT_MESSAGE_RULES};

/// HTTP methods used by the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named body shapes an endpoint may answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    ContactMessage,
    ProductList,
    Policy,
    PolicyList,
    /// `{ message, field? }`
    ValidationError,
    /// `{ message }`
    NotFound,
    /// `{ message }` with a generic message.
    InternalError,
}

/// What an endpoint accepts from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    None,
    /// A JSON body checked against a rule table.
    Body(&'static [FieldRule]),
    /// A single named path parameter.
    PathParam(&'static str),
}

/// One endpoint of the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Dotted identifier, e.g. `policies.get`.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path template using `:param` placeholders.
    pub path: &'static str,
    pub input: Input,
    /// Declared `(status, shape)` pairs.
    pub responses: &'static [(u16, ResponseShape)],
}

// ---------------------------------------------------------------------------
// Endpoint table
// ---------------------------------------------------------------------------

pub const CONTACT_SUBMIT: Endpoint = Endpoint {
    name: "contact.submit",
    method: HttpMethod::Post,
    path: "/api/contact",
    input: Input::Body(CONTACT_MESSAGE_RULES),
    responses: &[
        (201, ResponseShape::ContactMessage),
        (400, ResponseShape::ValidationError),
        (500, ResponseShape::InternalError),
    ],
};

pub const PRODUCTS_LIST: Endpoint = Endpoint {
    name: "products.list",
    method: HttpMethod::Get,
    path: "/api/products",
    input: Input::None,
    responses: &[
        (200, ResponseShape::ProductList),
        (500, ResponseShape::InternalError),
    ],
};

pub const POLICIES_GET: Endpoint = Endpoint {
    name: "policies.get",
    method: HttpMethod::Get,
    path: "/api/policies/:slug",
    input: Input::PathParam("slug"),
    responses: &[
        (200, ResponseShape::Policy),
        (404, ResponseShape::NotFound),
        (500, ResponseShape::InternalError),
    ],
};

pub const POLICIES_LIST: Endpoint = Endpoint {
    name: "policies.list",
    method: HttpMethod::Get,
    path: "/api/policies",
    input: Input::None,
    responses: &[
        (200, ResponseShape::PolicyList),
        (500, ResponseShape::InternalError),
    ],
};

/// Every endpoint of the public API.
pub const ENDPOINTS: &[Endpoint] = &[CONTACT_SUBMIT, PRODUCTS_LIST, POLICIES_GET, POLICIES_LIST];

impl Endpoint {
    /// The declared response shape for `status`, if any.
    pub fn response_for(&self, status: u16) -> Option<ResponseShape> {
        self.responses
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, shape)| *shape)
    }

    pub fn declares(&self, status: u16) -> bool {
        self.response_for(status).is_some()
    }

    /// The path template in router syntax (`:slug` becomes `{slug}`).
    pub fn router_path(&self) -> String {
        self.path
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => format!("{{{name}}}"),
                None => segment.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Build a concrete URL for this endpoint.
    pub fn url<I, K, V>(&self, params: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        build_url(self.path, params)
    }

    /// Whether a concrete request `method` + `path` targets this endpoint.
    pub fn matches(&self, method: HttpMethod, path: &str) -> bool {
        if method != self.method {
            return false;
        }
        let mut template = self.path.split('/');
        let mut actual = path.split('/');
        loop {
            match (template.next(), actual.next()) {
                (None, None) => return true,
                (Some(t), Some(a)) => {
                    let ok = if t.starts_with(':') { !a.is_empty() } else { t == a };
                    if !ok {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }

    /// Check a JSON body against this endpoint's input rule table.
    ///
    /// Endpoints without a body input accept nothing; calling this on them
    /// is a programming error reported as `Internal`.
    pub fn validate_body(&self, raw: &Value) -> Result<ValidatedFields, CoreError> {
        match self.input {
            Input::Body(rules) => validate_fields(rules, raw),
            _ => Err(CoreError::Internal(format!(
                "endpoint {} does not take a request body",
                self.name
            ))),
        }
    }
}

/// Resolve a concrete request to its endpoint descriptor.
pub fn find(method: HttpMethod, path: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.matches(method, path))
}

/// Substitute `:name` placeholders in `path` with the supplied values.
///
/// Placeholders without a matching parameter are left as they are, and
/// parameters with no placeholder are ignored.
///
/// A placeholder must fill a whole path segment: `:slug` in
/// `/api/policies/:slug` is substituted, but `/api/policies/:slug.json` and
/// `/api/:slugger` are returned unchanged for a `slug` parameter.
pub fn build_url<I, K, V>(path: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: fmt::Display,
{
    let params: Vec<(K, V)> = params.into_iter().collect();
    path.split('/')
        .map(|segment| {
            segment
                .strip_prefix(':')
                .and_then(|name| params.iter().find(|(k, _)| k.as_ref() == name))
                .map(|(_, v)| v.to_string())
                .unwrap_or_else(|| segment.to_string())
        })
        .collect::<Vec<_>>()
        .join("/")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
