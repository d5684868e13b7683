//! Pagination envelope construction
//!
//! One [`PageBuilder`] is constructed per incoming request from the upstream
//! query result, the current request URL, and the service base URL. Its
//! accessors are pure reads over state fixed at construction; [`paginate`]
//! assembles them into the flat [`PageEnvelope`] serialized into the response
//! body.
//!
//! # Modes
//!
//! - Standard mode trusts pagination metadata already present on the result
//!   (`total`, `perPage`, `page`, `lastPage`, `data`), with caller-supplied
//!   fallbacks for absent fields.
//! - Custom-build mode derives `last_page` from `total` and `per_page` and
//!   treats the entire source object as the page data.
//!
//! [`paginate`]: PageBuilder::paginate

use crate::query::set_query_param;
use crate::source::PageSource;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Query-string key rewritten when building navigation URLs.
const PAGE_PARAM: &str = "page";

// ============================================================================
// Input Types
// ============================================================================

/// Caller-supplied fallback scalars, used only when the source object lacks
/// the corresponding field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fallback {
    pub per_page: Option<i64>,
    pub page: Option<i64>,
    pub total: Option<i64>,
}

// ============================================================================
// Output Type
// ============================================================================

/// Flat pagination envelope returned to the HTTP caller.
///
/// Absent values serialize as explicit `null`s; the caller typically embeds
/// this directly in a JSON response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope {
    pub total: Option<i64>,
    pub per_page: Option<i64>,
    pub current_page: i64,
    pub last_page: Option<i64>,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
    pub from: i64,
    pub to: i64,
    pub data: Option<Value>,
}

// ============================================================================
// Builder
// ============================================================================

/// Computes pagination metadata and navigation URLs for one request.
///
/// Construction never fails: every numeric field follows the precedence
/// "truthy source value, else caller fallback, else absent", and degenerate
/// inputs degrade to `None` in the accessors rather than raising errors.
///
/// # Examples
///
/// ```
/// use page_envelope::{Fallback, PageBuilder};
/// use serde_json::json;
///
/// let source = json!({
///     "total": 25, "perPage": 10, "page": 1, "lastPage": 3,
///     "data": [{"id": 1}]
/// });
/// let builder = PageBuilder::new(
///     source,
///     "/visitors?page=1",
///     "http://localhost:3333",
///     false,
///     Fallback::default(),
/// );
///
/// let envelope = builder.paginate();
/// assert_eq!(envelope.current_page, 1);
/// assert_eq!(
///     envelope.next_page_url.as_deref(),
///     Some("http://localhost:3333/visitors?page=2")
/// );
/// assert_eq!(envelope.prev_page_url, None);
/// ```
#[derive(Debug, Clone)]
pub struct PageBuilder {
    total: Option<i64>,
    per_page: Option<i64>,
    current_page: Option<i64>,
    last_page: Option<i64>,
    data: Option<Value>,
    custom_build: bool,
    source: Value,
    base_url: String,
    request_url: String,
}

impl PageBuilder {
    /// Construct a builder from an upstream result object.
    ///
    /// # Arguments
    ///
    /// * `source` - Query result carrying pagination fields, or the raw row
    ///   set itself in custom-build mode
    /// * `request_url` - Current request path with query string, verbatim
    /// * `base_url` - Service base URL (see [`crate::ServiceConfig::base_url`])
    /// * `custom_build` - When true, derive `last_page` from `total`/`per_page`
    ///   and treat the whole source as page data
    /// * `fallback` - Scalars used when the source lacks the matching field
    pub fn new(
        source: Value,
        request_url: impl Into<String>,
        base_url: impl Into<String>,
        custom_build: bool,
        fallback: Fallback,
    ) -> Self {
        let parsed = PageSource::from_value(&source);
        Self {
            total: parsed.total.or(fallback.total),
            per_page: parsed.per_page.or(fallback.per_page),
            current_page: parsed.current_page.or(fallback.page),
            last_page: parsed.last_page,
            data: parsed.data,
            custom_build,
            source,
            base_url: base_url.into(),
            request_url: request_url.into(),
        }
    }

    // ------------------------------------------------------------------
    // Scalar accessors
    // ------------------------------------------------------------------

    /// Total item count, or `None` when absent.
    ///
    /// A stored zero reads as `None`: the upstream layer reports a missing
    /// count the same way as an empty result, and callers rely on that.
    pub fn total(&self) -> Option<i64> {
        self.total.filter(|n| *n != 0)
    }

    /// Items per page, with the same zero-reads-as-`None` policy as
    /// [`total`](Self::total).
    pub fn per_page(&self) -> Option<i64> {
        self.per_page.filter(|n| *n != 0)
    }

    /// Current page number, clamped to a minimum of 1.
    pub fn current_page(&self) -> i64 {
        self.current_page.unwrap_or(0).max(1)
    }

    /// Last page number.
    ///
    /// Standard mode returns the stored value verbatim, with no validation
    /// against `total`/`per_page`. Custom-build mode computes
    /// `floor(total / per_page)` plus one page when the division leaves a
    /// remainder; with no usable page size the result is undefined and reads
    /// as `None`.
    pub fn last_page(&self) -> Option<i64> {
        if !self.custom_build {
            return self.last_page;
        }
        let per_page = self.per_page()?;
        let total = self.total().unwrap_or(0);
        let mut pages = total / per_page;
        if total % per_page != 0 {
            pages += 1;
        }
        Some(pages)
    }

    /// Page data payload.
    ///
    /// Custom-build mode returns a deep copy of the entire source object (the
    /// caller passed the raw row set as the source). Standard mode returns
    /// the source's `data` field, or `None` when absent.
    pub fn data(&self) -> Option<Value> {
        if self.custom_build {
            Some(self.source.clone())
        } else {
            self.data.clone()
        }
    }

    // ------------------------------------------------------------------
    // URL accessors
    // ------------------------------------------------------------------

    /// Service base URL, as supplied at construction.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current request path with query string, exactly as supplied.
    pub fn api_url(&self) -> &str {
        &self.request_url
    }

    /// Absolute URL of the next page, or `None` when already on the last page.
    ///
    /// "On the last page" is an equality check against [`last_page`]: when the
    /// requested page exceeds the last page (an inconsistent upstream state) a
    /// URL is still produced.
    ///
    /// [`last_page`]: Self::last_page
    pub fn next_page_url(&self) -> Option<String> {
        let current = self.current_page();
        if self.last_page() == Some(current) {
            return None;
        }
        Some(self.page_url(current + 1))
    }

    /// Absolute URL of the previous page, or `None` on page 1.
    pub fn prev_page_url(&self) -> Option<String> {
        let current = self.current_page();
        if current == 1 {
            return None;
        }
        Some(self.page_url(current - 1))
    }

    fn page_url(&self, page: i64) -> String {
        format!(
            "{}{}",
            self.base_url,
            set_query_param(&self.request_url, PAGE_PARAM, &page.to_string())
        )
    }

    // ------------------------------------------------------------------
    // Item range
    // ------------------------------------------------------------------

    /// Ordinal of the first item on the current page; always 1 on page 1.
    pub fn from(&self) -> i64 {
        let current = self.current_page();
        if current == 1 {
            1
        } else {
            self.per_page().unwrap_or(0) * (current - 1) + 1
        }
    }

    /// Ordinal of the last slot on the current page: `per_page * current_page`,
    /// never clamped to the total (the final partial page over-counts).
    pub fn to(&self) -> i64 {
        self.per_page().unwrap_or(0) * self.current_page()
    }

    // ------------------------------------------------------------------
    // Envelope assembly
    // ------------------------------------------------------------------

    /// Assemble the pagination envelope from the accessors above.
    pub fn paginate(&self) -> PageEnvelope {
        debug!(
            "Assembling envelope: page {} of {:?} ({} per page)",
            self.current_page(),
            self.last_page(),
            self.per_page().unwrap_or(0)
        );

        PageEnvelope {
            total: self.total(),
            per_page: self.per_page(),
            current_page: self.current_page(),
            last_page: self.last_page(),
            next_page_url: self.next_page_url(),
            prev_page_url: self.prev_page_url(),
            from: self.from(),
            to: self.to(),
            data: self.data(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
