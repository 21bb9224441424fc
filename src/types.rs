//! Upload Protocol Types and Constants
//!
//! This module defines the configuration surface, protocol-level constants and
//! data structures used when delivering an order file to the HIUS ordering
//! endpoint.

use bytes::Bytes;
use chrono::NaiveDate;
use reqwest::{Method, StatusCode};
use url::Url;

/// Prefix of the remote resource name the payload is uploaded to
pub const REMOTE_FILE_PREFIX: &str = "HLV2824_Q";

/// Field separator used within payload rows
pub const FIELD_SEPARATOR: char = ';';

/// Line terminator after every payload row, including the last
pub const LINE_TERMINATOR: char = '\n';

/// Content type declared for the uploaded payload
pub const PAYLOAD_CONTENT_TYPE: &str = "text/csv";

/// Name of the routing cookie issued by the reverse proxy in front of the
/// ordering endpoint
pub const SESSION_COOKIE_NAME: &str = "cfsid";

/// Number of rows in a generated payload
pub const PAYLOAD_ROW_COUNT: usize = 5;

/// Exchange protocol used to deliver the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStrategy {
    /// A single authenticated PUT to the target resource.
    #[default]
    DirectPut,
    /// An unauthenticated GET to the service base address first, to pick up
    /// the proxy session cookie, then an authenticated POST carrying it.
    ///
    /// Required for deployments behind a reverse proxy that only accepts
    /// uploads on an established session.
    SessionPrimedPost,
}

impl UploadStrategy {
    /// HTTP method the strategy uses for the upload request
    pub fn method(&self) -> Method {
        match self {
            UploadStrategy::DirectPut => Method::PUT,
            UploadStrategy::SessionPrimedPost => Method::POST,
        }
    }

    /// Whether the strategy issues a session-priming request before the upload
    pub fn primes_session(&self) -> bool {
        matches!(self, UploadStrategy::SessionPrimedPost)
    }
}

/// Date carried in the order row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDate {
    /// A fixed calendar date
    Literal(NaiveDate),
    /// An offset in days from the date of the run
    DaysFromToday(i64),
}

impl OrderDate {
    /// Resolves the policy against the given "today"
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            OrderDate::Literal(date) => date,
            OrderDate::DaysFromToday(days) => today + chrono::Duration::days(days),
        }
    }
}

/// Layout of the order row (row 5 of the payload).
///
/// The two published reference programs drifted apart here: one labels the
/// order `request5` against address `x:3` and carries a fixed date, the other
/// `request6` against `x:4` with a date six days out. Neither layout is
/// canonical, so all three knobs are configurable and each strategy defaults
/// to the layout its reference program shipped with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    /// Per-row request-correlation token
    pub correlation_token: String,
    /// Reference to the address record the order applies to
    pub address_ref: String,
    /// Order date policy
    pub date: OrderDate,
}

impl OrderRow {
    /// Layout shipped with the direct-PUT reference program
    pub fn direct_put_default() -> Self {
        Self {
            correlation_token: "request5".to_string(),
            address_ref: "x:3".to_string(),
            date: OrderDate::Literal(
                NaiveDate::from_ymd_opt(2020, 2, 20).expect("valid literal date"),
            ),
        }
    }

    /// Layout shipped with the session-primed reference program
    pub fn session_primed_default() -> Self {
        Self {
            correlation_token: "request6".to_string(),
            address_ref: "x:4".to_string(),
            date: OrderDate::DaysFromToday(6),
        }
    }

    /// The conventional layout for the given strategy
    pub fn for_strategy(strategy: UploadStrategy) -> Self {
        match strategy {
            UploadStrategy::DirectPut => Self::direct_put_default(),
            UploadStrategy::SessionPrimedPost => Self::session_primed_default(),
        }
    }
}

/// Client configuration options
///
/// Constructed once at startup and read-only for the duration of a run.
/// Field defaults are the sample values of the published reference programs,
/// so a freshly built configuration produces the documented example payload.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// City used in the address rows
    pub city: String,
    /// Postal code used in the address rows
    pub postal_code: String,
    /// Customer identifier, part of the remote resource name
    pub customer_id: u32,
    /// Upload sequence number, part of the remote resource name
    pub sequence: u32,
    /// Name on the administration address (row 1)
    pub administrator_name: String,
    /// Name on the facility-manager address (row 2)
    pub facility_manager_name: String,
    /// Base address of the ordering service; the remote resource name is
    /// resolved against it
    pub service_url: Url,
    /// Username for basic authentication
    pub username: String,
    /// Password for basic authentication
    pub password: String,
    /// User-agent string sent with the upload request, if any
    pub user_agent: Option<String>,
    /// Exchange protocol to use
    pub strategy: UploadStrategy,
    /// Order-row layout override; `None` follows the strategy's conventional
    /// layout
    pub order_row: Option<OrderRow>,
}

impl ClientConfig {
    /// Creates a new configuration for the given service endpoint and
    /// credentials, with all other fields at their reference defaults
    pub fn new(service_url: Url, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            city: "Teststadt".to_string(),
            postal_code: "9999".to_string(),
            customer_id: 0,
            sequence: 0,
            administrator_name: "Beispiel AG".to_string(),
            facility_manager_name: "Beispiel Facility GmbH".to_string(),
            service_url,
            username: username.into(),
            password: password.into(),
            user_agent: None,
            strategy: UploadStrategy::default(),
            order_row: None,
        }
    }

    /// Sets the city used in the address rows
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the postal code used in the address rows
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    /// Sets the customer identifier
    pub fn with_customer_id(mut self, customer_id: u32) -> Self {
        self.customer_id = customer_id;
        self
    }

    /// Sets the upload sequence number
    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }

    /// Sets the name on the administration address
    pub fn with_administrator_name(mut self, name: impl Into<String>) -> Self {
        self.administrator_name = name.into();
        self
    }

    /// Sets the name on the facility-manager address
    pub fn with_facility_manager_name(mut self, name: impl Into<String>) -> Self {
        self.facility_manager_name = name.into();
        self
    }

    /// Sets the user-agent string sent with the upload request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Selects the exchange protocol
    pub fn with_strategy(mut self, strategy: UploadStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Overrides the order-row layout instead of following the strategy's
    /// conventional one
    pub fn with_order_row(mut self, order_row: OrderRow) -> Self {
        self.order_row = Some(order_row);
        self
    }

    /// The order-row layout in effect for this configuration
    pub fn effective_order_row(&self) -> OrderRow {
        self.order_row
            .clone()
            .unwrap_or_else(|| OrderRow::for_strategy(self.strategy))
    }

    /// Remote resource name computed from customer id and sequence
    ///
    /// Customer id and sequence are rendered without zero padding, joined by
    /// literal underscores.
    pub fn remote_filename(&self) -> String {
        format!(
            "{}_{}_{}.csv",
            REMOTE_FILE_PREFIX, self.customer_id, self.sequence
        )
    }
}

/// Outcome of a completed HTTP exchange
///
/// Any response the transport delivered is an exchange result, including
/// responses with error statuses; the body is captured verbatim for the
/// operator and not interpreted further.
#[derive(Debug, Clone)]
pub struct ExchangeResult {
    /// HTTP status code of the response
    pub status: StatusCode,
    /// Content type declared by the response, if any
    pub content_type: Option<String>,
    /// Fully drained response body
    pub body: Bytes,
}

impl ExchangeResult {
    /// Whether the response status is in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Response body as text, with invalid UTF-8 replaced
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
