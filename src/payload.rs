//! Order Payload Generation
//!
//! Builds the semicolon-delimited order file uploaded to the ordering
//! endpoint. The payload is a fixed sequence of five record rows: three
//! addresses, one property profile and the order itself, each tagged with a
//! row-type discriminator and a per-row correlation token.
//!
//! Generation is pure: given a configuration (and a date for relative order
//! dates) it always produces the same bytes, performs no I/O and cannot fail.

use bytes::Bytes;
use chrono::{Local, NaiveDate};

use crate::types::{ClientConfig, FIELD_SEPARATOR, LINE_TERMINATOR};

/// Street line of the administration address
const ADMINISTRATION_STREET: &str = "Bahnhofplatz 1";

/// Street line of the facility-manager address
const FACILITY_MANAGER_STREET: &str = "Vorhof 2";

/// Name and street line of the sample property
const PROPERTY_NAME: &str = "Villa am See";
const PROPERTY_STREET: &str = "Seitenweg 3";

/// Product codes of the sample property profile, see the HIUS product catalog
const PROFILE_PRODUCT_COVER: &str = "01.200.46/BK,h=20mm,w=100mm";
const PROFILE_PRODUCT_SUPPORT: &str = "01.200.46/SU,h=20mm,w=100mm";

/// Contact name carried on the order row
const ORDER_CONTACT_FAMILY_NAME: &str = "Bernasconi";
const ORDER_CONTACT_GIVEN_NAME: &str = "Maria";

/// Record category discriminator, the first field of every row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecordKind {
    /// An address record
    Address = 1,
    /// A property profile record
    Profile = 2,
    /// An order record
    Order = 3,
}

impl From<RecordKind> for u8 {
    fn from(kind: RecordKind) -> u8 {
        kind as u8
    }
}

/// Encodes one record row
///
/// The discriminator comes first, then the fields in order, joined by the
/// `;` separator. Absent fields serialize as empty strings between
/// separators. Embedded separators are not escaped; all field values in this
/// reference payload are controlled constants.
pub fn encode_record(kind: RecordKind, fields: &[Option<&str>]) -> String {
    let mut row = String::new();
    row.push_str(&u8::from(kind).to_string());
    for field in fields {
        row.push(FIELD_SEPARATOR);
        if let Some(value) = field {
            row.push_str(value);
        }
    }
    row
}

/// Generates the five-row order payload
///
/// Relative order dates resolve against the current local date. Use
/// [`generate_on`] for deterministic output.
pub fn generate(config: &ClientConfig) -> Bytes {
    generate_on(config, Local::now().date_naive())
}

/// Generates the five-row order payload with an explicit "today"
///
/// Output is UTF-8 text without a byte-order mark. Every row, the last one
/// included, is terminated by a line break.
pub fn generate_on(config: &ClientConfig, today: NaiveDate) -> Bytes {
    let order_row = config.effective_order_row();
    let order_date = order_row.date.resolve(today).format("%Y-%m-%d").to_string();

    let mut buffer = String::new();

    // x:1: administration address
    push_row(
        &mut buffer,
        encode_record(
            RecordKind::Address,
            &[
                Some("request1"),
                Some("VW"),
                Some("x:1"),
                Some(&config.administrator_name),
                Some(ADMINISTRATION_STREET),
                Some(&config.postal_code),
                Some(&config.city),
            ],
        ),
    );

    // x:2: facility-manager address
    push_row(
        &mut buffer,
        encode_record(
            RecordKind::Address,
            &[
                Some("request2"),
                Some("HW"),
                Some("x:2"),
                Some(&config.facility_manager_name),
                Some(FACILITY_MANAGER_STREET),
                Some(&config.postal_code),
                Some(&config.city),
            ],
        ),
    );

    // x:3: property address
    push_row(
        &mut buffer,
        encode_record(
            RecordKind::Address,
            &[
                Some("request3"),
                None,
                Some("x:3"),
                Some(PROPERTY_NAME),
                Some(PROPERTY_STREET),
                Some(&config.postal_code),
                Some(&config.city),
            ],
        ),
    );

    // property profile, two product codes
    push_row(
        &mut buffer,
        encode_record(
            RecordKind::Profile,
            &[
                Some("request4"),
                Some("U"),
                Some("x:3"),
                None,
                Some(PROFILE_PRODUCT_COVER),
                Some(PROFILE_PRODUCT_SUPPORT),
            ],
        ),
    );

    // the order itself, layout driven by the configured policy
    push_row(
        &mut buffer,
        encode_record(
            RecordKind::Order,
            &[
                Some(&order_row.correlation_token),
                Some("VB"),
                Some(&order_row.address_ref),
                None,
                Some(&order_date),
                Some(ORDER_CONTACT_FAMILY_NAME),
                Some(ORDER_CONTACT_GIVEN_NAME),
            ],
        ),
    );

    Bytes::from(buffer)
}

/// Appends a row and its line terminator to the payload buffer
fn push_row(buffer: &mut String, row: String) {
    buffer.push_str(&row);
    buffer.push(LINE_TERMINATOR);
}
