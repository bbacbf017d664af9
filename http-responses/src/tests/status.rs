// Unit tests for the standard status table

use crate::identifier::to_identifier;
use crate::response::ResponseKind;
use crate::status::{STATUS_TABLE, Status};

use common::{HttpStatusCode, StatusClass};

use std::collections::HashSet;

/// **VALUE**: Verifies every variant name equals the identifier derived from its phrase.
///
/// **WHY THIS MATTERS**: The enum is the typed view of the registry. A variant whose
/// name disagrees with `to_identifier` would be reachable as `Status::X` but missing
/// from name lookups, or the other way round.
///
/// **BUG THIS CATCHES**: Would catch a typo in a variant name or phrase when the
/// table is edited.
#[test]
fn given_every_status_when_deriving_identifier_then_matches_variant_name() {
    for &status in Status::ALL {
        assert_eq!(
            to_identifier(status.reason_phrase()),
            status.name(),
            "Variant name mismatch for {status}"
        );
    }
}

/// **VALUE**: Verifies the table is unique, sorted and matches the enum.
///
/// **BUG THIS CATCHES**: Would catch a duplicated code, an out-of-order insertion, or
/// `STATUS_TABLE` and `Status::ALL` falling out of sync.
#[test]
fn given_status_table_when_inspected_then_codes_strictly_increase_and_match_enum() {
    assert_eq!(STATUS_TABLE.len(), Status::ALL.len());
    assert_eq!(STATUS_TABLE.len(), 63);

    for pair in STATUS_TABLE.windows(2) {
        assert!(pair[0].0 < pair[1].0, "{} must precede {}", pair[0].0, pair[1].0);
    }

    for (&(code, phrase), &status) in STATUS_TABLE.iter().zip(Status::ALL) {
        assert_eq!(status.code(), code);
        assert_eq!(status.reason_phrase(), phrase);
        assert!((100..600).contains(&code), "{code} outside the standard range");
    }
}

/// **VALUE**: Verifies that no two reason phrases collapse to the same identifier.
///
/// **WHY THIS MATTERS**: Punctuation is stripped after concatenation, which can merge
/// words. A collision would silently shadow one constructor in the registry.
///
/// **BUG THIS CATCHES**: Would catch a new table entry whose identifier collides with
/// an existing one.
#[test]
fn given_standard_table_when_deriving_identifiers_then_all_are_unique() {
    let identifiers: HashSet<String> = STATUS_TABLE
        .iter()
        .map(|(_, phrase)| to_identifier(phrase))
        .collect();

    assert_eq!(identifiers.len(), STATUS_TABLE.len());
}

/// **VALUE**: Spot-checks verbatim phrases, including the punctuated and acronym ones.
#[test]
fn given_well_known_codes_when_from_code_then_phrase_is_verbatim() {
    let expected = [
        (200, "OK", "OK"),
        (203, "Non-Authoritative Information", "NonAuthoritativeInformation"),
        (226, "IM Used", "IMUsed"),
        (404, "Not Found", "NotFound"),
        (418, "I'm a Teapot", "ImATeapot"),
        (500, "Internal Server Error", "InternalServerError"),
        (505, "HTTP Version Not Supported", "HTTPVersionNotSupported"),
    ];

    for (code, phrase, name) in expected {
        let status = Status::from_code(code).expect("code is in the table");
        assert_eq!(status.reason_phrase(), phrase);
        assert_eq!(status.name(), name);
    }
}

/// **VALUE**: Verifies unregistered codes are rejected rather than mapped to a neighbour.
#[test]
fn given_unregistered_code_when_from_code_then_returns_none() {
    assert_eq!(Status::from_code(306), None);
    assert_eq!(Status::from_code(419), None);
    assert_eq!(Status::from_code(600), None);
    assert!(Status::try_from(999u16).is_err());
    assert_eq!(Status::try_from(404u16), Ok(Status::NotFound));
}

/// **VALUE**: Verifies the discriminant is the code and Display is "code phrase".
#[test]
fn given_status_when_cast_and_displayed_then_uses_code_and_phrase() {
    assert_eq!(Status::NotFound as u16, 404);
    assert_eq!(Status::GatewayTimeout.http_status(), HttpStatusCode(504));
    assert_eq!(Status::InternalServerError.to_string(), "500 Internal Server Error");
}

/// **VALUE**: Verifies the enum's callables mirror the registry's: default phrase,
/// explicit message, optional message.
///
/// **BUG THIS CATCHES**: Would catch `call(None)` returning an empty message instead
/// of the reason phrase.
#[test]
fn given_status_when_called_then_message_defaults_to_reason_phrase() {
    let default = Status::Conflict.respond();
    let custom = Status::Conflict.with_message("Already exists");
    let optional_none = Status::Created.call(None);
    let optional_some = Status::Created.call(Some("Made it"));

    assert_eq!(default.message(), "Conflict");
    assert_eq!(custom.message(), "Already exists");
    assert_eq!(custom.http_status(), HttpStatusCode(409));
    assert_eq!(optional_none.message(), "Created");
    assert_eq!(optional_some.message(), "Made it");
    assert_eq!(optional_some.kind(), ResponseKind::Status);
}

/// **VALUE**: Verifies every table entry is classified by its numeric range.
///
/// **WHY THIS MATTERS**: This is the whole contract of the factory as seen through
/// the table: 4xx/5xx are errors, everything else is a status.
#[test]
fn given_every_status_when_responding_then_kind_follows_code_range() {
    for &status in Status::ALL {
        let response = status.respond();
        let expected = if (400..600).contains(&status.code()) {
            ResponseKind::Error
        } else {
            ResponseKind::Status
        };

        assert_eq!(response.kind(), expected, "Wrong kind for {status}");
        assert_eq!(response.http_status(), status.code());
        assert_eq!(response.message(), status.reason_phrase());
    }
}

/// **VALUE**: Verifies every status sits in the class of its leading digit and that
/// only client and server errors produce error responses.
///
/// **BUG THIS CATCHES**: Would catch `is_error()` drifting away from the 4xx/5xx
/// classes, which would make classification and `class()` disagree.
#[test]
fn given_every_status_when_classified_then_class_agrees_with_response_kind() {
    for &status in Status::ALL {
        let class = status.class();
        let is_error_class = matches!(class, StatusClass::ClientError | StatusClass::ServerError);

        assert_ne!(class, StatusClass::Unknown, "{status} is in the standard range");
        assert_eq!(status.respond().is_error(), is_error_class, "{status}");
    }

    assert_eq!(Status::EarlyHints.class(), StatusClass::Informational);
    assert_eq!(Status::IMUsed.class(), StatusClass::Success);
    assert_eq!(Status::PermanentRedirect.class(), StatusClass::Redirection);
    assert_eq!(Status::UnavailableForLegalReasons.class(), StatusClass::ClientError);
    assert_eq!(Status::NetworkAuthenticationRequired.class(), StatusClass::ServerError);
}
