use http_responses::{
    ErrorValue, HttpStatusCode, Response, ResponseKind, Status, StatusValue, registry,
};

use std::error::Error;

const CUSTOM_MESSAGE: &str = "Custom Message";

/// **VALUE**: `InternalServerError()` yields an error-kind value with 500 and the phrase.
///
/// **WHY THIS MATTERS**: The most common failure response. It must be a real
/// `std::error::Error`, not just a struct that looks like one.
#[test]
fn given_internal_server_error_when_called_without_message_then_creates_http_error() {
    // GIVEN: The registered constructor
    let constructor = registry()
        .get("InternalServerError")
        .expect("InternalServerError registered");

    // WHEN: Calling it without a message
    let response = constructor.call(None);

    // THEN: Error kind, code 500, standard phrase
    let Response::Error(error) = response else {
        panic!("500 must be an error response");
    };
    assert_eq!(error.http_status, HttpStatusCode(500));
    assert_eq!(error.message, "Internal Server Error");

    let as_dyn: &dyn Error = &error;
    assert!(as_dyn.to_string().contains("Internal Server Error"));
}

/// **VALUE**: `InternalServerError("Custom Message")` keeps 500 and uses the message.
#[test]
fn given_internal_server_error_when_called_with_message_then_message_is_custom() {
    let response = registry()
        .respond("InternalServerError", Some(CUSTOM_MESSAGE))
        .expect("InternalServerError registered");

    assert_eq!(response.kind(), ResponseKind::Error);
    assert_eq!(response.http_status(), HttpStatusCode(500));
    assert_eq!(response.message(), CUSTOM_MESSAGE);
}

/// **VALUE**: `OK()` yields a status-kind value with 200 and "OK".
#[test]
fn given_ok_when_called_without_message_then_creates_regular_response() {
    let response = Status::OK.respond();

    assert_eq!(
        response.into_result().expect("200 is not an error"),
        StatusValue {
            http_status: HttpStatusCode(200),
            message: "OK".to_string(),
        }
    );
}

/// **VALUE**: `OK("Custom Message")` keeps 200 and uses the message.
#[test]
fn given_ok_when_called_with_message_then_message_is_custom() {
    let response = registry()
        .respond("OK", Some(CUSTOM_MESSAGE))
        .expect("OK registered");

    assert!(matches!(&response, Response::Status(_)));
    assert_eq!(response.http_status(), HttpStatusCode(200));
    assert_eq!(response.message(), CUSTOM_MESSAGE);
}

/// **VALUE**: Two calls never share an instance.
///
/// **WHY THIS MATTERS**: A cached response would let one handler's custom message
/// leak into another handler's default response.
///
/// **BUG THIS CATCHES**: Would catch memoizing constructors per identifier.
#[test]
fn given_two_calls_when_second_uses_default_then_instances_are_distinct() {
    let constructor = registry()
        .get("InternalServerError")
        .expect("InternalServerError registered");

    let error1 = constructor.call(Some(CUSTOM_MESSAGE));
    let error2 = constructor.call(None);

    assert_eq!(error1.message(), CUSTOM_MESSAGE);
    assert_eq!(error2.message(), "Internal Server Error");

    let location1 = error1.as_error().expect("error").location;
    let location2 = error2.as_error().expect("error").location;
    assert_ne!(location1, location2, "Each call records its own site");
}

/// **VALUE**: Error responses propagate through `?` into a caller's error type.
#[test]
fn given_handler_returning_error_when_question_mark_used_then_error_value_surfaces() {
    fn find_user(id: u32) -> Result<StatusValue, ErrorValue> {
        if id == 0 {
            return Status::NotFound.with_message(format!("User {id} not found")).into_result();
        }
        Status::OK.respond().into_result()
    }

    fn handler(id: u32) -> Result<String, Box<dyn Error + Send + Sync>> {
        let status = find_user(id)?;
        Ok(status.message)
    }

    assert_eq!(handler(7).expect("found"), "OK");

    let err = handler(0).expect_err("missing user");
    let error = err.downcast_ref::<ErrorValue>().expect("ErrorValue");
    assert_eq!(error.http_status, HttpStatusCode(404));
    assert_eq!(error.message, "User 0 not found");
}

/// **VALUE**: The enum and the registry hand out equivalent callables.
#[test]
fn given_every_status_when_called_through_enum_and_registry_then_results_agree() {
    for &status in Status::ALL {
        let via_enum = status.call(Some(CUSTOM_MESSAGE));
        let via_registry = registry()
            .respond(status.name(), Some(CUSTOM_MESSAGE))
            .expect("every status is registered");

        assert_eq!(via_enum.kind(), via_registry.kind());
        assert_eq!(via_enum.http_status(), via_registry.http_status());
        assert_eq!(via_enum.message(), via_registry.message());
    }
}
