use http_responses::{ErrorValue, Registry, Response, Status, StatusValue, registry};

use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

/// **VALUE**: Public values can cross threads.
#[test]
fn given_public_types_when_checked_then_send_and_sync() {
    assert_send_sync::<Registry>();
    assert_send_sync::<Status>();
    assert_send_sync::<Response>();
    assert_send_sync::<StatusValue>();
    assert_send_sync::<ErrorValue>();
}

/// **VALUE**: Concurrent first access builds one registry and every thread sees it.
///
/// **WHY THIS MATTERS**: The registry is initialized lazily. Racing threads must not
/// observe a half-built table or build two copies.
///
/// **BUG THIS CATCHES**: Would catch replacing the lazy static with unsynchronized
/// initialization.
#[test]
fn given_many_threads_when_calling_constructors_then_all_see_same_registry() {
    let handles: Vec<_> = (0..8)
        .map(|index| {
            thread::spawn(move || {
                let registry = registry();
                let message = format!("thread {index}");
                let response = registry
                    .respond("TooManyRequests", Some(message.as_str()))
                    .expect("TooManyRequests registered");
                (registry as *const Registry as usize, response)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    let first_address = results[0].0;
    for (index, (address, response)) in results.iter().enumerate() {
        assert_eq!(*address, first_address);
        assert!(response.is_error());
        assert_eq!(response.message(), format!("thread {index}"));
    }
}
