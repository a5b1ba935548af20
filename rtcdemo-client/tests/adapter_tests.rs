/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Settlement semantics of the callback-to-future adapters.

use rtcdemo_client::{settle, settle_on_return, DoneCb, FailCb, SdkError};
use std::cell::RefCell;
use std::rc::Rc;

#[tokio::test]
async fn settle_resolves_with_the_success_value() {
    let result = settle(|done: DoneCb<u32>, _fail| done(7)).await;
    assert_eq!(result, Ok(7));
}

#[tokio::test]
async fn settle_resolves_with_the_failure() {
    let result = settle(|_done: DoneCb<u32>, fail| fail(SdkError::new("nope"))).await;
    assert_eq!(result, Err(SdkError::new("nope")));
}

#[tokio::test]
async fn first_continuation_wins() {
    let result = settle(|done: DoneCb<u32>, fail| {
        done(7);
        fail(SdkError::new("too late"));
    })
    .await;
    assert_eq!(result, Ok(7));

    let result = settle(|done: DoneCb<u32>, fail| {
        fail(SdkError::new("nope"));
        done(7);
    })
    .await;
    assert_eq!(result, Err(SdkError::new("nope")));
}

#[tokio::test]
async fn dropping_both_continuations_fails_instead_of_hanging() {
    let result: Result<u32, SdkError> = settle(|done, fail| {
        drop(done);
        drop(fail);
    })
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn settle_supports_continuations_invoked_after_the_call_returns() {
    let slot: Rc<RefCell<Option<DoneCb<u32>>>> = Rc::new(RefCell::new(None));
    let stash = Rc::clone(&slot);

    let pending = settle(move |done, _fail| {
        stash.borrow_mut().replace(done);
    });
    let deliver = async {
        let done = slot.borrow_mut().take().unwrap();
        done(7);
    };

    let (result, ()) = futures::join!(pending, deliver);
    assert_eq!(result, Ok(7));
}

#[tokio::test]
async fn settle_on_return_defaults_to_success() {
    let result = settle_on_return(|_fail| {}).await;
    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn settle_on_return_reports_a_synchronous_failure() {
    let result = settle_on_return(|fail| fail(SdkError::new("nope"))).await;
    assert_eq!(result, Err(SdkError::new("nope")));
}

#[tokio::test]
async fn settle_on_return_ignores_a_late_failure() {
    let slot: Rc<RefCell<Option<FailCb>>> = Rc::new(RefCell::new(None));
    let stash = Rc::clone(&slot);

    let result = settle_on_return(move |fail| {
        stash.borrow_mut().replace(fail);
    })
    .await;
    assert_eq!(result, Ok(()));

    // Already settled; a failure delivered afterwards goes nowhere.
    let fail = slot.borrow_mut().take().unwrap();
    fail(SdkError::new("too late"));
}
