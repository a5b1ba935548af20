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

//! Bridges the SDK's callback-style operations into awaitable futures, so
//! the lifecycle code reads as ordinary sequential awaiting.  One invocation
//! per call, no retries.

use crate::error::SdkError;
use crate::sdk::{DoneCb, FailCb};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;

/// Invokes a callback-style operation and awaits whichever continuation
/// fires first.
///
/// The SDK may invoke either continuation, once; a second invocation of
/// either is ignored.  If the SDK drops both continuations without invoking
/// one, the future fails instead of hanging forever.
pub async fn settle<T: 'static>(call: impl FnOnce(DoneCb<T>, FailCb)) -> Result<T, SdkError> {
    let (tx, rx) = oneshot::channel::<Result<T, SdkError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let done: DoneCb<T> = Box::new({
        let tx = Rc::clone(&tx);
        move |value| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(value));
            }
        }
    });
    let fail: FailCb = Box::new(move |err| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(Err(err));
        }
    });

    call(done, fail);
    rx.await.unwrap_or_else(|_| Err(SdkError::unsettled()))
}

/// Invokes an operation that only signals failure.
///
/// The operation is considered to have taken effect when the call returns;
/// a failure continuation invoked during the call wins over the implicit
/// success.
pub async fn settle_on_return(call: impl FnOnce(FailCb)) -> Result<(), SdkError> {
    let (tx, mut rx) = oneshot::channel::<SdkError>();
    let fail: FailCb = Box::new(move |err| {
        let _ = tx.send(err);
    });

    call(fail);
    match rx.try_recv() {
        Ok(Some(err)) => Err(err),
        _ => Ok(()),
    }
}
