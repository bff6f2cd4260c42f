//! Order-preserving, all-or-nothing asynchronous mapping.
//!
//! Both mappers return the transformed items in input order and fail the
//! whole batch on the first error. Nothing partial is ever handed back, so a
//! caller that commits only on `Ok` never commits half a batch.
//!
//! - [`map_ordered`] runs transforms one after another. A failure stops the
//!   loop before any later transform is started.
//! - [`map_ordered_concurrent`] polls all transforms together and drops the
//!   ones still pending as soon as one fails.

use std::future::Future;

use futures::future::try_join_all;

/// Transform `items` one at a time, in order.
pub async fn map_ordered<I, F, Fut, U, E>(items: I, mut transform: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    let items = items.into_iter();
    let mut results = Vec::with_capacity(items.size_hint().0);

    for item in items {
        results.push(transform(item).await?);
    }

    Ok(results)
}

/// Transform `items` concurrently, returning results in input order.
pub async fn map_ordered_concurrent<I, F, Fut, U, E>(items: I, transform: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    try_join_all(items.into_iter().map(transform)).await
}
