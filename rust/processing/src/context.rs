// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation wrapper: run inside a span, log failures, pass them on.

use std::fmt::Display;

/// Run `f` as the named operation.
///
/// The error, if any, is logged together with `operation` and returned
/// unchanged.
pub fn with_context<T, E, F>(operation: &'static str, f: F) -> Result<T, E>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    let span = tracing::debug_span!("operation", name = operation);
    let _enter = span.enter();
    f().inspect_err(|err| {
        tracing::error!(operation, error = %err, "Operation {} failed", operation);
    })
}
