//! Isolation around third-party extraction calls.
//!
//! The PDF libraries both panic on malformed input and `println!` debug notes
//! about fonts and glyphs. While a backend runs, fd 1 is pointed at stderr and
//! panics are caught with the default hook silenced, so stdout stays reserved
//! for the command's own result line.

use std::any::Any;
use std::cell::Cell;
use std::fmt::Display;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use gag::Redirect;

use crate::error::ExtractError;

thread_local! {
    static QUIET_PANICS: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the current panic hook so it stays silent for panics raised inside
/// [`run_guarded`] on the same thread.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET_PANICS.with(Cell::get) {
                default_hook(info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Run one backend call with stdout diverted and panics converted to errors.
pub(crate) fn run_guarded<T, E, F>(backend: &'static str, f: F) -> Result<T, ExtractError>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    install_quiet_hook();

    let _ = io::stdout().flush();
    // Only one redirect can be live per process; without it the call still runs.
    let redirect = Redirect::stdout(io::stderr()).ok();

    QUIET_PANICS.with(|quiet| quiet.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    QUIET_PANICS.with(|quiet| quiet.set(false));

    let _ = io::stdout().flush();
    drop(redirect);

    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(ExtractError::Backend {
            backend,
            message: e.to_string(),
        }),
        Err(payload) => Err(ExtractError::Panicked {
            backend,
            message: panic_message(payload.as_ref()),
        }),
    }
}
