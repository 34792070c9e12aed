#[cfg(feature = "tracing")]
macro_rules! seltrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "listwindow_select", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! seltrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! seldebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "listwindow_select", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! seldebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! selwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "listwindow_select", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! selwarn {
    ($($tt:tt)*) => {};
}
