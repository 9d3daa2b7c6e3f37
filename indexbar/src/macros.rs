#[cfg(feature = "tracing")]
macro_rules! itrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "indexbar", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! itrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! idebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "indexbar", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! idebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! iwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "indexbar", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! iwarn {
    ($($tt:tt)*) => {};
}
