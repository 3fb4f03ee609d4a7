// std::borrow::Cow

/// Takes the `String` out of a `Cow::Owned`, or falls back to `$default` when
/// the `Cow` is borrowed.
///
/// Replacement helpers return `Cow::Borrowed` when nothing changed; the
/// caller usually still owns the original and can reuse it without a copy:
///
/// ```ignore
/// formatted = owned_from_cow_or!(self.format_nsn(&formatted, ..)?, formatted);
/// ```
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        match $getcow {
            std::borrow::Cow::Owned(owned) => owned,
            std::borrow::Cow::Borrowed(_) => $default,
        }
    }};
}

pub(crate) use owned_from_cow_or;
