//! Table bookings.

pub mod api;

pub(crate) fn covers_available() -> usize {
    crate::kitchen::prep::capacity()
}
