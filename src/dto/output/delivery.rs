///
/// Routing decision for the active viewer, returned to the
/// presentation shell alongside the created notification.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub toast: bool,
    pub sound: bool,
}
