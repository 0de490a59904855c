/// Result of [`AlidayuClient::execute`](crate::AlidayuClient::execute).
///
/// `succeeded` only reflects whether the success marker for the requested
/// format occurs somewhere in `raw_body`. Error envelopes, malformed payloads
/// and partial successes all come back as `succeeded == false`; inspect
/// `raw_body` to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseOutcome {
    pub succeeded: bool,
    pub status: u16,
    pub raw_body: String,
}
