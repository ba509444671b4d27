use std::str::FromStr;

/// Audit tags; one row is appended to the booking log per tag, and a
/// booking creation always produces `RequestCreated` plus its decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BookingLogAction {
    RequestCreated,
    AutoConfirmed,
    AutoWaitlisted,
    PromotedFromWaitlist,
    Canceled,
}

impl BookingLogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestCreated => "request_created",
            Self::AutoConfirmed => "auto_confirmed",
            Self::AutoWaitlisted => "auto_waitlisted",
            Self::PromotedFromWaitlist => "promoted_from_waitlist",
            Self::Canceled => "canceled",
        }
    }
}

impl FromStr for BookingLogAction {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "request_created" => Ok(Self::RequestCreated),
            "auto_confirmed" => Ok(Self::AutoConfirmed),
            "auto_waitlisted" => Ok(Self::AutoWaitlisted),
            "promoted_from_waitlist" => Ok(Self::PromotedFromWaitlist),
            "canceled" => Ok(Self::Canceled),
            _ => Err(()),
        }
    }
}
