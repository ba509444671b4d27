use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    BookingConfirmed,
    Waitlisted,
    WaitlistPromoted,
    BookingCanceled,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookingConfirmed => "booking_confirmed",
            Self::Waitlisted => "waitlisted",
            Self::WaitlistPromoted => "waitlist_promoted",
            Self::BookingCanceled => "booking_canceled",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "booking_confirmed" => Ok(Self::BookingConfirmed),
            "waitlisted" => Ok(Self::Waitlisted),
            "waitlist_promoted" => Ok(Self::WaitlistPromoted),
            "booking_canceled" => Ok(Self::BookingCanceled),
            _ => Err(()),
        }
    }
}
