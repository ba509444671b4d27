use std::sync::Arc;

use async_trait::async_trait;

use crate::booking::{
    domain::{
        model::{
            enums::{booking_log_action::BookingLogAction, booking_status::BookingStatus},
            events::booking_status_changed_event::{BookingStatusChangedEvent, BookingTransition},
        },
        services::booking_side_effect_dispatcher::BookingSideEffectDispatcher,
    },
    infrastructure::persistence::repositories::booking_log_repository::{
        BookingLogRecord, BookingLogRepository,
    },
    interfaces::acl::notification_delivery_facade::{
        NotificationDelivery, NotificationDeliveryFacade, NotificationKind,
    },
};

const SIDE_EFFECT_ATTEMPTS: u32 = 3;

/// Fans a committed transition out into audit log entries and the user
/// notification. Every effect gets a bounded retry; a final failure is
/// logged with the full payload so it can be replayed out-of-band, and
/// the transition itself always stands.
pub struct BookingSideEffectDispatcherImpl {
    log_repository: Arc<dyn BookingLogRepository>,
    notification_facade: Arc<dyn NotificationDeliveryFacade>,
}

impl BookingSideEffectDispatcherImpl {
    pub fn new(
        log_repository: Arc<dyn BookingLogRepository>,
        notification_facade: Arc<dyn NotificationDeliveryFacade>,
    ) -> Self {
        Self {
            log_repository,
            notification_facade,
        }
    }

    async fn append_log(
        &self,
        event: &BookingStatusChangedEvent,
        action: BookingLogAction,
        note: &str,
    ) {
        let record = BookingLogRecord::new(
            event.booking_id.value(),
            event.event_id.value(),
            event.user_id.value(),
            event.tenant_id.value(),
            action,
            note,
            event.occurred_at,
        );

        for attempt in 1..=SIDE_EFFECT_ATTEMPTS {
            match self.log_repository.append(&record).await {
                Ok(()) => return,
                Err(error) if attempt < SIDE_EFFECT_ATTEMPTS => {
                    tracing::warn!(
                        booking_id = %event.booking_id.value(),
                        action = action.as_str(),
                        attempt,
                        %error,
                        "retrying booking log append"
                    );
                }
                Err(error) => {
                    tracing::error!(
                        booking_id = %event.booking_id.value(),
                        event_id = %event.event_id.value(),
                        user_id = %event.user_id.value(),
                        tenant_id = %event.tenant_id.value(),
                        action = action.as_str(),
                        note,
                        occurred_at = %event.occurred_at,
                        %error,
                        "booking log append failed, entry must be replayed"
                    );
                }
            }
        }
    }

    async fn send_notification(
        &self,
        event: &BookingStatusChangedEvent,
        kind: NotificationKind,
        title: &str,
        message: &str,
    ) {
        let delivery = NotificationDelivery {
            user_id: event.user_id.value(),
            booking_id: event.booking_id.value(),
            tenant_id: event.tenant_id.value(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
        };

        for attempt in 1..=SIDE_EFFECT_ATTEMPTS {
            match self.notification_facade.deliver(delivery.clone()).await {
                Ok(()) => return,
                Err(error) if attempt < SIDE_EFFECT_ATTEMPTS => {
                    tracing::warn!(
                        booking_id = %event.booking_id.value(),
                        kind = kind.as_str(),
                        attempt,
                        %error,
                        "retrying notification delivery"
                    );
                }
                Err(error) => {
                    tracing::error!(
                        booking_id = %event.booking_id.value(),
                        user_id = %event.user_id.value(),
                        tenant_id = %event.tenant_id.value(),
                        kind = kind.as_str(),
                        title,
                        message,
                        %error,
                        "notification delivery failed, message must be replayed"
                    );
                }
            }
        }
    }
}

#[async_trait]
impl BookingSideEffectDispatcher for BookingSideEffectDispatcherImpl {
    async fn dispatch(&self, event: &BookingStatusChangedEvent) {
        match event.transition {
            BookingTransition::Requested { decided } => {
                self.append_log(
                    event,
                    BookingLogAction::RequestCreated,
                    "User requested a booking.",
                )
                .await;

                match decided {
                    BookingStatus::Confirmed => {
                        self.append_log(
                            event,
                            BookingLogAction::AutoConfirmed,
                            "Automatically confirmed.",
                        )
                        .await;
                        self.send_notification(
                            event,
                            NotificationKind::BookingConfirmed,
                            "Booking Confirmed",
                            "Your booking has been confirmed as space was available.",
                        )
                        .await;
                    }
                    BookingStatus::Waitlisted => {
                        self.append_log(
                            event,
                            BookingLogAction::AutoWaitlisted,
                            "Automatically waitlisted.",
                        )
                        .await;
                        self.send_notification(
                            event,
                            NotificationKind::Waitlisted,
                            "Added to Waitlist",
                            "The event is full; you've been added to the waitlist.",
                        )
                        .await;
                    }
                    BookingStatus::Canceled => {
                        tracing::error!(
                            booking_id = %event.booking_id.value(),
                            "admission cannot decide a canceled status"
                        );
                    }
                }
            }
            BookingTransition::PromotedFromWaitlist => {
                self.append_log(
                    event,
                    BookingLogAction::PromotedFromWaitlist,
                    "Promoted from waitlist due to cancellation.",
                )
                .await;
                self.send_notification(
                    event,
                    NotificationKind::WaitlistPromoted,
                    "Promoted from Waitlist",
                    "A spot opened up; your booking is now confirmed.",
                )
                .await;
            }
            BookingTransition::Canceled { prior } => {
                let note = format!("{} booking canceled.", prior.as_str());
                self.append_log(event, BookingLogAction::Canceled, &note).await;
                self.send_notification(
                    event,
                    NotificationKind::BookingCanceled,
                    "Booking Canceled",
                    "Your booking has been canceled.",
                )
                .await;
            }
        }
    }
}
