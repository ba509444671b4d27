use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::booking::{
    application::concurrency::event_lock_registry::EventLockRegistry,
    domain::{
        model::{
            commands::{
                cancel_booking_command::CancelBookingCommand,
                submit_booking_request_command::SubmitBookingRequestCommand,
            },
            entities::booking::Booking,
            enums::{
                booking_domain_error::BookingDomainError, booking_status::BookingStatus,
                requester_role::RequesterRole,
            },
            events::booking_status_changed_event::{BookingStatusChangedEvent, BookingTransition},
            value_objects::{booking_id::BookingId, event_id::EventId, tenant_id::TenantId},
        },
        services::{
            booking_command_service::BookingCommandService,
            booking_side_effect_dispatcher::BookingSideEffectDispatcher,
        },
    },
    infrastructure::persistence::repositories::{
        booking_repository::BookingRepository, event_repository::EventRepository,
    },
};

const TRANSITION_ATTEMPTS: u32 = 3;

pub struct BookingCommandServiceImpl {
    booking_repository: Arc<dyn BookingRepository>,
    event_repository: Arc<dyn EventRepository>,
    side_effect_dispatcher: Arc<dyn BookingSideEffectDispatcher>,
    lock_registry: Arc<EventLockRegistry>,
}

impl BookingCommandServiceImpl {
    pub fn new(
        booking_repository: Arc<dyn BookingRepository>,
        event_repository: Arc<dyn EventRepository>,
        side_effect_dispatcher: Arc<dyn BookingSideEffectDispatcher>,
        lock_registry: Arc<EventLockRegistry>,
    ) -> Self {
        Self {
            booking_repository,
            event_repository,
            side_effect_dispatcher,
            lock_registry,
        }
    }

    async fn load_booking(
        &self,
        booking_id: &BookingId,
        tenant_id: &TenantId,
    ) -> Result<Booking, BookingDomainError> {
        self.booking_repository
            .find_by_id(booking_id, tenant_id)
            .await?
            .ok_or(BookingDomainError::BookingNotFound)
    }
}

#[async_trait]
impl BookingCommandService for BookingCommandServiceImpl {
    async fn handle_submit_request(
        &self,
        command: SubmitBookingRequestCommand,
    ) -> Result<Booking, BookingDomainError> {
        if command.requester_role() != RequesterRole::Attendee {
            return Err(BookingDomainError::Forbidden);
        }

        // A foreign-tenant event is reported exactly like a missing one.
        let event = self
            .event_repository
            .find_by_id(command.event_id(), command.tenant_id())
            .await?
            .ok_or(BookingDomainError::EventNotFound)?;

        let slot = self
            .lock_registry
            .lock_for(command.tenant_id(), command.event_id())
            .await;
        let guard = slot.lock().await;

        let confirmed_count = self
            .booking_repository
            .count_by_status(command.event_id(), command.tenant_id(), BookingStatus::Confirmed)
            .await?;

        let booking = Booking::admit(
            BookingId::generate(),
            *command.event_id(),
            *command.user_id(),
            *command.tenant_id(),
            confirmed_count,
            event.capacity,
            Utc::now(),
        );

        self.booking_repository.insert(&booking).await?;
        drop(guard);

        self.side_effect_dispatcher
            .dispatch(&BookingStatusChangedEvent::new(
                booking.id(),
                booking.event_id(),
                booking.user_id(),
                booking.tenant_id(),
                BookingTransition::Requested {
                    decided: booking.status(),
                },
                Utc::now(),
            ))
            .await;

        Ok(booking)
    }

    async fn handle_cancel(
        &self,
        command: CancelBookingCommand,
    ) -> Result<Booking, BookingDomainError> {
        let mut booking = self
            .load_booking(command.booking_id(), command.tenant_id())
            .await?;

        if command.requester_role() == RequesterRole::Attendee
            && !booking.is_owned_by(command.requester_id())
        {
            return Err(BookingDomainError::Forbidden);
        }

        for _attempt in 0..TRANSITION_ATTEMPTS {
            let prior = booking.cancel()?;

            let transitioned = self
                .booking_repository
                .transition_status(
                    command.booking_id(),
                    command.tenant_id(),
                    prior,
                    BookingStatus::Canceled,
                )
                .await?;

            if !transitioned {
                // Lost the race; re-read and decide again from the
                // current status (a concurrent cancel surfaces as
                // AlreadyCanceled on the next pass).
                booking = self
                    .load_booking(command.booking_id(), command.tenant_id())
                    .await?;
                continue;
            }

            self.side_effect_dispatcher
                .dispatch(&BookingStatusChangedEvent::new(
                    booking.id(),
                    booking.event_id(),
                    booking.user_id(),
                    booking.tenant_id(),
                    BookingTransition::Canceled { prior },
                    Utc::now(),
                ))
                .await;

            // Only a confirmed cancellation vacates a seat; the promoter
            // runs once, after this cancellation's own side effects.
            if prior == BookingStatus::Confirmed {
                if let Err(error) = self
                    .handle_promote_if_possible(&booking.event_id(), &booking.tenant_id())
                    .await
                {
                    tracing::error!(
                        event_id = %booking.event_id().value(),
                        tenant_id = %booking.tenant_id().value(),
                        %error,
                        "waitlist promotion after cancellation failed"
                    );
                }
            }

            return Ok(booking);
        }

        Err(BookingDomainError::Unavailable)
    }

    async fn handle_promote_if_possible(
        &self,
        event_id: &EventId,
        tenant_id: &TenantId,
    ) -> Result<Option<Booking>, BookingDomainError> {
        let event = self
            .event_repository
            .find_by_id(event_id, tenant_id)
            .await?
            .ok_or(BookingDomainError::EventNotFound)?;

        let slot = self.lock_registry.lock_for(tenant_id, event_id).await;
        let guard = slot.lock().await;

        for _attempt in 0..TRANSITION_ATTEMPTS {
            // Fresh count every pass; concurrent activity may have
            // filled the seat since the cancellation that got us here.
            let confirmed_count = self
                .booking_repository
                .count_by_status(event_id, tenant_id, BookingStatus::Confirmed)
                .await?;

            if confirmed_count >= i64::from(event.capacity) {
                return Ok(None);
            }

            let Some(mut oldest) = self
                .booking_repository
                .find_oldest_waitlisted(event_id, tenant_id)
                .await?
            else {
                return Ok(None);
            };

            oldest.confirm_from_waitlist()?;

            let transitioned = self
                .booking_repository
                .transition_status(
                    &oldest.id(),
                    tenant_id,
                    BookingStatus::Waitlisted,
                    BookingStatus::Confirmed,
                )
                .await?;

            if transitioned {
                drop(guard);

                self.side_effect_dispatcher
                    .dispatch(&BookingStatusChangedEvent::new(
                        oldest.id(),
                        oldest.event_id(),
                        oldest.user_id(),
                        oldest.tenant_id(),
                        BookingTransition::PromotedFromWaitlist,
                        Utc::now(),
                    ))
                    .await;

                return Ok(Some(oldest));
            }
            // The selected booking was canceled under us; pick the next
            // oldest on the following pass.
        }

        Err(BookingDomainError::Unavailable)
    }
}
