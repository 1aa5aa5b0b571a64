//! Booking email notifications.
//!
//! After a booking is persisted the renter gets a confirmation and the operator gets a
//! summary. Delivery runs on a spawned task; failures are logged and never affect the
//! booking that triggered them.

pub mod mailer;
pub mod template;

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::server::{
    model::{booking::Booking, car::Car},
    service::notification::mailer::Mailer,
};

#[derive(Clone)]
pub struct BookingNotifier {
    mailer: Arc<dyn Mailer>,
    operator_email: String,
}

impl BookingNotifier {
    /// # Arguments
    /// - `mailer` - Transport used for both emails
    /// - `operator_email` - Address that receives new booking summaries
    pub fn new(mailer: Arc<dyn Mailer>, operator_email: String) -> Self {
        Self {
            mailer,
            operator_email,
        }
    }

    /// Sends the renter confirmation, then the operator summary, in the background.
    ///
    /// Both emails are attempted even if the first fails.
    ///
    /// # Returns
    /// - `JoinHandle<()>` - Completes once both sends have been attempted
    pub fn booking_created(&self, booking: &Booking, car: &Car) -> JoinHandle<()> {
        let mailer = self.mailer.clone();
        let booking_id = booking.id;
        let messages = [
            (
                booking.email.clone(),
                template::CUSTOMER_SUBJECT,
                template::booking_confirmation(booking, car),
            ),
            (
                self.operator_email.clone(),
                template::OPERATOR_SUBJECT,
                template::operator_notification(booking, car),
            ),
        ];

        tokio::spawn(async move {
            for (to, subject, body) in messages {
                match mailer.send(&to, subject, &body).await {
                    Ok(()) => tracing::info!(booking_id, to = %to, subject, "Email sent"),
                    Err(e) => {
                        tracing::error!(booking_id, to = %to, subject, "Failed to send email: {}", e)
                    }
                }
            }
        })
    }
}
