//! HTML bodies for booking emails.

use crate::server::model::{booking::Booking, car::Car};

pub const CUSTOMER_SUBJECT: &str = "Your Booking Confirmation";
pub const OPERATOR_SUBJECT: &str = "New Booking Notification";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Confirmation sent to the renter.
pub fn booking_confirmation(booking: &Booking, car: &Car) -> String {
    format!(
        "<h1>Booking Confirmation #{id}</h1>\
         <p>Thank you for choosing our service!</p>\
         <h3>Booking Details:</h3>\
         <ul>\
         <li>Car: {brand} {name}</li>\
         <li>Dates: {pickup} - {dropoff}</li>\
         <li>Pickup Time: {time}</li>\
         <li>Total Days: {days}</li>\
         <li>Price: &#8377;{price:.2}/day (Total: &#8377;{total:.2})</li>\
         <li>Pickup Location: {pickup_location}</li>\
         <li>Dropoff Location: {dropoff_location}</li>\
         </ul>",
        id = booking.id,
        brand = escape_html(&car.brand),
        name = escape_html(&car.name),
        pickup = booking.period.from().format(DATE_FORMAT),
        dropoff = booking.period.to().format(DATE_FORMAT),
        time = escape_html(&booking.pickup_time),
        days = booking.total_days,
        price = car.price_per_day,
        total = booking.total_price,
        pickup_location = escape_html(&booking.pickup_location),
        dropoff_location = escape_html(&booking.dropoff_location),
    )
}

/// Summary sent to the rental operator.
pub fn operator_notification(booking: &Booking, car: &Car) -> String {
    format!(
        "<h1>New Booking Notification</h1>\
         <p>Customer: {email}</p>\
         <p>Booking ID: {id}</p>\
         <p>Car: {brand} {name}</p>\
         <p>Dates: {pickup} - {dropoff}</p>\
         <p>Total Revenue: &#8377;{total:.2}</p>",
        email = escape_html(&booking.email),
        id = booking.id,
        brand = escape_html(&car.brand),
        name = escape_html(&car.name),
        pickup = booking.period.from().format(DATE_FORMAT),
        dropoff = booking.period.to().format(DATE_FORMAT),
        total = booking.total_price,
    )
}

/// Escapes text for safe interpolation into HTML element content.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
