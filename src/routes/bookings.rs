use actix_web::{web, HttpResponse, Responder};
use log::info;

use crate::db::memory::BookingStore;
use crate::models::booking::{Booking, BookingInput};

/*
    /api/bookings (create)
*/
pub async fn add_booking(
    store: web::Data<BookingStore>,
    input: web::Json<BookingInput>,
) -> impl Responder {
    let input = input.into_inner();

    if input.passenger_name.trim().is_empty() || input.mobile_number.trim().is_empty() {
        return HttpResponse::BadRequest().body("Passenger name and mobile number are required.");
    }

    let booking = store.add(Booking::from_input(input));
    info!("Recorded booking {}", booking.id);
    HttpResponse::Ok().json(booking)
}

/*
    /api/bookings (list)
*/
pub async fn get_bookings(store: web::Data<BookingStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list())
}
