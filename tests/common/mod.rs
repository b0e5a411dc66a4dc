use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use tripforge_api::db::memory::BookingStore;
use tripforge_api::routes;
use tripforge_api::services::fare_service::FareConfig;

pub struct TestApp {
    booking_store: web::Data<BookingStore>,
    fare_config: web::Data<FareConfig>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            booking_store: web::Data::new(BookingStore::new()),
            fare_config: web::Data::new(FareConfig::default()),
        }
    }

    /// Mirror of the app wiring in main.rs, with a fresh in-memory
    /// booking store per test.
    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(self.booking_store.clone())
            .app_data(self.fare_config.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route("/vehicles", web::get().to(routes::fare::get_vehicles))
                    .service(
                        web::scope("/fare")
                            .route("/estimate", web::post().to(routes::fare::estimate)),
                    )
                    .service(
                        web::scope("/lodging")
                            .route("/rates", web::get().to(routes::lodging::get_rates))
                            .route("/estimate", web::post().to(routes::lodging::estimate)),
                    )
                    .service(
                        web::scope("/suggestions")
                            .route("/stays", web::post().to(routes::suggestions::stays))
                            .route("/places", web::post().to(routes::suggestions::places))
                            .route(
                                "/route-details",
                                web::post().to(routes::suggestions::route_details),
                            )
                            .route(
                                "/translate",
                                web::post().to(routes::suggestions::translate),
                            )
                            .route("/currency", web::post().to(routes::suggestions::currency)),
                    )
                    .service(
                        web::scope("/bookings")
                            .route("", web::post().to(routes::bookings::add_booking))
                            .route("", web::get().to(routes::bookings::get_bookings)),
                    ),
            )
    }
}
