use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use tripforge_api::db::memory::BookingStore;
use tripforge_api::routes;
use tripforge_api::services::fare_service::FareConfig;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    info!("Starting HTTP server on {}:{}", host, port);

    let booking_store = web::Data::new(BookingStore::new());
    let fare_config = web::Data::new(FareConfig::default());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(booking_store.clone())
            .app_data(fare_config.clone())
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
                            .route("/translate", web::post().to(routes::suggestions::translate))
                            .route("/currency", web::post().to(routes::suggestions::currency)),
                    )
                    .service(
                        web::scope("/bookings")
                            .route("", web::post().to(routes::bookings::add_booking))
                            .route("", web::get().to(routes::bookings::get_bookings)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
