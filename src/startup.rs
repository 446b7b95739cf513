use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::reservation_form::DeliveryPacing;
use crate::routes::{health_check, home, submit_reservation, submit_reservation_alternate};
use crate::sheet_client::SheetClient;

pub fn run(
    listener: TcpListener,
    sheet_client: SheetClient,
    pacing: DeliveryPacing,
) -> Result<Server, std::io::Error> {
    let sheet_client = web::Data::new(sheet_client);
    let pacing = web::Data::new(pacing);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/", web::get().to(home))
            .route("/reservations", web::post().to(submit_reservation))
            .route(
                "/reservations/alternate",
                web::post().to(submit_reservation_alternate),
            )
            .app_data(sheet_client.clone())
            .app_data(pacing.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
