use super::*;
use crate::lobby::Host;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(addr: &str, host: Host) -> Result<(), std::io::Error> {
        let state = web::Data::new(host);
        log::info!("[server] listening on {}", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/play", web::get().to(play))
                .route("/commander", web::get().to(commander))
                .route("/roster", web::get().to(roster))
        })
        .workers(4)
        .bind(addr)?
        .run()
        .await
    }
}

#[derive(serde::Deserialize)]
struct Entry {
    name: Option<String>,
}

async fn play(
    host: web::Data<Host>,
    query: web::Query<Entry>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            let host = host.get_ref().clone();
            Bridge::player(host, query.into_inner().name, session, stream).await;
            response
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

async fn commander(host: web::Data<Host>, body: web::Payload, req: HttpRequest) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            Bridge::commander(host.get_ref().clone(), session, stream).await;
            response
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

async fn roster(host: web::Data<Host>) -> impl Responder {
    let roster = host.lobby().lock().await.roster();
    HttpResponse::Ok().json(roster)
}
